//! Conversions between (row, col) locations and algebraic coordinates.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::BoardLocation;

/// Convert a board location to algebraic text (for example: "e4").
///
/// Row 0 is rank 8, column 0 is the a-file.
#[inline]
pub fn location_to_algebraic(x: BoardLocation) -> String {
    let file_char = char::from(b'a' + x.1 as u8);
    let rank_char = char::from(b'8' - x.0 as u8);
    format!("{file_char}{rank_char}")
}

/// Convert algebraic text (for example: "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_string()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_string()));
    }

    Ok(((b'8' - rank) as i8, (file - b'a') as i8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_corners() {
        assert_eq!(location_to_algebraic((7, 0)), "a1");
        assert_eq!(location_to_algebraic((0, 7)), "h8");
        assert_eq!(algebraic_to_location("a1"), Ok((7, 0)));
        assert_eq!(algebraic_to_location("h8"), Ok((0, 7)));
        assert_eq!(algebraic_to_location("e4"), Ok((4, 4)));
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e44", "i4", "a9", "4e"] {
            assert!(matches!(
                algebraic_to_location(bad),
                Err(ChessErrors::InvalidAlgebraic(_))
            ));
        }
    }
}
