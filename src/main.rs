//! Self-play demo: two engines play a full game on the terminal.

use opal_chess::chess_errors::ChessErrors;
use opal_chess::engines::engine_trait::{select_move, Strategy, DEFAULT_ALPHA_BETA_DEPTH};
use opal_chess::game_state::chess_types::PieceTeam;
use opal_chess::game_state::game_state::GameState;
use opal_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 200;

fn main() -> Result<(), ChessErrors> {
    let mut game = GameState::new_game();

    println!("{}", render_game_state(&game));

    for _ in 0..MAX_PLIES {
        let legal_moves = game.legal_moves();
        if legal_moves.is_empty() {
            break;
        }

        // Light plays the strongest engine, Dark the greedy baseline.
        let (strategy, label) = match game.turn {
            PieceTeam::Light => (Strategy::NegamaxAlphaBeta, "Light"),
            PieceTeam::Dark => (Strategy::Greedy, "Dark"),
        };

        let chosen = select_move(&mut game, &legal_moves, strategy, DEFAULT_ALPHA_BETA_DEPTH)?;
        game.make_move_checked(chosen)?;

        println!("\n{} plays {}", label, chosen.notation());
        println!("{}", render_game_state(&game));
    }

    game.legal_moves();
    if game.is_checkmate() {
        let winner = match game.turn {
            PieceTeam::Light => "Dark",
            PieceTeam::Dark => "Light",
        };
        println!("\nCheckmate. {winner} wins after {} plies.", game.ply());
    } else if game.is_stalemate() {
        println!("\nStalemate after {} plies.", game.ply());
    } else {
        println!("\nGame stopped after {} plies.", game.ply());
    }

    Ok(())
}
