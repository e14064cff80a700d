use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use opal_chess::game_state::game_state::GameState;
use opal_chess::move_generation::perft::perft;

const START_POSITION_NODES: &[u64] = &[20, 400, 8_902, 197_281];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth_idx, expected_nodes) in START_POSITION_NODES.iter().enumerate() {
        let depth = depth_idx + 1;

        // Correctness guard before benchmarking.
        let mut warmup_game = GameState::new_game();
        let warmup = perft(&mut warmup_game, depth);
        assert_eq!(
            warmup, *expected_nodes,
            "node mismatch in warmup at depth {depth}"
        );

        group.throughput(Throughput::Elements(*expected_nodes));
        let bench_name = format!("startpos_d{depth}");

        group.bench_with_input(
            BenchmarkId::from_parameter(bench_name),
            expected_nodes,
            |b, expected| {
                let mut game = GameState::new_game();
                b.iter(|| {
                    let nodes = perft(black_box(&mut game), black_box(depth));
                    assert_eq!(nodes, *expected);
                    black_box(nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
