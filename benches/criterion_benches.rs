#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use sokoban_bot::config::Limits;
use sokoban_bot::{LoadLevel, Solve};

// allowing unused so individual benches can be commented out
// without causing warnings elsewhere

#[allow(unused)]
fn bench_simplest(c: &mut Criterion) {
    bench_level(c, "levels/custom/01-simplest.txt", 100);
}

#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(c, "levels/custom/03-two-boxes.txt", 100);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts the whole reachable space
    bench_level(c, "levels/custom/corner-no-solution.txt", 100);
}

fn bench_level(c: &mut Criterion, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    c.bench(
        "solve",
        Benchmark::new(level_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    level.solve(criterion::black_box(Limits::default()), false),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(benches, bench_simplest, bench_two_boxes, bench_no_solution);
criterion_main!(benches);
