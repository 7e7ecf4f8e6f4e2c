use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_navigation::prelude::*;
use nanorand::{Rng, WyRand};

fn open_map(size: usize) -> GridMap {
    GridMap::builder(size, size)
        .start((0, 0))
        .goal((size - 1, size - 1))
        .build()
        .unwrap()
}

fn random_map(size: usize, seed: u64) -> GridMap {
    let mut rng = WyRand::new_seed(seed);
    let start = Position::new(0, 0);
    let goal = Position::new(size - 1, size - 1);

    let mut builder = GridMap::builder(size, size).start(start).goal(goal);
    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            if pos != start && pos != goal && rng.generate_range(0_u32..100) < 25 {
                builder = builder.wall(pos);
            }
        }
    }
    builder.build().unwrap()
}

fn bench_open(c: &mut Criterion) {
    let map = open_map(64);
    let mut group = c.benchmark_group("open 64x64");
    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| black_box(algorithm.search(&map, map.start(), map.goals()[0])))
            },
        );
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let map = random_map(64, 4);
    let mut group = c.benchmark_group("random 64x64");
    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| black_box(algorithm.search(&map, map.start(), map.goals()[0])))
            },
        );
    }
    group.finish();
}

fn bench_tour(c: &mut Criterion) {
    let mut builder = GridMap::builder(128, 128).start((0, 0));
    let mut rng = WyRand::new_seed(11);
    for _ in 0..16 {
        let x = rng.generate_range(0_usize..128);
        let y = rng.generate_range(0_usize..128);
        builder = builder.goal((x, y));
    }
    let map = builder.build().unwrap();
    let config = SearchConfig::default();

    c.bench_function("tour a* 16 legs", |b| {
        b.iter(|| black_box(grid::tour(&map, Algorithm::AStar, &config)))
    });
}

criterion_group!(benches, bench_open, bench_random, bench_tour);
criterion_main!(benches);
