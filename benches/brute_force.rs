use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tsp_brute::combinatorial::LexicalPermutations;
use tsp_brute::geometry::{Euclidean, Point};
use tsp_brute::tour::brute_force;

fn bench_permutations(c: &mut Criterion) {
    c.bench_function("lexical_permutations_n8", |b| {
        b.iter(|| {
            let mut count = 0u64;
            for perm in LexicalPermutations::new(black_box(8)) {
                count += perm[0] as u64;
            }
            count
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let points: Vec<Point<f64>> = (0..8u32)
        .map(|i| Point::new(i, f64::from(i % 3), f64::from(i / 3)))
        .collect();

    c.bench_function("brute_force_search_n8", |b| {
        b.iter(|| brute_force::search(black_box(&points), &Euclidean).unwrap())
    });
}

criterion_group!(benches, bench_permutations, bench_search);
criterion_main!(benches);
