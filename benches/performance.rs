use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyseq::prelude::*;

const N: i64 = 100_000;

fn bench_filter_map_filter(c: &mut Criterion) {
    c.bench_function("lazy_filter_map_filter", |b| {
        b.iter(|| {
            from_range(0, black_box(N))
                .filter(|x| x % 3 == 0)
                .map(|x| x * 7)
                .filter(|x| x % 2 == 0)
                .foldl(0i64, |a, b| a.wrapping_add(b))
        })
    });

    c.bench_function("eager_filter_map_filter", |b| {
        b.iter(|| {
            let stage1: Vec<i64> = (0..=black_box(N)).filter(|x| x % 3 == 0).collect();
            let stage2: Vec<i64> = stage1.into_iter().map(|x| x * 7).collect();
            let stage3: Vec<i64> = stage2.into_iter().filter(|x| x % 2 == 0).collect();
            stage3.into_iter().fold(0i64, |a, b| a.wrapping_add(b))
        })
    });
}

fn bench_slice_early_exit(c: &mut Criterion) {
    c.bench_function("slice_head_of_unbounded", |b| {
        b.iter(|| to_vec(slice(from_range(0u64, u64::MAX), 0, black_box(1_000))))
    });
}

criterion_group!(benches, bench_filter_map_filter, bench_slice_early_exit);
criterion_main!(benches);
