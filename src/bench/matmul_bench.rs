//! Criterion benchmarks for every variant.
//!
//! Run with: cargo bench --bench matmul_bench

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gemm_lab::{Matrix, Variant, Workload};

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let w = Workload::random(size, Some(42), i32::MAX);
        let mut out = Matrix::zeros(size);
        group.throughput(Throughput::Elements((size * size * size) as u64));

        for v in Variant::ALL {
            group.bench_with_input(BenchmarkId::new(v.name(), size), &size, |b, _| {
                b.iter(|| {
                    v.run(black_box(&w.a), black_box(&w.b), &mut out).unwrap();
                    black_box(&out);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
