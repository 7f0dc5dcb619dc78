//! Benchmarks for dense and sparse matrix operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowmat::{DenseMatrix, Sparse};

const COLUMNS: usize = 16;

fn build_matrix(rows: usize) -> DenseMatrix<f64> {
    let mut matrix = DenseMatrix::new(COLUMNS).unwrap();
    let mut row = [0.0; COLUMNS];
    for i in 0..rows {
        for (j, value) in row.iter_mut().enumerate() {
            *value = (i * COLUMNS + j) as f64;
        }
        matrix.add_row(&row).unwrap();
    }
    matrix
}

fn bench_add_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_add_row");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| build_matrix(black_box(size)));
        });
    }

    group.finish();
}

fn bench_append_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_append_column");

    for size in [100, 1_000, 10_000].iter() {
        let matrix = build_matrix(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut matrix = matrix.clone();
                matrix.append_column(black_box(1.0));
                matrix
            });
        });
    }

    group.finish();
}

fn bench_iterator_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_iterator");

    for size in [1_000, 10_000].iter() {
        let mut matrix = build_matrix(*size);

        group.bench_with_input(BenchmarkId::new("apply_to_matrix", size), size, |b, _| {
            b.iter(|| matrix.iterator().apply_to_matrix(|v| black_box(v * 0.5 + 1.0)));
        });

        group.bench_with_input(BenchmarkId::new("apply_to_columns", size), size, |b, _| {
            b.iter(|| {
                matrix
                    .iterator()
                    .apply_to_columns(|v| black_box(v + 1.0), &[0, 7, 15])
            });
        });
    }

    group.finish();
}

fn bench_sparse_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_increment");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut sparse = Sparse::new();
                for i in 0..size {
                    sparse.increment(i % 97, (i * 31) % 1013);
                }
                sparse
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_row,
    bench_append_column,
    bench_iterator_transforms,
    bench_sparse_increment
);
criterion_main!(benches);
