//! Criterion micro-benchmarks for grid construction and queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridstep_bench::{reference_grid, stress_grid};
use gridstep_core::{BoundaryType, Side};

/// Benchmark: Build and tag a 100x100 channel grid.
fn bench_build_reference_grid(c: &mut Criterion) {
    c.bench_function("build_grid_10k", |b| {
        b.iter(|| {
            let grid = reference_grid().unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: Cell centers on the ~100K-node stress grid.
fn bench_cell_centers_100k(c: &mut Criterion) {
    let grid = stress_grid().unwrap();

    c.bench_function("cell_centers_100k", |b| {
        b.iter(|| {
            let centers = grid.cell_centers();
            black_box(&centers);
        });
    });
}

/// Benchmark: Retag all four sides of the stress grid.
fn bench_set_boundary_all_sides(c: &mut Criterion) {
    let mut grid = stress_grid().unwrap();

    c.bench_function("set_boundary_4_sides_100k", |b| {
        b.iter(|| {
            for side in Side::ALL {
                grid.set_boundary(side, BoundaryType::Outlet);
            }
            black_box(grid.boundary_at(0, 0));
        });
    });
}

/// Benchmark: Tag histogram over the stress grid.
fn bench_tag_counts_100k(c: &mut Criterion) {
    let grid = stress_grid().unwrap();

    c.bench_function("tag_counts_100k", |b| {
        b.iter(|| {
            let counts = grid.tag_counts();
            black_box(&counts);
        });
    });
}

criterion_group!(
    benches,
    bench_build_reference_grid,
    bench_cell_centers_100k,
    bench_set_boundary_all_sides,
    bench_tag_counts_100k
);
criterion_main!(benches);
