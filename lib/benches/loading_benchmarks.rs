//! OBJ loading benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use obj_slicer::mesh::{parse_obj, SilentReporter};
use std::fmt::Write;

fn grid_source(n: usize) -> String {
    let mut obj = String::new();
    for j in 0..n {
        for i in 0..n {
            writeln!(obj, "v {}.0 {}.0 0.0", i, j).unwrap();
        }
    }
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let a = j * n + i + 1;
            writeln!(obj, "f {}/1/1 {}/1/1 {}/1/1 {}/1/1", a, a + 1, a + n + 1, a + n).unwrap();
        }
    }
    obj
}

fn parse_grid_benchmark(c: &mut Criterion) {
    let source = grid_source(200);
    c.bench_function("parse_obj_grid_200", |b| {
        b.iter(|| parse_obj(black_box(source.as_bytes()), &SilentReporter).unwrap())
    });
}

criterion_group!(benches, parse_grid_benchmark);
criterion_main!(benches);
