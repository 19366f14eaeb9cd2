// benches/dispatch.rs
//! Benchmarks for the binding dispatch path
//!
//! Run with: cargo bench

use automobile::{bindings, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_construct(c: &mut Criterion) {
    let host = bindings::automobile();
    let args = [Value::from("Tesla")];

    c.bench_function("construct", |b| {
        b.iter(|| host.construct(black_box("Car"), black_box(&args)).unwrap())
    });
}

fn benchmark_invoke_get_name(c: &mut Criterion) {
    let host = bindings::automobile();
    let car = host.construct("Car", &[Value::from("Tesla")]).unwrap();

    c.bench_function("invoke_get_name", |b| {
        b.iter(|| host.invoke(black_box(&car), black_box("get_name"), &[]).unwrap())
    });
}

criterion_group!(benches, benchmark_construct, benchmark_invoke_get_name);
criterion_main!(benches);
