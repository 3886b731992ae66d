//! Traversal throughput on large rings.

use corelib::{Network, RingBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io;

/// `ws0 -> n1 -> n2 -> ... -> printer` with `size` nodes in total.
fn ring(size: usize) -> Network {
    let mut builder = RingBuilder::with_capacity(1).workstation("ws0");
    for i in 1..size - 1 {
        builder = builder.node(format!("n{i}"));
    }
    builder
        .printer("printer")
        .build()
        .expect("benchmark ring is consistent")
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for size in [16, 256, 4096] {
        let network = ring(size);

        group.bench_with_input(BenchmarkId::new("broadcast", size), &network, |b, network| {
            b.iter(|| network.request_broadcast(&mut io::sink()))
        });
        group.bench_with_input(BenchmarkId::new("print", size), &network, |b, network| {
            b.iter(|| network.request_print("ws0", black_box("doc"), "printer", &mut io::sink()))
        });
        group.bench_with_input(BenchmarkId::new("consistency", size), &network, |b, network| {
            b.iter(|| network.is_consistent())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
