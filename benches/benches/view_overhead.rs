// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sublist_algo::fold;
use sublist_view::{Sublist, View};

// Measures what a traversal through the view indirection costs compared to
// summing the backing slice directly.
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/traversal");

    for len in [1_024_usize, 65_536] {
        let data: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("direct_slice", len), &data, |b, data| {
            b.iter(|| black_box(data.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("view_fold", len), &data, |b, data| {
            let view = Sublist::over(data);
            b.iter(|| black_box(fold(&view, 0_u64, |acc, v| acc + v)));
        });

        group.bench_with_input(BenchmarkId::new("view_get_loop", len), &data, |b, data| {
            let view = Sublist::over(data);
            b.iter(|| {
                let mut sum = 0_u64;
                for i in 0..view.len() {
                    sum += *view.get(i);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

// Nesting depth should not change traversal cost: a nested window is a flat
// offset recomputation, not a chain of parents.
fn bench_nesting_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/nesting");
    let data: Vec<u64> = (0..65_536).collect();

    for depth in [1_usize, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let mut view = Sublist::over(&data);
            for _ in 0..depth {
                view = view.nest(1).unwrap();
            }
            b.iter(|| black_box(fold(&view, 0_u64, |acc, v| acc + v)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_nesting_depth);
criterion_main!(benches);
