// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use sublist_algo::{binary_search, heap_sort, rotate_left};
use sublist_view::{Sublist, SublistMut};

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("algo/rotate_left");

    // Hypothesis: the three-reversal rotate is O(n) with a small constant,
    // independent of the shift amount.
    for len in [256_usize, 4_096, 65_536] {
        let data: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        for shift in [1_isize, (len / 3) as isize, -7] {
            group.bench_with_input(
                BenchmarkId::new(format!("shift_{shift}"), len),
                &data,
                |b, data| {
                    b.iter_batched(
                        || data.clone(),
                        |mut data| {
                            rotate_left(&mut SublistMut::over(&mut data), shift);
                            black_box(data);
                        },
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("algo/heap_sort");

    for len in [256_usize, 4_096, 65_536] {
        // Deterministic scrambled input.
        let data: Vec<u64> = (0..len as u64)
            .map(|v| v.wrapping_mul(0x9e37_79b9) % 100_003)
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut data| {
                    heap_sort(&mut SublistMut::over(&mut data));
                    black_box(data);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("algo/binary_search");

    for len in [1_024_usize, 1_048_576] {
        let data: Vec<u64> = (0..len as u64).map(|v| v * 2).collect();
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            let view = Sublist::over(data);
            let mut probe = 1_u64;
            b.iter(|| {
                // Alternate hits and misses across the keyspace.
                probe = probe.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let key = probe % (2 * len as u64);
                black_box(binary_search(&view, &key));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rotate, bench_heap_sort, bench_binary_search);
criterion_main!(benches);
