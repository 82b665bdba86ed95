// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed algorithm pipeline.
//!
//! Filters a source into a working buffer, sorts it, and runs searches and
//! folds over windows of the result — each step an explicit function call
//! whose output view feeds the next.
//!
//! Run:
//! - `cargo run -p sublist_demos --example pipeline`

use sublist_algo::{
    binary_search, count_if, filter_into, fold, heap_sort, min_max, partition_into,
};
use sublist_demos::render;
use sublist_view::{Sublist, SublistGrow, SublistMut, View};

fn main() {
    let readings = vec![18, 42, 7, 99, 23, 64, 7, 51, 88, 12, 35, 70];
    println!("readings:    {}", render(&Sublist::over(&readings)));

    // Keep the plausible range only.
    let mut valid: Vec<i32> = Vec::new();
    filter_into(
        &Sublist::over(&readings),
        &mut SublistGrow::over(&mut valid),
        |v| (10..90).contains(v),
    );
    println!("valid:       {}", render(&Sublist::over(&valid)));

    heap_sort(&mut SublistMut::over(&mut valid));
    println!("sorted:      {}", render(&Sublist::over(&valid)));

    let view = Sublist::over(&valid);
    let result = binary_search(&view, &42);
    println!("search 42:   {result}");
    let result = binary_search(&view, &40);
    println!("search 40:   {result}");

    if let Some(extrema) = min_max(&view) {
        println!("extrema:     {extrema}");
    }

    let mean = fold(&view, 0, |acc, v| acc + v) / view.len() as i32;
    let above = count_if(&view, |v| *v > mean);
    println!("mean {mean}, {above} reading(s) above it");

    // Split around the mean, preserving order within each side.
    let mut low: Vec<i32> = Vec::new();
    let mut high: Vec<i32> = Vec::new();
    partition_into(
        &view,
        &mut SublistGrow::over(&mut high),
        &mut SublistGrow::over(&mut low),
        |v| *v > mean,
    );
    println!("below mean:  {}", render(&Sublist::over(&low)));
    println!("above mean:  {}", render(&Sublist::over(&high)));
}
