// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window basics.
//!
//! Demonstrates windowing and nesting views over a `Vec` store, and growing
//! a window through `SublistGrow`.
//!
//! Run:
//! - `cargo run -p sublist_demos --example windows_basics`

use sublist_demos::render;
use sublist_view::{GrowEdge, Sublist, SublistGrow, View, ViewGrow};

fn main() {
    let mut scores = vec![72, 85, 91, 64, 88, 79, 95, 58];
    println!("store:          {scores:?}");

    // A window over the middle of the store.
    let mid = Sublist::window(&scores, 2, 4).expect("window fits the store");
    println!("window(2, 4):   {}", render(&mid));

    // Nested windows address relative to their parent.
    let tail = mid.nest(2).expect("offset is inside the parent");
    println!("  .nest(2):     {}", render(&tail));

    // Out-of-range requests are errors, not panics.
    match mid.nest_len(3, 3) {
        Ok(view) => println!("  .nest_len(3, 3): {}", render(&view)),
        Err(err) => println!("  .nest_len(3, 3): {err}"),
    }

    // Growing a window grows the store at the window's edge.
    let mut grow = SublistGrow::window(&mut scores, 2, 4).expect("window fits the store");
    grow.push(70);
    grow.resize_with(7, GrowEdge::Front, || 0);
    println!("after growing:  offset {}, count {}", grow.offset(), grow.len());
    println!("store:          {scores:?}");
}
