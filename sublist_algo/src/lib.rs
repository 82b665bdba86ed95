// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sublist_algo --heading-base-level=0

//! Sublist Algo: sequence algorithms over windowed views.
//!
//! Every algorithm in this crate takes views from [`sublist_view`] — never
//! raw stores — plus, where relevant, caller-supplied delegates
//! (predicates, comparators, generators, combiners, accumulators) as plain
//! closures. Each parameter is bound by the minimum capability it needs:
//!
//! - scans ([`fold`], [`count_if`], [`find_if`], [`binary_search`],
//!   [`is_heap_until`], ...) take `&impl View`;
//! - in-place mutations ([`reverse`], [`rotate_left`], [`heap_sort`],
//!   [`shuffle`], [`replace_if`], [`retain`], ...) take
//!   `&mut impl ViewMut`;
//! - producing algorithms that append ([`map_into`], [`zip_into`],
//!   [`filter_into`], [`partition_into`], ...) take `&mut impl ViewGrow`
//!   destinations, while their `*_copy` twins overwrite a fixed
//!   destination and truncate, reporting progress as a [`CopyOutcome`].
//!
//! Query algorithms return small result structs ([`SearchResult`],
//! [`ScanResult`], [`ExtremaResult`], [`EqualRange`]) with named accessors
//! rather than bare booleans or indices. Preconditions violated at call
//! time surface before any mutation: there is no partial mutation followed
//! by an error.
//!
//! Pipelines are composed explicitly — the output view of one step is the
//! input of the next — rather than through a deferred builder.
//!
//! ## Minimal example
//!
//! ```rust
//! use sublist_algo::{filter_into, fold, rotate_left};
//! use sublist_view::{Sublist, SublistGrow, SublistMut};
//!
//! let mut data = vec![1, 2, 3, 4, 5];
//!
//! rotate_left(&mut SublistMut::over(&mut data), 2);
//! assert_eq!(data, [3, 4, 5, 1, 2]);
//!
//! let mut evens: Vec<i32> = Vec::new();
//! filter_into(
//!     &Sublist::over(&data),
//!     &mut SublistGrow::over(&mut evens),
//!     |v| v % 2 == 0,
//! );
//! assert_eq!(evens, [4, 2]);
//!
//! let sum = fold(&Sublist::over(&data), 0, |acc, v| acc + v);
//! assert_eq!(sum, 15);
//! ```
//!
//! Randomized algorithms take their entropy as an explicit [`IndexRng`]
//! argument, so tests can supply a fixed-seed generator; the `rand`
//! feature adds a `RandSource` adapter for `rand_core` generators.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod fold;
mod heap;
mod outcome;
mod reorder;
mod search;
mod shuffle;
mod transform;

pub use error::EmptyFold;
pub use fold::{all_of, any_of, count_if, find_if, fold, fold_first, min_max, min_max_by};
pub use heap::{
    heap_sort, heap_sort_by, is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap,
    make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by,
};
pub use outcome::{CopyOutcome, EqualRange, ExtremaResult, ScanResult, SearchResult};
pub use reorder::{
    reverse, reverse_copy, reverse_into, rotate_left, rotate_left_copy, rotate_left_into,
};
pub use search::{
    binary_search, binary_search_by, equal_range, equal_range_by, lower_bound, lower_bound_by,
    upper_bound, upper_bound_by,
};
#[cfg(feature = "rand")]
pub use shuffle::RandSource;
pub use shuffle::{IndexRng, shuffle};
pub use transform::{
    fill, filter_into, map_copy, map_into, partition_into, replace_if, replace_with_if, retain,
    zip_copy, zip_into,
};
