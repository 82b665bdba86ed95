// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-wise transformations: map, zip, filter, partition, replace.
//!
//! Two destination shapes exist for the producing algorithms:
//!
//! - `*_into` appends to an expandable destination ([`ViewGrow`]) and
//!   consumes the whole source.
//! - `*_copy` overwrites a fixed destination ([`ViewMut`]) and truncates to
//!   whichever of source and destination runs out first, reporting how far
//!   it got as a [`CopyOutcome`]. Size mismatches are never an error.

use sublist_view::{View, ViewGrow, ViewMut};

use crate::outcome::CopyOutcome;

/// Appends `f` of each source element to `dest`.
pub fn map_into<V, D, F>(src: &V, dest: &mut D, mut f: F)
where
    V: View,
    D: ViewGrow,
    F: FnMut(&V::Item) -> D::Item,
{
    for i in 0..src.len() {
        dest.push(f(src.get(i)));
    }
}

/// Overwrites `dest` with `f` of each source element, truncating to the
/// shorter of the two.
pub fn map_copy<V, D, F>(src: &V, dest: &mut D, mut f: F) -> CopyOutcome
where
    V: View,
    D: ViewMut,
    F: FnMut(&V::Item) -> D::Item,
{
    let limit = src.len().min(dest.len());
    for i in 0..limit {
        dest.set(i, f(src.get(i)));
    }
    CopyOutcome::new(limit, limit)
}

/// Appends the pairwise combination of `a` and `b` to `dest`, stopping at
/// the shorter source.
pub fn zip_into<A, B, D, F>(a: &A, b: &B, dest: &mut D, mut combine: F)
where
    A: View,
    B: View,
    D: ViewGrow,
    F: FnMut(&A::Item, &B::Item) -> D::Item,
{
    for i in 0..a.len().min(b.len()) {
        dest.push(combine(a.get(i), b.get(i)));
    }
}

/// Overwrites `dest` with the pairwise combination of `a` and `b`,
/// stopping at the first of the three to run out.
pub fn zip_copy<A, B, D, F>(a: &A, b: &B, dest: &mut D, mut combine: F) -> CopyOutcome
where
    A: View,
    B: View,
    D: ViewMut,
    F: FnMut(&A::Item, &B::Item) -> D::Item,
{
    let limit = a.len().min(b.len()).min(dest.len());
    for i in 0..limit {
        dest.set(i, combine(a.get(i), b.get(i)));
    }
    CopyOutcome::new(limit, limit)
}

/// Appends the elements satisfying `pred` to `dest`, preserving order.
///
/// `pred` is evaluated exactly once per source element, left to right.
pub fn filter_into<V, D, P>(src: &V, dest: &mut D, mut pred: P)
where
    V: View,
    V::Item: Clone,
    D: ViewGrow<Item = V::Item>,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..src.len() {
        let value = src.get(i);
        if pred(value) {
            dest.push(value.clone());
        }
    }
}

/// Splits `src` into two destinations by `pred`, in one stable pass.
///
/// Elements satisfying `pred` land in `dest_true`, the rest in
/// `dest_false`; relative order within each destination matches the
/// source.
pub fn partition_into<V, T, F, P>(src: &V, dest_true: &mut T, dest_false: &mut F, mut pred: P)
where
    V: View,
    V::Item: Clone,
    T: ViewGrow<Item = V::Item>,
    F: ViewGrow<Item = V::Item>,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..src.len() {
        let value = src.get(i);
        if pred(value) {
            dest_true.push(value.clone());
        } else {
            dest_false.push(value.clone());
        }
    }
}

/// Overwrites every element satisfying `pred` with `value`, in place.
pub fn replace_if<V, P>(view: &mut V, mut pred: P, value: V::Item)
where
    V: ViewMut,
    V::Item: Clone,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..view.len() {
        if pred(view.get(i)) {
            view.set(i, value.clone());
        }
    }
}

/// Overwrites every element satisfying `pred` with a generated value.
///
/// The generator receives the element's local index.
pub fn replace_with_if<V, P, G>(view: &mut V, mut pred: P, mut generate: G)
where
    V: ViewMut,
    P: FnMut(&V::Item) -> bool,
    G: FnMut(usize) -> V::Item,
{
    for i in 0..view.len() {
        if pred(view.get(i)) {
            view.set(i, generate(i));
        }
    }
}

/// Overwrites every element with a generated value.
pub fn fill<V, G>(view: &mut V, mut generate: G)
where
    V: ViewMut,
    G: FnMut(usize) -> V::Item,
{
    for i in 0..view.len() {
        view.set(i, generate(i));
    }
}

/// Compacts the elements satisfying `pred` to the front of the window,
/// preserving their order, and returns the surviving count.
///
/// This is the erase-remove idiom: the view's length is unchanged and the
/// tail past the returned count holds unspecified leftovers; the caller is
/// responsible for truncating the backing store with the returned count.
/// `pred` is evaluated exactly once per element.
pub fn retain<V, P>(view: &mut V, mut pred: P) -> usize
where
    V: ViewMut,
    P: FnMut(&V::Item) -> bool,
{
    let mut write = 0;
    for read in 0..view.len() {
        if pred(view.get(read)) {
            if read != write {
                view.swap(read, write);
            }
            write += 1;
        }
    }
    write
}
