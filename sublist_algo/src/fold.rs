// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pass scans: folds, counting, quantifiers, and extrema.

use core::cmp::Ordering;

use sublist_view::View;

use crate::error::EmptyFold;
use crate::outcome::{ExtremaResult, ScanResult};

/// Left fold with an explicit seed.
///
/// Returns `seed` unchanged when the view is empty.
///
/// ```rust
/// use sublist_algo::fold;
/// use sublist_view::Sublist;
///
/// let data: Vec<u32> = (1..=10).collect();
/// let sum = fold(&Sublist::over(&data), 0_u32, |acc, v| acc + v);
/// assert_eq!(sum, 55);
/// ```
pub fn fold<V, Acc, F>(view: &V, seed: Acc, mut f: F) -> Acc
where
    V: View,
    F: FnMut(Acc, &V::Item) -> Acc,
{
    let mut acc = seed;
    for i in 0..view.len() {
        acc = f(acc, view.get(i));
    }
    acc
}

/// Left fold seeded by the first element.
///
/// # Errors
///
/// Returns [`EmptyFold`] when the view is empty.
pub fn fold_first<V, F>(view: &V, mut f: F) -> Result<V::Item, EmptyFold>
where
    V: View,
    V::Item: Clone,
    F: FnMut(V::Item, &V::Item) -> V::Item,
{
    if view.is_empty() {
        return Err(EmptyFold);
    }
    let mut acc = view.get(0).clone();
    for i in 1..view.len() {
        acc = f(acc, view.get(i));
    }
    Ok(acc)
}

/// Counts the elements satisfying `pred`.
pub fn count_if<V, P>(view: &V, mut pred: P) -> usize
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    let mut hits = 0;
    for i in 0..view.len() {
        if pred(view.get(i)) {
            hits += 1;
        }
    }
    hits
}

/// Returns `true` if every element satisfies `pred`.
///
/// Short-circuits on the first failure; vacuously `true` for an empty view.
pub fn all_of<V, P>(view: &V, mut pred: P) -> bool
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..view.len() {
        if !pred(view.get(i)) {
            return false;
        }
    }
    true
}

/// Returns `true` if any element satisfies `pred`.
///
/// Short-circuits on the first success.
pub fn any_of<V, P>(view: &V, mut pred: P) -> bool
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..view.len() {
        if pred(view.get(i)) {
            return true;
        }
    }
    false
}

/// Finds the first element satisfying `pred`, left to right.
///
/// On a miss the returned [`ScanResult`] carries the number of elements
/// examined (the view's length) and reports failure.
pub fn find_if<V, P>(view: &V, mut pred: P) -> ScanResult
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    for i in 0..view.len() {
        if pred(view.get(i)) {
            return ScanResult::hit(i);
        }
    }
    ScanResult::miss(view.len())
}

/// Finds the indices of the smallest and largest elements per `cmp`.
///
/// Returns `None` for an empty view. Ties resolve to the first minimum and
/// the last maximum.
pub fn min_max_by<V, F>(view: &V, mut cmp: F) -> Option<ExtremaResult>
where
    V: View,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    if view.is_empty() {
        return None;
    }
    let mut min_index = 0;
    let mut max_index = 0;
    for i in 1..view.len() {
        if cmp(view.get(i), view.get(min_index)) == Ordering::Less {
            min_index = i;
        }
        if cmp(view.get(i), view.get(max_index)) != Ordering::Less {
            max_index = i;
        }
    }
    Some(ExtremaResult::new(min_index, max_index))
}

/// [`min_max_by`] with the natural order of the element type.
pub fn min_max<V>(view: &V) -> Option<ExtremaResult>
where
    V: View,
    V::Item: Ord,
{
    min_max_by(view, Ord::cmp)
}
