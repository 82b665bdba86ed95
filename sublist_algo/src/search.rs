// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary search over sorted views: search, lower/upper bound, equal range.
//!
//! All of these assume the view is sorted with respect to the supplied
//! comparator (or the natural order for the plain variants). The `_by`
//! forms take a probe function classifying each element against the target,
//! in the style of `slice::binary_search_by`: `Ordering::Less` for elements
//! before the target, `Ordering::Greater` for elements after it.

use core::cmp::Ordering;

use sublist_view::View;

use crate::outcome::{EqualRange, SearchResult};

/// First index where the target could be inserted while keeping the view
/// sorted: the index of the first element that is not `Less`.
pub fn lower_bound_by<V, F>(view: &V, mut probe: F) -> usize
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    let mut lo = 0;
    let mut hi = view.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if probe(view.get(mid)) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// [`lower_bound_by`] against `key` in the element type's natural order.
pub fn lower_bound<V>(view: &V, key: &V::Item) -> usize
where
    V: View,
    V::Item: Ord,
{
    lower_bound_by(view, |e| e.cmp(key))
}

/// One past the last index where the target could be inserted: the index
/// of the first element that is `Greater`.
pub fn upper_bound_by<V, F>(view: &V, mut probe: F) -> usize
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    let mut lo = 0;
    let mut hi = view.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if probe(view.get(mid)) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// [`upper_bound_by`] against `key` in the element type's natural order.
pub fn upper_bound<V>(view: &V, key: &V::Item) -> usize
where
    V: View,
    V::Item: Ord,
{
    upper_bound_by(view, |e| e.cmp(key))
}

/// Both insertion bounds for the target, bundled as an [`EqualRange`].
pub fn equal_range_by<V, F>(view: &V, mut probe: F) -> EqualRange
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    EqualRange::new(
        lower_bound_by(view, &mut probe),
        upper_bound_by(view, &mut probe),
    )
}

/// [`equal_range_by`] against `key` in the element type's natural order.
pub fn equal_range<V>(view: &V, key: &V::Item) -> EqualRange
where
    V: View,
    V::Item: Ord,
{
    equal_range_by(view, |e| e.cmp(key))
}

/// Binary search for the target.
///
/// The returned [`SearchResult`] reports existence together with either the
/// first matching index or, on a miss, the sorted-insert position.
pub fn binary_search_by<V, F>(view: &V, mut probe: F) -> SearchResult
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    let at = lower_bound_by(view, &mut probe);
    if at < view.len() && probe(view.get(at)) == Ordering::Equal {
        SearchResult::hit(at)
    } else {
        SearchResult::miss(at)
    }
}

/// [`binary_search_by`] against `key` in the element type's natural order.
pub fn binary_search<V>(view: &V, key: &V::Item) -> SearchResult
where
    V: View,
    V::Item: Ord,
{
    binary_search_by(view, |e| e.cmp(key))
}

#[cfg(test)]
mod tests {
    use super::{binary_search, equal_range, lower_bound, upper_bound};
    use alloc::vec::Vec;
    use sublist_view::Sublist;

    #[test]
    fn search_finds_present_keys_and_places_absent_ones() {
        let data = [1_u32, 3, 5, 7, 9];
        let view = Sublist::over(&data[..]);

        for (i, key) in data.iter().enumerate() {
            let result = binary_search(&view, key);
            assert_eq!(result.found(), Some(i), "key {key}");
        }

        let miss = binary_search(&view, &4);
        assert!(!miss.exists());
        assert_eq!(miss.index(), 2, "4 inserts before 5");
        assert_eq!(binary_search(&view, &0).index(), 0);
        assert_eq!(binary_search(&view, &10).index(), 5);
    }

    #[test]
    fn bounds_bracket_runs_of_equal_keys() {
        let data = [1_u32, 2, 2, 2, 3, 5];
        let view = Sublist::over(&data[..]);

        assert_eq!(lower_bound(&view, &2), 1);
        assert_eq!(upper_bound(&view, &2), 4);
        let range = equal_range(&view, &2);
        assert_eq!((range.lower(), range.upper(), range.len()), (1, 4, 3));

        let absent = equal_range(&view, &4);
        assert!(absent.is_empty());
        assert_eq!(absent.lower(), 5);
    }

    #[test]
    fn search_over_an_empty_view() {
        let data: Vec<u32> = Vec::new();
        let view = Sublist::over(&data);
        let result = binary_search(&view, &1);
        assert!(!result.exists());
        assert_eq!(result.index(), 0);
    }

    #[test]
    fn search_respects_the_window_not_the_store() {
        let data = [9_u32, 1, 3, 5, 9];
        let view = Sublist::window(&data[..], 1, 3).unwrap(); // [1, 3, 5]
        assert_eq!(binary_search(&view, &3).found(), Some(1));
        assert_eq!(binary_search(&view, &9).index(), 3);
    }
}
