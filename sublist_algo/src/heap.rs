// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary max-heap operations in a view's index space.
//!
//! The heap is encoded densely: the parent of index `i` sits at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. All operations
//! take a comparator; the plain variants default to the element type's
//! natural order, giving a max-heap.

use core::cmp::Ordering;

use sublist_view::{View, ViewMut};

/// Sifts the element at `at` up toward the root.
fn sift_up<V, F>(view: &mut V, cmp: &mut F, mut at: usize)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    while at > 0 {
        let parent = (at - 1) / 2;
        if cmp(view.get(parent), view.get(at)) == Ordering::Less {
            view.swap(parent, at);
            at = parent;
        } else {
            break;
        }
    }
}

/// Sifts the element at `at` down within `view[..end]`.
fn sift_down<V, F>(view: &mut V, cmp: &mut F, mut at: usize, end: usize)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    loop {
        let left = 2 * at + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let mut largest = at;
        if cmp(view.get(largest), view.get(left)) == Ordering::Less {
            largest = left;
        }
        if right < end && cmp(view.get(largest), view.get(right)) == Ordering::Less {
            largest = right;
        }
        if largest == at {
            break;
        }
        view.swap(at, largest);
        at = largest;
    }
}

/// Rearranges the window into a max-heap per `cmp`.
pub fn make_heap_by<V, F>(view: &mut V, mut cmp: F)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    for at in (0..len / 2).rev() {
        sift_down(view, &mut cmp, at, len);
    }
}

/// [`make_heap_by`] with the natural order.
pub fn make_heap<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    make_heap_by(view, Ord::cmp);
}

/// Restores the heap after the final element was newly appended.
///
/// The window's prefix `view[..len - 1]` must already be a valid heap; the
/// last element is sifted up into place. A no-op for empty windows.
pub fn push_heap_by<V, F>(view: &mut V, mut cmp: F)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len > 1 {
        sift_up(view, &mut cmp, len - 1);
    }
}

/// [`push_heap_by`] with the natural order.
pub fn push_heap<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    push_heap_by(view, Ord::cmp);
}

/// Moves the maximum to the final position and re-heaps the rest.
///
/// After this, `view[len - 1]` holds the former maximum and
/// `view[..len - 1]` is a valid heap again; the caller shrinks the window
/// by one to complete the removal. A no-op for empty windows.
pub fn pop_heap_by<V, F>(view: &mut V, mut cmp: F)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len > 1 {
        view.swap(0, len - 1);
        sift_down(view, &mut cmp, 0, len - 1);
    }
}

/// [`pop_heap_by`] with the natural order.
pub fn pop_heap<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    pop_heap_by(view, Ord::cmp);
}

/// Number of leading elements that form a valid heap prefix.
///
/// Returns the window's length when the whole window is a valid heap;
/// otherwise the index of the first child that outranks its parent, which
/// equals the count of elements verified.
pub fn is_heap_until_by<V, F>(view: &V, mut cmp: F) -> usize
where
    V: View,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    for child in 1..view.len() {
        let parent = (child - 1) / 2;
        if cmp(view.get(parent), view.get(child)) == Ordering::Less {
            return child;
        }
    }
    view.len()
}

/// [`is_heap_until_by`] with the natural order.
pub fn is_heap_until<V>(view: &V) -> usize
where
    V: View,
    V::Item: Ord,
{
    is_heap_until_by(view, Ord::cmp)
}

/// Returns `true` if the whole window is a valid heap per `cmp`.
pub fn is_heap_by<V, F>(view: &V, cmp: F) -> bool
where
    V: View,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    is_heap_until_by(view, cmp) == view.len()
}

/// [`is_heap_by`] with the natural order.
pub fn is_heap<V>(view: &V) -> bool
where
    V: View,
    V::Item: Ord,
{
    is_heap_by(view, Ord::cmp)
}

/// Sorts the window ascending by repeatedly removing the heap maximum.
pub fn heap_sort_by<V, F>(view: &mut V, mut cmp: F)
where
    V: ViewMut,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    make_heap_by(view, &mut cmp);
    for end in (1..view.len()).rev() {
        view.swap(0, end);
        sift_down(view, &mut cmp, 0, end);
    }
}

/// [`heap_sort_by`] with the natural order.
pub fn heap_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    heap_sort_by(view, Ord::cmp);
}
