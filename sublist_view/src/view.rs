// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only and fixed-size windowed views.

use core::fmt;

use crate::error::WindowError;
use crate::store::{Store, StoreMut};
use crate::traits::{View, ViewMut};

/// A read-only window (offset + count) into a borrowed store.
///
/// A `Sublist` never copies elements; every read resolves to
/// `store[offset + local_index]`. Nested windows are bounds-checked against
/// the parent at nesting time and are independent afterwards: two views over
/// the same store are separate address computations, not aliases of each
/// other's bounds.
pub struct Sublist<'a, S: Store + ?Sized> {
    store: &'a S,
    offset: usize,
    count: usize,
}

impl<'a, S: Store + ?Sized> Sublist<'a, S> {
    /// Creates a window over the whole current length of `store`.
    #[must_use]
    pub fn over(store: &'a S) -> Self {
        Self {
            offset: 0,
            count: store.len(),
            store,
        }
    }

    /// Creates a window of `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when `offset + count` exceeds the store's
    /// length.
    pub fn window(store: &'a S, offset: usize, count: usize) -> Result<Self, WindowError> {
        WindowError::check(offset, count, store.len())?;
        Ok(Self {
            store,
            offset,
            count,
        })
    }

    /// Start of the window within the backing store.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Internal constructor for windows already known to be in bounds.
    pub(crate) fn from_parts(store: &'a S, offset: usize, count: usize) -> Self {
        debug_assert!(offset + count <= store.len(), "window exceeds store length");
        Self {
            store,
            offset,
            count,
        }
    }

    /// Sub-window from `rel_offset` to the end of this window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when `rel_offset > self.len()`.
    pub fn nest(&self, rel_offset: usize) -> Result<Self, WindowError> {
        let rel_count = self.count.checked_sub(rel_offset).ok_or(WindowError {
            offset: rel_offset,
            count: 0,
            len: self.count,
        })?;
        self.nest_len(rel_offset, rel_count)
    }

    /// Sub-window of `rel_count` elements starting at `rel_offset`, both
    /// relative to this window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when the requested window exceeds this
    /// window's bounds.
    pub fn nest_len(&self, rel_offset: usize, rel_count: usize) -> Result<Self, WindowError> {
        WindowError::check(rel_offset, rel_count, self.count)?;
        Ok(Self {
            store: self.store,
            offset: self.offset + rel_offset,
            count: rel_count,
        })
    }

    /// Iterates over the elements of the window, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a S::Item> + use<'a, S> {
        let store = self.store;
        (self.offset..self.offset + self.count).map(move |i| store.get(i))
    }
}

impl<S: Store + ?Sized> Clone for Sublist<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Store + ?Sized> Copy for Sublist<'_, S> {}

impl<S: Store + ?Sized> View for Sublist<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> &S::Item {
        assert!(
            index < self.count,
            "index (is {index}) should be < count (is {})",
            self.count
        );
        self.store.get(self.offset + index)
    }
}

impl<S: Store + ?Sized> fmt::Debug for Sublist<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sublist")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// A fixed-size mutable window: indexed reads and writes, immutable count.
///
/// `SublistMut` supports overwriting and swapping elements but can neither
/// grow nor shrink; use [`SublistGrow`](crate::SublistGrow) when an
/// algorithm produces more or fewer elements than it consumes.
pub struct SublistMut<'a, S: StoreMut + ?Sized> {
    store: &'a mut S,
    offset: usize,
    count: usize,
}

impl<'a, S: StoreMut + ?Sized> SublistMut<'a, S> {
    /// Creates a window over the whole current length of `store`.
    #[must_use]
    pub fn over(store: &'a mut S) -> Self {
        Self {
            offset: 0,
            count: store.len(),
            store,
        }
    }

    /// Creates a window of `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when `offset + count` exceeds the store's
    /// length.
    pub fn window(store: &'a mut S, offset: usize, count: usize) -> Result<Self, WindowError> {
        WindowError::check(offset, count, store.len())?;
        Ok(Self {
            store,
            offset,
            count,
        })
    }

    /// Start of the window within the backing store.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reborrows a sub-window from `rel_offset` to the end of this window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when `rel_offset > self.len()`.
    pub fn nest(&mut self, rel_offset: usize) -> Result<SublistMut<'_, S>, WindowError> {
        let rel_count = self.count.checked_sub(rel_offset).ok_or(WindowError {
            offset: rel_offset,
            count: 0,
            len: self.count,
        })?;
        self.nest_len(rel_offset, rel_count)
    }

    /// Reborrows a sub-window of `rel_count` elements at `rel_offset`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when the requested window exceeds this
    /// window's bounds.
    pub fn nest_len(
        &mut self,
        rel_offset: usize,
        rel_count: usize,
    ) -> Result<SublistMut<'_, S>, WindowError> {
        WindowError::check(rel_offset, rel_count, self.count)?;
        Ok(SublistMut {
            offset: self.offset + rel_offset,
            count: rel_count,
            store: &mut *self.store,
        })
    }

    /// Reborrows the window read-only.
    #[must_use]
    pub fn as_view(&self) -> Sublist<'_, S> {
        Sublist {
            store: &*self.store,
            offset: self.offset,
            count: self.count,
        }
    }

    fn resolve(&self, index: usize) -> usize {
        assert!(
            index < self.count,
            "index (is {index}) should be < count (is {})",
            self.count
        );
        self.offset + index
    }
}

impl<S: StoreMut + ?Sized> View for SublistMut<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> &S::Item {
        self.store.get(self.resolve(index))
    }
}

impl<S: StoreMut + ?Sized> ViewMut for SublistMut<'_, S> {
    fn set(&mut self, index: usize, value: S::Item) {
        let at = self.resolve(index);
        self.store.set(at, value);
    }

    fn swap(&mut self, a: usize, b: usize) {
        let a = self.resolve(a);
        let b = self.resolve(b);
        self.store.swap(a, b);
    }
}

impl<S: StoreMut + ?Sized> fmt::Debug for SublistMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SublistMut")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Sublist, SublistMut};
    use crate::traits::{View, ViewMut};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn over_covers_the_whole_store() {
        let data = vec![1_u32, 2, 3, 4];
        let view = Sublist::over(&data);
        assert_eq!(view.len(), 4);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn window_visits_count_elements_from_offset() {
        let data = vec![10_u32, 11, 12, 13, 14];
        let view = Sublist::window(&data, 1, 3).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [11, 12, 13]);
    }

    #[test]
    fn window_rejects_out_of_range_requests() {
        let data = vec![1_u32, 2, 3];
        let err = Sublist::window(&data, 2, 2).unwrap_err();
        assert_eq!(err.len, 3);
        assert!(Sublist::window(&data, 4, 0).is_err());
    }

    #[test]
    fn nesting_is_relative_to_the_parent() {
        let data: Vec<u32> = (0..10).collect();
        let parent = Sublist::window(&data, 2, 6).unwrap(); // 2..8
        let child = parent.nest_len(1, 3).unwrap(); // 3..6
        assert_eq!(child.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);

        // nest(nest(v, a, b), c, d) == nest(v, a + c, d) for d <= b - c.
        let grandchild = child.nest_len(1, 2).unwrap();
        let direct = parent.nest_len(2, 2).unwrap();
        assert_eq!(
            grandchild.iter().collect::<Vec<_>>(),
            direct.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn nest_without_len_runs_to_the_parent_end() {
        let data: Vec<u32> = (0..6).collect();
        let parent = Sublist::window(&data, 1, 4).unwrap(); // 1..5
        let tail = parent.nest(2).unwrap();
        assert_eq!(tail.iter().copied().collect::<Vec<_>>(), [3, 4]);
        // rel_offset == count yields an empty window, one past is an error.
        assert_eq!(parent.nest(4).unwrap().len(), 0);
        assert!(parent.nest(5).is_err());
    }

    #[test]
    fn nest_rejects_windows_past_the_parent() {
        let data: Vec<u32> = (0..10).collect();
        let parent = Sublist::window(&data, 2, 4).unwrap();
        // Would fit the store but not the parent window.
        assert!(parent.nest_len(2, 3).is_err());
    }

    #[test]
    fn mut_view_writes_through_the_window() {
        let mut data = vec![0_u32; 5];
        let mut view = SublistMut::window(&mut data, 1, 3).unwrap();
        view.set(0, 7);
        view.set(2, 9);
        view.swap(0, 2);
        assert_eq!(data, [0, 9, 0, 7, 0]);
    }

    #[test]
    fn mut_view_nests_by_reborrow() {
        let mut data: Vec<u32> = (0..6).collect();
        let mut parent = SublistMut::over(&mut data);
        {
            let mut child = parent.nest_len(2, 2).unwrap();
            child.set(0, 99);
        }
        // Parent remains usable after the child is dropped.
        assert_eq!(*parent.get(2), 99);
    }

    #[test]
    fn sibling_views_are_independent() {
        let data: Vec<u32> = (0..8).collect();
        let left = Sublist::window(&data, 0, 4).unwrap();
        let right = Sublist::window(&data, 4, 4).unwrap();
        assert_eq!(left.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(right.iter().copied().collect::<Vec<_>>(), [4, 5, 6, 7]);
    }

    #[test]
    #[should_panic(expected = "should be < count")]
    fn get_past_the_window_panics() {
        let data = vec![1_u32, 2, 3, 4];
        let view = Sublist::window(&data, 0, 2).unwrap();
        let _ = view.get(2);
    }

    #[test]
    fn works_over_plain_slices_and_arrays() {
        let data = [5_u32, 6, 7];
        let view = Sublist::over(&data);
        assert_eq!(view.len(), 3);

        let slice: &[u32] = &[1, 2, 3, 4];
        let view = Sublist::window(slice, 1, 2).unwrap();
        assert_eq!(*view.get(0), 2);
    }
}
