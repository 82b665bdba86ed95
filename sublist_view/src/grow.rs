// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The expandable view: structural growth and shrinkage of a window.

use core::fmt;

use crate::error::WindowError;
use crate::store::StoreResize;
use crate::traits::{GrowEdge, View, ViewGrow, ViewMut};
use crate::view::{Sublist, SublistMut};

/// An expandable window: indexed mutation plus insertion, removal, and
/// edge-directed resizing.
///
/// Structural mutations change the backing store's length and update this
/// view's own `offset`/`count` bookkeeping so the window stays valid.
/// Elements of the store outside the window are preserved; those after the
/// window shift position by the length delta, exactly as they would for an
/// insertion or removal inside any `Vec`.
///
/// This is the only variant usable as the destination of algorithms that
/// produce more or fewer elements than they consume.
pub struct SublistGrow<'a, S: StoreResize> {
    store: &'a mut S,
    offset: usize,
    count: usize,
}

impl<'a, S: StoreResize> SublistGrow<'a, S> {
    /// Creates an expandable window over the whole current length of
    /// `store`.
    #[must_use]
    pub fn over(store: &'a mut S) -> Self {
        Self {
            offset: 0,
            count: store.len(),
            store,
        }
    }

    /// Creates an expandable window of `count` elements at `offset`.
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

    /// Reborrows the window read-only.
    #[must_use]
    pub fn as_view(&self) -> Sublist<'_, S> {
        Sublist::from_parts(self.store, self.offset, self.count)
    }

    /// Reborrows a fixed-size sub-window from `rel_offset` to the end of
    /// this window.
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

    /// Reborrows a fixed-size sub-window of `rel_count` elements at
    /// `rel_offset`. Nested windows cannot resize; structural mutation
    /// stays with the view that owns the bookkeeping.
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
        SublistMut::window(self.store, self.offset + rel_offset, rel_count)
    }

    fn resolve(&self, index: usize) -> usize {
        assert!(
            index < self.count,
            "index (is {index}) should be < count (is {})",
            self.count
        );
        self.offset + index
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.offset + self.count <= self.store.len(),
            "window {}..{} exceeds store length {}",
            self.offset,
            self.offset + self.count,
            self.store.len()
        );
    }
}

impl<S: StoreResize> View for SublistGrow<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> &S::Item {
        self.store.get(self.resolve(index))
    }
}

impl<S: StoreResize> ViewMut for SublistGrow<'_, S> {
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

impl<S: StoreResize> ViewGrow for SublistGrow<'_, S> {
    fn push(&mut self, value: S::Item) {
        self.store.insert(self.offset + self.count, value);
        self.count += 1;
        self.check_invariant();
    }

    fn insert(&mut self, index: usize, value: S::Item) {
        assert!(
            index <= self.count,
            "insertion index (is {index}) should be <= count (is {})",
            self.count
        );
        self.store.insert(self.offset + index, value);
        self.count += 1;
        self.check_invariant();
    }

    fn remove(&mut self, index: usize) -> S::Item {
        let at = self.resolve(index);
        let value = self.store.remove(at);
        self.count -= 1;
        self.check_invariant();
        value
    }

    fn truncate(&mut self, new_count: usize) {
        while self.count > new_count {
            self.store.remove(self.offset + self.count - 1);
            self.count -= 1;
        }
        self.check_invariant();
    }

    fn resize_with<F: FnMut() -> S::Item>(
        &mut self,
        new_count: usize,
        edge: GrowEdge,
        mut fill: F,
    ) {
        // The window keeps its offset; the delta lands at the chosen edge,
        // so front growth prepends without disturbing later store elements
        // beyond the usual shift.
        while self.count < new_count {
            let at = match edge {
                GrowEdge::Front => self.offset,
                GrowEdge::Back => self.offset + self.count,
            };
            self.store.insert(at, fill());
            self.count += 1;
        }
        while self.count > new_count {
            let at = match edge {
                GrowEdge::Front => self.offset,
                GrowEdge::Back => self.offset + self.count - 1,
            };
            self.store.remove(at);
            self.count -= 1;
        }
        self.check_invariant();
    }
}

impl<S: StoreResize> fmt::Debug for SublistGrow<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SublistGrow")
            .field("offset", &self.offset)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::SublistGrow;
    use crate::traits::{GrowEdge, View, ViewGrow, ViewMut};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn push_appends_at_the_window_end() {
        let mut data: Vec<u32> = vec![1, 2, 9, 9];
        let mut view = SublistGrow::window(&mut data, 0, 2).unwrap();
        view.push(3);
        assert_eq!(view.len(), 3);
        assert_eq!(data, [1, 2, 3, 9, 9]);
    }

    #[test]
    fn insert_and_remove_shift_the_store_tail() {
        let mut data: Vec<u32> = vec![0, 1, 3, 9];
        let mut view = SublistGrow::window(&mut data, 1, 2).unwrap();
        view.insert(1, 2);
        assert_eq!(view.len(), 3);
        assert_eq!(data, [0, 1, 2, 3, 9]);

        let mut view = SublistGrow::window(&mut data, 1, 3).unwrap();
        assert_eq!(view.remove(0), 1);
        assert_eq!(view.len(), 2);
        assert_eq!(data, [0, 2, 3, 9]);
    }

    #[test]
    fn truncate_drops_from_the_back_of_the_window() {
        let mut data: Vec<u32> = (0..6).collect();
        let mut view = SublistGrow::window(&mut data, 1, 4).unwrap(); // 1..5
        view.truncate(2);
        assert_eq!(view.len(), 2);
        assert_eq!(data, [0, 1, 2, 5]);
    }

    #[test]
    fn resize_back_grows_with_the_fill_generator() {
        let mut data: Vec<u32> = vec![1, 2, 9];
        let mut view = SublistGrow::window(&mut data, 0, 2).unwrap();
        let mut next = 100;
        view.resize_with(4, GrowEdge::Back, || {
            next += 1;
            next
        });
        assert_eq!(data, [1, 2, 101, 102, 9]);
    }

    #[test]
    fn resize_front_prepends_keeping_the_offset() {
        let mut data: Vec<u32> = vec![9, 1, 2];
        let mut view = SublistGrow::window(&mut data, 1, 2).unwrap();
        view.resize_with(4, GrowEdge::Front, || 0);
        assert_eq!(view.offset(), 1);
        assert_eq!(view.len(), 4);
        assert_eq!(data, [9, 0, 0, 1, 2]);
    }

    #[test]
    fn resize_shrinks_at_either_edge() {
        let mut data: Vec<u32> = (0..5).collect();
        let mut view = SublistGrow::over(&mut data);
        view.resize_with(3, GrowEdge::Front, || 0);
        assert_eq!(data, [2, 3, 4]);

        let mut data: Vec<u32> = (0..5).collect();
        let mut view = SublistGrow::over(&mut data);
        view.resize_with(3, GrowEdge::Back, || 0);
        assert_eq!(data, [0, 1, 2]);
    }

    #[test]
    fn grown_window_stays_readable_and_writable() {
        let mut data: Vec<u32> = vec![5];
        let mut view = SublistGrow::over(&mut data);
        view.push(6);
        view.push(7);
        view.set(0, 50);
        view.swap(0, 2);
        assert_eq!(*view.get(0), 7);
        assert_eq!(data, [7, 6, 50]);
    }

    #[test]
    fn nested_fixed_window_writes_through() {
        let mut data: Vec<u32> = (0..5).collect();
        let mut grow = SublistGrow::over(&mut data);
        {
            let mut mid = grow.nest_len(1, 3).unwrap();
            mid.set(1, 99);
        }
        grow.push(5);
        assert_eq!(data, [0, 1, 99, 3, 4, 5]);
    }
}
