// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits implemented by the view types.
//!
//! Algorithms are written against these traits and bound each parameter by
//! the minimum capability it needs: a pure scan takes `&impl View`, an
//! in-place mutation takes `&mut impl ViewMut`, and anything that changes
//! the number of elements takes `&mut impl ViewGrow`. The capability split
//! is static; there is no runtime flag to check and no way to call a
//! structural mutation on a fixed-size view.
//!
//! All indices are local to the view's window: index `0` is the first
//! element of the window, not of the backing store.

/// Which edge of a window a resize grows or shrinks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GrowEdge {
    /// The start of the window. Growing here prepends elements; the classic
    /// use is grow-then-rotate to simulate insertion.
    Front,
    /// The end of the window.
    Back,
}

/// Read-only access to a window.
pub trait View {
    /// Element type of the backing store.
    type Item;

    /// Number of elements in the window.
    fn len(&self) -> usize;

    /// Returns `true` if the window is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at local `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;
}

/// Indexed mutation of a window whose length is fixed.
pub trait ViewMut: View {
    /// Overwrites the element at local `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Swaps the elements at local indices `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

/// Structural mutation: growing and shrinking the window (and with it the
/// backing store).
///
/// Every method keeps the window invariant `offset + count <= store.len()`
/// and leaves elements outside the window untouched, at shifted positions.
pub trait ViewGrow: ViewMut {
    /// Appends `value` at the end of the window.
    fn push(&mut self, value: Self::Item);

    /// Inserts `value` at local `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    fn insert(&mut self, index: usize, value: Self::Item);

    /// Removes and returns the element at local `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn remove(&mut self, index: usize) -> Self::Item;

    /// Shrinks the window to at most `new_count` elements, dropping the
    /// excess from the back. Does nothing when `new_count >= self.len()`.
    fn truncate(&mut self, new_count: usize);

    /// Grows or shrinks the window to exactly `new_count` elements.
    ///
    /// The delta is applied at `edge`: `GrowEdge::Back` appends or drops at
    /// the end of the window, `GrowEdge::Front` prepends or drops at the
    /// start. New elements are produced by `fill`, called once per element.
    fn resize_with<F: FnMut() -> Self::Item>(
        &mut self,
        new_count: usize,
        edge: GrowEdge,
        fill: F,
    );
}
