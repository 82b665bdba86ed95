// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backing-store traits and implementations for common containers.
//!
//! A store is any indexable collection a view can borrow: it only needs
//! indexed access and a length. The traits are layered by capability:
//!
//! - [`Store`]: indexed reads and a length query.
//! - [`StoreMut`]: indexed writes and element swaps.
//! - [`StoreResize`]: structural insertion and removal, shifting the length.
//!
//! Implementations are provided for `[T]`, `[T; N]`, and `Vec<T>`, and for
//! `smallvec::SmallVec` behind the `small_vec` feature. Out-of-bounds
//! indices panic, matching slice semantics; fallible range checking lives
//! at the window-construction layer instead.

use alloc::vec::Vec;

/// Read access to an indexable collection.
pub trait Store {
    /// Element type stored in the collection.
    type Item;

    /// Number of elements currently in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;
}

/// Write access to an indexable collection of fixed length.
pub trait StoreMut: Store {
    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

/// Structural access: insertion and removal that change the length.
pub trait StoreResize: StoreMut {
    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    fn insert(&mut self, index: usize, value: Self::Item);

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn remove(&mut self, index: usize) -> Self::Item;
}

impl<T> Store for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> StoreMut for [T] {
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Store for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> StoreMut for [T; N] {
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Store for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> StoreMut for Vec<T> {
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> StoreResize for Vec<T> {
    fn insert(&mut self, index: usize, value: T) {
        Self::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> T {
        Self::remove(self, index)
    }
}

#[cfg(feature = "small_vec")]
impl<A: smallvec::Array> Store for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> &A::Item {
        &self[index]
    }
}

#[cfg(feature = "small_vec")]
impl<A: smallvec::Array> StoreMut for smallvec::SmallVec<A> {
    fn set(&mut self, index: usize, value: A::Item) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

#[cfg(feature = "small_vec")]
impl<A: smallvec::Array> StoreResize for smallvec::SmallVec<A> {
    fn insert(&mut self, index: usize, value: A::Item) {
        Self::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> A::Item {
        Self::remove(self, index)
    }
}
