// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sublist_view --heading-base-level=0

//! Sublist View: windowed views over indexable backing stores.
//!
//! This crate provides the range core of the sublist library: a view is a
//! bounded window (`offset` + `count`) borrowed from a backing store, and
//! all reads and writes resolve through the store as
//! `store[offset + local_index]`. Algorithms elsewhere are written once
//! against the view traits and never touch a store directly.
//!
//! The core concepts are:
//!
//! - [`Store`], [`StoreMut`], [`StoreResize`]: capability-layered traits any
//!   indexable collection can implement to act as a backing store.
//!   Implementations ship for `[T]`, `[T; N]`, `Vec<T>`, and (behind the
//!   `small_vec` feature) `smallvec::SmallVec`.
//! - [`Sublist`], [`SublistMut`], [`SublistGrow`]: three capability shapes
//!   of the same window — read-only, fixed-size mutable, and expandable.
//!   Only [`SublistGrow`] may change the number of elements, and doing so
//!   keeps both the store's length and the view's own bookkeeping
//!   consistent.
//! - [`View`], [`ViewMut`], [`ViewGrow`]: the traits algorithms bound their
//!   parameters by, each requiring only the minimum capability needed.
//! - [`WindowError`]: the error for window construction, nesting, and any
//!   other range request that does not fit its parent.
//!
//! Windows nest: a sub-window is bounds-checked against its parent at
//! nesting time and addresses the store independently afterwards. Borrow
//! checking replaces the aliasing and null-argument hazards a dynamically
//! checked rendition of this design would carry: a mutable view cannot
//! coexist with another view of the same store, and absent arguments are
//! unrepresentable.
//!
//! ## Minimal example
//!
//! ```rust
//! use sublist_view::{Sublist, SublistGrow, View, ViewGrow};
//!
//! let mut data = vec![10, 20, 30, 40, 50];
//!
//! // Read through a nested window.
//! let view = Sublist::window(&data, 1, 3).unwrap(); // [20, 30, 40]
//! let tail = view.nest(1).unwrap(); // [30, 40]
//! assert_eq!(*tail.get(0), 30);
//!
//! // Grow a window; the store follows.
//! let mut grow = SublistGrow::window(&mut data, 1, 3).unwrap();
//! grow.push(45);
//! assert_eq!(grow.len(), 4);
//! assert_eq!(data, [10, 20, 30, 40, 45, 50]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod grow;
mod store;
mod traits;
mod view;

pub use error::WindowError;
pub use grow::SublistGrow;
pub use store::{Store, StoreMut, StoreResize};
pub use traits::{GrowEdge, View, ViewGrow, ViewMut};
pub use view::{Sublist, SublistMut};
