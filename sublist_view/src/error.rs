// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by window construction and nesting.

use core::fmt;

/// Error returned when a requested window does not fit its parent.
///
/// `len` is the length of the range the window was checked against: the
/// backing store's length for [`Sublist::window`], or the parent view's
/// count for [`Sublist::nest`] and friends.
///
/// Element access within an already-constructed view is *not* fallible; it
/// panics on out-of-bounds indices like slice indexing does. Window
/// construction is the layer where range mistakes surface as values.
///
/// [`Sublist::window`]: crate::Sublist::window
/// [`Sublist::nest`]: crate::Sublist::nest
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct WindowError {
    /// Requested start, relative to the parent range.
    pub offset: usize,
    /// Requested element count.
    pub count: usize,
    /// Length of the parent range the request was checked against.
    pub len: usize,
}

impl WindowError {
    /// Checks `offset + count <= len`, returning the error on violation.
    ///
    /// Overflow of `offset + count` is treated as out of range rather than
    /// wrapping.
    pub(crate) fn check(offset: usize, count: usize, len: usize) -> Result<(), Self> {
        match offset.checked_add(count) {
            Some(end) if end <= len => Ok(()),
            _ => Err(Self { offset, count, len }),
        }
    }
}

impl fmt::Debug for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WindowError {{ offset: {}, count: {}, len: {} }}",
            self.offset, self.count, self.len
        )
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "window of {} element(s) at offset {} exceeds available length {}",
            self.count, self.offset, self.len
        )
    }
}

impl core::error::Error for WindowError {}
