// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by algorithm preconditions.

use core::fmt;

/// Error returned when folding an empty view without a seed.
///
/// [`fold`](crate::fold) with an explicit seed returns the seed unchanged
/// on empty input; [`fold_first`](crate::fold_first) has no seed to fall
/// back on and reports this instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyFold;

impl fmt::Display for EmptyFold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot fold an empty view without a seed")
    }
}

impl core::error::Error for EmptyFold {}
