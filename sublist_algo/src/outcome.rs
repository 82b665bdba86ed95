// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Result value types returned by query algorithms.
//!
//! Each of these is a small immutable struct with named accessors and
//! explicit conversions. There is deliberately no implicit coercion to
//! `bool` or to an index: callers say which half of the result they mean.
//! All types render human-readably via `Display`.

use core::fmt;

/// Outcome of a binary search: whether the key exists, and where.
///
/// When the key is absent, [`SearchResult::index`] is the position a sorted
/// insert would use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    exists: bool,
    index: usize,
}

impl SearchResult {
    /// A search that found the key at `index`.
    #[must_use]
    pub fn hit(index: usize) -> Self {
        Self {
            exists: true,
            index,
        }
    }

    /// A search that missed; `index` is the sorted-insert position.
    #[must_use]
    pub fn miss(index: usize) -> Self {
        Self {
            exists: false,
            index,
        }
    }

    /// Returns `true` if the key was found.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The matching index, or the sorted-insert position on a miss.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The matching index when the key was found, `None` otherwise.
    #[must_use]
    pub fn found(&self) -> Option<usize> {
        self.exists.then_some(self.index)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exists {
            write!(f, "found at index {}", self.index)
        } else {
            write!(f, "not found, insert at index {}", self.index)
        }
    }
}

/// Outcome of a generic predicate scan: success plus the index involved.
///
/// Produced by scans like `find_if`. On failure the index is the scanned
/// view's length, one past the last element examined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    success: bool,
    index: usize,
}

impl ScanResult {
    /// A scan that succeeded at `index`.
    #[must_use]
    pub fn hit(index: usize) -> Self {
        Self {
            success: true,
            index,
        }
    }

    /// A scan that failed after examining `scanned` elements.
    #[must_use]
    pub fn miss(scanned: usize) -> Self {
        Self {
            success: false,
            index: scanned,
        }
    }

    /// Returns `true` if the scan succeeded.
    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    /// The index the scan stopped at.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The stopping index on success, `None` otherwise.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.success.then_some(self.index)
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "matched at index {}", self.index)
        } else {
            write!(f, "no match in {} element(s)", self.index)
        }
    }
}

/// Indices of the smallest and largest elements of a non-empty scan.
///
/// Ties resolve to the first minimum and the last maximum, so for an
/// all-equal view `min_index` is `0` and `max_index` is the final index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtremaResult {
    min_index: usize,
    max_index: usize,
}

impl ExtremaResult {
    /// Bundles the two extremum indices.
    #[must_use]
    pub fn new(min_index: usize, max_index: usize) -> Self {
        Self {
            min_index,
            max_index,
        }
    }

    /// Index of the first smallest element.
    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    /// Index of the last largest element.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.max_index
    }
}

impl fmt::Display for ExtremaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min at index {}, max at index {}",
            self.min_index, self.max_index
        )
    }
}

/// The `[lower, upper)` insertion range for a key in a sorted view.
///
/// `lower` is the first index where the key could be inserted while keeping
/// the view sorted; `upper` is one past the last. The elements in between
/// compare equal to the key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EqualRange {
    lower: usize,
    upper: usize,
}

impl EqualRange {
    /// Bundles a lower/upper bound pair.
    #[must_use]
    pub fn new(lower: usize, upper: usize) -> Self {
        debug_assert!(lower <= upper, "equal range bounds out of order");
        Self { lower, upper }
    }

    /// First index where the key could be inserted.
    #[must_use]
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// One past the last index where the key could be inserted.
    #[must_use]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Number of elements equal to the key.
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    /// Returns `true` if no element equals the key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }
}

impl fmt::Display for EqualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equal range {}..{}", self.lower, self.upper)
    }
}

/// How far a truncating copy proceeded.
///
/// Reported by the `*_copy` algorithm variants, which stop at whichever of
/// source and destination runs out first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CopyOutcome {
    read: usize,
    written: usize,
}

impl CopyOutcome {
    /// Bundles the consumed/produced counts.
    #[must_use]
    pub fn new(read: usize, written: usize) -> Self {
        Self { read, written }
    }

    /// Elements consumed from the source.
    #[must_use]
    pub fn read(&self) -> usize {
        self.read
    }

    /// Elements written to the destination.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read {} element(s), wrote {}", self.read, self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::{CopyOutcome, EqualRange, ExtremaResult, ScanResult, SearchResult};
    use alloc::format;

    #[test]
    fn search_result_accessors_and_conversion() {
        let hit = SearchResult::hit(3);
        assert!(hit.exists());
        assert_eq!(hit.index(), 3);
        assert_eq!(hit.found(), Some(3));

        let miss = SearchResult::miss(5);
        assert!(!miss.exists());
        assert_eq!(miss.index(), 5);
        assert_eq!(miss.found(), None);
    }

    #[test]
    fn scan_result_distinguishes_hit_from_exhaustion() {
        assert_eq!(ScanResult::hit(0).position(), Some(0));
        assert_eq!(ScanResult::miss(4).position(), None);
        assert_eq!(ScanResult::miss(4).index(), 4);
    }

    #[test]
    fn equal_range_len_is_upper_minus_lower() {
        let range = EqualRange::new(2, 5);
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
        assert!(EqualRange::new(4, 4).is_empty());
    }

    #[test]
    fn renderings_are_human_readable() {
        assert_eq!(format!("{}", SearchResult::hit(2)), "found at index 2");
        assert_eq!(
            format!("{}", SearchResult::miss(7)),
            "not found, insert at index 7"
        );
        assert_eq!(
            format!("{}", ExtremaResult::new(1, 6)),
            "min at index 1, max at index 6"
        );
        assert_eq!(format!("{}", EqualRange::new(2, 5)), "equal range 2..5");
        assert_eq!(
            format!("{}", CopyOutcome::new(2, 2)),
            "read 2 element(s), wrote 2"
        );
    }
}
