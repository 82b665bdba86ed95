// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order-changing algorithms: reverse and rotate.

use sublist_view::{View, ViewGrow, ViewMut};

use crate::outcome::CopyOutcome;

/// Reverses the window in place.
///
/// Swaps converge from both ends toward the middle; the middle element of
/// an odd-length window is untouched. Applying this twice restores the
/// original order for any length, including 0 and 1.
pub fn reverse<V: ViewMut>(view: &mut V) {
    let len = view.len();
    reverse_range(view, 0, len);
}

/// Reverses `view[start..end]` in place. Bounds must be valid.
fn reverse_range<V: ViewMut>(view: &mut V, start: usize, end: usize) {
    let mut front = start;
    let mut back = end;
    while front + 1 < back {
        back -= 1;
        view.swap(front, back);
        front += 1;
    }
}

/// Appends the reversed source to `dest` without mutating the source.
pub fn reverse_into<V, D>(src: &V, dest: &mut D)
where
    V: View,
    V::Item: Clone,
    D: ViewGrow<Item = V::Item>,
{
    for i in (0..src.len()).rev() {
        dest.push(src.get(i).clone());
    }
}

/// Overwrites `dest` with the reversed source, truncating to the shorter
/// of the two.
///
/// The source is consumed from the back, so with a short destination the
/// result is the reversed *suffix* of the source; the outcome reports how
/// many elements were consumed and written.
pub fn reverse_copy<V, D>(src: &V, dest: &mut D) -> CopyOutcome
where
    V: View,
    V::Item: Clone,
    D: ViewMut<Item = V::Item>,
{
    let limit = src.len().min(dest.len());
    for i in 0..limit {
        dest.set(i, src.get(src.len() - 1 - i).clone());
    }
    CopyOutcome::new(limit, limit)
}

/// Reduces `shift` to an equivalent left rotation in `0..len`.
///
/// Negative shifts rotate right; magnitudes beyond `len` wrap. For example
/// `len + 1` behaves as `1` and `-1` as `len - 1`.
fn normalize_shift(shift: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "window counts are far below isize::MAX; rem_euclid output is non-negative"
    )]
    {
        shift.rem_euclid(len as isize) as usize
    }
}

/// Rotates the window left by `shift` positions, in place.
///
/// Uses the three-reversal technique, so no auxiliary storage is needed.
/// `shift` may be negative (rotate right) or exceed the window length
/// (reduced modulo the length, sign preserved).
pub fn rotate_left<V: ViewMut>(view: &mut V, shift: isize) {
    let len = view.len();
    let k = normalize_shift(shift, len);
    if k == 0 {
        return;
    }
    reverse_range(view, 0, k);
    reverse_range(view, k, len);
    reverse_range(view, 0, len);
}

/// Appends the rotated source to `dest` without mutating the source.
pub fn rotate_left_into<V, D>(src: &V, dest: &mut D, shift: isize)
where
    V: View,
    V::Item: Clone,
    D: ViewGrow<Item = V::Item>,
{
    let len = src.len();
    let k = normalize_shift(shift, len);
    for i in 0..len {
        dest.push(src.get((k + i) % len).clone());
    }
}

/// Overwrites `dest` with the rotated source, truncating to the shorter of
/// the two.
pub fn rotate_left_copy<V, D>(src: &V, dest: &mut D, shift: isize) -> CopyOutcome
where
    V: View,
    V::Item: Clone,
    D: ViewMut<Item = V::Item>,
{
    let len = src.len();
    let k = normalize_shift(shift, len);
    let limit = len.min(dest.len());
    for i in 0..limit {
        dest.set(i, src.get((k + i) % len).clone());
    }
    CopyOutcome::new(limit, limit)
}
