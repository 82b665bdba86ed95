// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized reordering with an injected entropy source.
//!
//! The core never touches process-global randomness: [`shuffle`] consumes
//! an [`IndexRng`], which any `FnMut(usize) -> usize` closure satisfies.
//! With the `rand` feature, `RandSource` bridges any
//! `rand_core::RngCore` generator, so a fixed-seed generator gives
//! deterministic shuffles under test.

use sublist_view::ViewMut;

/// A uniform-random-index provider.
///
/// Implementations return a value in `0..bound`, uniformly distributed.
/// `bound` is always at least 1.
pub trait IndexRng {
    /// Returns a uniformly distributed index in `0..bound`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> IndexRng for F {
    fn next_below(&mut self, bound: usize) -> usize {
        self(bound)
    }
}

/// [`IndexRng`] adapter for `rand_core` generators.
///
/// Sampling rejects the biased tail of the generator's range, so the
/// result is uniform for any bound.
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand_core::RngCore> IndexRng for RandSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be at least 1");
        let modulus = bound as u64;
        // Largest multiple of `modulus` representable in u64; draws at or
        // past it would bias the low residues and are redrawn.
        let limit = u64::MAX - u64::MAX % modulus;
        loop {
            let draw = self.0.next_u64();
            if draw < limit {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "the residue is below `bound`, which fits in usize"
                )]
                return (draw % modulus) as usize;
            }
        }
    }
}

/// Shuffles the window in place, Fisher–Yates style.
///
/// Iterates from the last index down to the second, swapping each element
/// with one at a uniformly chosen earlier-or-equal index. With a uniform
/// `rng` every permutation is equally likely.
pub fn shuffle<V, R>(view: &mut V, rng: &mut R)
where
    V: ViewMut,
    R: IndexRng,
{
    for i in (1..view.len()).rev() {
        let j = rng.next_below(i + 1);
        view.swap(i, j);
    }
}
