// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Randomization
//!
//! Uniform shuffling. [`shuffle`] and [`shuffle_with`] copy their input and
//! never touch the caller's sequence; [`shuffle_in_place`] is the explicit
//! opt-in for callers that own the buffer and want to avoid the copy.
//!
//! ## Algorithm
//!
//! The copying variants draw from a pool: while elements remain, pick one
//! uniformly at random, move it to the output, and fill its slot with the
//! last pooled element. Every step chooses uniformly among the remaining
//! elements, so each of the `n!` permutations is equally likely given a
//! uniform random source. The loop is iterative and runs in `O(n)`.
//!
//! ## Usage
//!
//! ```rust
//! use kitbag::random::shuffle_with;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut out = shuffle_with(&[1, 2, 3, 4], &mut rng);
//! out.sort();
//! assert_eq!(out, [1, 2, 3, 4]);
//! ```

use rand::{Rng, seq::SliceRandom};

/// Returns the elements of `seq` in uniformly random order, drawing from the
/// thread-local generator.
#[inline]
pub fn shuffle<T>(seq: &[T]) -> Vec<T>
where
    T: Clone,
{
    shuffle_with(seq, &mut rand::rng())
}

/// Returns the elements of `seq` in uniformly random order, drawing from `rng`.
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = seq.to_vec();
    let mut out = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let pick = rng.random_range(0..pool.len());
        out.push(pool.swap_remove(pick));
    }
    out
}

/// Shuffles `seq` in place, drawing from `rng`.
#[inline]
pub fn shuffle_in_place<T, R>(seq: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    seq.shuffle(rng);
}
