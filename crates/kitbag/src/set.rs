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

//! # Set Operations
//!
//! Intersection and union over any number of sequences. Results are plain
//! vectors of distinct values in first-occurrence order, so callers that
//! need a set can collect into one while callers that need a stable order
//! get one for free.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returns the distinct values present in every sequence of `seqs`.
///
/// Values appear in the order of their first occurrence in `seqs[0]`.
/// Zero sequences yield an empty result; a single sequence yields its
/// deduplication.
///
/// # Examples
///
/// ```rust
/// # use kitbag::set::intersection;
/// let a = [2, 1, 2, 3];
/// let b = [3, 2, 5];
/// assert_eq!(intersection(&[&a, &b]), vec![2, 3]);
/// assert_eq!(intersection::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn intersection<T>(seqs: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let Some((first, rest)) = seqs.split_first() else {
        return Vec::new();
    };

    let others: Vec<FxHashSet<&T>> = rest.iter().map(|s| s.iter().collect()).collect();
    let mut seen: FxHashSet<&T> = FxHashSet::default();

    first
        .iter()
        .filter(|x| others.iter().all(|o| o.contains(x)))
        .filter(|x| seen.insert(*x))
        .cloned()
        .collect()
}

/// Returns each distinct value across all sequences of `seqs` exactly once.
///
/// Values appear in the order of their first occurrence, scanning the
/// sequences left to right.
///
/// # Examples
///
/// ```rust
/// # use kitbag::set::union;
/// let a = [2, 1];
/// let b = [1, 3, 3];
/// assert_eq!(union(&[&a, &b]), vec![2, 1, 3]);
/// ```
pub fn union<T>(seqs: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: FxHashSet<&T> = FxHashSet::default();
    seqs.iter()
        .flat_map(|s| s.iter())
        .filter(|x| seen.insert(*x))
        .cloned()
        .collect()
}
