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

//! # Sequence Shaping
//!
//! Operations that reshape a sequence without inspecting its values beyond
//! truthiness: splitting into chunks, dropping from either end, flattening
//! one level of nesting, concatenating, and compacting away falsy values.
//! [`fill`] is the only operation here that mutates its input, and says so
//! by taking `&mut [T]`.

use crate::{
    error::{InvalidArgument, Result},
    truthy::Truthy,
};
use std::ops::{Bound, RangeBounds};

/// Splits `seq` into consecutive chunks of length `size`.
///
/// The last chunk holds the remainder and may be shorter. An empty input
/// produces no chunks.
///
/// # Errors
///
/// Returns [`InvalidArgument::ChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// # use kitbag::seq::chunk;
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1, 2], 0).is_err());
/// ```
pub fn chunk<T>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone,
{
    if size == 0 {
        tracing::debug!(len = seq.len(), "rejected chunk size of zero");
        return Err(InvalidArgument::ChunkSize { size });
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

/// Returns `seq` without its first `n` elements.
///
/// Dropping more elements than exist yields an empty vector.
#[inline]
pub fn drop<T>(seq: &[T], n: usize) -> Vec<T>
where
    T: Clone,
{
    seq[n.min(seq.len())..].to_vec()
}

/// Returns `seq` without its last `n` elements.
///
/// Dropping more elements than exist yields an empty vector.
#[inline]
pub fn drop_right<T>(seq: &[T], n: usize) -> Vec<T>
where
    T: Clone,
{
    seq[..seq.len().saturating_sub(n)].to_vec()
}

/// An element of a sequence that may itself be a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A plain element, passed through unchanged by [`flatten`].
    Item(T),
    /// A nested sequence, spliced into the output by [`flatten`].
    List(Vec<T>),
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(item: T) -> Self {
        Self::Item(item)
    }
}

impl<T> Nested<T> {
    /// Returns the number of elements this entry contributes when flattened.
    #[inline]
    pub fn flat_len(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::List(items) => items.len(),
        }
    }
}

/// Flattens `seq` a single level deep.
///
/// # Examples
///
/// ```rust
/// # use kitbag::seq::{flatten, Nested};
/// let nested = [Nested::Item(1), Nested::List(vec![2, 3]), Nested::List(vec![]), Nested::Item(4)];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T>(seq: &[Nested<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut out = Vec::with_capacity(seq.iter().map(Nested::flat_len).sum());
    for entry in seq {
        match entry {
            Nested::Item(item) => out.push(item.clone()),
            Nested::List(items) => out.extend_from_slice(items),
        }
    }
    out
}

/// Overwrites the elements of `seq` within `range` with `value`.
///
/// Both ends of the range are clamped to `seq.len()`; an empty or inverted
/// range leaves `seq` untouched.
///
/// # Examples
///
/// ```rust
/// # use kitbag::seq::fill;
/// let mut v = [1, 2, 3, 4];
/// fill(&mut v, 0, 1..3);
/// assert_eq!(v, [1, 0, 0, 4]);
///
/// fill(&mut v, 9, 2..100);
/// assert_eq!(v, [1, 0, 9, 9]);
/// ```
pub fn fill<T, R>(seq: &mut [T], value: T, range: R)
where
    T: Clone,
    R: RangeBounds<usize>,
{
    let len = seq.len();
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    }
    .min(len);

    if start >= end {
        return;
    }

    tracing::trace!(start, end, len, "filling range");
    seq[start..end].fill(value);
}

/// Returns the truthy elements of `seq`, preserving order.
///
/// See [`Truthy`] for which values count as falsy.
///
/// # Examples
///
/// ```rust
/// # use kitbag::seq::compact;
/// assert_eq!(compact(&[0, 1, 0, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(compact(&["", "a", ""]), vec!["a"]);
/// ```
pub fn compact<T>(seq: &[T]) -> Vec<T>
where
    T: Truthy + Clone,
{
    seq.iter().filter(|x| x.is_truthy()).cloned().collect()
}

/// Returns `seq` followed by every sequence in `others`, in order.
///
/// # Examples
///
/// ```rust
/// # use kitbag::seq::concat;
/// assert_eq!(concat(&[1], &[&[2, 3], &[], &[4]]), vec![1, 2, 3, 4]);
/// ```
pub fn concat<T>(seq: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone,
{
    let total = seq.len() + others.iter().map(|o| o.len()).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(seq);
    for other in others {
        out.extend_from_slice(other);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chunk_even() {
        let out = chunk(&[1, 2, 3, 4], 2).unwrap();
        assert_eq!(out, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_remainder() {
        let out = chunk(&['a', 'b', 'c'], 2).unwrap();
        assert_eq!(out, vec![vec!['a', 'b'], vec!['c']]);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        let out = chunk(&[1, 2], 10).unwrap();
        assert_eq!(out, vec![vec![1, 2]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let out = chunk::<i32>(&[], 3).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_chunk_zero_size_is_rejected() {
        crate::test_support::init_tracing();
        assert_eq!(
            chunk(&[1, 2, 3], 0),
            Err(InvalidArgument::ChunkSize { size: 0 })
        );
        // Even an empty input rejects a zero size.
        assert!(chunk::<i32>(&[], 0).is_err());
    }

    #[test]
    fn test_drop() {
        assert_eq!(drop(&[1, 2, 3], 1), vec![2, 3]);
        assert_eq!(drop(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(drop(&[1, 2, 3], 3), Vec::<i32>::new());
        assert_eq!(drop(&[1, 2, 3], 99), Vec::<i32>::new());
    }

    #[test]
    fn test_drop_right() {
        assert_eq!(drop_right(&[1, 2, 3], 1), vec![1, 2]);
        assert_eq!(drop_right(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(drop_right(&[1, 2, 3], 5), Vec::<i32>::new());
        assert_eq!(drop_right::<i32>(&[], 1), Vec::<i32>::new());
    }

    #[test]
    fn test_flatten_mixed() {
        let nested = vec![
            Nested::List(vec![1, 2]),
            Nested::Item(3),
            Nested::List(vec![4]),
        ];
        assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_only_one_level() {
        let nested = vec![
            Nested::List(vec![vec![1], vec![2, 3]]),
            Nested::Item(vec![4]),
        ];
        assert_eq!(flatten(&nested), vec![vec![1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten::<u8>(&[]).is_empty());
        assert!(flatten::<u8>(&[Nested::List(vec![])]).is_empty());
    }

    #[test]
    fn test_nested_from_item() {
        let n: Nested<i32> = 5.into();
        assert_eq!(n, Nested::Item(5));
        assert_eq!(n.flat_len(), 1);
    }

    #[test]
    fn test_fill_whole() {
        let mut v = vec![1, 2, 3];
        fill(&mut v, 0, ..);
        assert_eq!(v, [0, 0, 0]);
    }

    #[test]
    fn test_fill_partial() {
        let mut v = vec![1, 2, 3, 4, 5];
        fill(&mut v, 7, 1..3);
        assert_eq!(v, [1, 7, 7, 4, 5]);
    }

    #[test]
    fn test_fill_inclusive_and_open_ranges() {
        let mut v = vec![0; 5];
        fill(&mut v, 1, 1..=2);
        assert_eq!(v, [0, 1, 1, 0, 0]);
        fill(&mut v, 2, 3..);
        assert_eq!(v, [0, 1, 1, 2, 2]);
        fill(&mut v, 3, ..1);
        assert_eq!(v, [3, 1, 1, 2, 2]);
    }

    #[test]
    fn test_fill_clamps_out_of_range() {
        let mut v = vec![1, 2, 3];
        fill(&mut v, 0, 2..usize::MAX);
        assert_eq!(v, [1, 2, 0]);
        fill(&mut v, 9, 10..20);
        assert_eq!(v, [1, 2, 0]);
        fill(&mut v, 9, ..=usize::MAX);
        assert_eq!(v, [9, 9, 9]);
    }

    #[test]
    fn test_fill_excluded_start_bound() {
        let mut v = vec![1, 2, 3, 4];
        fill(&mut v, 0, (Bound::Excluded(0), Bound::Unbounded));
        assert_eq!(v, [1, 0, 0, 0]);
        fill(&mut v, 5, (Bound::Excluded(1), Bound::Included(2)));
        assert_eq!(v, [1, 0, 5, 0]);
        // An excluded start at the last index leaves nothing to fill.
        fill(&mut v, 9, (Bound::Excluded(3), Bound::Unbounded));
        assert_eq!(v, [1, 0, 5, 0]);
        fill(&mut v, 9, (Bound::Excluded(usize::MAX), Bound::Unbounded));
        assert_eq!(v, [1, 0, 5, 0]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_fill_inverted_range_is_noop() {
        let mut v = vec![1, 2, 3];
        fill(&mut v, 0, 2..1);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_compact_numbers() {
        assert_eq!(compact(&[0, 1, 2, 0, 3]), vec![1, 2, 3]);
        assert_eq!(compact(&[0.0, f64::NAN, 1.5]), vec![1.5]);
    }

    #[test]
    fn test_compact_options_and_strings() {
        assert_eq!(compact(&[None, Some(1), Some(0)]), vec![Some(1)]);
        let words = vec![String::new(), "a".to_string()];
        assert_eq!(compact(&words), vec!["a".to_string()]);
    }

    #[test]
    fn test_compact_does_not_mutate() {
        let v = [false, true, false];
        let out = compact(&v);
        assert_eq!(out, vec![true]);
        assert_eq!(v, [false, true, false]);
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&[1, 2], &[&[3], &[4, 5]]), vec![1, 2, 3, 4, 5]);
        assert_eq!(concat::<i32>(&[], &[]), Vec::<i32>::new());
        assert_eq!(concat(&[1], &[]), vec![1]);
    }

    proptest! {
        #[test]
        fn test_chunk_reconstructs_input(
            seq in prop::collection::vec(any::<i32>(), 0..64),
            size in 1usize..10,
        ) {
            let chunks = chunk(&seq, size).unwrap();
            let rebuilt: Vec<i32> = chunks.iter().flatten().copied().collect();
            prop_assert_eq!(&rebuilt, &seq);
            if let Some((last, rest)) = chunks.split_last() {
                prop_assert!(rest.iter().all(|c| c.len() == size));
                prop_assert!(!last.is_empty() && last.len() <= size);
            }
        }

        #[test]
        fn test_flatten_flat_input_is_identity(seq in prop::collection::vec(any::<u16>(), 0..64)) {
            let nested: Vec<Nested<u16>> = seq.iter().copied().map(Nested::Item).collect();
            prop_assert_eq!(flatten(&nested), seq);
        }

        #[test]
        fn test_drop_lengths(seq in prop::collection::vec(any::<u8>(), 0..32), n in 0usize..40) {
            prop_assert_eq!(drop(&seq, n).len(), seq.len().saturating_sub(n));
            prop_assert_eq!(drop_right(&seq, n).len(), seq.len().saturating_sub(n));
        }
    }
}
