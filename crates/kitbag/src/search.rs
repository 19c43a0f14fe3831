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

//! # Filtering and Search
//!
//! Predicate-driven selection over sequences. All operations evaluate the
//! predicate at most once per element, in index order, so stateful
//! predicates observe a deterministic call sequence.
//!
//! [`remove`] is the only operation here that mutates its input. It decides
//! which positions to delete before touching the vector, which keeps repeated
//! values apart: each removed element is the one the predicate matched, not
//! an earlier element that happens to compare equal.

use crate::predicate::Predicate;

/// Returns the elements of `seq` that satisfy `predicate`, preserving order.
///
/// # Examples
///
/// ```rust
/// # use kitbag::search::filter;
/// assert_eq!(filter(&[1, 2, 3, 4], |x: &i32| x % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    seq.iter()
        .enumerate()
        .filter(|(i, x)| predicate.test(x, *i, seq))
        .map(|(_, x)| x.clone())
        .collect()
}

/// Returns the first element at or after `from_index` that satisfies
/// `predicate`, or `None` if there is none.
///
/// A `from_index` at or past the end of `seq` yields `None` without calling
/// the predicate. The index reported to an [`Indexed`](crate::predicate::Indexed)
/// predicate is the element's position in `seq`, not its offset from
/// `from_index`.
///
/// # Examples
///
/// ```rust
/// # use kitbag::search::find;
/// let v = [5, 12, 8, 130, 44];
/// assert_eq!(find(&v, |x: &i32| *x > 10, 0), Some(&12));
/// assert_eq!(find(&v, |x: &i32| *x > 10, 2), Some(&130));
/// assert_eq!(find(&v, |x: &i32| *x > 1000, 0), None);
/// assert_eq!(find(&v, |_: &i32| true, 5), None);
/// ```
pub fn find<T, P>(seq: &[T], mut predicate: P, from_index: usize) -> Option<&T>
where
    P: Predicate<T>,
{
    seq.iter()
        .enumerate()
        .skip(from_index)
        .find(|(i, x)| predicate.test(x, *i, seq))
        .map(|(_, x)| x)
}

/// Removes every element of `seq` that satisfies `predicate` and returns the
/// removed elements in their original order.
///
/// The predicate sees the vector as it was before any removal.
///
/// # Examples
///
/// ```rust
/// # use kitbag::search::remove;
/// let mut v = vec![1, 2, 2, 3];
/// let removed = remove(&mut v, |x: &i32| *x == 2);
/// assert_eq!(v, [1, 3]);
/// assert_eq!(removed, [2, 2]);
/// ```
pub fn remove<T, P>(seq: &mut Vec<T>, mut predicate: P) -> Vec<T>
where
    P: Predicate<T>,
{
    let view = seq.as_slice();
    let doomed: Vec<usize> = view
        .iter()
        .enumerate()
        .filter(|(i, x)| predicate.test(x, *i, view))
        .map(|(i, _)| i)
        .collect();

    if doomed.is_empty() {
        return Vec::new();
    }

    tracing::trace!(
        len = seq.len(),
        removed = doomed.len(),
        "removing matched elements"
    );

    let mut removed = Vec::with_capacity(doomed.len());
    let mut kept = Vec::with_capacity(seq.len() - doomed.len());
    let mut doomed = doomed.into_iter().peekable();

    for (i, item) in std::mem::take(seq).into_iter().enumerate() {
        if doomed.next_if_eq(&i).is_some() {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }

    debug_assert!(
        doomed.next().is_none(),
        "called `remove` and recorded an index past the end of the sequence"
    );

    *seq = kept;
    removed
}

/// Splits `seq` into the elements that satisfy `predicate` and those that
/// do not, preserving relative order within each half. `seq` is left
/// untouched.
///
/// # Examples
///
/// ```rust
/// # use kitbag::search::partition;
/// let (even, odd) = partition(&[1, 2, 3, 4, 5], |x: &i32| x % 2 == 0);
/// assert_eq!(even, [2, 4]);
/// assert_eq!(odd, [1, 3, 5]);
/// ```
pub fn partition<T, P>(seq: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Predicate<T>,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (i, x) in seq.iter().enumerate() {
        if predicate.test(x, i, seq) {
            matching.push(x.clone());
        } else {
            rest.push(x.clone());
        }
    }
    (matching, rest)
}
