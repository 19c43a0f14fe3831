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

//! # Numeric Aggregation
//!
//! Mean, extrema, and sums over numeric sequences, generic over the
//! `num_traits` numeric hierarchy. Operations without a meaningful answer
//! for an empty input ([`mean`], [`max`], [`min`]) reject it explicitly
//! instead of producing `NaN` or a sentinel extreme; [`sum`] of an empty
//! input is zero, and an integer sum that overflows is rejected.

use crate::error::{InvalidArgument, Result};
use crate::num::CheckedAddVal;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;

/// Returns the arithmetic mean of `seq` as `f64`.
///
/// # Errors
///
/// - [`InvalidArgument::EmptySequence`] if `seq` is empty.
/// - [`InvalidArgument::NotRepresentable`] if an element has no `f64` value.
///
/// # Examples
///
/// ```rust
/// # use kitbag::stats::mean;
/// assert_eq!(mean(&[2, 4, 6]).unwrap(), 4.0);
/// assert!(mean::<i32>(&[]).is_err());
/// ```
pub fn mean<T>(seq: &[T]) -> Result<f64>
where
    T: ToPrimitive,
{
    const OPERATION: &str = "mean";

    if seq.is_empty() {
        tracing::debug!("rejected mean of an empty sequence");
        return Err(InvalidArgument::EmptySequence {
            operation: OPERATION,
        });
    }

    let mut total = 0.0_f64;
    for (index, x) in seq.iter().enumerate() {
        total += x.to_f64().ok_or(InvalidArgument::NotRepresentable {
            operation: OPERATION,
            index,
        })?;
    }
    Ok(total / seq.len() as f64)
}

/// Returns the largest element of `seq`. On ties the earliest wins.
///
/// # Errors
///
/// - [`InvalidArgument::EmptySequence`] if `seq` is empty.
/// - [`InvalidArgument::Unordered`] if an element cannot be compared,
///   such as a floating-point `NaN`.
///
/// # Examples
///
/// ```rust
/// # use kitbag::stats::max;
/// assert_eq!(max(&[3, 9, 2]).unwrap(), 9);
/// assert!(max(&[1.0, f64::NAN]).is_err());
/// ```
#[inline]
pub fn max<T>(seq: &[T]) -> Result<T>
where
    T: PartialOrd + Clone,
{
    extremum(seq, "max", Ordering::Greater)
}

/// Returns the smallest element of `seq`. On ties the earliest wins.
///
/// # Errors
///
/// - [`InvalidArgument::EmptySequence`] if `seq` is empty.
/// - [`InvalidArgument::Unordered`] if an element cannot be compared,
///   such as a floating-point `NaN`.
///
/// # Examples
///
/// ```rust
/// # use kitbag::stats::min;
/// assert_eq!(min(&[3, 9, 2]).unwrap(), 2);
/// ```
#[inline]
pub fn min<T>(seq: &[T]) -> Result<T>
where
    T: PartialOrd + Clone,
{
    extremum(seq, "min", Ordering::Less)
}

/// Scans for the element that compares `wanted` against every other one.
fn extremum<T>(seq: &[T], operation: &'static str, wanted: Ordering) -> Result<T>
where
    T: PartialOrd + Clone,
{
    let Some((first, rest)) = seq.split_first() else {
        tracing::debug!(operation, "rejected extremum of an empty sequence");
        return Err(InvalidArgument::EmptySequence { operation });
    };

    // A value that is not even comparable to itself (NaN) poisons the scan.
    if first.partial_cmp(first).is_none() {
        tracing::debug!(operation, index = 0, "rejected unordered element");
        return Err(InvalidArgument::Unordered {
            operation,
            index: 0,
        });
    }

    let mut best = first;
    for (offset, x) in rest.iter().enumerate() {
        match x.partial_cmp(best) {
            Some(ord) if ord == wanted => best = x,
            Some(_) => {}
            None => {
                let index = offset + 1;
                tracing::debug!(operation, index, "rejected unordered element");
                return Err(InvalidArgument::Unordered { operation, index });
            }
        }
    }
    Ok(best.clone())
}

/// Returns the sum of `seq`, or zero if it is empty.
///
/// Floating-point sums follow IEEE 754 and saturate to an infinity.
///
/// # Errors
///
/// Returns [`InvalidArgument::Overflow`] if an intermediate integer sum
/// leaves the range of `T`.
///
/// # Examples
///
/// ```rust
/// # use kitbag::stats::sum;
/// assert_eq!(sum(&[1, 2, 3]).unwrap(), 6);
/// assert_eq!(sum::<i32>(&[]).unwrap(), 0);
/// assert!(sum(&[200_u8, 100]).is_err());
/// ```
pub fn sum<T>(seq: &[T]) -> Result<T>
where
    T: Zero + CheckedAddVal + Clone,
{
    let mut total = T::zero();
    for (index, x) in seq.iter().enumerate() {
        total = match total.checked_add_val(x.clone()) {
            Some(total) => total,
            None => {
                tracing::debug!(index, "rejected sum that overflows");
                return Err(InvalidArgument::Overflow {
                    operation: "sum",
                    index,
                });
            }
        };
    }
    Ok(total)
}
