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

//! # Predicates
//!
//! A predicate is a boolean test over an element of a sequence. Most call
//! sites only care about the element itself, so every `FnMut(&T) -> bool`
//! closure is a [`Predicate`]. When the test also needs the element's
//! position or a view of the whole sequence, wrap a three-argument closure
//! in [`Indexed`].
//!
//! ## Usage
//!
//! ```rust
//! use kitbag::predicate::{Indexed, Predicate};
//!
//! let data = [3, 1, 4, 1, 5];
//!
//! let mut is_odd = |x: &i32| x % 2 == 1;
//! assert!(is_odd.test(&3, 0, &data));
//!
//! // Matches elements larger than their left neighbor.
//! let mut rising = Indexed(|x: &i32, i: usize, s: &[i32]| i > 0 && *x > s[i - 1]);
//! assert!(rising.test(&data[2], 2, &data));
//! assert!(!rising.test(&data[3], 3, &data));
//! ```
//!
//! Closures passed directly to the search functions need an annotated
//! parameter type (`|x: &i32| ...`) so the compiler can pick the predicate
//! implementation.

/// A boolean test over an element, its index, and the sequence containing it.
pub trait Predicate<T> {
    /// Returns `true` if `item`, located at `index` within `seq`, passes the test.
    fn test(&mut self, item: &T, index: usize, seq: &[T]) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline(always)]
    fn test(&mut self, item: &T, _index: usize, _seq: &[T]) -> bool {
        self(item)
    }
}

/// Adapts a closure taking `(element, index, sequence)` into a [`Predicate`].
///
/// # Examples
///
/// ```rust
/// use kitbag::{predicate::Indexed, search::filter};
///
/// let every_other = filter(&['a', 'b', 'c', 'd'], Indexed(|_: &char, i: usize, _: &[char]| i % 2 == 0));
/// assert_eq!(every_other, vec!['a', 'c']);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Indexed<F>(pub F);

impl<T, F> Predicate<T> for Indexed<F>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    #[inline(always)]
    fn test(&mut self, item: &T, index: usize, seq: &[T]) -> bool {
        (self.0)(item, index, seq)
    }
}
