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

//! # Kitbag
//!
//! Small, stateless helpers over sequences, maps, and strings: chunking,
//! dropping, flattening, filling, set operations, predicate search,
//! partitioning, shuffling, numeric aggregation, and string repeat/split.
//!
//! Every operation is a free function taking its inputs explicitly. Nothing
//! reads global state or the environment, and nothing mutates its input
//! unless its signature takes `&mut`.
//!
//! ## Modules
//!
//! - `seq`: `chunk`, `drop`, `drop_right`, `flatten`, `fill`, `compact`, `concat`.
//!   `seq::drop` is not re-exported at the root so that `use kitbag::*` does
//!   not shadow `std::mem::drop`.
//! - `set`: `intersection` and `union` over any number of slices.
//! - `search`: `filter`, `find`, `remove`, `partition` driven by a `Predicate`.
//! - `random`: copying and in-place uniform shuffles over any `rand::Rng`.
//! - `stats`: `mean`, `max`, `min`, `sum`.
//! - `num`: `CheckedAddVal`, the overflow-aware addition behind `sum`.
//! - `map`: `keys` and `values` of any map iterable as `(&K, &V)` pairs.
//! - `text`: `repeat`, `split`, and `split_regex`.
//! - `predicate`, `truthy`: the traits the above are generic over.
//! - `error`: `InvalidArgument`, the single error type of the crate.
//!
//! ## Usage
//!
//! ```rust
//! use kitbag::{chunk, mean, partition, split};
//!
//! let batches = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(batches.len(), 3);
//!
//! let (small, large) = partition(&[1, 8, 3, 9], |x: &i32| *x < 5);
//! assert_eq!((small, large), (vec![1, 3], vec![8, 9]));
//!
//! assert_eq!(mean(&[2, 4, 6]).unwrap(), 4.0);
//! assert_eq!(split("a,b,c", ",", Some(2)), ["a", "b"]);
//! ```
//!
//! A glob import leaves `std::mem::drop` usable; the sequence form stays
//! under `seq`:
//!
//! ```rust
//! use kitbag::*;
//!
//! let tail = kitbag::seq::drop(&[1, 2, 3], 1);
//! assert_eq!(tail, [2, 3]);
//! drop(tail);
//! ```

pub mod error;
pub mod map;
pub mod num;
pub mod predicate;
pub mod random;
pub mod search;
pub mod seq;
pub mod set;
pub mod stats;
pub mod text;
pub mod truthy;

pub use error::{InvalidArgument, Result};
pub use map::{keys, values};
pub use predicate::{Indexed, Predicate};
pub use random::{shuffle, shuffle_in_place, shuffle_with};
pub use search::{filter, find, partition, remove};
pub use seq::{Nested, chunk, compact, concat, drop_right, fill, flatten};
pub use set::{intersection, union};
pub use stats::{max, mean, min, sum};
pub use text::{repeat, split, split_regex};
pub use truthy::Truthy;

#[cfg(test)]
mod test_support;
