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

//! # Argument Errors
//!
//! Every fallible operation in this crate rejects its input with an
//! [`InvalidArgument`]. Errors are local to the call that produced them and
//! are never retried internally. Absence of a match (as in
//! [`find`](crate::search::find)) is not an error and is reported with
//! `Option::None` instead.

/// The reason an operation rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidArgument {
    /// The operation has no meaningful answer for an empty sequence.
    #[error("called `{operation}` on an empty sequence")]
    EmptySequence {
        /// The name of the rejecting operation.
        operation: &'static str,
    },
    /// A chunk size of zero would never make progress.
    #[error("chunk size must be positive, got {size}")]
    ChunkSize {
        /// The rejected chunk size.
        size: usize,
    },
    /// Two elements could not be ordered relative to each other (e.g. `NaN`).
    #[error("called `{operation}` with an element at index {index} that has no ordering")]
    Unordered {
        /// The name of the rejecting operation.
        operation: &'static str,
        /// The index of the first element that could not be compared.
        index: usize,
    },
    /// A numeric element could not be converted into `f64`.
    #[error(
        "called `{operation}` with an element at index {index} that is not representable as f64"
    )]
    NotRepresentable {
        /// The name of the rejecting operation.
        operation: &'static str,
        /// The index of the offending element.
        index: usize,
    },
    /// An intermediate integer result left the range of its type.
    #[error("called `{operation}` and overflowed at index {index}")]
    Overflow {
        /// The name of the rejecting operation.
        operation: &'static str,
        /// The index of the element whose addition overflowed.
        index: usize,
    },
}

/// A specialized `Result` for operations that may reject their input.
pub type Result<T> = std::result::Result<T, InvalidArgument>;
