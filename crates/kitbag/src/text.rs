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

//! # String Operations
//!
//! Repetition and splitting. The split functions borrow their segments from
//! the input and accept an optional limit that truncates the result to its
//! leading segments; a limit never pads the output with empty segments.

use regex::Regex;

/// Returns `s` concatenated with itself `n` times. `n == 0` yields `""`.
///
/// # Examples
///
/// ```rust
/// # use kitbag::text::repeat;
/// assert_eq!(repeat("ab", 3), "ababab");
/// assert_eq!(repeat("x", 0), "");
/// ```
#[inline]
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Splits `s` on every occurrence of `separator`.
///
/// An empty separator splits `s` into its individual characters, so an empty
/// `s` then yields no segments. Otherwise an empty `s` yields a single empty
/// segment. With `Some(limit)`, at most `limit` leading segments are returned.
///
/// # Examples
///
/// ```rust
/// # use kitbag::text::split;
/// assert_eq!(split("a,b,c", ",", None), ["a", "b", "c"]);
/// assert_eq!(split("a,b,c", ",", Some(2)), ["a", "b"]);
/// assert_eq!(split("a,b", ",", Some(5)), ["a", "b"]);
/// assert_eq!(split("héllo", "", Some(2)), ["h", "é"]);
/// ```
pub fn split<'a>(s: &'a str, separator: &str, limit: Option<usize>) -> Vec<&'a str> {
    let limit = limit.unwrap_or(usize::MAX);
    if separator.is_empty() {
        return s
            .char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .take(limit)
            .collect();
    }
    s.split(separator).take(limit).collect()
}

/// Splits `s` on every match of `separator`.
///
/// Capture groups in `separator` are not spliced into the output. With
/// `Some(limit)`, at most `limit` leading segments are returned.
///
/// # Examples
///
/// ```rust
/// # use kitbag::text::split_regex;
/// use regex::Regex;
///
/// let ws = Regex::new(r"\s*,\s*").unwrap();
/// assert_eq!(split_regex("a , b,c", &ws, None), ["a", "b", "c"]);
/// assert_eq!(split_regex("a , b,c", &ws, Some(1)), ["a"]);
/// ```
pub fn split_regex<'a>(s: &'a str, separator: &Regex, limit: Option<usize>) -> Vec<&'a str> {
    separator
        .split(s)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
