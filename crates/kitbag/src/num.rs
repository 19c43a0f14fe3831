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

//! # Checked Addition
//!
//! A by-value checked addition trait so that [`sum`](crate::stats::sum) can
//! report integer overflow instead of panicking (debug) or wrapping
//! (release). Integers defer to their intrinsic `checked_add`. Floats never
//! fail: IEEE 754 addition saturates to an infinity instead.

use std::ops::Add;

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use kitbag::num::CheckedAddVal;
/// assert_eq!(200_u8.checked_add_val(50), Some(250));
/// assert_eq!(200_u8.checked_add_val(100), None);
/// assert_eq!(f64::MAX.checked_add_val(f64::MAX), Some(f64::INFINITY));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_add_for_int {
    ($t:ty) => {
        impl CheckedAddVal for $t {
            #[inline(always)]
            fn checked_add_val(self, v: $t) -> Option<$t> {
                <$t>::checked_add(self, v)
            }
        }
    };
}

macro_rules! checked_add_for_float {
    ($t:ty) => {
        impl CheckedAddVal for $t {
            #[inline(always)]
            fn checked_add_val(self, v: $t) -> Option<$t> {
                Some(self + v)
            }
        }
    };
}

checked_add_for_int!(u8);
checked_add_for_int!(u16);
checked_add_for_int!(u32);
checked_add_for_int!(u64);
checked_add_for_int!(u128);
checked_add_for_int!(usize);

checked_add_for_int!(i8);
checked_add_for_int!(i16);
checked_add_for_int!(i32);
checked_add_for_int!(i64);
checked_add_for_int!(i128);
checked_add_for_int!(isize);

checked_add_for_float!(f32);
checked_add_for_float!(f64);
