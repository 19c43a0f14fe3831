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

//! # Truthiness
//!
//! The falsy-value convention used by [`compact`](crate::seq::compact).
//! A value is falsy when it is `false`, numerically zero, `NaN`, empty
//! (strings and collections), or `None`. Everything else is truthy.

use std::borrow::Cow;

/// A trait for values that can be judged truthy or falsy.
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value is falsy.
    #[inline(always)]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

macro_rules! impl_truthy_for_int {
    ($t:ty) => {
        impl Truthy for $t {
            #[inline(always)]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    };
}

macro_rules! impl_truthy_for_float {
    ($t:ty) => {
        impl Truthy for $t {
            #[inline(always)]
            fn is_truthy(&self) -> bool {
                // NaN compares unequal to everything, zero included.
                *self != 0.0 && !self.is_nan()
            }
        }
    };
}

impl_truthy_for_int!(i8);
impl_truthy_for_int!(u8);
impl_truthy_for_int!(i16);
impl_truthy_for_int!(u16);
impl_truthy_for_int!(i32);
impl_truthy_for_int!(u32);
impl_truthy_for_int!(i64);
impl_truthy_for_int!(u64);
impl_truthy_for_int!(i128);
impl_truthy_for_int!(u128);
impl_truthy_for_int!(isize);
impl_truthy_for_int!(usize);

impl_truthy_for_float!(f32);
impl_truthy_for_float!(f64);

impl Truthy for bool {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Cow<'_, str> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T>
where
    T: Truthy,
{
    /// `None` is falsy, `Some(v)` defers to `v`.
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_truthy())
    }
}

impl<T> Truthy for &T
where
    T: Truthy + ?Sized,
{
    #[inline(always)]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert!(!0_i32.is_truthy());
        assert!(1_i32.is_truthy());
        assert!((-1_i64).is_truthy());
        assert!(0_usize.is_falsy());
    }

    #[test]
    fn test_floats() {
        assert!(!0.0_f64.is_truthy());
        assert!(!(-0.0_f64).is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(f64::INFINITY.is_truthy());
        assert!(0.5_f32.is_truthy());
    }

    #[test]
    fn test_strings() {
        assert!(!"".is_truthy());
        assert!("0".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(Cow::Borrowed("x").is_truthy());
    }

    #[test]
    fn test_collections() {
        assert!(!Vec::<i32>::new().is_truthy());
        assert!(vec![0].is_truthy());
        let empty: &[u8] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn test_options() {
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some(3).is_truthy());
        assert!(!Some("").is_truthy());
    }

    #[test]
    fn test_bool_and_char() {
        assert!(true.is_truthy());
        assert!(false.is_falsy());
        assert!(!'\0'.is_truthy());
        assert!('a'.is_truthy());
    }
}
