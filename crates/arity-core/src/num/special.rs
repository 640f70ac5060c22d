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

use num_traits::Float;
use std::cmp::Ordering;

/// A floating-point value that has no exact decimal form.
///
/// The variants are declared in ascending order, so the derived `Ord` is the
/// IEEE total order restricted to special values:
/// `NegativeInfinity < PositiveInfinity < NaN`.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::special::Special;
///
/// assert_eq!(Special::classify(f64::NAN), Some(Special::NaN));
/// assert_eq!(Special::classify(f32::NEG_INFINITY), Some(Special::NegativeInfinity));
/// assert_eq!(Special::classify(1.5f64), None);
/// assert!(Special::NaN > Special::PositiveInfinity);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Special {
    NegativeInfinity,
    PositiveInfinity,
    NaN,
}

impl Special {
    /// Classifies a float, returning `None` for finite values.
    #[inline]
    pub fn classify<F>(value: F) -> Option<Self>
    where
        F: Float,
    {
        if value.is_nan() {
            Some(Self::NaN)
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                Some(Self::PositiveInfinity)
            } else {
                Some(Self::NegativeInfinity)
            }
        } else {
            None
        }
    }

    /// Returns how this special value orders against any finite value.
    ///
    /// NaN and positive infinity sort above every finite value, negative
    /// infinity below.
    #[inline]
    pub const fn cmp_finite(self) -> Ordering {
        match self {
            Self::NegativeInfinity => Ordering::Less,
            Self::PositiveInfinity | Self::NaN => Ordering::Greater,
        }
    }

    /// Returns the `f64` carrying this special state.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::NegativeInfinity => f64::NEG_INFINITY,
            Self::PositiveInfinity => f64::INFINITY,
            Self::NaN => f64::NAN,
        }
    }
}

impl std::fmt::Display for Special {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeInfinity => write!(f, "-Infinity"),
            Self::PositiveInfinity => write!(f, "Infinity"),
            Self::NaN => write!(f, "NaN"),
        }
    }
}

/// Error returned when a NaN or infinite value is asked for its exact
/// decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotConvertibleError {
    kind: Special,
}

impl NotConvertibleError {
    #[inline]
    pub const fn new(kind: Special) -> Self {
        Self { kind }
    }

    /// The special state that prevented the conversion.
    #[inline]
    pub const fn kind(&self) -> Special {
        self.kind
    }
}

impl std::fmt::Display for NotConvertibleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The number is {}, it has no exact decimal representation",
            self.kind
        )
    }
}

impl std::error::Error for NotConvertibleError {}
