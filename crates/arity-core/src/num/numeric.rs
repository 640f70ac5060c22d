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

//! # The `Numeric` Trait
//!
//! Anything that can take part in the numeric order implements `Numeric`:
//! it reports whether it is in a special state (NaN, `+inf`, `-inf`) and,
//! if not, converts into an `ExactDecimal`.
//!
//! Integers convert directly. Floats convert through their canonical
//! shortest decimal string (the `Display` output), not through their binary
//! expansion, so `0.1f64` becomes exactly `0.1` rather than
//! `0.1000000000000000055511151231257827...`.

use crate::num::{
    decimal::{ExactDecimal, ParseDecimalError},
    special::{NotConvertibleError, Special},
};
use num_bigint::BigInt;

/// The error type for converting a numeric value into an `ExactDecimal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalConversionError {
    /// The value is NaN or infinite.
    NotConvertible(NotConvertibleError),
    /// The value's textual form is not a decimal literal.
    Parse(ParseDecimalError),
}

impl std::fmt::Display for DecimalConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConvertible(e) => write!(f, "Not convertible: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for DecimalConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotConvertible(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<NotConvertibleError> for DecimalConversionError {
    fn from(e: NotConvertibleError) -> Self {
        Self::NotConvertible(e)
    }
}

impl From<ParseDecimalError> for DecimalConversionError {
    fn from(e: ParseDecimalError) -> Self {
        Self::Parse(e)
    }
}

/// A value that takes part in the total numeric order.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::numeric::Numeric;
/// # use arity_core::num::special::Special;
///
/// assert_eq!(f64::NEG_INFINITY.special(), Some(Special::NegativeInfinity));
/// assert_eq!(0.1f32.to_exact_decimal().unwrap().to_string(), "0.1");
/// assert!(f32::NAN.to_exact_decimal().is_err());
/// assert_eq!(7u8.to_exact_decimal().unwrap().to_string(), "7");
/// ```
pub trait Numeric {
    /// Returns the special state of the value, or `None` if it is finite.
    fn special(&self) -> Option<Special>;

    /// Converts the value into an exact decimal.
    ///
    /// Fails with `DecimalConversionError::NotConvertible` for NaN and
    /// infinite values.
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError>;

    /// Returns `true` for NaN and infinite values.
    #[inline]
    fn is_special(&self) -> bool {
        self.special().is_some()
    }
}

impl<N> Numeric for &N
where
    N: Numeric + ?Sized,
{
    #[inline]
    fn special(&self) -> Option<Special> {
        (**self).special()
    }

    #[inline]
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
        (**self).to_exact_decimal()
    }
}

impl<N> Numeric for Box<N>
where
    N: Numeric + ?Sized,
{
    #[inline]
    fn special(&self) -> Option<Special> {
        (**self).special()
    }

    #[inline]
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
        (**self).to_exact_decimal()
    }
}

macro_rules! impl_numeric_for_integer {
    ($t:ty) => {
        impl Numeric for $t {
            #[inline(always)]
            fn special(&self) -> Option<Special> {
                None
            }

            #[inline]
            fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
                Ok(ExactDecimal::from(*self))
            }
        }
    };
}

macro_rules! impl_numeric_for_float {
    ($t:ty) => {
        impl Numeric for $t {
            #[inline]
            fn special(&self) -> Option<Special> {
                Special::classify(*self)
            }

            #[inline]
            fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
                if let Some(kind) = self.special() {
                    return Err(NotConvertibleError::new(kind).into());
                }
                Ok(self.to_string().parse::<ExactDecimal>()?)
            }
        }
    };
}

impl_numeric_for_integer!(i8);
impl_numeric_for_integer!(i16);
impl_numeric_for_integer!(i32);
impl_numeric_for_integer!(i64);
impl_numeric_for_integer!(i128);
impl_numeric_for_integer!(isize);
impl_numeric_for_integer!(u8);
impl_numeric_for_integer!(u16);
impl_numeric_for_integer!(u32);
impl_numeric_for_integer!(u64);
impl_numeric_for_integer!(u128);
impl_numeric_for_integer!(usize);

impl_numeric_for_float!(f32);
impl_numeric_for_float!(f64);

impl Numeric for BigInt {
    #[inline(always)]
    fn special(&self) -> Option<Special> {
        None
    }

    #[inline]
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
        Ok(ExactDecimal::from(self.clone()))
    }
}

impl Numeric for ExactDecimal {
    #[inline(always)]
    fn special(&self) -> Option<Special> {
        None
    }

    #[inline]
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
        Ok(self.clone())
    }
}

impl TryFrom<f64> for ExactDecimal {
    type Error = DecimalConversionError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        value.to_exact_decimal()
    }
}

impl TryFrom<f32> for ExactDecimal {
    type Error = DecimalConversionError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        value.to_exact_decimal()
    }
}

/// Returns `true` if `number` is present and NaN or infinite.
#[inline]
pub fn is_special<N>(number: Option<&N>) -> bool
where
    N: Numeric + ?Sized,
{
    number.is_some_and(|n| n.is_special())
}

/// Converts an optional numeric value, mapping `None` to `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::numeric::to_exact_decimal_opt;
///
/// assert_eq!(to_exact_decimal_opt::<f64>(None), Ok(None));
/// assert!(to_exact_decimal_opt(Some(&f64::NAN)).is_err());
/// ```
#[inline]
pub fn to_exact_decimal_opt<N>(
    number: Option<&N>,
) -> Result<Option<ExactDecimal>, DecimalConversionError>
where
    N: Numeric + ?Sized,
{
    number.map(|n| n.to_exact_decimal()).transpose()
}
