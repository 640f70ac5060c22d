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

use crate::num::{
    decimal::ExactDecimal,
    numeric::{DecimalConversionError, Numeric},
    special::Special,
};
use num_bigint::BigInt;

/// A dynamically typed numeric value.
///
/// `Number` lets heterogeneous numeric data live in one collection while
/// still taking part in the total numeric order.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::{number::Number, order::{compare_values, NumericOrdering}};
///
/// let values = [Number::from(3u8), Number::from(2.5f32), Number::from(-1i64)];
/// assert_eq!(compare_values(&values[0], &values[1]), NumericOrdering::Greater);
/// assert_eq!(compare_values(&values[2], &values[1]), NumericOrdering::Less);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    Big(BigInt),
    Decimal(ExactDecimal),
}

macro_rules! with_number {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Number::I8($inner) => $body,
            Number::I16($inner) => $body,
            Number::I32($inner) => $body,
            Number::I64($inner) => $body,
            Number::I128($inner) => $body,
            Number::U8($inner) => $body,
            Number::U16($inner) => $body,
            Number::U32($inner) => $body,
            Number::U64($inner) => $body,
            Number::U128($inner) => $body,
            Number::F32($inner) => $body,
            Number::F64($inner) => $body,
            Number::Big($inner) => $body,
            Number::Decimal($inner) => $body,
        }
    };
}

impl Number {
    /// Returns `true` if the value is backed by a float.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32(_) | Self::F64(_))
    }
}

impl Numeric for Number {
    #[inline]
    fn special(&self) -> Option<Special> {
        with_number!(self, v => v.special())
    }

    #[inline]
    fn to_exact_decimal(&self) -> Result<ExactDecimal, DecimalConversionError> {
        with_number!(self, v => v.to_exact_decimal())
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        with_number!(self, v => write!(f, "{}", v))
    }
}

macro_rules! impl_from_for_number {
    ($variant:ident, $t:ty) => {
        impl From<$t> for Number {
            #[inline]
            fn from(value: $t) -> Self {
                Self::$variant(value)
            }
        }
    };
}

impl_from_for_number!(I8, i8);
impl_from_for_number!(I16, i16);
impl_from_for_number!(I32, i32);
impl_from_for_number!(I64, i64);
impl_from_for_number!(I128, i128);
impl_from_for_number!(U8, u8);
impl_from_for_number!(U16, u16);
impl_from_for_number!(U32, u32);
impl_from_for_number!(U64, u64);
impl_from_for_number!(U128, u128);
impl_from_for_number!(F32, f32);
impl_from_for_number!(F64, f64);
impl_from_for_number!(Big, BigInt);
impl_from_for_number!(Decimal, ExactDecimal);
