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

//! # Exact Decimals
//!
//! `ExactDecimal` stores `unscaled × 10^(-scale)` with an arbitrary-precision
//! `BigInt` mantissa. It is the common currency of the numeric order: every
//! finite numeric value converts into one, and two decimals compare by their
//! exact value, independent of representation (`1.0 == 1.00`).
//!
//! ## Usage
//!
//! ```rust
//! use arity_core::num::decimal::ExactDecimal;
//!
//! let a: ExactDecimal = "0.10".parse().unwrap();
//! let b: ExactDecimal = "1e-1".parse().unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "0.10");
//! assert_eq!(a.normalized().to_string(), "0.1");
//! ```

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// An arbitrary-precision decimal number `unscaled × 10^(-scale)`.
///
/// Equality, ordering and hashing follow the numeric value, so decimals that
/// only differ in trailing zeros are equal and hash identically.
#[derive(Clone, Debug)]
pub struct ExactDecimal {
    unscaled: BigInt,
    scale: i64,
}

/// Details about a string that is not a valid decimal literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    /// The text that failed to parse.
    pub token: String,
}

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not parse token '{}' as an exact decimal", self.token)
    }
}

impl std::error::Error for ParseDecimalError {}

impl ExactDecimal {
    /// Creates a decimal with value `unscaled × 10^(-scale)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arity_core::num::decimal::ExactDecimal;
    /// # use num_bigint::BigInt;
    ///
    /// let d = ExactDecimal::new(BigInt::from(12345), 2);
    /// assert_eq!(d.to_string(), "123.45");
    /// ```
    #[inline]
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Self { unscaled, scale }
    }

    /// Returns the decimal zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// Returns the unscaled mantissa.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the power-of-ten scale.
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns `true` if the value is zero, regardless of scale.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns `true` if the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns the same value with trailing zeros removed from the mantissa.
    ///
    /// Zero normalizes to scale `0`.
    pub fn normalized(&self) -> Self {
        if self.unscaled.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while (&unscaled % &ten).is_zero() {
            match scale.checked_sub(1) {
                Some(next) => {
                    unscaled /= &ten;
                    scale = next;
                }
                None => break,
            }
        }
        Self::new(unscaled, scale)
    }

    /// Number of decimal digits in the magnitude of the mantissa.
    #[inline]
    fn precision(&self) -> usize {
        self.unscaled.magnitude().to_str_radix(10).len()
    }

    /// Position of the most significant digit, `precision - scale`.
    #[inline]
    fn adjusted_exponent(&self) -> i128 {
        self.precision() as i128 - self.scale as i128
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.adjusted_exponent().cmp(&other.adjusted_exponent()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        // With equal adjusted exponents the scale gap equals the precision
        // gap, so rescaling stays within the size of the operands.
        let lhs = self.unscaled.magnitude();
        let rhs = other.unscaled.magnitude();
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => lhs.cmp(rhs),
            Ordering::Less => {
                let shift = pow10(other.scale.abs_diff(self.scale));
                (lhs * shift).cmp(rhs)
            }
            Ordering::Greater => {
                let shift = pow10(self.scale.abs_diff(other.scale));
                lhs.cmp(&(rhs * shift))
            }
        }
    }
}

#[inline]
fn pow10(exponent: u64) -> num_bigint::BigUint {
    let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
    num_bigint::BigUint::from(10u8).pow(exponent)
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.unscaled.sign(), other.unscaled.sign()) {
            (Sign::NoSign, Sign::NoSign) => Ordering::Equal,
            (lhs, rhs) if lhs != rhs => lhs.cmp(&rhs),
            (Sign::Minus, _) => self.cmp_magnitude(other).reverse(),
            _ => self.cmp_magnitude(other),
        }
    }
}

impl PartialOrd for ExactDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ExactDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl Default for ExactDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for ExactDecimal {
    type Err = ParseDecimalError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    ///
    /// At least one mantissa digit is required, either before or after the
    /// decimal point.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError {
            token: s.to_string(),
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        let (negative, mantissa) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(err());
        }

        let exponent: i64 = match exponent {
            Some(e) => {
                let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(err());
                }
                e.parse().map_err(|_| err())?
            }
            None => 0,
        };

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(err)?;
        let unscaled = if negative { -magnitude } else { magnitude };

        let frac_len = i64::try_from(frac_part.len()).map_err(|_| err())?;
        let scale = frac_len.checked_sub(exponent).ok_or_else(err)?;

        Ok(Self::new(unscaled, scale))
    }
}

/// Padding zeros beyond which `Display` switches to exponent notation.
const MAX_PLAIN_ZEROS: u64 = 1024;

fn write_zeros(f: &mut std::fmt::Formatter<'_>, mut count: u64) -> std::fmt::Result {
    const ZEROS: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    while count > 0 {
        let chunk = count.min(ZEROS.len() as u64) as usize;
        f.write_str(&ZEROS[..chunk])?;
        count -= chunk as u64;
    }
    Ok(())
}

impl ExactDecimal {
    /// Writes `d.ddd e±x`, keeping every mantissa digit.
    fn fmt_scientific(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        sign: &str,
        digits: &str,
    ) -> std::fmt::Result {
        let exponent = digits.len() as i128 - 1 - self.scale as i128;
        let (head, tail) = digits.split_at(1);
        write!(f, "{sign}{head}")?;
        if !tail.is_empty() {
            write!(f, ".{tail}")?;
        }
        write!(f, "e{exponent:+}")
    }
}

impl std::fmt::Display for ExactDecimal {
    /// Formats the value in plain notation, keeping the stored scale.
    ///
    /// Values that would need more than 1024 padding zeros are written in
    /// exponent notation instead, e.g. `1e+5000`. Both forms parse back to
    /// an equal value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unscaled.is_zero() && self.scale <= 0 {
            return f.write_str("0");
        }

        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let len = digits.len() as u64;
        let scale = self.scale.unsigned_abs();

        let padding = if self.scale <= 0 {
            scale
        } else {
            scale.saturating_sub(len)
        };
        if padding > MAX_PLAIN_ZEROS {
            return self.fmt_scientific(f, sign, &digits);
        }

        if self.scale <= 0 {
            write!(f, "{sign}{digits}")?;
            return write_zeros(f, padding);
        }

        if len > scale {
            // scale < len, so it fits in usize.
            let (int_part, frac_part) = digits.split_at(digits.len() - scale as usize);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            write!(f, "{sign}0.")?;
            write_zeros(f, padding)?;
            f.write_str(&digits)
        }
    }
}

macro_rules! impl_from_integer_for_decimal {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for ExactDecimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer_for_decimal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl From<BigInt> for ExactDecimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}
