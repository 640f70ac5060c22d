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

//! # Total Numeric Order
//!
//! `compare` places any two `Numeric` values into one total order:
//!
//! - an absent operand yields `Incomparable`;
//! - two references to the same value yield `Equal` without any conversion;
//! - two special values order as `-inf < +inf < NaN`, with `NaN == NaN`;
//! - a special value against a finite one: NaN and `+inf` are greater,
//!   `-inf` is less;
//! - two finite values compare by their exact decimal value.
//!
//! ## Usage
//!
//! ```rust
//! use arity_core::num::order::{compare, compare_values, NumericOrdering};
//!
//! assert_eq!(compare_values(&1u8, &1.0f64), NumericOrdering::Equal);
//! assert_eq!(compare_values(&f64::NAN, &f64::INFINITY), NumericOrdering::Greater);
//! assert_eq!(compare(Some(&1i32), None::<&i32>), NumericOrdering::Incomparable);
//! ```

use crate::num::numeric::Numeric;
use std::{any::TypeId, cmp::Ordering};

/// The outcome of comparing two optional numeric values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NumericOrdering {
    Less,
    Equal,
    Greater,
    /// At least one operand was absent.
    Incomparable,
}

impl NumericOrdering {
    /// Swaps `Less` and `Greater`; `Equal` and `Incomparable` are unchanged.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }

    /// Converts into a `std::cmp::Ordering`, or `None` if incomparable.
    #[inline]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }

    #[inline]
    pub const fn is_lt(self) -> bool {
        matches!(self, Self::Less)
    }

    #[inline]
    pub const fn is_gt(self) -> bool {
        matches!(self, Self::Greater)
    }

    #[inline]
    pub const fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }
}

impl From<Ordering> for NumericOrdering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl std::fmt::Display for NumericOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Less => "Less",
            Self::Equal => "Equal",
            Self::Greater => "Greater",
            Self::Incomparable => "Incomparable",
        };
        write!(f, "{}", name)
    }
}

/// Compares two optional numeric values.
///
/// Returns `Incomparable` if either operand is `None`; otherwise behaves like
/// [`compare_values`].
#[inline]
pub fn compare<A, B>(a: Option<&A>, b: Option<&B>) -> NumericOrdering
where
    A: Numeric + ?Sized + 'static,
    B: Numeric + ?Sized + 'static,
{
    match (a, b) {
        (Some(a), Some(b)) => compare_values(a, b),
        _ => NumericOrdering::Incomparable,
    }
}

/// Compares two present numeric values under the total numeric order.
///
/// The result is only `Incomparable` when a `Numeric` implementation
/// reports a finite value that then fails to convert into an exact decimal.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::order::{compare_values, NumericOrdering};
///
/// // The float's canonical string is 170141183460469230000000000000000000000.
/// assert_eq!(compare_values(&i128::MAX, &(i128::MAX as f64)), NumericOrdering::Greater);
/// // Canonical decimal strings: 0.1f32 is the decimal 0.1.
/// assert_eq!(compare_values(&0.1f32, &0.1f64), NumericOrdering::Equal);
/// assert_eq!(compare_values(&f64::NEG_INFINITY, &i64::MIN), NumericOrdering::Less);
/// ```
pub fn compare_values<A, B>(a: &A, b: &B) -> NumericOrdering
where
    A: Numeric + ?Sized + 'static,
    B: Numeric + ?Sized + 'static,
{
    if is_same_instance(a, b) {
        return NumericOrdering::Equal;
    }

    match (a.special(), b.special()) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs).into(),
        (Some(lhs), None) => lhs.cmp_finite().into(),
        (None, Some(rhs)) => NumericOrdering::from(rhs.cmp_finite()).reverse(),
        (None, None) => match (a.to_exact_decimal(), b.to_exact_decimal()) {
            (Ok(lhs), Ok(rhs)) => lhs.cmp(&rhs).into(),
            _ => NumericOrdering::Incomparable,
        },
    }
}

/// Returns `true` if `a` and `b` are the same value of the same type.
///
/// A shared address alone is not enough: a struct and its first field live
/// at the same address. For trait objects the vtables must match as well.
#[inline(always)]
fn is_same_instance<A, B>(a: &A, b: &B) -> bool
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    if TypeId::of::<A>() != TypeId::of::<B>() {
        return false;
    }
    if !std::ptr::addr_eq(a as *const A, b as *const B) {
        return false;
    }
    // SAFETY: `A` and `B` have the same `TypeId`, so they are the same type
    // and `&B` has exactly the layout of `&A`.
    let b: &A = unsafe { std::mem::transmute_copy::<&B, &A>(&b) };
    std::ptr::eq(a, b)
}
