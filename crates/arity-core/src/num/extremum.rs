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

//! # Index of Extremum
//!
//! Single-pass search for the position of the largest or smallest element.
//! Every function returns `Option<usize>`, where `None` means that no element
//! qualified (empty input, all-NaN floats, or only absent entries).
//!
//! ## Policy
//!
//! - Ties keep the first occurrence, scanning left to right.
//! - Float NaN entries never become the extremum and never hide a later
//!   valid one.
//! - For optional numeric sequences, `None` entries are skipped and
//!   candidates are ordered with [`compare_values`](crate::num::order::compare_values).
//!
//! ## Usage
//!
//! ```rust
//! use arity_core::num::extremum::{index_of_max, index_of_min};
//!
//! let xs = [3, 1, 4, 1, 5, 9, 2, 6];
//! assert_eq!(index_of_max(&xs), Some(5));
//! assert_eq!(index_of_min(&xs), Some(1));
//!
//! let fs = [f64::NAN, 1.0, f64::NAN, 2.0];
//! assert_eq!(index_of_max(&fs), Some(3));
//! ```

use crate::num::{numeric::Numeric, order::compare_values};
use std::cmp::Ordering;

/// The direction of an extremum search.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Returns `true` if a candidate ordered `ordering` against the current
    /// best should replace it.
    #[inline(always)]
    const fn prefers(self, ordering: Ordering) -> bool {
        matches!(
            (self, ordering),
            (Self::Max, Ordering::Greater) | (Self::Min, Ordering::Less)
        )
    }
}

impl std::fmt::Display for Extremum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Max => write!(f, "Max"),
            Self::Min => write!(f, "Min"),
        }
    }
}

/// A primitive element type that can be scanned for an extremum.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::extremum::ScanKey;
///
/// assert!(3i16.is_candidate());
/// assert!('a'.is_candidate());
/// assert!(!f32::NAN.is_candidate());
/// ```
pub trait ScanKey: Copy + PartialOrd {
    /// Returns `false` for values that must be ignored by the search.
    fn is_candidate(&self) -> bool;
}

macro_rules! impl_scan_key_for_ordered {
    ($t:ty) => {
        impl ScanKey for $t {
            #[inline(always)]
            fn is_candidate(&self) -> bool {
                true
            }
        }
    };
}

macro_rules! impl_scan_key_for_float {
    ($t:ty) => {
        impl ScanKey for $t {
            #[inline(always)]
            fn is_candidate(&self) -> bool {
                !self.is_nan()
            }
        }
    };
}

impl_scan_key_for_ordered!(i8);
impl_scan_key_for_ordered!(i16);
impl_scan_key_for_ordered!(i32);
impl_scan_key_for_ordered!(i64);
impl_scan_key_for_ordered!(i128);
impl_scan_key_for_ordered!(isize);
impl_scan_key_for_ordered!(u8);
impl_scan_key_for_ordered!(u16);
impl_scan_key_for_ordered!(u32);
impl_scan_key_for_ordered!(u64);
impl_scan_key_for_ordered!(u128);
impl_scan_key_for_ordered!(usize);
impl_scan_key_for_ordered!(char);

impl_scan_key_for_float!(f32);
impl_scan_key_for_float!(f64);

/// Returns the index of the extremum of `values` in the given direction.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::extremum::{index_of_extremum, Extremum};
///
/// assert_eq!(index_of_extremum(&['b', 'z', 'a'], Extremum::Max), Some(1));
/// assert_eq!(index_of_extremum(&[f32::NAN, f32::NAN], Extremum::Min), None);
/// assert_eq!(index_of_extremum::<u8>(&[], Extremum::Max), None);
/// ```
pub fn index_of_extremum<T>(values: &[T], direction: Extremum) -> Option<usize>
where
    T: ScanKey,
{
    let mut best: Option<(usize, T)> = None;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_candidate() {
            continue;
        }
        match best {
            None => best = Some((index, value)),
            Some((_, current)) => {
                if value
                    .partial_cmp(&current)
                    .is_some_and(|o| direction.prefers(o))
                {
                    best = Some((index, value));
                }
            }
        }
    }
    best.map(|(index, _)| index)
}

/// Returns the index of the maximum of `values`, or `None` if not found.
#[inline]
pub fn index_of_max<T>(values: &[T]) -> Option<usize>
where
    T: ScanKey,
{
    index_of_extremum(values, Extremum::Max)
}

/// Returns the index of the minimum of `values`, or `None` if not found.
#[inline]
pub fn index_of_min<T>(values: &[T]) -> Option<usize>
where
    T: ScanKey,
{
    index_of_extremum(values, Extremum::Min)
}

/// Returns the index of the extremum of a sequence of optional numeric
/// values.
///
/// Absent entries are skipped. Present entries, special values included,
/// are ordered by the total numeric order, so a NaN entry is the maximum of
/// any sequence that contains one.
///
/// # Examples
///
/// ```rust
/// # use arity_core::num::{extremum::{index_of_extremum_numeric, Extremum}, number::Number};
///
/// let values = [None, Some(Number::from(2u8)), Some(Number::from(-0.5f64)), Some(Number::from(2i64))];
/// let iter = || values.iter().map(Option::as_ref);
/// assert_eq!(index_of_extremum_numeric(iter(), Extremum::Max), Some(1));
/// assert_eq!(index_of_extremum_numeric(iter(), Extremum::Min), Some(2));
/// ```
pub fn index_of_extremum_numeric<'a, I, N>(numbers: I, direction: Extremum) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a N>>,
    N: Numeric + ?Sized + 'static,
{
    let mut best: Option<(usize, &'a N)> = None;
    for (index, number) in numbers.into_iter().enumerate() {
        let Some(number) = number else {
            continue;
        };
        match best {
            None => best = Some((index, number)),
            Some((_, current)) => {
                if compare_values(number, current)
                    .to_ordering()
                    .is_some_and(|o| direction.prefers(o))
                {
                    best = Some((index, number));
                }
            }
        }
    }
    best.map(|(index, _)| index)
}

/// Returns the index of the maximum of a sequence of optional numeric values.
#[inline]
pub fn index_of_max_numeric<'a, I, N>(numbers: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a N>>,
    N: Numeric + ?Sized + 'static,
{
    index_of_extremum_numeric(numbers, Extremum::Max)
}

/// Returns the index of the minimum of a sequence of optional numeric values.
#[inline]
pub fn index_of_min_numeric<'a, I, N>(numbers: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a N>>,
    N: Numeric + ?Sized + 'static,
{
    index_of_extremum_numeric(numbers, Extremum::Min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::number::Number;

    const DIGITS: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

    #[test]
    fn test_empty_is_not_found() {
        assert_eq!(index_of_max::<i8>(&[]), None);
        assert_eq!(index_of_min::<f64>(&[]), None);
        assert_eq!(index_of_max_numeric(std::iter::empty::<Option<&i32>>()), None);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(index_of_max(&[7u16]), Some(0));
        assert_eq!(index_of_min(&['x']), Some(0));
        assert_eq!(index_of_max(&[1.5f32]), Some(0));
        assert_eq!(index_of_max(&[f32::NAN]), None);
        assert_eq!(index_of_min(&[f64::NAN]), None);
    }

    #[test]
    fn test_integers() {
        assert_eq!(index_of_max(&DIGITS), Some(5));
        assert_eq!(index_of_min(&DIGITS), Some(1));

        let wide: Vec<i64> = DIGITS.iter().map(|&d| i64::from(d) * -1_000_000_000_000).collect();
        assert_eq!(index_of_max(&wide), Some(1));
        assert_eq!(index_of_min(&wide), Some(5));

        let bytes: Vec<i8> = DIGITS.iter().map(|&d| d as i8).collect();
        assert_eq!(index_of_max(&bytes), Some(5));
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        assert_eq!(index_of_max(&[2, 9, 9, 1, 9]), Some(1));
        assert_eq!(index_of_min(&[5i16, 0, 3, 0]), Some(1));
        assert_eq!(index_of_max(&[0.0f64, -0.0, 0.0]), Some(0));
    }

    #[test]
    fn test_chars() {
        let chars: Vec<char> = "hello world".chars().collect();
        assert_eq!(index_of_max(&chars), Some(6));
        assert_eq!(index_of_min(&chars), Some(5));
    }

    #[test]
    fn test_floats_skip_nan() {
        let fs = [f64::NAN, 1.0, f64::NAN, 2.0];
        assert_eq!(index_of_max(&fs), Some(3));
        assert_eq!(index_of_min(&fs), Some(1));

        let leading_nan = [f32::NAN, -3.0, 4.0, f32::NAN];
        assert_eq!(index_of_max(&leading_nan), Some(2));
        assert_eq!(index_of_min(&leading_nan), Some(1));

        assert_eq!(index_of_max(&[f64::NAN, f64::NAN]), None);
    }

    #[test]
    fn test_floats_with_infinities() {
        let fs = [1.0f64, f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
        assert_eq!(index_of_max(&fs), Some(2));
        assert_eq!(index_of_min(&fs), Some(1));
    }

    #[test]
    fn test_input_is_untouched() {
        let xs = [9u32, 1, 5];
        let copy = xs;
        let _ = index_of_max(&xs);
        let _ = index_of_min(&xs);
        assert_eq!(xs, copy);
    }

    #[test]
    fn test_numeric_skips_absent_entries() {
        let values: [Option<Number>; 5] = [
            None,
            Some(Number::from(3u8)),
            None,
            Some(Number::from(3.5f32)),
            Some(Number::from(-2i64)),
        ];
        let iter = || values.iter().map(Option::as_ref);
        assert_eq!(index_of_max_numeric(iter()), Some(3));
        assert_eq!(index_of_min_numeric(iter()), Some(4));

        let absent: [Option<Number>; 3] = [None, None, None];
        assert_eq!(index_of_max_numeric(absent.iter().map(Option::as_ref)), None);
    }

    #[test]
    fn test_numeric_ties_keep_first_occurrence() {
        let values = [
            Some(Number::from(1u8)),
            Some(Number::from(2.0f64)),
            Some(Number::from(2i32)),
        ];
        assert_eq!(index_of_max_numeric(values.iter().map(Option::as_ref)), Some(1));
    }

    #[test]
    fn test_numeric_special_values_take_part() {
        let values = [
            Some(Number::from(1e308f64)),
            Some(Number::from(f64::NAN)),
            Some(Number::from(f32::INFINITY)),
            Some(Number::from(f64::NEG_INFINITY)),
        ];
        let iter = || values.iter().map(Option::as_ref);
        assert_eq!(index_of_max_numeric(iter()), Some(1));
        assert_eq!(index_of_min_numeric(iter()), Some(3));
    }

    #[test]
    fn test_numeric_trait_objects() {
        let values: Vec<Option<Box<dyn Numeric>>> = vec![
            Some(Box::new(10u64)),
            None,
            Some(Box::new(10.5f32)),
            Some(Box::new(-7i8)),
        ];
        let iter = || values.iter().map(|v| v.as_deref());
        assert_eq!(index_of_max_numeric(iter()), Some(2));
        assert_eq!(index_of_min_numeric(iter()), Some(3));
    }

    #[test]
    fn test_extremum_display() {
        assert_eq!(Extremum::Max.to_string(), "Max");
        assert_eq!(Extremum::Min.to_string(), "Min");
    }
}
