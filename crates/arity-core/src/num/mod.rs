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

//! # Numeric Ordering
//!
//! A single total order over every numeric representation the crate knows
//! about: primitive integers, `f32`/`f64`, `BigInt`, `ExactDecimal`, and the
//! dynamic `Number` enum.
//!
//! ## Submodules
//!
//! - `special`: Classification of NaN and infinities (`Special`) and the
//!   `NotConvertibleError` raised when such a value is asked for an exact
//!   decimal form.
//! - `decimal`: `ExactDecimal`, an arbitrary-precision decimal with exact
//!   comparison, parsing and formatting.
//! - `numeric`: The `Numeric` trait and its implementations for the primitive
//!   types. Floats convert through their canonical decimal string, never
//!   through their binary value.
//! - `number`: `Number`, a tagged numeric value for heterogeneous collections.
//! - `order`: `compare` / `compare_values` returning a `NumericOrdering`.
//! - `extremum`: Index-of-maximum and index-of-minimum search.
//!
//! ## Ordering Rules
//!
//! - `-inf` < every finite value < `+inf` < `NaN`.
//! - Finite values compare by the exact value of their decimal form, so
//!   `0.1f32` equals the decimal `0.1`, and `u64::MAX` is less than
//!   `u64::MAX as f64`, whose canonical form is `18446744073709552000`.
//! - An absent operand makes the comparison `Incomparable`.

pub mod decimal;
pub mod extremum;
pub mod number;
pub mod numeric;
pub mod order;
pub mod special;

pub use decimal::{ExactDecimal, ParseDecimalError};
pub use extremum::{
    Extremum, ScanKey, index_of_extremum, index_of_extremum_numeric, index_of_max,
    index_of_max_numeric, index_of_min, index_of_min_numeric,
};
pub use number::Number;
pub use numeric::{DecimalConversionError, Numeric, is_special, to_exact_decimal_opt};
pub use order::{NumericOrdering, compare, compare_values};
pub use special::{NotConvertibleError, Special};
