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

//! # Arity Core
//!
//! Foundational numeric and array helpers for the Arity ecosystem. This crate
//! hosts the building blocks that the tuple and callable crates lean on, with
//! a focus on exact, predictable semantics over mixed numeric representations.
//!
//! ## Modules
//!
//! - `num`: A total order over heterogeneous numeric values (`compare`),
//!   including NaN and infinities, backed by an arbitrary-precision decimal
//!   (`ExactDecimal`). Also provides index-of-extremum search over primitive
//!   slices and over sequences of optional numeric values.
//! - `utils`: Array construction helpers (`empty_array`, `filled_array`,
//!   `default_array`), `first_some`, and `cause_trace` for walking an error's
//!   source chain.
//!
//! ## Purpose
//!
//! Comparing an `i128` against an `f32`, or finding the largest entry of a
//! slice that may contain NaN, are easy to get subtly wrong. These primitives
//! pin the edge-case policy down once so calling code does not have to.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod utils;
