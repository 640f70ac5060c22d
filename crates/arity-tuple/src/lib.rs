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

//! # Arity Tuples
//!
//! Fixed-arity tuples (0 through 9 elements) with positional access and an
//! optional, per-instance alias overlay that binds names to positions.
//!
//! ## Modules
//!
//! - `alias`: The canonical alias key (`Alias`) and the `TupleAlias` trait
//!   for typed alias tokens. Plain names and tokens with the same text
//!   resolve to the same slot.
//! - `overlay`: `AliasOverlay`, the mutable name-to-position layer. It is
//!   replaced wholesale and atomically by `set_aliases`.
//! - `aliased`: The `AliasedTuple` trait shared by every tuple type, plus
//!   `TypedElementAccess` for checked downcasts of heterogeneous elements.
//! - `tuple`: Heterogeneous `Tuple0` through `Tuple9`.
//! - `easy`: Homogeneous `EasyTuple<T, N>` and its `EasyTuple1` through
//!   `EasyTuple9` aliases.
//! - `map`: `AliasMap`, the alias-to-element view built by `to_alias_map`.
//! - `error`: `TupleError`.
//!
//! ## Usage
//!
//! ```rust
//! use arity_tuple::{AliasedTuple, Tuple4, TupleError, TypedElementAccess};
//!
//! let t = Tuple4::new(10, "a", true, 3.5);
//! assert_eq!(t.element_as::<bool>(2), Ok(&true));
//! assert!(matches!(t.element(4), Err(TupleError::IndexOutOfRange { index: 4, arity: 4 })));
//!
//! t.set_aliases(["x", "y"]).unwrap();
//! assert_eq!(t.get_by_alias_as::<i32, _>("x"), Ok(&10));
//! assert_eq!(t.to_alias_map().len(), 2);
//! ```

pub mod alias;
pub mod aliased;
pub mod easy;
pub mod error;
pub mod map;
pub mod overlay;
pub mod tuple;

/// The largest supported tuple arity.
pub const MAX_ARITY: usize = 9;

pub use alias::{Alias, TupleAlias};
pub use aliased::{AliasedTuple, TypedElementAccess};
pub use easy::{
    EasyTuple, EasyTuple1, EasyTuple2, EasyTuple3, EasyTuple4, EasyTuple5, EasyTuple6, EasyTuple7,
    EasyTuple8, EasyTuple9,
};
pub use error::TupleError;
pub use map::AliasMap;
pub use overlay::{AliasBindings, AliasOverlay};
pub use tuple::{Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9};
