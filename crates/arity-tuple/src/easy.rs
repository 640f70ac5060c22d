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

//! # Homogeneous Tuples
//!
//! `EasyTuple<T, N>` holds `N` elements of one type in an array, so its
//! elements are handed out as `&T` without any downcasting. `N` may not
//! exceed `MAX_ARITY`; larger arities fail to compile.
//!
//! ## Usage
//!
//! ```rust
//! use arity_tuple::{AliasedTuple, EasyTuple3};
//!
//! let rgb = EasyTuple3::new([255u8, 128, 0]).with_aliases(["r", "g", "b"]).unwrap();
//! assert_eq!(rgb.get_by_alias("g"), Ok(&128));
//! assert_eq!(rgb.iter().copied().max(), Some(255));
//! ```

use crate::{
    MAX_ARITY, alias::TupleAlias, aliased::AliasedTuple, error::TupleError,
    overlay::AliasOverlay,
};
use std::hash::{Hash, Hasher};

/// A fixed-arity tuple whose elements share the type `T`.
pub struct EasyTuple<T, const N: usize> {
    values: [T; N],
    overlay: AliasOverlay,
}

pub type EasyTuple0<T> = EasyTuple<T, 0>;
pub type EasyTuple1<T> = EasyTuple<T, 1>;
pub type EasyTuple2<T> = EasyTuple<T, 2>;
pub type EasyTuple3<T> = EasyTuple<T, 3>;
pub type EasyTuple4<T> = EasyTuple<T, 4>;
pub type EasyTuple5<T> = EasyTuple<T, 5>;
pub type EasyTuple6<T> = EasyTuple<T, 6>;
pub type EasyTuple7<T> = EasyTuple<T, 7>;
pub type EasyTuple8<T> = EasyTuple<T, 8>;
pub type EasyTuple9<T> = EasyTuple<T, 9>;

impl<T, const N: usize> EasyTuple<T, N> {
    /// Creates an unaliased tuple from `values`.
    #[inline]
    pub fn new(values: [T; N]) -> Self {
        const { assert!(N <= MAX_ARITY, "EasyTuple arity exceeds MAX_ARITY") };

        Self {
            values,
            overlay: AliasOverlay::new(N),
        }
    }

    /// Assigns `aliases` and returns the tuple.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::ExcessAliases` if more than `N` aliases are
    /// given.
    pub fn with_aliases<I, A>(self, aliases: I) -> Result<Self, TupleError>
    where
        I: IntoIterator<Item = A>,
        A: TupleAlias,
    {
        self.overlay.replace(aliases)?;
        Ok(self)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the tuple, returning its elements. Aliases are dropped.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.values
    }

    /// Applies `f` to every element, keeping the aliases.
    pub fn map<U, F>(self, f: F) -> EasyTuple<U, N>
    where
        F: FnMut(T) -> U,
    {
        EasyTuple {
            values: self.values.map(f),
            overlay: self.overlay,
        }
    }
}

impl<T, const N: usize> AliasedTuple for EasyTuple<T, N> {
    type Element = T;

    #[inline]
    fn arity(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> Result<&T, TupleError> {
        self.values
            .get(index)
            .ok_or(TupleError::IndexOutOfRange { index, arity: N })
    }

    #[inline]
    fn overlay(&self) -> &AliasOverlay {
        &self.overlay
    }
}

impl<T, const N: usize> From<[T; N]> for EasyTuple<T, N> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a EasyTuple<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Clone, const N: usize> Clone for EasyTuple<T, N> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            overlay: self.overlay.clone(),
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for EasyTuple<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq, const N: usize> Eq for EasyTuple<T, N> {}

impl<T: Hash, const N: usize> Hash for EasyTuple<T, N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for EasyTuple<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasyTuple")
            .field("values", &self.values)
            .field("aliases", &self.overlay.snapshot())
            .finish()
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Display for EasyTuple<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements: Vec<&dyn std::fmt::Debug> = self
            .values
            .iter()
            .map(|v| v as &dyn std::fmt::Debug)
            .collect();
        crate::aliased::fmt_elements(f, &self.overlay.snapshot(), &elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::Alias;

    #[test]
    fn test_positional_access() {
        let t = EasyTuple4::new([1, 2, 3, 4]);
        assert_eq!(t.arity(), 4);
        assert_eq!(t.element(3), Ok(&4));
        assert_eq!(
            t.element(4),
            Err(TupleError::IndexOutOfRange { index: 4, arity: 4 })
        );
        assert_eq!(t.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(t.iter().sum::<i32>(), 10);
        assert_eq!((&t).into_iter().count(), 4);
    }

    #[test]
    fn test_aliases() {
        let t = EasyTuple3::from(["a", "b", "c"]);
        t.set_aliases(["first", "second"]).unwrap();
        assert_eq!(t.get_by_alias("second"), Ok(&"b"));
        assert_eq!(t.element_with_alias(2), Ok((None, &"c")));
        assert_eq!(
            t.element_with_alias(0),
            Ok((Some(String::from("first")), &"a"))
        );
        assert_eq!(
            t.aliases(),
            vec![Some(Alias::new("first")), Some(Alias::new("second")), None]
        );
    }

    #[test]
    fn test_excess_aliases_leave_overlay_unchanged() {
        let t = EasyTuple1::new([0.5]);
        t.set_aliases(["only"]).unwrap();
        assert_eq!(
            t.set_aliases(["a", "b"]),
            Err(TupleError::ExcessAliases { given: 2, arity: 1 })
        );
        assert_eq!(t.get_by_alias("only"), Ok(&0.5));
    }

    #[test]
    fn test_zero_arity() {
        let t: EasyTuple0<u8> = EasyTuple::new([]);
        assert_eq!(t.arity(), 0);
        assert!(t.get_by_alias("x").is_err());
        assert!(t.to_alias_map().is_empty());
        assert_eq!(t.to_string(), "()");
    }

    #[test]
    fn test_map_keeps_aliases() {
        let t = EasyTuple2::new([2, 3]).with_aliases(["w", "h"]).unwrap();
        let squared = t.map(|v| v * v);
        assert_eq!(squared.get_by_alias("h"), Ok(&9));
        assert_eq!(squared.into_array(), [4, 9]);
    }

    #[test]
    fn test_display() {
        let t = EasyTuple3::new([1, 2, 3]).with_aliases(["x", "y"]).unwrap();
        assert_eq!(t.to_string(), "(x=1, y=2, 3)");
    }

    #[test]
    fn test_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EasyTuple9<String>>();
        assert_send_sync::<crate::tuple::Tuple2<u8, String>>();
    }
}
