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

//! # Aliased Tuple Access
//!
//! [`AliasedTuple`] is the interface shared by the heterogeneous `TupleN`
//! types and the homogeneous `EasyTuple`. Implementors supply positional
//! access and their overlay; every alias-based operation is derived from
//! those two.
//!
//! Heterogeneous tuples expose their elements as `&dyn Any`.
//! [`TypedElementAccess`] adds checked downcasts on top, reporting
//! `TupleError::TypeMismatch` rather than coercing.

use crate::{
    alias::{Alias, TupleAlias},
    error::TupleError,
    map::AliasMap,
    overlay::{AliasBindings, AliasOverlay},
};
use std::any::Any;

/// A fixed-arity tuple whose slots may be named by aliases.
pub trait AliasedTuple {
    /// The type elements are handed out as.
    type Element: ?Sized;

    /// Returns the number of slots.
    fn arity(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::IndexOutOfRange` if `index >= self.arity()`.
    fn element(&self, index: usize) -> Result<&Self::Element, TupleError>;

    /// Returns the alias overlay of this instance.
    fn overlay(&self) -> &AliasOverlay;

    /// Replaces all aliases, assigning them to slots in order.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::ExcessAliases` if more aliases than slots are
    /// given; the previous aliases stay in place.
    #[inline]
    fn set_aliases<I, A>(&self, aliases: I) -> Result<(), TupleError>
    where
        I: IntoIterator<Item = A>,
        A: TupleAlias,
    {
        self.overlay().replace(aliases)
    }

    /// Returns the slot bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::AliasNotBound` if no slot carries `alias`.
    #[inline]
    fn position_of<A>(&self, alias: &A) -> Result<usize, TupleError>
    where
        A: TupleAlias + ?Sized,
    {
        self.overlay()
            .snapshot()
            .position(alias.alias_name())
            .ok_or_else(|| TupleError::AliasNotBound {
                alias: alias.to_alias(),
            })
    }

    /// Returns the element in the slot bound to `alias`.
    #[inline]
    fn get_by_alias<A>(&self, alias: &A) -> Result<&Self::Element, TupleError>
    where
        A: TupleAlias + ?Sized,
    {
        let index = self.position_of(alias)?;
        self.element(index)
    }

    /// Returns the element at `index` together with its alias, if any.
    fn element_with_tuple_alias(
        &self,
        index: usize,
    ) -> Result<(Option<Alias>, &Self::Element), TupleError> {
        let value = self.element(index)?;
        let alias = self.overlay().snapshot().alias_of(index).cloned();
        Ok((alias, value))
    }

    /// Like [`AliasedTuple::element_with_tuple_alias`], with the alias as a
    /// plain name.
    #[inline]
    fn element_with_alias(
        &self,
        index: usize,
    ) -> Result<(Option<String>, &Self::Element), TupleError> {
        let (alias, value) = self.element_with_tuple_alias(index)?;
        Ok((alias.map(String::from), value))
    }

    /// Maps every alias to the element in its slot, in slot order.
    ///
    /// Unaliased slots are omitted. If one alias names several slots, the
    /// later slot's element is kept.
    fn to_alias_map(&self) -> AliasMap<&Self::Element> {
        let bindings = self.overlay().snapshot();
        let mut map = AliasMap::with_capacity(bindings.len());
        for (index, alias) in bindings.iter() {
            if let Ok(value) = self.element(index) {
                map.insert(alias.clone(), value);
            }
        }
        map
    }

    /// Returns the alias of every slot, `None` where unaliased.
    fn aliases(&self) -> Vec<Option<Alias>> {
        let bindings = self.overlay().snapshot();
        (0..self.arity())
            .map(|index| bindings.alias_of(index).cloned())
            .collect()
    }

    /// Returns `true` if at least one slot is aliased.
    #[inline]
    fn is_aliased(&self) -> bool {
        !self.overlay().snapshot().is_empty()
    }
}

/// Checked, typed access to the elements of a heterogeneous tuple.
///
/// # Examples
///
/// ```rust
/// use arity_tuple::{AliasedTuple, Tuple2, TupleError, TypedElementAccess};
///
/// let t = Tuple2::new(1u32, String::from("one"));
/// assert_eq!(t.element_as::<String>(1).map(String::as_str), Ok("one"));
/// assert!(matches!(
///     t.element_as::<String>(0),
///     Err(TupleError::TypeMismatch { index: 0, .. })
/// ));
/// ```
pub trait TypedElementAccess: AliasedTuple<Element = dyn Any> {
    /// Returns the element at `index` as an `R`.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::IndexOutOfRange` for a bad index and
    /// `TupleError::TypeMismatch` if the element is not an `R`.
    #[inline]
    fn element_as<R>(&self, index: usize) -> Result<&R, TupleError>
    where
        R: Any,
    {
        self.element(index)?
            .downcast_ref::<R>()
            .ok_or(TupleError::TypeMismatch {
                index,
                expected: std::any::type_name::<R>(),
            })
    }

    /// Returns the element in the slot bound to `alias` as an `R`.
    #[inline]
    fn get_by_alias_as<R, A>(&self, alias: &A) -> Result<&R, TupleError>
    where
        R: Any,
        A: TupleAlias + ?Sized,
    {
        let index = self.position_of(alias)?;
        self.element_as(index)
    }
}

impl<T> TypedElementAccess for T where T: AliasedTuple<Element = dyn Any> + ?Sized {}

/// Writes `(x=1, "a", true)`: each element in `Debug` form, prefixed by its
/// alias where it has one.
pub(crate) fn fmt_elements(
    f: &mut std::fmt::Formatter<'_>,
    bindings: &AliasBindings,
    elements: &[&dyn std::fmt::Debug],
) -> std::fmt::Result {
    f.write_str("(")?;
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        if let Some(alias) = bindings.alias_of(index) {
            write!(f, "{}=", alias)?;
        }
        write!(f, "{:?}", element)?;
    }
    f.write_str(")")
}
