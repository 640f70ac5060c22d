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

//! # Alias Keys
//!
//! A tuple slot can be named either by a plain string or by a typed token.
//! Both normalize to one canonical key, [`Alias`], so a slot aliased with
//! the name `"x"` is found by any token whose name is `"x"` and vice versa.
//!
//! ## Usage
//!
//! ```rust
//! use arity_tuple::{Alias, TupleAlias};
//!
//! #[derive(Clone, Copy)]
//! enum Field {
//!     Weight,
//! }
//!
//! impl TupleAlias for Field {
//!     fn alias_name(&self) -> &str {
//!         match self {
//!             Field::Weight => "weight",
//!         }
//!     }
//! }
//!
//! assert_eq!(Field::Weight.to_alias(), Alias::new("weight"));
//! assert_eq!("weight".to_alias(), Field::Weight.to_alias());
//! ```

use std::{borrow::Borrow, borrow::Cow, sync::Arc};

/// The canonical key an alias is stored under.
///
/// Cloning an `Alias` is cheap; the name is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alias(Arc<str>);

impl Alias {
    /// Creates a new alias with the given name.
    #[inline]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the name of the alias.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Alias {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Alias {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Alias({:?})", self.as_str())
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Alias {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Alias {
    #[inline]
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<Alias> for String {
    #[inline]
    fn from(alias: Alias) -> Self {
        alias.as_str().to_owned()
    }
}

/// Anything that can name a tuple slot.
///
/// Implement this for enums or other token types to use them in place of
/// plain strings. Two aliases are the same key exactly when their
/// `alias_name`s are equal.
pub trait TupleAlias {
    /// The name this alias is keyed by.
    fn alias_name(&self) -> &str;

    /// Converts into the canonical key.
    #[inline]
    fn to_alias(&self) -> Alias {
        Alias::new(self.alias_name())
    }
}

impl TupleAlias for str {
    #[inline]
    fn alias_name(&self) -> &str {
        self
    }
}

impl TupleAlias for String {
    #[inline]
    fn alias_name(&self) -> &str {
        self.as_str()
    }
}

impl TupleAlias for Cow<'_, str> {
    #[inline]
    fn alias_name(&self) -> &str {
        self
    }
}

impl TupleAlias for Alias {
    #[inline]
    fn alias_name(&self) -> &str {
        self.as_str()
    }

    #[inline]
    fn to_alias(&self) -> Alias {
        self.clone()
    }
}

impl<T> TupleAlias for &T
where
    T: TupleAlias + ?Sized,
{
    #[inline]
    fn alias_name(&self) -> &str {
        (**self).alias_name()
    }

    #[inline]
    fn to_alias(&self) -> Alias {
        (**self).to_alias()
    }
}
