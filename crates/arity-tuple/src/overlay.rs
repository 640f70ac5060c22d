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

//! # Alias Overlay
//!
//! The per-tuple layer that binds alias names to slot positions.
//!
//! ## Motivation
//!
//! - Wholesale replacement: `set_aliases` swaps in a complete new binding
//!   set. Readers never observe a half-applied assignment.
//! - Cheap reads: the bindings live in an `Arc` behind a
//!   `parking_lot::RwLock`. A read clones the `Arc` and releases the lock
//!   immediately; lookups then run on the snapshot.
//! - Failure leaves no trace: an assignment with more aliases than slots is
//!   rejected before the lock is taken, so the previous bindings survive.
//!
//! ## Usage
//!
//! ```rust
//! use arity_tuple::{AliasOverlay, TupleError};
//!
//! let overlay = AliasOverlay::new(3);
//! overlay.replace(["a", "b"]).unwrap();
//! assert_eq!(overlay.snapshot().position("b"), Some(1));
//!
//! let err = overlay.replace(["a", "b", "c", "d"]).unwrap_err();
//! assert_eq!(err, TupleError::ExcessAliases { given: 4, arity: 3 });
//! assert_eq!(overlay.snapshot().position("b"), Some(1));
//! ```

use crate::{
    MAX_ARITY,
    alias::{Alias, TupleAlias},
    error::TupleError,
};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// An immutable set of alias bindings.
///
/// Slot `i` is aliased by the `i`-th alias of the assignment that produced
/// it; slots past the end of the assignment are unaliased. If the same
/// alias was given twice, lookups resolve to the later slot.
#[derive(Debug, Clone, Default)]
pub struct AliasBindings {
    slots: SmallVec<Alias, MAX_ARITY>,
    positions: FxHashMap<Alias, usize>,
}

impl AliasBindings {
    fn from_slots(slots: SmallVec<Alias, MAX_ARITY>) -> Self {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(slots.len(), Default::default());
        for (index, alias) in slots.iter().enumerate() {
            positions.insert(alias.clone(), index);
        }
        Self { slots, positions }
    }

    /// Returns the slot bound to `alias`, if any.
    #[inline]
    pub fn position(&self, alias: &str) -> Option<usize> {
        self.positions.get(alias).copied()
    }

    /// Returns the alias of slot `index`, if it has one.
    #[inline]
    pub fn alias_of(&self, index: usize) -> Option<&Alias> {
        self.slots.get(index)
    }

    /// Returns the number of aliased slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is aliased.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(slot, alias)` pairs in slot order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Alias)> + '_ {
        self.slots.iter().enumerate()
    }
}

/// The mutable alias layer of one tuple instance.
#[derive(Debug)]
pub struct AliasOverlay {
    arity: usize,
    bindings: RwLock<Arc<AliasBindings>>,
}

impl AliasOverlay {
    /// Creates an overlay for a tuple with `arity` slots and no aliases.
    #[inline]
    pub fn new(arity: usize) -> Self {
        debug_assert!(
            arity <= MAX_ARITY,
            "called `AliasOverlay::new` with arity {} above the maximum of {}",
            arity,
            MAX_ARITY
        );

        Self {
            arity,
            bindings: RwLock::new(Arc::new(AliasBindings::default())),
        }
    }

    /// Returns the number of slots this overlay covers.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the current bindings.
    ///
    /// The snapshot is unaffected by later calls to [`AliasOverlay::replace`].
    #[inline]
    pub fn snapshot(&self) -> Arc<AliasBindings> {
        Arc::clone(&self.bindings.read())
    }

    /// Replaces every binding with `aliases`, assigned to slots in order.
    ///
    /// An empty sequence clears the overlay.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::ExcessAliases` as soon as `aliases` yields more
    /// items than there are slots; the rest of the sequence is not consumed.
    /// The current bindings are left untouched.
    pub fn replace<I, A>(&self, aliases: I) -> Result<(), TupleError>
    where
        I: IntoIterator<Item = A>,
        A: TupleAlias,
    {
        let mut slots: SmallVec<Alias, MAX_ARITY> = SmallVec::new();
        for alias in aliases {
            if slots.len() == self.arity {
                return Err(TupleError::ExcessAliases {
                    given: self.arity + 1,
                    arity: self.arity,
                });
            }
            slots.push(alias.to_alias());
        }

        let bindings = Arc::new(AliasBindings::from_slots(slots));
        let count = bindings.len();
        *self.bindings.write() = bindings;

        tracing::trace!(arity = self.arity, aliases = count, "replaced tuple aliases");
        Ok(())
    }
}

impl Clone for AliasOverlay {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            bindings: RwLock::new(self.snapshot()),
        }
    }
}
