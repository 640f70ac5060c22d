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

//! # Heterogeneous Tuples
//!
//! `Tuple0` through `Tuple9` wrap a native Rust tuple together with an
//! [`AliasOverlay`]. The elements keep their static types through
//! `values()`; the [`AliasedTuple`] interface hands them out as `&dyn Any`
//! for index- and alias-based access.
//!
//! Equality and hashing look at the elements only. Two tuples with equal
//! elements and different aliases are equal.

use crate::{alias::TupleAlias, aliased::AliasedTuple, error::TupleError, overlay::AliasOverlay};
use std::{
    any::Any,
    hash::{Hash, Hasher},
};

macro_rules! define_tuple {
    ($(#[$meta:meta])* $name:ident, $arity:literal; $($idx:tt => $T:ident: $v:ident),*) => {
        $(#[$meta])*
        pub struct $name<$($T),*> {
            values: ($($T,)*),
            overlay: AliasOverlay,
        }

        impl<$($T),*> $name<$($T),*> {
            /// The number of slots.
            pub const ARITY: usize = $arity;

            /// Creates an unaliased tuple from its elements.
            #[inline]
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            pub fn new($($v: $T),*) -> Self {
                Self {
                    values: ($($v,)*),
                    overlay: AliasOverlay::new($arity),
                }
            }

            /// Returns the elements as a native tuple.
            #[inline]
            pub fn values(&self) -> &($($T,)*) {
                &self.values
            }

            /// Consumes the tuple, returning its elements. Aliases are dropped.
            #[inline]
            pub fn into_values(self) -> ($($T,)*) {
                self.values
            }

            /// Assigns `aliases` and returns the tuple.
            ///
            /// # Errors
            ///
            /// Returns `TupleError::ExcessAliases` if more aliases than slots
            /// are given.
            pub fn with_aliases<I, A>(self, aliases: I) -> Result<Self, TupleError>
            where
                I: IntoIterator<Item = A>,
                A: TupleAlias,
            {
                self.overlay.replace(aliases)?;
                Ok(self)
            }
        }

        impl<$($T),*> From<($($T,)*)> for $name<$($T),*> {
            #[inline]
            fn from(values: ($($T,)*)) -> Self {
                Self {
                    values,
                    overlay: AliasOverlay::new($arity),
                }
            }
        }

        impl<$($T: Any),*> AliasedTuple for $name<$($T),*> {
            type Element = dyn Any;

            #[inline]
            fn arity(&self) -> usize {
                $arity
            }

            #[inline]
            fn element(&self, index: usize) -> Result<&dyn Any, TupleError> {
                match index {
                    $($idx => Ok(&self.values.$idx as &dyn Any),)*
                    _ => Err(TupleError::IndexOutOfRange { index, arity: $arity }),
                }
            }

            #[inline]
            fn overlay(&self) -> &AliasOverlay {
                &self.overlay
            }
        }

        impl<$($T: Clone),*> Clone for $name<$($T),*> {
            fn clone(&self) -> Self {
                Self {
                    values: self.values.clone(),
                    overlay: self.overlay.clone(),
                }
            }
        }

        impl<$($T: PartialEq),*> PartialEq for $name<$($T),*> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.values == other.values
            }
        }

        impl<$($T: Eq),*> Eq for $name<$($T),*> {}

        impl<$($T: Hash),*> Hash for $name<$($T),*> {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.values.hash(state);
            }
        }

        impl<$($T: std::fmt::Debug),*> std::fmt::Debug for $name<$($T),*> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("values", &self.values)
                    .field("aliases", &self.overlay.snapshot())
                    .finish()
            }
        }

        impl<$($T: std::fmt::Debug),*> std::fmt::Display for $name<$($T),*> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let elements: [&dyn std::fmt::Debug; $arity] = [$(&self.values.$idx),*];
                crate::aliased::fmt_elements(f, &self.overlay.snapshot(), &elements)
            }
        }
    };
}

define_tuple!(
    /// A tuple with no elements.
    Tuple0, 0;
);
define_tuple!(
    /// A tuple with one element.
    Tuple1, 1; 0 => T1: v1
);
define_tuple!(
    /// A tuple with two elements.
    Tuple2, 2; 0 => T1: v1, 1 => T2: v2
);
define_tuple!(
    /// A tuple with three elements.
    Tuple3, 3; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3
);
define_tuple!(
    /// A tuple with four elements.
    Tuple4, 4; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4
);
define_tuple!(
    /// A tuple with five elements.
    Tuple5, 5; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4, 4 => T5: v5
);
define_tuple!(
    /// A tuple with six elements.
    Tuple6, 6; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4, 4 => T5: v5,
    5 => T6: v6
);
define_tuple!(
    /// A tuple with seven elements.
    Tuple7, 7; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4, 4 => T5: v5,
    5 => T6: v6, 6 => T7: v7
);
define_tuple!(
    /// A tuple with eight elements.
    Tuple8, 8; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4, 4 => T5: v5,
    5 => T6: v6, 6 => T7: v7, 7 => T8: v8
);
define_tuple!(
    /// A tuple with nine elements.
    Tuple9, 9; 0 => T1: v1, 1 => T2: v2, 2 => T3: v3, 3 => T4: v4, 4 => T5: v5,
    5 => T6: v6, 6 => T7: v7, 7 => T8: v8, 8 => T9: v9
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alias::Alias, aliased::TypedElementAccess};
    use std::collections::HashSet;

    #[derive(Clone, Copy)]
    enum Key {
        X,
        Y,
    }

    impl TupleAlias for Key {
        fn alias_name(&self) -> &str {
            match self {
                Key::X => "x",
                Key::Y => "y",
            }
        }
    }

    fn sample() -> Tuple4<i32, &'static str, bool, f64> {
        Tuple4::new(10, "a", true, 3.5)
    }

    #[test]
    fn test_positional_access() {
        let t = sample();
        assert_eq!(t.arity(), 4);
        assert_eq!(t.element_as::<i32>(0), Ok(&10));
        assert_eq!(t.element_as::<&str>(1), Ok(&"a"));
        assert_eq!(t.element_as::<bool>(2), Ok(&true));
        assert_eq!(t.element_as::<f64>(3), Ok(&3.5));
        assert!(matches!(
            t.element(4),
            Err(TupleError::IndexOutOfRange { index: 4, arity: 4 })
        ));
        assert_eq!(t.values().1, "a");
    }

    #[test]
    fn test_alias_lookup_by_name_and_token() {
        let t = sample();
        t.set_aliases(["x", "y"]).unwrap();
        assert_eq!(t.get_by_alias_as::<i32, _>("x"), Ok(&10));
        assert_eq!(t.get_by_alias_as::<i32, _>(&Key::X), Ok(&10));
        assert_eq!(t.get_by_alias_as::<&str, _>(&Key::Y), Ok(&"a"));
        assert_eq!(
            t.get_by_alias("z").map(|_| ()),
            Err(TupleError::AliasNotBound { alias: Alias::new("z") })
        );

        t.set_aliases([Key::Y, Key::X]).unwrap();
        assert_eq!(t.get_by_alias_as::<i32, _>("y"), Ok(&10));
        assert_eq!(t.position_of("x"), Ok(1));
    }

    #[test]
    fn test_excess_aliases_leave_overlay_unchanged() {
        let t = Tuple2::new(1u8, 2u8);
        t.set_aliases(["p", "q"]).unwrap();
        assert_eq!(
            t.set_aliases(["a", "b", "c"]),
            Err(TupleError::ExcessAliases { given: 3, arity: 2 })
        );
        assert_eq!(t.get_by_alias_as::<u8, _>("p"), Ok(&1));
        assert_eq!(t.get_by_alias_as::<u8, _>("q"), Ok(&2));
    }

    #[test]
    fn test_set_aliases_rejects_endless_sequence() {
        let t = Tuple2::new(1u8, 2u8);
        assert_eq!(
            t.set_aliases(std::iter::repeat("a")),
            Err(TupleError::ExcessAliases { given: 3, arity: 2 })
        );
        assert!(!t.is_aliased());
    }

    #[test]
    fn test_alias_assignment_keeps_elements() {
        let t = sample();
        let before = t.clone();
        t.set_aliases(["x", "y", "z"]).unwrap();
        assert_eq!(t, before);
        assert_eq!(t.arity(), 4);
        t.set_aliases(Vec::<&str>::new()).unwrap();
        assert!(!t.is_aliased());
        assert!(t.aliases().iter().all(Option::is_none));
    }

    #[test]
    fn test_element_with_alias_round_trip() {
        let t = sample();
        t.set_aliases(["x", "y"]).unwrap();
        for index in 0..t.arity() {
            match t.element_with_alias(index).unwrap() {
                (Some(name), value) => {
                    let by_alias = t.get_by_alias(name.as_str()).unwrap();
                    assert!(std::ptr::addr_eq(by_alias, value));
                }
                (None, _) => assert!(index >= 2),
            }
        }
        let (alias, _) = t.element_with_tuple_alias(1).unwrap();
        assert_eq!(alias, Some(Alias::new("y")));
    }

    #[test]
    fn test_to_alias_map_in_slot_order() {
        let t = sample();
        t.set_aliases(["x", "y"]).unwrap();
        let map = t.to_alias_map();
        let keys: Vec<&str> = map.keys().map(Alias::as_str).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(map.get("x").and_then(|v| v.downcast_ref::<i32>()), Some(&10));
        assert!(map.get("z").is_none());
    }

    #[test]
    fn test_duplicate_alias_last_write_wins() {
        let t = Tuple3::new(1, 2, 3);
        t.set_aliases(["a", "b", "a"]).unwrap();
        assert_eq!(t.get_by_alias_as::<i32, _>("a"), Ok(&3));
        let map = t.to_alias_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").and_then(|v| v.downcast_ref::<i32>()), Some(&3));
        assert_eq!(map.keys().next(), Some(&Alias::new("a")));
    }

    #[test]
    fn test_zero_arity_never_resolves_aliases() {
        let t = Tuple0::new();
        assert_eq!(t.arity(), 0);
        assert!(t.element(0).is_err());
        assert!(matches!(
            t.get_by_alias("anything"),
            Err(TupleError::AliasNotBound { .. })
        ));
        assert!(t.set_aliases(["a"]).is_err());
        assert_eq!(t.to_string(), "()");
    }

    #[test]
    fn test_clone_aliases_are_independent() {
        let original = sample();
        original.set_aliases(["x", "y"]).unwrap();
        let copy = original.clone();
        assert_eq!(copy.get_by_alias_as::<i32, _>("x"), Ok(&10));

        copy.set_aliases(["k"]).unwrap();
        assert_eq!(original.get_by_alias_as::<i32, _>("x"), Ok(&10));
        assert!(original.get_by_alias("k").is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let t = sample();
        assert!(matches!(
            t.element_as::<String>(0),
            Err(TupleError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_equality_and_hash_ignore_aliases() {
        let a = Tuple2::new(1, "one");
        let b = Tuple2::from((1, "one")).with_aliases(["n", "s"]).unwrap();
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_display_and_debug() {
        let t = Tuple3::new(1, "a", true).with_aliases(["x"]).unwrap();
        assert_eq!(t.to_string(), "(x=1, \"a\", true)");
        assert!(format!("{:?}", t).starts_with("Tuple3 { values: (1, \"a\", true)"));
    }

    #[test]
    fn test_nine_slots() {
        let t = Tuple9::new(0u8, 1u16, 2u32, 3u64, 4i8, 5i16, 6i32, 7i64, "eight");
        assert_eq!(t.arity(), Tuple9::<u8, u16, u32, u64, i8, i16, i32, i64, &str>::ARITY);
        assert_eq!(t.element_as::<&str>(8), Ok(&"eight"));
        assert!(t.element(9).is_err());
        let (a, b, c, ..) = t.into_values();
        assert_eq!((a, b, c), (0, 1, 2));
    }
}
