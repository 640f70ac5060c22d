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

use crate::alias::{Alias, TupleAlias};

/// An insertion-ordered map from aliases to values.
///
/// Built by `AliasedTuple::to_alias_map`. Entries appear in slot order;
/// inserting an alias that is already present replaces its value but keeps
/// its position. Tuples have at most nine slots, so lookups scan linearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMap<V> {
    entries: Vec<(Alias, V)>,
}

impl<V> Default for AliasMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AliasMap<V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `alias`, returning the value it replaced.
    pub fn insert(&mut self, alias: Alias, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(key, _)| *key == alias) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((alias, value));
                None
            }
        }
    }

    /// Returns the value stored under `alias`.
    #[inline]
    pub fn get<A>(&self, alias: &A) -> Option<&V>
    where
        A: TupleAlias + ?Sized,
    {
        let name = alias.alias_name();
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn contains_alias<A>(&self, alias: &A) -> bool
    where
        A: TupleAlias + ?Sized,
    {
        self.get(alias).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Alias, &V)> + '_ {
        self.entries.iter().map(|(alias, value)| (alias, value))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &Alias> + '_ {
        self.entries.iter().map(|(alias, _)| alias)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<V> FromIterator<(Alias, V)> for AliasMap<V> {
    fn from_iter<I: IntoIterator<Item = (Alias, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (alias, value) in iter {
            map.insert(alias, value);
        }
        map
    }
}

impl<V> IntoIterator for AliasMap<V> {
    type Item = (Alias, V);
    type IntoIter = std::vec::IntoIter<(Alias, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a AliasMap<V> {
    type Item = &'a (Alias, V);
    type IntoIter = std::slice::Iter<'a, (Alias, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = AliasMap::new();
        assert_eq!(map.insert(Alias::new("a"), 1), None);
        assert_eq!(map.insert(Alias::new("b"), 2), None);
        assert_eq!(map.insert(Alias::new("a"), 3), Some(1));

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_get_by_name_or_alias() {
        let map: AliasMap<i32> = [(Alias::new("x"), 7)].into_iter().collect();
        assert_eq!(map.get("x"), Some(&7));
        assert_eq!(map.get(&Alias::new("x")), Some(&7));
        assert!(!map.contains_alias("y"));
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_into_iter_keeps_order() {
        let map: AliasMap<u8> = [
            (Alias::new("c"), 1),
            (Alias::new("a"), 2),
            (Alias::new("b"), 3),
        ]
        .into_iter()
        .collect();
        let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["c", "a", "b"]);
        let values: Vec<u8> = map.into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, [1, 2, 3]);
    }
}
