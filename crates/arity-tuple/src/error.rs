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

use crate::alias::Alias;

/// The error type for tuple element access and alias assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleError {
    /// A positional index was not below the tuple's arity.
    IndexOutOfRange { index: usize, arity: usize },
    /// No slot is bound to the requested alias.
    AliasNotBound { alias: Alias },
    /// More aliases were supplied than the tuple has slots.
    ///
    /// `given` is a lower bound: the sequence is not read past the first
    /// surplus alias.
    ExcessAliases { given: usize, arity: usize },
    /// The element exists but is not of the requested type.
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },
}

impl std::fmt::Display for TupleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, arity } => {
                write!(f, "Index out of range: {}, Size: {}", index, arity)
            }
            Self::AliasNotBound { alias } => write!(f, "No slot is aliased as '{}'", alias),
            Self::ExcessAliases { given, arity } => write!(
                f,
                "Cannot assign {} or more aliases to a tuple with {} slots",
                given, arity
            ),
            Self::TypeMismatch { index, expected } => {
                write!(f, "Element {} is not of type {}", index, expected)
            }
        }
    }
}

impl std::error::Error for TupleError {}
