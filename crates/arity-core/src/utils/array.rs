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

/// Creates an empty boxed slice.
///
/// # Examples
///
/// ```rust
/// # use arity_core::utils::array::empty_array;
///
/// let xs = empty_array::<String>();
/// assert!(xs.is_empty());
/// ```
#[inline]
pub fn empty_array<T>() -> Box<[T]> {
    Box::default()
}

/// Creates a boxed slice of `len` clones of `value`.
///
/// # Examples
///
/// ```rust
/// # use arity_core::utils::array::filled_array;
///
/// let xs = filled_array(3, "a");
/// assert_eq!(&*xs, &["a", "a", "a"]);
/// ```
#[inline]
pub fn filled_array<T>(len: usize, value: T) -> Box<[T]>
where
    T: Clone,
{
    vec![value; len].into_boxed_slice()
}

/// Creates a boxed slice of `len` default values.
///
/// # Examples
///
/// ```rust
/// # use arity_core::utils::array::default_array;
///
/// let xs: Box<[Option<u8>]> = default_array(2);
/// assert_eq!(&*xs, &[None, None]);
/// ```
#[inline]
pub fn default_array<T>(len: usize) -> Box<[T]>
where
    T: Default,
{
    std::iter::repeat_with(T::default).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_empty_array() {
        let xs: Box<[u64]> = empty_array();
        assert_eq!(xs.len(), 0);
    }

    #[test]
    fn test_filled_array_shares_clones_of_value() {
        let shared = Rc::new(5);
        let xs = filled_array(4, Rc::clone(&shared));
        assert_eq!(xs.len(), 4);
        assert!(xs.iter().all(|x| Rc::ptr_eq(x, &shared)));
        assert_eq!(Rc::strong_count(&shared), 5);
    }

    #[test]
    fn test_filled_array_zero_length() {
        let xs = filled_array(0, 1.5f64);
        assert!(xs.is_empty());
    }

    #[test]
    fn test_default_array() {
        let xs: Box<[String]> = default_array(3);
        assert_eq!(xs.len(), 3);
        assert!(xs.iter().all(String::is_empty));
    }
}
