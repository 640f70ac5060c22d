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

use arity_core::num::{
    ExactDecimal, Number, NumericOrdering, compare, compare_values, index_of_max, index_of_min,
    index_of_max_numeric,
};
use num_bigint::BigInt;
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |x| x.is_finite())
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |x| x.is_finite())
}

fn decimal() -> impl Strategy<Value = ExactDecimal> {
    (any::<i64>(), -40i64..40).prop_map(|(unscaled, scale)| ExactDecimal::new(BigInt::from(unscaled), scale))
}

/// Finite values spread across every representation.
fn ordinary_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i8>().prop_map(Number::from),
        any::<i32>().prop_map(Number::from),
        any::<i64>().prop_map(Number::from),
        any::<u64>().prop_map(Number::from),
        any::<i128>().prop_map(Number::from),
        finite_f32().prop_map(Number::from),
        finite_f64().prop_map(Number::from),
        (-1000i64..1000).prop_map(|v| Number::from(v as f64 / 8.0)),
        any::<i64>().prop_map(|v| Number::from(BigInt::from(v) * BigInt::from(1_000_000_007u64))),
        decimal().prop_map(Number::from),
    ]
}

fn as_ordering(o: NumericOrdering) -> std::cmp::Ordering {
    o.to_ordering().expect("present operands are always comparable")
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in ordinary_number(), b in ordinary_number()) {
        prop_assert_eq!(compare_values(&a, &b), compare_values(&b, &a).reverse());
    }

    #[test]
    fn compare_is_reflexive(a in ordinary_number()) {
        let copy = a.clone();
        prop_assert_eq!(compare_values(&a, &copy), NumericOrdering::Equal);
    }

    #[test]
    fn compare_is_transitive(
        a in ordinary_number(),
        b in ordinary_number(),
        c in ordinary_number(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort_by(|x, y| as_ordering(compare_values(x, y)));
        prop_assert!(compare_values(&sorted[0], &sorted[1]) != NumericOrdering::Greater);
        prop_assert!(compare_values(&sorted[1], &sorted[2]) != NumericOrdering::Greater);
        prop_assert!(compare_values(&sorted[0], &sorted[2]) != NumericOrdering::Greater);
    }

    #[test]
    fn special_values_bracket_every_finite_value(x in ordinary_number()) {
        prop_assert_eq!(compare_values(&f64::NAN, &x), NumericOrdering::Greater);
        prop_assert_eq!(compare_values(&f64::INFINITY, &x), NumericOrdering::Greater);
        prop_assert_eq!(compare_values(&f64::NEG_INFINITY, &x), NumericOrdering::Less);
        prop_assert_eq!(compare(Some(&x), None::<&Number>), NumericOrdering::Incomparable);
    }

    #[test]
    fn compare_agrees_with_float_order(a in finite_f64(), b in finite_f64()) {
        let expected = a.partial_cmp(&b).expect("finite floats are ordered");
        prop_assert_eq!(as_ordering(compare_values(&a, &b)), expected);
    }

    #[test]
    fn compare_agrees_with_integer_order(a in any::<i64>(), b in any::<u64>()) {
        let expected = i128::from(a).cmp(&i128::from(b));
        prop_assert_eq!(as_ordering(compare_values(&a, &b)), expected);
    }

    #[test]
    fn index_of_max_finds_first_maximum(xs in prop::collection::vec(any::<i16>(), 1..64)) {
        let max = *xs.iter().max().expect("non-empty");
        let first = xs.iter().position(|&x| x == max);
        prop_assert_eq!(index_of_max(&xs), first);
    }

    #[test]
    fn index_of_min_ignores_nan(xs in prop::collection::vec(prop_oneof![Just(f64::NAN), finite_f64()], 0..64)) {
        let expected = xs
            .iter()
            .enumerate()
            .filter(|(_, x)| !x.is_nan())
            .fold(None::<(usize, f64)>, |best, (i, &x)| match best {
                Some((_, b)) if x >= b => best,
                _ => Some((i, x)),
            })
            .map(|(i, _)| i);
        prop_assert_eq!(index_of_min(&xs), expected);
    }

    #[test]
    fn index_of_max_numeric_matches_sorted_order(
        xs in prop::collection::vec(prop::option::of(ordinary_number()), 0..32),
    ) {
        let found = index_of_max_numeric(xs.iter().map(Option::as_ref));
        match found {
            None => prop_assert!(xs.iter().all(Option::is_none)),
            Some(index) => {
                let best = xs[index].as_ref().expect("extremum is present");
                for (i, other) in xs.iter().enumerate() {
                    if let Some(other) = other {
                        let o = compare_values(other, best);
                        prop_assert!(o != NumericOrdering::Greater);
                        if i < index {
                            prop_assert!(o != NumericOrdering::Equal);
                        }
                    }
                }
            }
        }
    }
}
