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

//! # Arity Callables
//!
//! Named callable traits for arities 0 through 9, in four flavours:
//!
//! - `R0..R9`: returns a value (`call`).
//! - `RT0..RT9`: returns a value or an error (`try_call`).
//! - `V0..V9`: returns nothing (`run`).
//! - `VT0..VT9`: returns nothing or an error (`try_run`).
//!
//! Every trait is implemented for all `Fn` closures and functions with the
//! matching signature, so they can be used as bounds wherever a named,
//! fixed-arity callable reads better than a raw `Fn` bound. Each trait
//! exposes its arity as the associated constant `ARITY`.
//!
//! ## Usage
//!
//! ```rust
//! use arity_lambda::{R2, RT1};
//!
//! fn fold<F: R2<i64, i64, i64>>(values: &[i64], f: F) -> i64 {
//!     values.iter().fold(0, |acc, &v| f.call(acc, v))
//! }
//!
//! assert_eq!(fold(&[1, 2, 3], |a, b| a + b), 6);
//!
//! let parse = |s: &str| s.parse::<u8>();
//! assert_eq!(RT1::try_call(&parse, "7"), Ok(7));
//! assert!(RT1::try_call(&parse, "x").is_err());
//! ```

macro_rules! define_callables {
    ($arity:literal, $r:ident, $rt:ident, $v:ident, $vt:ident; $($T:ident: $a:ident),*) => {
        #[doc = concat!("A callable taking ", stringify!($arity), " arguments and returning a value.")]
        pub trait $r<$($T,)* R> {
            /// The number of arguments.
            const ARITY: usize = $arity;

            #[allow(clippy::too_many_arguments)]
            fn call(&self, $($a: $T),*) -> R;
        }

        impl<F, $($T,)* R> $r<$($T,)* R> for F
        where
            F: Fn($($T),*) -> R,
        {
            #[inline(always)]
            fn call(&self, $($a: $T),*) -> R {
                self($($a),*)
            }
        }

        #[doc = concat!("A fallible callable taking ", stringify!($arity), " arguments and returning a value.")]
        pub trait $rt<$($T,)* R, E> {
            /// The number of arguments.
            const ARITY: usize = $arity;

            #[allow(clippy::too_many_arguments)]
            fn try_call(&self, $($a: $T),*) -> Result<R, E>;
        }

        impl<F, $($T,)* R, E> $rt<$($T,)* R, E> for F
        where
            F: Fn($($T),*) -> Result<R, E>,
        {
            #[inline(always)]
            fn try_call(&self, $($a: $T),*) -> Result<R, E> {
                self($($a),*)
            }
        }

        #[doc = concat!("A callable taking ", stringify!($arity), " arguments and returning nothing.")]
        pub trait $v<$($T),*> {
            /// The number of arguments.
            const ARITY: usize = $arity;

            #[allow(clippy::too_many_arguments)]
            fn run(&self, $($a: $T),*);
        }

        impl<F, $($T),*> $v<$($T),*> for F
        where
            F: Fn($($T),*),
        {
            #[inline(always)]
            fn run(&self, $($a: $T),*) {
                self($($a),*)
            }
        }

        #[doc = concat!("A fallible callable taking ", stringify!($arity), " arguments and returning nothing.")]
        pub trait $vt<$($T,)* E> {
            /// The number of arguments.
            const ARITY: usize = $arity;

            #[allow(clippy::too_many_arguments)]
            fn try_run(&self, $($a: $T),*) -> Result<(), E>;
        }

        impl<F, $($T,)* E> $vt<$($T,)* E> for F
        where
            F: Fn($($T),*) -> Result<(), E>,
        {
            #[inline(always)]
            fn try_run(&self, $($a: $T),*) -> Result<(), E> {
                self($($a),*)
            }
        }
    };
}

define_callables!(0, R0, RT0, V0, VT0;);
define_callables!(1, R1, RT1, V1, VT1; T1: a1);
define_callables!(2, R2, RT2, V2, VT2; T1: a1, T2: a2);
define_callables!(3, R3, RT3, V3, VT3; T1: a1, T2: a2, T3: a3);
define_callables!(4, R4, RT4, V4, VT4; T1: a1, T2: a2, T3: a3, T4: a4);
define_callables!(5, R5, RT5, V5, VT5; T1: a1, T2: a2, T3: a3, T4: a4, T5: a5);
define_callables!(6, R6, RT6, V6, VT6; T1: a1, T2: a2, T3: a3, T4: a4, T5: a5, T6: a6);
define_callables!(7, R7, RT7, V7, VT7; T1: a1, T2: a2, T3: a3, T4: a4, T5: a5, T6: a6, T7: a7);
define_callables!(8, R8, RT8, V8, VT8; T1: a1, T2: a2, T3: a3, T4: a4, T5: a5, T6: a6, T7: a7, T8: a8);
define_callables!(
    9, R9, RT9, V9, VT9;
    T1: a1, T2: a2, T3: a3, T4: a4, T5: a5, T6: a6, T7: a7, T8: a8, T9: a9
);
