//! The callable adapter contract.
//!
//! A [`Callable`] is a value with a fixed, ordered list of parameter types
//! and a single invocation operation. The curry engine never inspects the
//! callable beyond this contract: it only asks for the arity, for the
//! declared parameter types, and to be invoked with a complete argument list.
//!
//! Every `Fn` of one to eight parameters is a `Callable`, so free functions,
//! closures (including closures capturing state by reference) and function
//! pointers can be curried directly. Zero-parameter callables are not
//! adapters: there is nothing to curry.
//!
//! # Examples
//!
//! ```rust
//! use currying::callable::Callable;
//! use currying::hlist;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(Callable::invoke(&add, hlist![2, 3]), 5);
//! ```
//!
//! Custom adapters implement the trait for one parameter list:
//!
//! ```rust
//! use currying::callable::Callable;
//! use currying::{HList, curry, hlist_pat};
//!
//! struct Scale {
//!     factor: i64,
//! }
//!
//! impl Callable<HList![i64, i64]> for Scale {
//!     type Output = i64;
//!
//!     fn invoke(&self, arguments: HList![i64, i64]) -> i64 {
//!         let hlist_pat![first, second] = arguments;
//!         (first + second) * self.factor
//!     }
//! }
//!
//! let scaled = curry(Scale { factor: 10 });
//! assert_eq!(scaled.apply((1,)).apply((2,)), 30);
//! ```

use crate::hlist::HList;

/// A fixed-arity invocable value.
///
/// `Parameters` is the argument list type, for example
/// `HList![i32, String]` for a callable taking an `i32` and a `String`.
/// Failures inside [`invoke`](Callable::invoke) (panics) are never caught by
/// the engine.
pub trait Callable<Parameters: HList> {
    /// The value produced by a complete invocation.
    type Output;

    /// Number of parameters.
    const ARITY: usize = Parameters::LENGTH;

    /// Invokes the callable, forwarding each argument positionally.
    fn invoke(&self, arguments: Parameters) -> Self::Output;

    /// Returns the declared parameter type names, in order.
    fn parameter_types(&self) -> Vec<&'static str> {
        Parameters::type_names()
    }
}

macro_rules! impl_callable_for_fn {
    ($($index:tt : $parameter:ident),+) => {
        paste::paste! {
            impl<Function, Return, $($parameter),+> Callable<crate::HList![$($parameter),+]> for Function
            where
                Function: Fn($($parameter),+) -> Return,
            {
                type Output = Return;

                #[inline]
                fn invoke(&self, arguments: crate::HList![$($parameter),+]) -> Return {
                    let crate::hlist_pat![$([<argument_ $index>]),+] = arguments;
                    self($([<argument_ $index>]),+)
                }
            }
        }
    };
}

impl_callable_for_fn!(0: A0);
impl_callable_for_fn!(0: A0, 1: A1);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2, 3: A3);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2, 3: A3, 4: A4);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2, 3: A3, 4: A4, 5: A5);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2, 3: A3, 4: A4, 5: A5, 6: A6);
impl_callable_for_fn!(0: A0, 1: A1, 2: A2, 3: A3, 4: A4, 5: A5, 6: A6, 7: A7);
