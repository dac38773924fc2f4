//! Procedural macros for the `currying` engine.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: builds a root curry node from a closure or a function path
//!
//! This crate is re-exported by `currying` under the `derive` feature; depend
//! on `currying` rather than on this crate directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Builds a root curry node.
///
/// The arity is taken from the closure's parameter list, or given explicitly
/// after a function path. Because the callable is shaped against an `Fn`
/// bound of that arity, closure parameter types may be left to inference.
///
/// # Syntax
///
/// ```text
/// curry!(|a, b, ...| body)
/// curry!(function_path, arity)
/// curry!(owned => ...)
/// curry!(referenced => ...)
/// ```
///
/// # Examples
///
/// ```rust,ignore
/// use currying::curry;
///
/// fn add(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// // Parameter types are inferred from the body.
/// let curried = curry!(|a, b, c| add(a, b, c));
/// assert_eq!(curried.apply((10, 11, 12)), 33);
///
/// // Function path with an explicit arity.
/// let curried = curry!(add, 3);
/// assert_eq!(curried.apply((10,)).apply((11, 12)), 33);
/// ```
///
/// Referenced mode reads each bound argument when the callable runs:
///
/// ```rust,ignore
/// use std::cell::Cell;
/// use currying::curry;
///
/// let counter = Cell::new(1);
/// let scaled = curry!(referenced => |value: Cell<i32>, factor: Cell<i32>| value.get() * factor.get());
/// let bound = scaled.apply((&counter,));
///
/// counter.set(7);
/// assert_eq!(bound.apply((&Cell::new(3),)), 21);
/// ```
///
/// # Errors
///
/// Rejected at compile time:
///
/// ```rust,ignore
/// use currying::curry;
///
/// // A callable needs at least one parameter.
/// let nothing = curry!(|| 42);
/// ```
///
/// ```rust,ignore
/// use currying::curry;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// // The arity must be an integer literal.
/// let curried = curry!(add, two);
/// ```
///
/// ```rust,ignore
/// use currying::curry;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// // The declared arity must match the function.
/// let curried = curry!(add, 3);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
