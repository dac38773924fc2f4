//! # currying
//!
//! A currying engine for Rust: turn any fixed-arity callable into a chain of
//! partial applications, checked by the compiler.
//!
//! ## Overview
//!
//! - **Curry nodes** ([`Curry`]): immutable snapshots of a callable with some
//!   arguments bound. Applying more arguments returns either the next node
//!   or, once every parameter is bound, the callable's result.
//! - **Ownership modes** ([`ownership`]): bind arguments by value
//!   ([`Owned`](ownership::Owned)) or by shared reference
//!   ([`Referenced`](ownership::Referenced)).
//! - **Callable adapters** ([`callable`]): the fixed-arity contract the
//!   engine consumes, implemented for every `Fn` of one to eight parameters.
//! - **Dynamic currying** (`dynamic`): the same contract for callables whose
//!   arity is only known at runtime.
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `curry!` procedural macro
//! - `dynamic` (default): runtime-checked currying ([`DynamicCurry`])
//! - `arc`: share callables through `Arc` instead of `Rc`, making nodes
//!   `Send + Sync` when their contents are
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use currying::prelude::*;
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let curried = curry(add);
//! let add_ten = curried.apply((10,));
//!
//! assert_eq!(add_ten.remaining(), 2);
//! assert_eq!(apply!(add_ten, 11, 12), 33);
//! ```
//!
//! ## The `curry!` Macro
//!
//! With the `derive` feature, `curry!` shapes a closure or function path to a
//! fixed arity before building the root node, so closure parameter types can
//! be inferred:
//!
//! ```rust
//! use currying::curry;
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let inferred = curry!(|a, b, c| add(a, b, c));
//! let by_path = curry!(add, 3);
//!
//! assert_eq!(inferred.apply((10, 11, 12)), 33);
//! assert_eq!(by_path.apply((10,)).apply((11, 12)), 33);
//! ```
//!
//! A callable with no parameters cannot be curried:
//!
//! ```rust,compile_fail
//! let nothing = currying::curry!(|| 42);
//! ```
//!
//! and a declared arity must match the function:
//!
//! ```rust,compile_fail
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let curried = currying::curry!(add, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets the `curry!` expansion name this crate from inside its own tests.
extern crate self as currying;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use currying::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::Callable;
    pub use crate::error::ArityExceeded;
    pub use crate::hlist::{HCons, HList, HNil, IntoHList};
    pub use crate::node::{Curry, curry, curry_with};
    pub use crate::ownership::{Owned, Ownership, OwnershipMode, Referenced};
    pub use crate::{apply, hlist};

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::{DynamicCurry, Step, Variadic, variadic};

    #[cfg(feature = "derive")]
    pub use currying_derive::curry;
}

/// Reference-counted smart pointer shared by every node of a chain.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod callable;
pub mod error;
pub mod hlist;
mod macros;
mod node;
pub mod ownership;

#[cfg(feature = "dynamic")]
pub mod dynamic;

pub use error::ArityExceeded;
pub use hlist::{HCons, HList, HNil, IntoHList};
pub use node::{Advance, Applied, Curry, Split, curry, curry_with};

#[cfg(feature = "dynamic")]
pub use dynamic::{DynamicCurry, Step, Variadic, variadic};

#[cfg(feature = "derive")]
pub use currying_derive::curry;
