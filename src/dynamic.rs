//! Runtime-checked currying for callables whose arity is a value.
//!
//! [`Curry`](crate::Curry) needs the parameter list as a type. Some callables
//! only know their arity at runtime: a fold over "the next `n` readings", a
//! command taking a configured number of operands. [`DynamicCurry`] offers
//! the same contract for them, with a homogeneous argument type `T`:
//!
//! - supplying fewer arguments than remain returns [`Step::Partial`]
//! - supplying exactly the remaining count invokes and returns
//!   [`Step::Complete`]
//! - supplying more fails with [`ArityExceeded`] before anything is invoked
//!
//! # Examples
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use currying::dynamic::{DynamicCurry, Step, variadic};
//! use currying::ownership::Owned;
//!
//! let arity = NonZeroUsize::new(3).unwrap();
//! let sum = DynamicCurry::new(variadic(arity, |values: Vec<i32>| values.iter().sum::<i32>()), Owned);
//!
//! let Step::Partial(ten) = sum.try_apply([10])? else { unreachable!() };
//! assert_eq!(ten.remaining(), 2);
//! assert_eq!(ten.try_apply([11, 12])?.complete(), Some(33));
//! assert!(ten.try_apply([1, 2, 3]).is_err());
//! # Ok::<(), currying::ArityExceeded>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use smallvec::SmallVec;

use crate::ReferenceCounter;
use crate::error::ArityExceeded;
use crate::ownership::{Capture, Owned, OwnershipMode};

/// Number of bound arguments stored inline before spilling to the heap.
const INLINE_ARGUMENTS: usize = 8;

/// A callable with a runtime arity over homogeneous arguments.
pub trait VariadicCallable<T> {
    /// The value produced by a complete invocation.
    type Output;

    /// Number of parameters.
    fn arity(&self) -> NonZeroUsize;

    /// Invokes the callable. `arguments.len()` always equals
    /// [`arity`](VariadicCallable::arity) when called by the engine.
    fn invoke(&self, arguments: Vec<T>) -> Self::Output;
}

/// Adapts `Fn(Vec<T>) -> R` into a [`VariadicCallable`] of a declared arity.
pub struct Variadic<F, T> {
    function: F,
    arity: NonZeroUsize,
    argument: PhantomData<fn(Vec<T>)>,
}

impl<F, T> Variadic<F, T> {
    /// Wraps `function`, declaring that it takes `arity` arguments.
    pub const fn new(arity: NonZeroUsize, function: F) -> Self {
        Self {
            function,
            arity,
            argument: PhantomData,
        }
    }
}

impl<F: Clone, T> Clone for Variadic<F, T> {
    fn clone(&self) -> Self {
        Self::new(self.arity, self.function.clone())
    }
}

impl<F: Copy, T> Copy for Variadic<F, T> {}

impl<F, T> fmt::Debug for Variadic<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Variadic")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<F, T, R> VariadicCallable<T> for Variadic<F, T>
where
    F: Fn(Vec<T>) -> R,
{
    type Output = R;

    #[inline]
    fn arity(&self) -> NonZeroUsize {
        self.arity
    }

    #[inline]
    fn invoke(&self, arguments: Vec<T>) -> R {
        (self.function)(arguments)
    }
}

/// Shorthand for [`Variadic::new`].
pub fn variadic<F, T, R>(arity: NonZeroUsize, function: F) -> Variadic<F, T>
where
    F: Fn(Vec<T>) -> R,
{
    Variadic::new(arity, function)
}

/// Outcome of a dynamic application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<N, R> {
    /// Parameters remain; the next node.
    Partial(N),
    /// Every parameter was bound; the callable's result.
    Complete(R),
}

impl<N, R> Step<N, R> {
    /// Returns `true` for [`Step::Partial`].
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns `true` for [`Step::Complete`].
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The next node, if parameters remain.
    pub fn partial(self) -> Option<N> {
        match self {
            Self::Partial(node) => Some(node),
            Self::Complete(_) => None,
        }
    }

    /// The result, if the callable was invoked.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(result) => Some(result),
        }
    }
}

/// A partially-applied [`VariadicCallable`].
///
/// Arguments are supplied as `Mode::Slot`: values of `T` in [`Owned`] mode,
/// `&T` in [`Referenced`](crate::ownership::Referenced) mode.
pub struct DynamicCurry<F, T, Mode: Capture<T> = Owned> {
    function: ReferenceCounter<F>,
    arity: NonZeroUsize,
    prefix: SmallVec<[Mode::Slot; INLINE_ARGUMENTS]>,
    mode: Mode,
    argument: PhantomData<fn(T)>,
}

impl<F, T, Mode> DynamicCurry<F, T, Mode>
where
    F: VariadicCallable<T>,
    Mode: Capture<T>,
{
    /// Creates the root node of a chain.
    pub fn new(function: F, mode: Mode) -> Self {
        Self {
            arity: function.arity(),
            function: ReferenceCounter::new(function),
            prefix: SmallVec::new(),
            mode,
            argument: PhantomData,
        }
    }

    /// Creates a node with `arguments` already bound.
    ///
    /// # Errors
    ///
    /// Returns [`ArityExceeded`] when `arguments` would leave no parameter
    /// unbound: a node never holds a complete argument list. At most
    /// `arity + 1` arguments are read from the iterator.
    pub fn create<I>(function: F, mode: Mode, arguments: I) -> Result<Self, ArityExceeded>
    where
        I: IntoIterator<Item = Mode::Slot>,
    {
        let declared = function.arity();
        let arity = declared.get();
        let prefix: SmallVec<[Mode::Slot; INLINE_ARGUMENTS]> =
            arguments.into_iter().take(arity + 1).collect();

        if prefix.len() >= arity {
            tracing::debug!(
                arity,
                supplied = prefix.len(),
                "rejecting initial arguments that leave no parameter unbound"
            );
            return Err(ArityExceeded {
                arity,
                filled: 0,
                supplied: prefix.len(),
            });
        }

        Ok(Self {
            function: ReferenceCounter::new(function),
            arity: declared,
            prefix,
            mode,
            argument: PhantomData,
        })
    }

    /// Applies `arguments`, consuming this node.
    ///
    /// # Errors
    ///
    /// Returns [`ArityExceeded`] when more arguments are supplied than
    /// remain. The callable is not invoked in that case, and reading stops
    /// at the first argument past the remaining count, so an unbounded
    /// iterator is rejected too.
    pub fn try_into_apply<I>(self, arguments: I) -> Result<Step<Self, F::Output>, ArityExceeded>
    where
        I: IntoIterator<Item = Mode::Slot>,
    {
        let supplied: SmallVec<[Mode::Slot; INLINE_ARGUMENTS]> =
            arguments.into_iter().take(self.remaining() + 1).collect();
        let arity = self.arity();
        let filled = self.filled();

        match (filled + supplied.len()).cmp(&arity) {
            Ordering::Greater => {
                tracing::debug!(
                    arity,
                    filled,
                    supplied = supplied.len(),
                    "rejecting over-supplied arguments"
                );
                Err(ArityExceeded {
                    arity,
                    filled,
                    supplied: supplied.len(),
                })
            }
            Ordering::Equal => {
                tracing::trace!(arity, mode = %Mode::MODE, "invoking variadic callable");
                let arguments: Vec<T> = self
                    .prefix
                    .into_iter()
                    .chain(supplied)
                    .map(<Mode as Capture<T>>::release)
                    .collect();
                Ok(Step::Complete(<F as VariadicCallable<T>>::invoke(
                    &self.function,
                    arguments,
                )))
            }
            Ordering::Less => {
                let mut prefix = self.prefix;
                prefix.extend(supplied);
                tracing::trace!(
                    arity,
                    filled = prefix.len(),
                    mode = %Mode::MODE,
                    "extending dynamic curry node"
                );
                Ok(Step::Partial(Self {
                    function: self.function,
                    arity: self.arity,
                    prefix,
                    mode: self.mode,
                    argument: PhantomData,
                }))
            }
        }
    }

    /// Applies `arguments`, leaving this node usable.
    ///
    /// # Errors
    ///
    /// Returns [`ArityExceeded`] when more arguments are supplied than
    /// remain. The callable is not invoked in that case.
    pub fn try_apply<I>(&self, arguments: I) -> Result<Step<Self, F::Output>, ArityExceeded>
    where
        I: IntoIterator<Item = Mode::Slot>,
        Mode::Slot: Clone,
    {
        self.clone().try_into_apply(arguments)
    }

    /// Total number of parameters, as declared when the chain was created.
    pub const fn arity(&self) -> usize {
        self.arity.get()
    }

    /// Number of bound arguments.
    pub fn filled(&self) -> usize {
        self.prefix.len()
    }

    /// Number of parameters still missing; always at least one.
    pub fn remaining(&self) -> usize {
        self.arity().saturating_sub(self.filled())
    }

    /// The chain's ownership mode.
    pub const fn ownership(&self) -> OwnershipMode {
        Mode::MODE
    }

    /// The shared callable.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// The bound argument slots, in order.
    pub fn arguments(&self) -> &[Mode::Slot] {
        &self.prefix
    }

    /// Returns `true` when `other` shares this node's callable.
    pub fn shares_function_with(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.function, &other.function)
    }
}

impl<F, T, Mode> Clone for DynamicCurry<F, T, Mode>
where
    Mode: Capture<T>,
    Mode::Slot: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            arity: self.arity,
            prefix: self.prefix.clone(),
            mode: self.mode,
            argument: PhantomData,
        }
    }
}

impl<F, T, Mode> fmt::Debug for DynamicCurry<F, T, Mode>
where
    F: VariadicCallable<T>,
    Mode: Capture<T>,
    Mode::Slot: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynamicCurry")
            .field("arity", &self.arity())
            .field("filled", &self.filled())
            .field("mode", &Mode::MODE)
            .field("arguments", &self.prefix)
            .finish_non_exhaustive()
    }
}
