//! Curry nodes: immutable snapshots of a partially-applied callable.
//!
//! A [`Curry`] holds a shared handle to a [`Callable`], the arguments bound
//! so far (the prefix) and, at the type level, the parameters still missing.
//! Applying arguments either invokes the callable, when they complete the
//! parameter list, or produces a new node with a longer prefix.
//!
//! The decision is made by the compiler. The remaining parameter list is a
//! type; [`Split`] removes the supplied arguments from its front and
//! [`Advance`] picks the outcome from what is left:
//!
//! - nothing left (`HNil`): invoke and return the callable's output
//! - parameters left (`HCons`): return a new `Curry` node
//! - too many arguments: no `Split` implementation, so the program does not
//!   compile
//!
//! # Examples
//!
//! ```rust
//! use currying::curry;
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let curried = curry(add);
//!
//! assert_eq!(curried.apply((10,)).apply((11,)).apply((12,)), 33);
//! assert_eq!(curried.apply((10, 11)).apply((12,)), 33);
//! assert_eq!(curried.apply((10,)).apply((11, 12)), 33);
//! assert_eq!(curried.apply((10, 11, 12)), 33);
//! ```
//!
//! Nodes are persistent: applying never changes the receiver, so one prefix
//! can be continued along several branches.
//!
//! ```rust
//! use currying::curry;
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 {
//!     a + b + c
//! }
//!
//! let ten = curry(add).apply((10,));
//! let ten_eleven = ten.apply((11,));
//!
//! assert_eq!(ten_eleven.apply((12,)), 33);
//! assert_eq!(ten.apply((11, 12)), 33);
//! assert_eq!(ten.apply((1, 2)), 13);
//! ```
//!
//! Supplying more arguments than remain is rejected at compile time:
//!
//! ```compile_fail
//! use currying::curry;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let _ = curry(add).apply((1,)).apply((2, 3));
//! ```

use std::fmt;

use crate::ReferenceCounter;
use crate::callable::Callable;
use crate::hlist::{Concat, HCons, HList, HNil, IntoHList};
use crate::ownership::{Capture, Owned, Ownership, OwnershipMode, Release};

/// An immutable, partially-applied callable.
///
/// # Type Parameters
///
/// * `F` - the callable, shared by every node of the chain
/// * `Parameters` - the callable's full parameter list
/// * `Prefix` - the stored slots of the arguments bound so far
/// * `Remaining` - the parameters still missing (never empty)
/// * `Mode` - the chain's [`Ownership`] mode
pub struct Curry<F, Parameters, Prefix, Remaining, Mode> {
    function: ReferenceCounter<F>,
    prefix: Prefix,
    mode: Mode,
    parameters: std::marker::PhantomData<fn() -> (Parameters, Remaining)>,
}

/// Removes a list of supplied arguments from the front of a parameter list.
///
/// `Rest` is what remains once the arguments are bound. Each argument must be
/// the slot type the chain's `Mode` captures for the matching parameter:
/// the parameter itself in [`Owned`] mode, a shared reference to it in
/// [`Referenced`](crate::ownership::Referenced) mode.
#[diagnostic::on_unimplemented(
    message = "cannot bind `{Arguments}` to the remaining parameters `{Self}`",
    label = "arity exceeded",
    note = "a curry node accepts at most `remaining()` more arguments; the call that supplies the last one invokes the callable"
)]
pub trait Split<Mode, Arguments> {
    /// The parameters left after binding `Arguments`.
    type Rest: HList;
}

impl<Mode, Parameters: HList> Split<Mode, HNil> for Parameters {
    type Rest = Parameters;
}

impl<Mode, Parameter, Parameters, Argument, Arguments> Split<Mode, HCons<Argument, Arguments>>
    for HCons<Parameter, Parameters>
where
    Mode: Capture<Parameter, Slot = Argument>,
    Parameters: Split<Mode, Arguments>,
{
    type Rest = Parameters::Rest;
}

/// Chooses between invocation and a new node, from the parameters left
/// after an application.
///
/// Implemented for [`HNil`] (invoke) and [`HCons`] (curry further).
pub trait Advance<F, Parameters, Mode, Bound> {
    /// The callable's output, or the next node.
    type Output;

    /// Performs the step with the combined prefix `bound`.
    fn advance(function: ReferenceCounter<F>, bound: Bound, mode: Mode) -> Self::Output;
}

impl<F, Parameters, Mode, Bound> Advance<F, Parameters, Mode, Bound> for HNil
where
    F: Callable<Parameters>,
    Parameters: HList,
    Mode: Ownership,
    Bound: Release<Mode, Parameters>,
{
    type Output = <F as Callable<Parameters>>::Output;

    #[inline]
    fn advance(function: ReferenceCounter<F>, bound: Bound, _mode: Mode) -> Self::Output {
        tracing::trace!(
            arity = Parameters::LENGTH,
            mode = %Mode::MODE,
            "invoking curried callable"
        );
        <F as Callable<Parameters>>::invoke(
            &function,
            <Bound as Release<Mode, Parameters>>::release(bound),
        )
    }
}

impl<F, Parameters, Mode, Bound, Head, Tail> Advance<F, Parameters, Mode, Bound>
    for HCons<Head, Tail>
where
    Parameters: HList,
    Mode: Ownership,
    Bound: HList,
    Tail: HList,
{
    type Output = Curry<F, Parameters, Bound, Self, Mode>;

    #[inline]
    fn advance(function: ReferenceCounter<F>, bound: Bound, mode: Mode) -> Self::Output {
        tracing::trace!(
            arity = Parameters::LENGTH,
            filled = Bound::LENGTH,
            remaining = Self::LENGTH,
            mode = %Mode::MODE,
            "extending curry node"
        );
        Curry::from_parts(function, bound, mode)
    }
}

/// The result of applying `Arguments` to a node: the callable's output when
/// they complete the parameter list, otherwise the next [`Curry`] node.
pub type Applied<F, Parameters, Prefix, Remaining, Mode, Arguments> =
    <<Remaining as Split<Mode, <Arguments as IntoHList>::Output>>::Rest as Advance<
        F,
        Parameters,
        Mode,
        <Prefix as Concat<<Arguments as IntoHList>::Output>>::Output,
    >>::Output;

/// Curries `function`, capturing arguments by value.
///
/// Returns the root node: no arguments bound, full remaining arity.
///
/// # Examples
///
/// ```rust
/// use currying::curry;
///
/// let greet = curry(|greeting: &str, name: &str| format!("{greeting}, {name}!"));
/// let hello = greet.apply(("Hello",));
///
/// assert_eq!(hello.apply(("Alice",)), "Hello, Alice!");
/// assert_eq!(hello.apply(("Bob",)), "Hello, Bob!");
/// ```
pub fn curry<F, Parameters>(function: F) -> Curry<F, Parameters, HNil, Parameters, Owned>
where
    F: Callable<Parameters>,
    Parameters: HList,
{
    Curry::new(function, Owned)
}

/// Curries `function` in the given ownership `mode`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use currying::curry_with;
/// use currying::ownership::Referenced;
///
/// fn set(target: &Cell<i32>, value: i32) {
///     target.set(value);
/// }
///
/// let x = Cell::new(5);
/// let target = &x;
/// let set_x = curry_with(set, Referenced::new()).apply((&target,));
///
/// set_x.apply((&10,));
/// assert_eq!(x.get(), 10);
/// set_x.apply((&20,));
/// assert_eq!(x.get(), 20);
/// ```
pub fn curry_with<F, Parameters, Mode>(
    function: F,
    mode: Mode,
) -> Curry<F, Parameters, HNil, Parameters, Mode>
where
    F: Callable<Parameters>,
    Parameters: HList,
    Mode: Ownership,
{
    Curry::new(function, mode)
}

impl<F, Parameters, Mode> Curry<F, Parameters, HNil, Parameters, Mode>
where
    F: Callable<Parameters>,
    Parameters: HList,
    Mode: Ownership,
{
    /// Creates the root node of a chain.
    #[must_use]
    pub fn new(function: F, mode: Mode) -> Self {
        Self::from_parts(ReferenceCounter::new(function), HNil, mode)
    }

    /// Creates a node with `arguments` already bound.
    ///
    /// At least one parameter must stay unbound; binding all of them (or
    /// more) does not compile, since a node never holds a complete argument
    /// list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::Curry;
    /// use currying::ownership::Owned;
    ///
    /// fn volume(width: u32, height: u32, depth: u32) -> u32 {
    ///     width * height * depth
    /// }
    ///
    /// let base = Curry::create(volume, Owned, (2, 3));
    /// assert_eq!(base.filled(), 2);
    /// assert_eq!(base.apply((4,)), 24);
    /// ```
    ///
    /// ```compile_fail
    /// use currying::Curry;
    /// use currying::ownership::Owned;
    ///
    /// fn add(a: i32, b: i32) -> i32 {
    ///     a + b
    /// }
    ///
    /// let _ = Curry::create(add, Owned, (1, 2));
    /// ```
    pub fn create<Arguments, Head, Tail>(
        function: F,
        mode: Mode,
        arguments: Arguments,
    ) -> Curry<F, Parameters, Arguments::Output, HCons<Head, Tail>, Mode>
    where
        Arguments: IntoHList,
        Parameters: Split<Mode, Arguments::Output, Rest = HCons<Head, Tail>>,
        Tail: HList,
    {
        Curry::from_parts(
            ReferenceCounter::new(function),
            arguments.into_hlist(),
            mode,
        )
    }
}

impl<F, Parameters, Prefix, Remaining, Mode> Curry<F, Parameters, Prefix, Remaining, Mode>
where
    Parameters: HList,
    Prefix: HList,
    Remaining: HList,
    Mode: Ownership,
{
    /// Total number of parameters.
    pub const ARITY: usize = Parameters::LENGTH;
    /// Number of bound arguments.
    pub const FILLED: usize = Prefix::LENGTH;
    /// Number of parameters still missing.
    pub const REMAINING: usize = Remaining::LENGTH;

    const fn from_parts(function: ReferenceCounter<F>, prefix: Prefix, mode: Mode) -> Self {
        Self {
            function,
            prefix,
            mode,
            parameters: std::marker::PhantomData,
        }
    }

    /// Applies `arguments`, consuming this node.
    ///
    /// Bound arguments are moved into the invocation or into the next node
    /// without being cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currying::curry;
    ///
    /// fn join(first: String, second: String) -> String {
    ///     first + &second
    /// }
    ///
    /// let joined = curry(join)
    ///     .into_apply((String::from("cur"),))
    ///     .into_apply((String::from("ry"),));
    /// assert_eq!(joined, "curry");
    /// ```
    pub fn into_apply<Arguments>(
        self,
        arguments: Arguments,
    ) -> Applied<F, Parameters, Prefix, Remaining, Mode, Arguments>
    where
        Arguments: IntoHList,
        Remaining: Split<Mode, Arguments::Output>,
        Prefix: Concat<Arguments::Output>,
        <Remaining as Split<Mode, Arguments::Output>>::Rest:
            Advance<F, Parameters, Mode, <Prefix as Concat<Arguments::Output>>::Output>,
    {
        let bound = self.prefix.concat(arguments.into_hlist());
        <<Remaining as Split<Mode, Arguments::Output>>::Rest as Advance<
            F,
            Parameters,
            Mode,
            <Prefix as Concat<Arguments::Output>>::Output,
        >>::advance(self.function, bound, self.mode)
    }

    /// Applies `arguments`, leaving this node usable.
    ///
    /// The bound prefix is cloned (cheap in [`Referenced`] mode, where it is a
    /// list of references) and the callable is shared, never copied.
    ///
    /// [`Referenced`]: crate::ownership::Referenced
    pub fn apply<Arguments>(
        &self,
        arguments: Arguments,
    ) -> Applied<F, Parameters, Prefix, Remaining, Mode, Arguments>
    where
        Prefix: Clone + Concat<Arguments::Output>,
        Arguments: IntoHList,
        Remaining: Split<Mode, Arguments::Output>,
        <Remaining as Split<Mode, Arguments::Output>>::Rest:
            Advance<F, Parameters, Mode, <Prefix as Concat<Arguments::Output>>::Output>,
    {
        self.clone().into_apply(arguments)
    }

    /// Total number of parameters.
    #[inline]
    pub const fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Number of bound arguments.
    #[inline]
    pub const fn filled(&self) -> usize {
        Self::FILLED
    }

    /// Number of parameters still missing; always at least one.
    #[inline]
    pub const fn remaining(&self) -> usize {
        Self::REMAINING
    }

    /// The chain's ownership mode.
    #[inline]
    pub const fn ownership(&self) -> OwnershipMode {
        Mode::MODE
    }

    /// Names of all parameter types, in order.
    pub fn parameter_types(&self) -> Vec<&'static str> {
        Parameters::type_names()
    }

    /// Names of the parameter types still missing, in order.
    pub fn remaining_types(&self) -> Vec<&'static str> {
        Remaining::type_names()
    }

    /// The shared callable.
    #[inline]
    pub fn function(&self) -> &F {
        &self.function
    }

    /// The bound argument slots.
    #[inline]
    pub const fn arguments(&self) -> &Prefix {
        &self.prefix
    }

    /// Returns `true` when `other` belongs to the same chain, i.e. shares
    /// this node's callable.
    pub fn shares_function_with<OtherPrefix, OtherRemaining>(
        &self,
        other: &Curry<F, Parameters, OtherPrefix, OtherRemaining, Mode>,
    ) -> bool {
        ReferenceCounter::ptr_eq(&self.function, &other.function)
    }
}

impl<F, Parameters, Prefix, Remaining, Mode> Clone for Curry<F, Parameters, Prefix, Remaining, Mode>
where
    Prefix: Clone,
    Mode: Copy,
{
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            prefix: self.prefix.clone(),
            mode: self.mode,
            parameters: std::marker::PhantomData,
        }
    }
}

impl<F, Parameters, Prefix, Remaining, Mode> fmt::Debug for Curry<F, Parameters, Prefix, Remaining, Mode>
where
    Parameters: HList,
    Prefix: HList + fmt::Debug,
    Remaining: HList,
    Mode: Ownership,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curry")
            .field("arity", &Parameters::LENGTH)
            .field("filled", &Prefix::LENGTH)
            .field("remaining", &Remaining::LENGTH)
            .field("mode", &Mode::MODE)
            .field("arguments", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(
    Curry<fn(i32, i32) -> i32, crate::HList![i32, i32], crate::HList![i32], crate::HList![i32], Owned>: Send, Sync
);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(
    Curry<fn(i32, i32) -> i32, crate::HList![i32, i32], crate::HList![i32], crate::HList![i32], Owned>: Send, Sync
);
