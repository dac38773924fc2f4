//! Ownership modes for captured arguments.
//!
//! Every curry chain is created in exactly one mode, and every node derived
//! from it inherits that mode through its type:
//!
//! | Mode             | Argument supplied as | Stored as | Read at invocation        |
//! |------------------|----------------------|-----------|---------------------------|
//! | [`Owned`]        | `P`                  | `P`       | moved (or cloned on reuse) |
//! | [`Referenced`]   | `&'a P`              | `&'a P`   | cloned from the referent  |
//!
//! In `Owned` mode the node keeps its own copy of each argument, so later
//! changes to the caller's variable are never seen. In `Referenced` mode the
//! node keeps a borrow of the caller's storage and reads it only when the
//! callable is finally invoked; changes made through interior mutability
//! (`Cell`, `RefCell`, atomics) between binding and invocation are observed.
//! The borrow checker guarantees a referenced node never outlives the
//! storage it points to.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use currying::ownership::{Owned, Referenced};
//! use currying::curry_with;
//!
//! fn add(first: Cell<i32>, second: i32) -> i32 {
//!     first.get() + second
//! }
//!
//! let first = Cell::new(1);
//!
//! let owned = curry_with(add, Owned).apply((first.clone(),));
//! let referenced = curry_with(add, Referenced::new()).apply((&first,));
//!
//! first.set(5);
//! assert_eq!(owned.apply((10,)), 11);
//! assert_eq!(referenced.apply((&10,)), 15);
//! ```

use std::marker::PhantomData;

use crate::hlist::{HCons, HNil};

/// Runtime view of a chain's ownership mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OwnershipMode {
    /// Arguments are moved or copied into the node when supplied.
    #[default]
    Owned,
    /// Arguments are borrowed from the caller and read at invocation.
    Referenced,
}

impl std::fmt::Display for OwnershipMode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owned => write!(formatter, "owned"),
            Self::Referenced => write!(formatter, "referenced"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Owned {}
    impl Sealed for super::Referenced<'_> {}
}

/// Type-level ownership marker attached to a curry chain.
///
/// Sealed: the only modes are [`Owned`] and [`Referenced`].
pub trait Ownership: sealed::Sealed + Copy + Default {
    /// The runtime tag for this mode.
    const MODE: OwnershipMode;
}

/// Capture arguments by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Owned;

/// Capture arguments by shared reference, valid for `'a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Referenced<'a>(PhantomData<&'a ()>);

impl Referenced<'_> {
    /// Creates the marker.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl Ownership for Owned {
    const MODE: OwnershipMode = OwnershipMode::Owned;
}

impl Ownership for Referenced<'_> {
    const MODE: OwnershipMode = OwnershipMode::Referenced;
}

/// How a mode stores an argument destined for a parameter of type
/// `Parameter`, and how it turns the stored slot back into that parameter.
pub trait Capture<Parameter>: Ownership {
    /// What the node stores, and what callers supply.
    type Slot;

    /// Produces the parameter value handed to the callable.
    fn release(slot: Self::Slot) -> Parameter;
}

impl<Parameter> Capture<Parameter> for Owned {
    type Slot = Parameter;

    #[inline]
    fn release(slot: Parameter) -> Parameter {
        slot
    }
}

impl<'a, Parameter: Clone + 'a> Capture<Parameter> for Referenced<'a> {
    type Slot = &'a Parameter;

    #[inline]
    fn release(slot: &'a Parameter) -> Parameter {
        slot.clone()
    }
}

/// Element-wise [`Capture::release`] over a whole list of slots.
///
/// `Parameters` is the list of parameter types the slots are released into.
pub trait Release<Mode, Parameters> {
    /// Releases every slot, in order.
    fn release(self) -> Parameters;
}

impl<Mode> Release<Mode, HNil> for HNil {
    #[inline]
    fn release(self) -> HNil {
        HNil
    }
}

impl<Mode, Parameter, Parameters, Slot, Slots> Release<Mode, HCons<Parameter, Parameters>>
    for HCons<Slot, Slots>
where
    Mode: Capture<Parameter, Slot = Slot>,
    Slots: Release<Mode, Parameters>,
{
    #[inline]
    fn release(self) -> HCons<Parameter, Parameters> {
        HCons::new(Mode::release(self.head), self.tail.release())
    }
}
