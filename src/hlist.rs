//! Type-level argument lists.
//!
//! A curry node has to know, at compile time, which parameters are already
//! bound and which are still missing. Both are represented as heterogeneous
//! lists built from [`HNil`] and [`HCons`]:
//!
//! - `HNil` - the empty list
//! - `HCons<H, T>` - a list with `H` prepended to the list `T`
//!
//! The public API takes plain tuples; [`IntoHList`] converts them.
//!
//! # Examples
//!
//! ```rust
//! use currying::hlist::{HCons, HNil, IntoHList};
//! use currying::{HList, hlist};
//!
//! type Parameters = HList![i32, String];
//!
//! let list: Parameters = hlist![1, "one".to_string()];
//! assert_eq!(list.head, 1);
//! assert_eq!(Parameters::LENGTH, 2);
//!
//! let converted: HCons<i32, HCons<bool, HNil>> = (7, true).into_hlist();
//! assert!(converted.tail.head);
//! ```

use std::any::type_name;

/// The empty argument list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct HNil;

/// A non-empty argument list: `head` followed by the list `tail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct HCons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    /// Creates a list with `head` prepended to `tail`.
    #[inline]
    #[must_use]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

/// Common behaviour of [`HNil`] and [`HCons`].
pub trait HList: Sized {
    /// Number of elements, known at compile time.
    const LENGTH: usize;

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        Self::LENGTH
    }

    /// Returns `true` for [`HNil`].
    #[inline]
    fn is_empty(&self) -> bool {
        Self::LENGTH == 0
    }

    /// Prepends `head`, producing a longer list.
    #[inline]
    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons::new(head, self)
    }

    /// Returns the names of the element types, in order.
    fn type_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LENGTH);
        Self::collect_type_names(&mut names);
        names
    }

    #[doc(hidden)]
    fn collect_type_names(names: &mut Vec<&'static str>);
}

impl HList for HNil {
    const LENGTH: usize = 0;

    #[inline]
    fn collect_type_names(_names: &mut Vec<&'static str>) {}
}

impl<H, T: HList> HList for HCons<H, T> {
    const LENGTH: usize = 1 + T::LENGTH;

    fn collect_type_names(names: &mut Vec<&'static str>) {
        names.push(type_name::<H>());
        T::collect_type_names(names);
    }
}

/// Appends one list to another, preserving order.
///
/// `hlist![a, b].concat(hlist![c]) == hlist![a, b, c]`
pub trait Concat<Rhs> {
    /// The concatenated list type.
    type Output: HList;

    /// Appends `rhs` after the elements of `self`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: HList> Concat<Rhs> for HNil {
    type Output = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for HCons<H, T>
where
    T: Concat<Rhs>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        HCons::new(self.head, self.tail.concat(rhs))
    }
}

/// Conversion from a tuple (or a list) into an argument list.
///
/// Implemented for tuples of up to eight elements, including `()`.
pub trait IntoHList {
    /// The resulting list type.
    type Output: HList;

    /// Performs the conversion.
    fn into_hlist(self) -> Self::Output;
}

impl IntoHList for HNil {
    type Output = Self;

    #[inline]
    fn into_hlist(self) -> Self {
        self
    }
}

impl<H, T: HList> IntoHList for HCons<H, T> {
    type Output = Self;

    #[inline]
    fn into_hlist(self) -> Self {
        self
    }
}

macro_rules! impl_into_hlist_for_tuple {
    ($($element:ident),*) => {
        impl<$($element),*> IntoHList for ($($element,)*) {
            type Output = crate::HList![$($element),*];

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_hlist(self) -> Self::Output {
                let ($($element,)*) = self;
                crate::hlist![$($element),*]
            }
        }
    };
}

impl_into_hlist_for_tuple!();
impl_into_hlist_for_tuple!(A0);
impl_into_hlist_for_tuple!(A0, A1);
impl_into_hlist_for_tuple!(A0, A1, A2);
impl_into_hlist_for_tuple!(A0, A1, A2, A3);
impl_into_hlist_for_tuple!(A0, A1, A2, A3, A4);
impl_into_hlist_for_tuple!(A0, A1, A2, A3, A4, A5);
impl_into_hlist_for_tuple!(A0, A1, A2, A3, A4, A5, A6);
impl_into_hlist_for_tuple!(A0, A1, A2, A3, A4, A5, A6, A7);

/// Builds an argument list type from element types.
///
/// # Examples
///
/// ```rust
/// use currying::HList;
/// use currying::hlist::{HCons, HNil};
///
/// fn same<T>(_: T, _: T) {}
///
/// let expected: HCons<u8, HCons<&str, HNil>> = HCons::new(1, HCons::new("a", HNil));
/// let built: HList![u8, &str] = HCons::new(1, HCons::new("a", HNil));
/// same(expected, built);
/// ```
#[macro_export]
macro_rules! HList {
    () => { $crate::hlist::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($tail),*)>
    };
}

/// Builds an argument list value from expressions.
///
/// ```rust
/// use currying::hlist;
/// use currying::hlist::HList;
///
/// let list = hlist![1, 'x', "three"];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.tail.head, 'x');
/// ```
#[macro_export]
macro_rules! hlist {
    () => { $crate::hlist::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons::new($head, $crate::hlist!($($tail),*))
    };
}

/// Destructures an argument list in pattern position.
///
/// ```rust
/// use currying::{hlist, hlist_pat};
///
/// let hlist_pat![first, second] = hlist![10, 20];
/// assert_eq!(first + second, 30);
/// ```
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::hlist::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::hlist::HCons { head: $head, tail: $crate::hlist_pat!($($tail),*) }
    };
}
