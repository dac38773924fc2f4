//! Property-based tests for currying laws.
//!
//! ## Application Laws
//! - **Equivalence**: `curry(f).apply((a, b, c)) == f(a, b, c)`
//! - **Associativity**: every partition of the argument list into groups
//!   yields the same result
//! - **Persistence**: applying to a node never changes what it later yields
//!
//! ## Ownership Laws
//! - **Owned snapshot**: values bound in owned mode are unaffected by later
//!   writes to the caller's storage
//! - **Referenced read-through**: values bound in referenced mode reflect
//!   the caller's storage at invocation time

use std::cell::Cell;

use currying::prelude::*;
use proptest::prelude::*;

fn combine(a: i64, b: i64, c: i64, d: i64) -> i64 {
    a.wrapping_mul(7)
        .wrapping_add(b.wrapping_mul(5))
        .wrapping_add(c.wrapping_mul(3))
        .wrapping_add(d)
}

// =============================================================================
// Application Laws
// =============================================================================

proptest! {
    /// Equivalence: a single full application matches a direct call.
    #[test]
    fn prop_full_application_matches_direct_call(
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        d in any::<i64>(),
    ) {
        prop_assert_eq!(curry(combine).apply((a, b, c, d)), combine(a, b, c, d));
    }

    /// Associativity: all eight partitions of four arguments agree.
    #[test]
    fn prop_every_partition_agrees(
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        d in any::<i64>(),
    ) {
        let curried = curry(combine);
        let expected = combine(a, b, c, d);

        prop_assert_eq!(curried.apply((a,)).apply((b,)).apply((c,)).apply((d,)), expected);
        prop_assert_eq!(curried.apply((a,)).apply((b,)).apply((c, d)), expected);
        prop_assert_eq!(curried.apply((a,)).apply((b, c)).apply((d,)), expected);
        prop_assert_eq!(curried.apply((a,)).apply((b, c, d)), expected);
        prop_assert_eq!(curried.apply((a, b)).apply((c,)).apply((d,)), expected);
        prop_assert_eq!(curried.apply((a, b)).apply((c, d)), expected);
        prop_assert_eq!(curried.apply((a, b, c)).apply((d,)), expected);
        prop_assert_eq!(curried.apply((a, b, c, d)), expected);
    }

    /// Persistence: a node yields the same result before and after branching.
    #[test]
    fn prop_application_does_not_modify_node(
        prefix in any::<i64>(),
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        let node = curry(combine).apply((prefix, prefix));
        let before = node.apply((first, second));
        let _branch = node.apply((second,));
        let after = node.apply((first, second));

        prop_assert_eq!(before, after);
    }

    /// Counts: filled and remaining always sum to the arity.
    #[test]
    fn prop_counts_are_consistent(a in any::<i64>(), b in any::<i64>()) {
        let one = curry(combine).apply((a,));
        let two = one.apply((b,));

        prop_assert_eq!(one.filled() + one.remaining(), one.arity());
        prop_assert_eq!(two.filled() + two.remaining(), two.arity());
        prop_assert_eq!(two.remaining() + 1, one.remaining());
    }

    /// Equivalence holds for non-Copy arguments moved through the chain.
    #[test]
    fn prop_strings_concatenate_in_order(
        first in "[a-z]{0,8}",
        second in "[a-z]{0,8}",
        third in "[a-z]{0,8}",
    ) {
        let join = |a: String, b: String, c: String| a + &b + &c;
        let expected = format!("{first}{second}{third}");

        let result = curry(join)
            .into_apply((first,))
            .into_apply((second, third));
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Ownership Laws
// =============================================================================

proptest! {
    /// Owned snapshot: writes after binding are not observed.
    #[test]
    fn prop_owned_ignores_later_writes(initial in any::<i32>(), updated in any::<i32>()) {
        let read = |value: Cell<i32>, offset: i32| value.get().wrapping_add(offset);
        let source = Cell::new(initial);
        let node = curry(read).apply((source.clone(),));
        source.set(updated);

        prop_assert_eq!(node.apply((0,)), initial);
    }

    /// Referenced read-through: writes after binding are observed.
    #[test]
    fn prop_referenced_observes_later_writes(initial in any::<i32>(), updated in any::<i32>()) {
        let read = |value: Cell<i32>, offset: i32| value.get().wrapping_add(offset);
        let source = Cell::new(initial);
        let node = curry_with(read, Referenced::new()).apply((&source,));
        prop_assert_eq!(node.apply((&0,)), initial);

        source.set(updated);
        prop_assert_eq!(node.apply((&0,)), updated);
    }

    /// For plain values both modes compute the same result.
    #[test]
    fn prop_modes_agree_on_plain_values(
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        d in any::<i64>(),
    ) {
        let owned = curry(combine).apply((a, b)).apply((c, d));
        let referenced = curry_with(combine, Referenced::new()).apply((&a, &b)).apply((&c, &d));

        prop_assert_eq!(owned, referenced);
    }
}
