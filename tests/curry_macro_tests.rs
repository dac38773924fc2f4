//! Integration tests for the `curry!` procedural macro.

use std::cell::Cell;

use currying::curry;
use currying::ownership::OwnershipMode;
use rstest::rstest;

fn add(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

mod math {
    pub fn scale(value: f64, factor: f64) -> f64 {
        value * factor
    }
}

// =============================================================================
// Closure Form
// =============================================================================

mod closure_form_tests {
    use super::*;

    #[rstest]
    fn test_annotated_closure() {
        let curried = curry!(|a: i32, b: i32| a - b);
        assert_eq!(curried.apply((10,)).apply((3,)), 7);
    }

    #[rstest]
    fn test_parameter_types_inferred_from_body() {
        let curried = curry!(|a, b, c| add(a, b, c));

        assert_eq!(curried.arity(), 3);
        assert_eq!(curried.parameter_types(), vec!["i32", "i32", "i32"]);
        assert_eq!(curried.apply((10, 11)).apply((12,)), 33);
    }

    #[rstest]
    fn test_unary_closure() {
        let curried = curry!(|text: &str| text.len());
        assert_eq!(curried.apply(("curry",)), 5);
    }

    #[rstest]
    fn test_move_closure_with_capture() {
        let offset = 100;
        let curried = curry!(move |a: i32, b: i32| a + b + offset);
        assert_eq!(curried.apply((1,)).apply((2,)), 103);
    }

    #[rstest]
    fn test_defaults_to_owned_mode() {
        let curried = curry!(|a: u8, b: u8| a + b);
        assert_eq!(curried.ownership(), OwnershipMode::Owned);
    }
}

// =============================================================================
// Function Path Form
// =============================================================================

mod path_form_tests {
    use super::*;

    #[rstest]
    fn test_function_name_with_arity() {
        let curried = curry!(add, 3);

        assert_eq!(curried.apply((10,)).apply((11,)).apply((12,)), 33);
        assert_eq!(curried.apply((10, 11, 12)), 33);
    }

    #[rstest]
    fn test_module_path_with_arity() {
        let curried = curry!(math::scale, 2);
        let double = curried.apply((2.0,));

        assert!((double.apply((21.0,)) - 42.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_trailing_comma() {
        let curried = curry!(add, 3,);
        assert_eq!(curried.remaining(), 3);
    }
}

// =============================================================================
// Ownership Prefix
// =============================================================================

mod ownership_prefix_tests {
    use super::*;

    #[rstest]
    fn test_explicit_owned_prefix() {
        let curried = curry!(owned => add, 3);
        assert_eq!(curried.ownership(), OwnershipMode::Owned);
        assert_eq!(curried.apply((1, 2, 3)), 6);
    }

    #[rstest]
    fn test_referenced_prefix_reads_at_invocation() {
        let base = Cell::new(1);
        let curried = curry!(referenced => |value: Cell<i32>, delta: i32| value.get() + delta);
        let bound = curried.apply((&base,));

        base.set(30);
        assert_eq!(bound.apply((&3,)), 33);
        assert_eq!(bound.ownership(), OwnershipMode::Referenced);
    }

    #[rstest]
    fn test_referenced_prefix_with_path() {
        let (a, b, c) = (10, 11, 12);
        let curried = curry!(referenced => add, 3);
        assert_eq!(curried.apply((&a, &b)).apply((&c,)), 33);
    }
}
