//! Property-based tests for the Either combinator laws.
//!
//! - **Functor identity**: `either.map(|x| x) == either`
//! - **Functor composition**: `either.map(f).map(g) == either.map(|x| g(f(x)))`
//! - **Monad left identity**: `Either::pure(x).flat_map(f) == f(x)`
//! - **Monad right identity**: `either.flat_map(Either::pure) == either`
//! - **Monad associativity**
//! - **Left absorption**: a `Left` survives any chain of `map`/`flat_map`
//! - **Alternative**: `or`/`lazy_or` pick the first `Right`

#![cfg(feature = "control")]

use lenskit::control::{Either, Side};
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_either_i32() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,10}".prop_map(Either::Left),
    ]
}

fn checked_double(value: i32) -> Either<String, i32> {
    value
        .checked_mul(2)
        .map_or_else(|| Either::Left(format!("{value} overflows")), Either::Right)
}

fn non_negative(value: i32) -> Either<String, i32> {
    if value >= 0 {
        Either::pure(value)
    } else {
        Either::to_left(format!("{value} is negative"))
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity(either in arb_either_i32()) {
        prop_assert_eq!(either.clone().map(|x| x), either);
    }

    #[test]
    fn prop_map_composition(either in arb_either_i32()) {
        let function1 = |n: i32| n.wrapping_add(7);
        let function2 = |n: i32| i64::from(n) * 3;

        let left = either.clone().map(function1).map(function2);
        let right = either.map(|n| function2(function1(n)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flat_map_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::pure(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_flat_map_right_identity(either in arb_either_i32()) {
        prop_assert_eq!(either.clone().flat_map(Either::pure), either);
    }

    #[test]
    fn prop_flat_map_associativity(either in arb_either_i32()) {
        let left = either.clone().flat_map(checked_double).flat_map(non_negative);
        let right = either.flat_map(|n| checked_double(n).flat_map(non_negative));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Short-circuiting
// =============================================================================

proptest! {
    /// A Left keeps its payload through any chain of map/flat_map.
    #[test]
    fn prop_left_absorbs_map_and_flat_map(error in "[a-z]{1,10}", offset in any::<i32>()) {
        let left: Either<String, i32> = Either::Left(error.clone());

        let mapped = left
            .clone()
            .map(|n| n.wrapping_add(offset))
            .map(|n| n.to_string());
        prop_assert_eq!(mapped, Either::Left(error.clone()));

        let chained = left.flat_map(checked_double).flat_map(non_negative);
        prop_assert_eq!(chained.try_from_left().map_err(|mismatch| mismatch.found()), Ok(error));
    }

    #[test]
    fn prop_or_picks_first_right(first in arb_either_i32(), second in arb_either_i32()) {
        let result = first.clone().or(second.clone());
        if first.is_right() {
            prop_assert_eq!(result, first);
        } else {
            prop_assert_eq!(result, second);
        }
    }

    #[test]
    fn prop_lazy_or_agrees_with_or(first in arb_either_i32(), second in arb_either_i32()) {
        let calls = Cell::new(0);
        let lazy = first.clone().lazy_or(|| {
            calls.set(calls.get() + 1);
            second.clone()
        });

        prop_assert_eq!(lazy, first.clone().or(second));
        prop_assert_eq!(calls.get(), usize::from(first.is_left()));
    }

    #[test]
    fn prop_side_matches_tag_queries(either in arb_either_i32()) {
        prop_assert_eq!(either.side() == Side::Left, either.is_left());
        prop_assert_eq!(either.side() == Side::Right, either.is_right());
        prop_assert_eq!(either.clone().left().is_some(), either.is_left());
        let is_right = either.is_right();
        prop_assert_eq!(either.right().is_some(), is_right);
    }

    #[test]
    fn prop_result_conversion_roundtrip(either in arb_either_i32()) {
        let result: Result<i32, String> = either.clone().into();
        prop_assert_eq!(Either::from(result), either);
    }
}
