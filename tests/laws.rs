//! Property tests for the algebraic laws of the public surface.
//!
//! 1. Equality is reflexive and symmetric; equal values hash equal.
//! 2. Exactly one case predicate holds and it agrees with the
//!    discriminator and with `fold` dispatch.
//! 3. `map` and `map_failure` over the identity function are identity.
//! 4. Aggregation keeps every failure in input order and every success in
//!    input order, and never mixes the two.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use coprod::{aggregate_all, Coproduct3, Maybe, Outcome};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn arb_coproduct() -> impl Strategy<Value = Coproduct3<i64, String, bool>> {
    prop_oneof![
        any::<i64>().prop_map(Coproduct3::First),
        ".*".prop_map(Coproduct3::Second),
        any::<bool>().prop_map(Coproduct3::Third),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::Success),
        ".*".prop_map(Outcome::Failure),
    ]
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_hash_consistent(v in arb_coproduct()) {
        prop_assert_eq!(v.clone(), v.clone());
        prop_assert_eq!(hash_of(&v), hash_of(&v.clone()));
    }

    #[test]
    fn exactly_one_case_predicate_holds(v in arb_coproduct()) {
        let index = v.case_index();
        prop_assert!((1..=3).contains(&index));
        let hits = [v.is_first(), v.is_second(), v.is_third()]
            .iter()
            .filter(|hit| **hit)
            .count();
        prop_assert_eq!(hits, 1);
        let predicate_for_index = match index {
            1 => v.is_first(),
            2 => v.is_second(),
            _ => v.is_third(),
        };
        prop_assert!(predicate_for_index);
    }

    #[test]
    fn fold_agrees_with_the_discriminator(v in arb_coproduct()) {
        let index = v.clone().fold(|_| 1u8, |_| 2, |_| 3);
        prop_assert_eq!(index, v.case_index());
    }

    #[test]
    fn projections_agree_with_predicates(v in arb_coproduct()) {
        prop_assert_eq!(v.as_first().is_present(), v.is_first());
        prop_assert_eq!(v.as_second().is_present(), v.is_second());
        prop_assert_eq!(v.as_third().is_present(), v.is_third());
    }

    #[test]
    fn identity_maps_are_identity(t in arb_outcome()) {
        prop_assert_eq!(t.clone().map(|v| v), t.clone());
        prop_assert_eq!(t.clone().map_failure(|e| e), t);
    }

    #[test]
    fn get_or_else_agrees_with_option(n in any::<Option<i64>>(), fallback in any::<i64>()) {
        let maybe = Maybe::from(n);
        prop_assert_eq!(maybe.get_or_else(|| fallback), n.unwrap_or(fallback));
    }

    #[test]
    fn aggregation_splits_by_case_and_keeps_order(
        outcomes in proptest::collection::vec(arb_outcome(), 0..8),
    ) {
        let expected_failures: Vec<String> = outcomes
            .iter()
            .filter_map(|t| t.clone().failure_value().into_option())
            .collect();
        let expected_successes: Vec<i64> = outcomes
            .iter()
            .filter_map(|t| t.clone().success_value().into_option())
            .collect();

        match aggregate_all(outcomes) {
            Outcome::Success(values) => {
                prop_assert!(expected_failures.is_empty());
                prop_assert_eq!(values, expected_successes);
            }
            Outcome::Failure(errors) => {
                prop_assert_eq!(errors.into_vec(), expected_failures);
            }
        }
    }
}
