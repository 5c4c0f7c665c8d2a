//! Merging independently produced outcomes while keeping every failure.
//!
//! [`Outcome::and_then`] sequences dependent steps and stops at the first
//! failure. The functions here do the opposite for independent steps:
//! every input is inspected unconditionally, the failures of all failing
//! inputs are reported in input order, and the combining function runs
//! only when every input succeeded. Failure order always matches input
//! order, so validation messages never reorder relative to the fields
//! that produced them.

use alloc::vec::Vec;

use crate::errors::Errors;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

fn record<E>(failures: Maybe<Errors<E>>, error: E) -> Maybe<Errors<E>> {
    Maybe::Present(match failures {
        Maybe::Present(mut errors) => {
            errors.push(error);
            errors
        }
        Maybe::Absent => Errors::of(error),
    })
}

macro_rules! define_aggregate {
    (
        $(#[$meta:meta])*
        $fname:ident => $( ($t:ident, $a:ident, $A:ident) ),+ $(,)?
    ) => {
        $(#[$meta])*
        pub fn $fname<$($A,)+ E, R>(
            $($t: Outcome<$A, E>,)+
            combine: impl FnOnce($($A),+) -> R,
        ) -> Outcome<R, Errors<E>> {
            match ($($t,)+) {
                ($(Outcome::Success($a),)+) => Outcome::Success(combine($($a),+)),
                ($($t,)+) => {
                    let mut failures = Maybe::Absent;
                    $(
                        if let Outcome::Failure(error) = $t {
                            failures = record(failures, error);
                        }
                    )+
                    match failures {
                        Maybe::Present(errors) => Outcome::Failure(errors),
                        // the all-success tuple matched the first arm
                        Maybe::Absent => unreachable!("no failing input"),
                    }
                }
            }
        }
    };
}

define_aggregate! {
    /// Merges two independently produced outcomes.
    ///
    /// Both inputs are inspected unconditionally. When both are successes,
    /// `combine` runs once with their values in input order; otherwise the
    /// result carries every failure, in input order and without
    /// deduplication, and `combine` never runs.
    ///
    /// ```rust
    /// use coprod::{aggregate2, Maybe, Outcome};
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(2);
    /// let bad: Outcome<i32, &str> = Outcome::failure("nope");
    /// let merged = aggregate2(ok, bad, |a, b| a + b);
    /// assert_eq!(
    ///     merged.failure_value().map(|errors| errors.into_vec()),
    ///     Maybe::Present(vec!["nope"]),
    /// );
    /// ```
    aggregate2 => (t1, a1, A1), (t2, a2, A2),
}

define_aggregate! {
    /// Merges three independently produced outcomes; see [`aggregate2`].
    aggregate3 => (t1, a1, A1), (t2, a2, A2), (t3, a3, A3),
}

define_aggregate! {
    /// Merges four independently produced outcomes; see [`aggregate2`].
    aggregate4 => (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4),
}

define_aggregate! {
    /// Merges five independently produced outcomes; see [`aggregate2`].
    aggregate5 => (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4), (t5, a5, A5),
}

define_aggregate! {
    /// Merges six independently produced outcomes; see [`aggregate2`].
    aggregate6 =>
        (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4), (t5, a5, A5), (t6, a6, A6),
}

define_aggregate! {
    /// Merges seven independently produced outcomes; see [`aggregate2`].
    aggregate7 =>
        (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4), (t5, a5, A5), (t6, a6, A6),
        (t7, a7, A7),
}

define_aggregate! {
    /// Merges eight independently produced outcomes; see [`aggregate2`].
    aggregate8 =>
        (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4), (t5, a5, A5), (t6, a6, A6),
        (t7, a7, A7), (t8, a8, A8),
}

define_aggregate! {
    /// Merges nine independently produced outcomes; see [`aggregate2`].
    aggregate9 =>
        (t1, a1, A1), (t2, a2, A2), (t3, a3, A3), (t4, a4, A4), (t5, a5, A5), (t6, a6, A6),
        (t7, a7, A7), (t8, a8, A8), (t9, a9, A9),
}

/// Merges a runtime-determined number of outcomes of one element type.
///
/// Same rule as the fixed-arity forms: all successes in input order when
/// every input succeeded, otherwise every failure in input order. An empty
/// input merges to an empty success.
pub fn aggregate_all<T, E>(
    outcomes: impl IntoIterator<Item = Outcome<T, E>>,
) -> Outcome<Vec<T>, Errors<E>> {
    let mut successes = Vec::new();
    let mut failures = Maybe::Absent;
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(error) => failures = record(failures, error),
        }
    }
    match failures {
        Maybe::Present(errors) => Outcome::Failure(errors),
        Maybe::Absent => Outcome::Success(successes),
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, Errors<E>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        aggregate_all(iter)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn failures_arrive_in_input_order() {
        let a: Outcome<i32, &str> = Outcome::success(1);
        let b: Outcome<i32, &str> = Outcome::failure("x");
        let c: Outcome<i32, &str> = Outcome::failure("y");
        let combined = Cell::new(false);
        let merged = aggregate3(a, b, c, |_, _, _| combined.set(true));
        assert_eq!(
            merged.failure_value().map(Errors::into_vec),
            Maybe::Present(vec!["x", "y"])
        );
        assert!(!combined.get());
    }

    #[test]
    fn all_successes_combine_in_input_order() {
        let merged = aggregate3(
            Outcome::<i32, &str>::success(1),
            Outcome::<i32, &str>::success(2),
            Outcome::<i32, &str>::success(3),
            |a, b, c| a + b + c,
        );
        assert_eq!(merged, Outcome::Success(6));
    }

    #[test]
    fn wide_aggregation_keeps_every_failure() {
        let merged = aggregate9(
            Outcome::<i32, i32>::failure(1),
            Outcome::<i32, i32>::success(0),
            Outcome::<i32, i32>::failure(3),
            Outcome::<i32, i32>::success(0),
            Outcome::<i32, i32>::failure(5),
            Outcome::<i32, i32>::success(0),
            Outcome::<i32, i32>::failure(7),
            Outcome::<i32, i32>::success(0),
            Outcome::<i32, i32>::failure(9),
            |_, _, _, _, _, _, _, _, _| 0,
        );
        assert_eq!(
            merged.failure_value().map(Errors::into_vec),
            Maybe::Present(vec![1, 3, 5, 7, 9])
        );
    }

    #[test]
    fn homogeneous_aggregation() {
        let all: Outcome<Vec<i32>, Errors<String>> =
            aggregate_all([Outcome::success(1), Outcome::success(2)]);
        assert_eq!(all, Outcome::Success(vec![1, 2]));

        let failed: Outcome<Vec<i32>, Errors<String>> = aggregate_all([
            Outcome::failure("a".to_string()),
            Outcome::success(1),
            Outcome::failure("b".to_string()),
        ]);
        assert_eq!(
            failed.failure_value().map(Errors::into_vec),
            Maybe::Present(vec!["a".to_string(), "b".to_string()])
        );

        let empty: Outcome<Vec<i32>, Errors<String>> = aggregate_all([]);
        assert_eq!(empty, Outcome::Success(Vec::new()));
    }

    #[test]
    fn collect_aggregates() {
        let outcomes = vec![Outcome::<i32, &str>::success(1), Outcome::failure("x")];
        let collected: Outcome<Vec<i32>, Errors<&str>> = outcomes.into_iter().collect();
        assert_eq!(
            collected.failure_value().map(Errors::into_vec),
            Maybe::Present(vec!["x"])
        );
    }

    #[test]
    fn nested_aggregation_flattens_to_the_element_type() {
        let left = aggregate2(
            Outcome::<i32, &str>::failure("a"),
            Outcome::<i32, &str>::failure("b"),
            |x, y| x + y,
        );
        let right = aggregate2(
            Outcome::<i32, &str>::success(1),
            Outcome::<i32, &str>::failure("c"),
            |x, y| x + y,
        );
        let nested = aggregate2(left, right, |x, y| x * y).map_failure(Errors::flatten);
        assert_eq!(
            nested.failure_value().map(Errors::into_vec),
            Maybe::Present(vec!["a", "b", "c"])
        );
    }

    #[test]
    fn ensure_post_filters_an_aggregated_success() {
        let merged = aggregate2(
            Outcome::<i32, &str>::success(2),
            Outcome::<i32, &str>::success(3),
            |a, b| a + b,
        )
        .ensure(|sum| *sum > 10, |_| Errors::of("too small"));
        assert_eq!(
            merged.failure_value().map(Errors::into_vec),
            Maybe::Present(vec!["too small"])
        );
    }
}
