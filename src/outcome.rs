//! The success-or-failure value and its combinators.

use core::fmt;

use crate::coproduct::Coproduct2;
use crate::maybe::Maybe;

/// The result of a fallible computation: a success value or a typed domain
/// failure.
///
/// Failures are ordinary values threaded explicitly; nothing here catches a
/// panic, and none of the combinators ever discards a failure silently.
/// Construction is always explicit via [`Outcome::success`] or
/// [`Outcome::failure`]; there is no implicit conversion between the two
/// cases.
///
/// [`Outcome::and_then`] sequences dependent steps and stops at the first
/// failure; the [`crate::aggregate`] module merges independent outcomes and
/// keeps every failure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a domain error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps a failure value.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Whether this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether this is a failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, consuming `self`; absent on failure.
    pub fn success_value(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// The failure value, consuming `self`; absent on success.
    pub fn failure_value(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(error) => Maybe::Present(error),
        }
    }

    /// Borrows the success value; absent on failure.
    pub fn as_success(&self) -> Maybe<&T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// Borrows the failure value; absent on success.
    pub fn as_failure(&self) -> Maybe<&E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(error) => Maybe::Present(error),
        }
    }

    /// Exhaustive dispatch over both cases.
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Transforms the success value; a failure passes through untouched and
    /// `f` never runs.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value; a success passes through untouched and
    /// `f` never runs.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Sequences a dependent fallible step.
    ///
    /// On success the next step's outcome is returned as-is; on failure the
    /// original failure propagates and `f` never runs. Later steps therefore
    /// only run when every earlier step succeeded; for the collect-every-
    /// failure alternative see [`crate::aggregate`].
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Demotes a success whose value fails the predicate.
    ///
    /// On an existing failure the predicate is never evaluated and the
    /// failure passes through unchanged.
    pub fn ensure(
        self,
        predicate: impl FnOnce(&T) -> bool,
        on_false: impl FnOnce(T) -> E,
    ) -> Self {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(on_false(value))
                }
            }
            failure => failure,
        }
    }

    /// The success value, or a panic rendering the failure.
    ///
    /// Escape hatch for call sites that have already exhausted the option of
    /// branching; prefer [`Outcome::fold`] or a `match`.
    pub fn get_or_raise(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("failure treated as success: {error:?}"),
        }
    }

    /// Like [`Outcome::get_or_raise`], mapping the failure before raising.
    pub fn get_or_raise_with<M>(self, f: impl FnOnce(E) -> M) -> T
    where
        M: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                let mapped = f(error);
                panic!("failure treated as success: {mapped:?}")
            }
        }
    }

    /// Runs an operation whose anticipated failures are declared as `E`.
    ///
    /// The declared failure class is the `E` in the operation's signature;
    /// only that class is converted into the failure case. Anything the
    /// operation panics with is outside the declared class and propagates
    /// uncaught.
    pub fn catching(op: impl FnOnce() -> Result<T, E>) -> Self {
        op().into()
    }

    /// Like [`Outcome::catching`], recovering a declared failure back into a
    /// success via `recover`.
    pub fn catching_or(op: impl FnOnce() -> Result<T, E>, recover: impl FnOnce(E) -> T) -> Self {
        match op() {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Success(recover(error)),
        }
    }

    /// Converts into the standard library's result type.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// The same value as a two-case coproduct, success first.
    pub fn into_coproduct(self) -> Coproduct2<T, E> {
        match self {
            Outcome::Success(value) => Coproduct2::First(value),
            Outcome::Failure(error) => Coproduct2::Second(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Coproduct2<T, E>> for Outcome<T, E> {
    fn from(coproduct: Coproduct2<T, E>) -> Self {
        match coproduct {
            Coproduct2::First(value) => Outcome::Success(value),
            Coproduct2::Second(error) => Outcome::Failure(error),
        }
    }
}
