//! The fixed-arity coproduct family.
//!
//! Every member is a plain enum whose variants are named by ordinal
//! (`First`, `Second`, ...), generated by one `define_coproduct!`
//! definition applied once per arity. The discriminator is the enum tag
//! itself: a value is constructed as exactly one case, never changes case,
//! and projecting a case the shape does not have is a type error rather
//! than a runtime branch.
//!
//! Two shapes with different case lists are different types, so they can
//! never compare equal; within one shape, comparison and hashing go
//! tag-first, then the active payload.

use core::fmt;

use crate::maybe::Maybe;

macro_rules! define_coproduct {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal,
        $( ($variant:ident, $ty:ident, $fty:ident, $idx:literal, $on:ident,
            $is:ident, $into:ident, $as_:ident, $inspect:ident) ),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name<$($ty),+> {
            $(
                #[doc = concat!("Case ", stringify!($idx), ".")]
                $variant($ty),
            )+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// The number of cases of this shape.
            pub const ARITY: u8 = $arity;

            /// The 1-based index of the active case.
            ///
            /// Always in `1..=Self::ARITY`, fixed at construction.
            pub fn case_index(&self) -> u8 {
                match self {
                    $( Self::$variant(_) => $idx, )+
                }
            }

            /// Applies the handler for the active case.
            ///
            /// Exactly one handler runs and its result is returned. One
            /// handler per case is required by the signature, so the
            /// dispatch is exhaustive by construction; prefer this over
            /// chains of case predicates.
            pub fn fold<R, $($fty),+>(self, $($on: $fty),+) -> R
            where
                $($fty: FnOnce($ty) -> R,)+
            {
                match self {
                    $( Self::$variant(value) => $on(value), )+
                }
            }

            $(
                #[doc = concat!("Whether the `", stringify!($variant), "` case is active.")]
                #[allow(unreachable_patterns)]
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[doc = concat!("Projects the `", stringify!($variant), "` case, consuming `self`; absent when another case is active.")]
                #[allow(unreachable_patterns)]
                pub fn $into(self) -> Maybe<$ty> {
                    match self {
                        Self::$variant(value) => Maybe::Present(value),
                        _ => Maybe::Absent,
                    }
                }

                #[doc = concat!("Projects the `", stringify!($variant), "` case by reference; absent when another case is active.")]
                #[allow(unreachable_patterns)]
                pub fn $as_(&self) -> Maybe<&$ty> {
                    match self {
                        Self::$variant(value) => Maybe::Present(value),
                        _ => Maybe::Absent,
                    }
                }

                #[doc = concat!("Runs `f` on the `", stringify!($variant), "` value when that case is active, then returns `self`; a no-op for every other case.")]
                #[allow(unreachable_patterns)]
                pub fn $inspect(self, f: impl FnOnce(&$ty)) -> Self {
                    match &self {
                        Self::$variant(value) => f(value),
                        _ => {}
                    }
                    self
                }
            )+
        }

        impl<$($ty: fmt::Debug),+> fmt::Debug for $name<$($ty),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$variant(value) => f
                            .debug_tuple(concat!(stringify!($name), "::", stringify!($variant)))
                            .field(value)
                            .finish(),
                    )+
                }
            }
        }

        impl<$($ty: fmt::Display),+> fmt::Display for $name<$($ty),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(value) => fmt::Display::fmt(value, f), )+
                }
            }
        }
    };
}

/// The coproduct of no alternatives.
///
/// Uninhabited: no value of this type can exist, so holding one proves the
/// surrounding branch is dead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Coproduct0 {}

impl Coproduct0 {
    /// The number of cases of this shape.
    pub const ARITY: u8 = 0;

    /// Concludes any computation that somehow holds an empty coproduct.
    pub fn unreachable(self) -> ! {
        match self {}
    }
}

define_coproduct! {
    /// A value of exactly one alternative.
    Coproduct1, 1,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
}

define_coproduct! {
    /// A value that is exactly one of two alternatives.
    Coproduct2, 2,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
}

define_coproduct! {
    /// A value that is exactly one of three alternatives.
    Coproduct3, 3,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
}

define_coproduct! {
    /// A value that is exactly one of four alternatives.
    Coproduct4, 4,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
}

define_coproduct! {
    /// A value that is exactly one of five alternatives.
    Coproduct5, 5,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
    (Fifth, T5, F5, 5, on_fifth, is_fifth, into_fifth, as_fifth, inspect_fifth),
}

define_coproduct! {
    /// A value that is exactly one of six alternatives.
    Coproduct6, 6,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
    (Fifth, T5, F5, 5, on_fifth, is_fifth, into_fifth, as_fifth, inspect_fifth),
    (Sixth, T6, F6, 6, on_sixth, is_sixth, into_sixth, as_sixth, inspect_sixth),
}

define_coproduct! {
    /// A value that is exactly one of seven alternatives.
    Coproduct7, 7,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
    (Fifth, T5, F5, 5, on_fifth, is_fifth, into_fifth, as_fifth, inspect_fifth),
    (Sixth, T6, F6, 6, on_sixth, is_sixth, into_sixth, as_sixth, inspect_sixth),
    (Seventh, T7, F7, 7, on_seventh, is_seventh, into_seventh, as_seventh, inspect_seventh),
}

define_coproduct! {
    /// A value that is exactly one of eight alternatives.
    Coproduct8, 8,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
    (Fifth, T5, F5, 5, on_fifth, is_fifth, into_fifth, as_fifth, inspect_fifth),
    (Sixth, T6, F6, 6, on_sixth, is_sixth, into_sixth, as_sixth, inspect_sixth),
    (Seventh, T7, F7, 7, on_seventh, is_seventh, into_seventh, as_seventh, inspect_seventh),
    (Eighth, T8, F8, 8, on_eighth, is_eighth, into_eighth, as_eighth, inspect_eighth),
}

define_coproduct! {
    /// A value that is exactly one of nine alternatives.
    Coproduct9, 9,
    (First, T1, F1, 1, on_first, is_first, into_first, as_first, inspect_first),
    (Second, T2, F2, 2, on_second, is_second, into_second, as_second, inspect_second),
    (Third, T3, F3, 3, on_third, is_third, into_third, as_third, inspect_third),
    (Fourth, T4, F4, 4, on_fourth, is_fourth, into_fourth, as_fourth, inspect_fourth),
    (Fifth, T5, F5, 5, on_fifth, is_fifth, into_fifth, as_fifth, inspect_fifth),
    (Sixth, T6, F6, 6, on_sixth, is_sixth, into_sixth, as_sixth, inspect_sixth),
    (Seventh, T7, F7, 7, on_seventh, is_seventh, into_seventh, as_seventh, inspect_seventh),
    (Eighth, T8, F8, 8, on_eighth, is_eighth, into_eighth, as_eighth, inspect_eighth),
    (Ninth, T9, F9, 9, on_ninth, is_ninth, into_ninth, as_ninth, inspect_ninth),
}

impl<T> Coproduct1<T> {
    /// Returns the single possible value.
    pub fn into_inner(self) -> T {
        match self {
            Self::First(value) => value,
        }
    }
}

impl<T> From<T> for Coproduct1<T> {
    /// Wraps a value as the only case of a one-alternative coproduct.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coprod::Coproduct1;
    ///
    /// let wrapped = Coproduct1::from(42);
    /// assert_eq!(wrapped.into_inner(), 42);
    /// ```
    fn from(value: T) -> Self {
        Self::First(value)
    }
}
