#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod macros;

pub mod aggregate;
pub mod coproduct;
pub mod errors;
pub mod maybe;
pub mod outcome;

pub use self::aggregate::{
    aggregate2, aggregate3, aggregate4, aggregate5, aggregate6, aggregate7, aggregate8,
    aggregate9, aggregate_all,
};
pub use self::coproduct::{
    Coproduct0, Coproduct1, Coproduct2, Coproduct3, Coproduct4, Coproduct5, Coproduct6,
    Coproduct7, Coproduct8, Coproduct9,
};
pub use self::errors::Errors;
pub use self::maybe::Maybe;
pub use self::outcome::Outcome;
