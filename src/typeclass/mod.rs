//! Kind registry and type-class traits.
//!
//! Rust has no higher-kinded generics, so the crate emulates them with a
//! registry of zero-sized tags (see [`higher`]). Every effect module registers
//! its container under a fresh tag and implements the type classes for it.
//! The tag values (`OPTION`, `EITHER`, `TASK_EITHER`, ...) are the instance
//! objects handed to the generic combinators in this module.
//!
//! ## Type Classes
//!
//! | Arity 1 | Arity 2 | Arity 3 |
//! |---|---|---|
//! | [`Functor`] | [`Functor2`], [`Bifunctor`], [`Profunctor`] | [`Functor3`] |
//! | [`Applicative`] | [`Applicative2`] | [`Applicative3`] |
//! | [`Monad`] | [`Monad2`] | [`Monad3`] |
//! | [`Delayable`] | [`Delayable2`] | [`Delayable3`] |
//!
//! ## Generic Combinators
//!
//! - [`sequence_array`], [`sequence_array2`]: ordered, sequential collection
//! - [`sequence_object`], [`sequence_object2`]: keyed collection
//! - [`sequence_t2`], [`sequence_t3`], [`sequence_t4`]: heterogeneous tuples
//! - [`concurrency`], [`concurrency2`]: windowed batches paced by [`ConcurrencyConfig`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, Monad, OPTION};
//!
//! fn increment_all<F: Functor>(tag: F, fa: F::Of<i32>) -> F::Of<i32> {
//!     tag.map(fa, |n| n + 1)
//! }
//!
//! assert_eq!(increment_all(OPTION, Some(1)), Some(2));
//! assert_eq!(OPTION.chain(Some(2), |n: i32| Some(n * 10)), Some(20));
//! ```

mod applicative;
mod bifunctor;
mod concurrency;
mod delayable;
mod functor;
pub mod higher;
mod monad;
mod profunctor;
mod sequence;

pub use applicative::{Applicative, Applicative2, Applicative3};
pub use bifunctor::Bifunctor;
pub use concurrency::{ConcurrencyConfig, concurrency, concurrency2};
pub use delayable::{Delayable, Delayable2, Delayable3};
pub use functor::{Functor, Functor2, Functor3};
pub use higher::{Kind, Kind2, Kind3, OPTION, OptionKind};
pub use monad::{Monad, Monad2, Monad3};
pub use profunctor::Profunctor;
pub use sequence::{
    sequence_array, sequence_array2, sequence_object, sequence_object2, sequence_t2, sequence_t3,
    sequence_t4,
};
