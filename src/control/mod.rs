//! Control structures.
//!
//! - [`Either`]: a modeled failure (`Left`) or a success (`Right`), registered
//!   under [`EitherKind`] with the instance object [`EITHER`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{EITHER, Either};
//! use kindred::typeclass::{Functor2, Monad2};
//!
//! let value: Either<String, i32> = Either::right(2);
//! let result = EITHER.chain(EITHER.map(value, |n| n + 1), |n| Either::right(n * 3));
//! assert_eq!(result, Either::right(9));
//! ```

mod either;

pub use either::{EITHER, Either, EitherKind};
