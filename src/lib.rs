//! # kindred
//!
//! Typed effects for Rust: `Either`, `Task`, `TaskEither`, `Reader` and
//! `ReaderTaskEither`, together with a kind registry that lets one generic
//! combinator work over all of them.
//!
//! ## Overview
//!
//! - **Kind registry**: zero-sized tags standing for type constructors,
//!   with `Functor`, `Applicative`, `Monad`, `Bifunctor`, `Profunctor` and
//!   `Delayable` implemented per tag
//! - **Generic combinators**: `sequence_array`, `sequence_object`,
//!   `sequence_t*` and bounded-concurrency `concurrency`
//! - **Either**: synchronous success-or-failure values
//! - **Task / `TaskEither`**: deferred asynchronous computations on tokio,
//!   with typed failures, retry and detached side effects
//! - **Reader / `ReaderTaskEither`**: environment-dependent computations with
//!   environment intersection through [`effect::Has`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: kind registry, type classes and generic combinators
//! - `control`: `Either`
//! - `effect`: `Reader`, `Has`, `Rejection`
//! - `async`: `Task`, `TaskEither`, `ReaderTaskEither` (tokio)
//! - `tracing`: debug/warn/trace events through the `tracing` crate
//! - `serde`: `Serialize`/`Deserialize` for configuration values
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let lookups: Vec<TaskEither<String, i32>> = (1..=4).map(TaskEither::right).collect();
//!     let collected = TaskEither::concurrency(&ConcurrencyConfig::new(2), lookups);
//!     assert_eq!(collected.run().await, Either::right(vec![1, 2, 3, 4]));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

mod trace;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
