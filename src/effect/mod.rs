//! Effect types: environment readers and fallible asynchronous computations.
//!
//! # Synchronous
//!
//! - [`Reader`]: computations that read from a borrowed environment
//! - [`Has`]: projection of a part out of a larger environment
//! - [`Rejection`]: an unmodeled failure captured at a boundary
//!
//! # Asynchronous (`async` feature)
//!
//! - [`Task`]: a deferred, re-runnable asynchronous computation
//! - [`TaskEither`]: a `Task` producing an [`Either`](crate::control::Either)
//! - [`ReaderTaskEither`]: a `Reader` producing a `TaskEither`
//! - [`RetryOptions`]: the retry policy used by `retry`
//!
//! Every container registers an instance object (`READER`, `TASK`,
//! `TASK_EITHER`, `READER_TASK_EITHER`) for the generic combinators in
//! [`typeclass`](crate::typeclass).
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::{RetryOptions, TaskEither};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetch = TaskEither::<String, u32>::right(200)
//!         .chain(|status| {
//!             if status == 200 {
//!                 TaskEither::right("ok".to_string())
//!             } else {
//!                 TaskEither::left(format!("status {status}"))
//!             }
//!         })
//!         .retry(RetryOptions::new(2));
//!
//!     assert_eq!(fetch.run().await, Either::right("ok".to_string()));
//! }
//! ```

mod environment;
mod error;
mod reader;

#[cfg(feature = "async")]
mod reader_task_either;
#[cfg(feature = "async")]
mod retry;
#[cfg(feature = "async")]
mod task;
#[cfg(feature = "async")]
mod task_either;

pub use environment::Has;
pub use error::Rejection;
pub use reader::{READER, Reader, ReaderKind};

#[cfg(feature = "async")]
pub use reader_task_either::{READER_TASK_EITHER, ReaderTaskEither, ReaderTaskEitherKind};
#[cfg(feature = "async")]
pub use retry::{ErrorCallback, ErrorPredicate, RetryOptions};
#[cfg(feature = "async")]
pub use task::{TASK, Task, TaskKind};
#[cfg(feature = "async")]
pub use task_either::{TASK_EITHER, TaskEither, TaskEitherKind};
