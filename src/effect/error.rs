//! Error types for the effect system.
//!
//! Modeled failures travel in the `E` slot of `Either` and friends and never
//! need a dedicated type. This module covers the other kind: a failure that
//! the pipeline did not anticipate (a panic inside a task, or a foreign error
//! returned by a future) and that was captured at a boundary such as
//! `TaskEither::try_catch` or `TaskEither::from_future`.

use std::any::Any;
use std::fmt;

/// An unmodeled failure captured at an effect boundary.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::Rejection;
///
/// let rejection = Rejection::new("connection reset");
/// assert_eq!(rejection.message(), "connection reset");
/// assert_eq!(format!("{rejection}"), "task rejected: connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Creates a rejection carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a rejection from the payload of a caught panic.
    ///
    /// `&str` and `String` payloads keep their text; anything else is
    /// reported as an opaque panic.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map_or_else(|| "opaque panic payload".to_string(), |message| (*message).to_string()),
        };
        Self { message }
    }

    /// Builds a rejection from any displayable error.
    pub fn from_error<X: fmt::Display + ?Sized>(error: &X) -> Self {
        Self {
            message: error.to_string(),
        }
    }

    /// The captured failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "task rejected: {}", self.message)
    }
}

impl std::error::Error for Rejection {}
