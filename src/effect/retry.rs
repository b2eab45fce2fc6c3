//! Retry configuration for `TaskEither::retry` and `ReaderTaskEither::retry`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A shared callback observing a failure.
pub type ErrorCallback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A shared predicate over a failure.
pub type ErrorPredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// How a failed computation is re-attempted.
///
/// Options are plain data: they describe the policy and are consulted by the
/// retrying combinator after every failed attempt.
///
/// - `max_retries`: additional attempts after the first one
/// - `delay`: pause before each additional attempt
/// - `on_error`: called with every failure that is about to be retried
/// - `skip_if`: failures matching the predicate are returned immediately
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use kindred::effect::RetryOptions;
///
/// let options = RetryOptions::<String>::new(3)
///     .with_delay(Duration::from_millis(100))
///     .skip_if(|error| error == "fatal");
///
/// assert_eq!(options.max_retries(), 3);
/// assert_eq!(options.delay(), Some(Duration::from_millis(100)));
/// assert!(options.should_skip(&"fatal".to_string()));
/// assert!(!options.should_skip(&"busy".to_string()));
/// ```
pub struct RetryOptions<E> {
    max_retries: usize,
    delay: Option<Duration>,
    on_error: Option<ErrorCallback<E>>,
    skip_if: Option<ErrorPredicate<E>>,
}

impl<E> RetryOptions<E> {
    /// Retries up to `max_retries` times, immediately, without hooks.
    #[must_use]
    pub const fn new(max_retries: usize) -> Self {
        Self {
            max_retries,
            delay: None,
            on_error: None,
            skip_if: None,
        }
    }

    /// Waits `delay` before each additional attempt.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Observes every failure that will be retried.
    #[must_use]
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Returns failures matching `predicate` without retrying them.
    #[must_use]
    pub fn skip_if<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.skip_if = Some(Arc::new(predicate));
        self
    }

    /// The number of additional attempts.
    #[must_use]
    pub const fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// The pause before each additional attempt.
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Whether `error` bypasses retrying.
    pub fn should_skip(&self, error: &E) -> bool {
        self.skip_if.as_ref().is_some_and(|predicate| predicate(error))
    }

    pub(crate) fn notify(&self, error: &E) {
        if let Some(callback) = &self.on_error {
            callback(error);
        }
    }
}

impl<E> Clone for RetryOptions<E> {
    fn clone(&self) -> Self {
        Self {
            max_retries: self.max_retries,
            delay: self.delay,
            on_error: self.on_error.clone(),
            skip_if: self.skip_if.clone(),
        }
    }
}

impl<E> fmt::Debug for RetryOptions<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RetryOptions")
            .field("max_retries", &self.max_retries)
            .field("delay", &self.delay)
            .field("on_error", &self.on_error.is_some())
            .field("skip_if", &self.skip_if.is_some())
            .finish()
    }
}
