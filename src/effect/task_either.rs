//! `TaskEither` - an asynchronous computation that can fail with a typed error.
//!
//! `TaskEither<E, A>` is a [`Task`] producing an [`Either<E, A>`]. Its
//! evaluation has two levels: the asynchronous one (pending, then settled)
//! and the logical one (`Left` failure or `Right` success). The combinators
//! here interleave both:
//!
//! - `chain` runs its steps in order and never starts the continuation once
//!   a `Left` has been produced.
//! - `apply` starts both operands at once and only then combines them with
//!   [`Either::apply`], so the function side's failure wins.
//! - `retry` re-runs the source on `Left` under a [`RetryOptions`] policy.
//! - detached taps spawn side computations that can never fail the pipeline.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::TaskEither;
//!
//! #[tokio::main]
//! async fn main() {
//!     let parsed: TaskEither<String, i32> = TaskEither::right("42".to_string())
//!         .chain(|text| match text.parse::<i32>() {
//!             Ok(number) => TaskEither::right(number),
//!             Err(error) => TaskEither::left(error.to_string()),
//!         })
//!         .map(|number| number + 1);
//!
//!     assert_eq!(parsed.run().await, Either::right(43));
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};

use super::error::Rejection;
use super::retry::RetryOptions;
use super::task::Task;
use crate::control::Either;
use crate::trace::{log_debug, log_trace, log_warn};
use crate::typeclass::{
    Applicative2, Bifunctor, ConcurrencyConfig, Delayable2, Functor2, Kind2, Monad2,
    sequence_object2,
};

type FailureCallback<E> = Arc<dyn Fn(E) + Send + Sync>;

/// An asynchronous computation that fails with `E` or succeeds with `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `TaskEither::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(TaskEither::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub struct TaskEither<E, A> {
    task: Task<Either<E, A>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<E, A> TaskEither<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates a `TaskEither` from a factory of futures resolving to an `Either`.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self {
            task: Task::new(action),
        }
    }

    /// Creates a computation that succeeds with `value`.
    pub fn right(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || future::ready(Either::Right(value.clone())))
    }

    /// Alias of [`TaskEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::right(value)
    }

    /// Creates a computation that fails with `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || future::ready(Either::Left(error.clone())))
    }

    /// Lifts an already-known result.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self {
            task: Task::of(either),
        }
    }

    /// Lifts a task whose result is a success.
    pub fn right_task(task: Task<A>) -> Self {
        Self {
            task: task.map(Either::Right),
        }
    }

    /// Lifts a task whose result is a failure.
    pub fn left_task(task: Task<E>) -> Self {
        Self {
            task: task.map(Either::Left),
        }
    }

    /// Runs `task` and turns a panic inside it into a failure built by `on_error`.
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::effect::{Task, TaskEither};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let guarded = TaskEither::try_catch(Task::<i32>::rejected("disk full"), |rejection| {
    ///         rejection.message().to_string()
    ///     });
    ///     assert_eq!(guarded.run().await, Either::left("disk full".to_string()));
    /// }
    /// ```
    pub fn try_catch<F>(task: Task<A>, on_error: F) -> Self
    where
        F: Fn(Rejection) -> E + Send + Sync + 'static,
    {
        let on_error = Arc::new(on_error);
        Self::new(move || {
            let on_error = Arc::clone(&on_error);
            AssertUnwindSafe(task.run())
                .catch_unwind()
                .map(move |outcome| match outcome {
                    Ok(value) => Either::Right(value),
                    Err(payload) => {
                        let rejection = Rejection::from_panic(payload);
                        log_trace!(reason = rejection.message(), "captured task panic");
                        Either::Left(on_error(rejection))
                    }
                })
        })
    }

    /// Wraps an asynchronous function that already reports failures as `Either`.
    pub fn taskify_either<Args, F, Fut>(
        function: F,
    ) -> impl Fn(Args) -> Self + Send + Sync + 'static
    where
        Args: Clone + Send + Sync + 'static,
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        let function = Arc::new(function);
        move |arguments: Args| {
            let function = Arc::clone(&function);
            Self::new(move || function(arguments.clone()))
        }
    }

    /// Starts a fresh run.
    pub fn run(&self) -> BoxFuture<'static, Either<E, A>> {
        self.task.run()
    }

    /// Returns the underlying task.
    #[must_use]
    pub fn into_task(self) -> Task<Either<E, A>> {
        self.task
    }
}

impl<A> TaskEither<Rejection, A>
where
    A: Send + 'static,
{
    /// Lifts a task, capturing a panic inside it as a [`Rejection`].
    pub fn from_task(task: Task<A>) -> Self {
        Self::try_catch(task, |rejection| rejection)
    }

    /// Lifts a factory of fallible futures.
    ///
    /// Both an `Err` result and a panic become a [`Rejection`].
    ///
    /// ```rust
    /// use kindred::effect::TaskEither;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let parsed = TaskEither::from_future(|| async { "12".parse::<u8>() });
    ///     assert_eq!(parsed.run().await.to_option(), Some(12));
    ///
    ///     let broken = TaskEither::from_future(|| async { "x".parse::<u8>() });
    ///     assert!(broken.run().await.is_left());
    /// }
    /// ```
    pub fn from_future<F, Fut, X>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
        X: fmt::Display,
    {
        Self::new(move || {
            AssertUnwindSafe(factory())
                .catch_unwind()
                .map(|outcome| match outcome {
                    Ok(Ok(value)) => Either::Right(value),
                    Ok(Err(error)) => Either::Left(Rejection::from_error(&error)),
                    Err(payload) => {
                        let rejection = Rejection::from_panic(payload);
                        log_trace!(reason = rejection.message(), "captured future panic");
                        Either::Left(rejection)
                    }
                })
        })
    }

    /// Wraps a fallible asynchronous function; each call yields a `TaskEither`.
    ///
    /// Multiple arguments are passed as one tuple.
    pub fn taskify<Args, F, Fut, X>(function: F) -> impl Fn(Args) -> Self + Send + Sync + 'static
    where
        Args: Clone + Send + Sync + 'static,
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
        X: fmt::Display,
    {
        let function = Arc::new(function);
        move |arguments: Args| {
            let function = Arc::clone(&function);
            Self::from_future(move || function(arguments.clone()))
        }
    }
}

// =============================================================================
// Functor / Bifunctor
// =============================================================================

impl<E, A> TaskEither<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Transforms the success value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> TaskEither<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.map(&function)),
        }
    }

    /// Transforms the failure.
    #[must_use]
    pub fn map_left<E2, F>(self, function: F) -> TaskEither<E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        TaskEither {
            task: self.task.map(move |either| either.map_left(&function)),
        }
    }

    /// Transforms whichever side is produced.
    #[must_use]
    pub fn bimap<E2, B, F, G>(self, left_function: F, right_function: G) -> TaskEither<E2, B>
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        TaskEither {
            task: self
                .task
                .map(move |either| either.bimap(&left_function, &right_function)),
        }
    }

    /// Converts the failure into a wider error type.
    #[must_use]
    pub fn widen_error<E2>(self) -> TaskEither<E2, A>
    where
        E2: From<E> + Send + 'static,
    {
        self.map_left(E2::from)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Runs the computation returned by `function` after a success.
    ///
    /// A `Left` short-circuits: `function` is not called and nothing more is awaited.
    #[must_use]
    pub fn chain<B, F>(self, function: F) -> TaskEither<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let function = Arc::clone(&function);
            self.run().then(move |either| {
                either.fold(
                    |error| future::ready(Either::Left(error)).boxed(),
                    |value| function(value).run(),
                )
            })
        })
    }

    /// Like [`TaskEither::chain`], but the continuation may fail with another
    /// error type. Both errors are widened into `E3`.
    #[must_use]
    pub fn chainw<E2, E3, B, F>(self, function: F) -> TaskEither<E3, B>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> TaskEither<E2, B> + Send + Sync + 'static,
    {
        self.widen_error::<E3>()
            .chain(move |value| function(value).widen_error())
    }

    /// Recovers from a failure with a computation of the same type.
    #[must_use]
    pub fn chain_left<F>(self, function: F) -> Self
    where
        F: Fn(E) -> Self + Send + Sync + 'static,
    {
        self.or_else(function)
    }

    /// Recovers from a failure with a computation that may fail differently.
    #[must_use]
    pub fn or_else<E2, F>(self, function: F) -> TaskEither<E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> TaskEither<E2, A> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let function = Arc::clone(&function);
            self.run().then(move |either| {
                either.fold(
                    |error| function(error).run(),
                    |value| future::ready(Either::Right(value)).boxed(),
                )
            })
        })
    }

    /// Falls back to `other` when this computation fails.
    #[must_use]
    pub fn alt(self, other: Self) -> Self {
        self.or_else(move |_| other.clone())
    }

    /// Runs the computation built by `function` from the success value and
    /// keeps the original value. A failure of that computation is propagated.
    #[must_use]
    pub fn tchain<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: Fn(&A) -> TaskEither<E, B> + Send + Sync + 'static,
    {
        self.tap_te(function)
    }

    /// Applies the function produced by `function` to this computation's value.
    ///
    /// Both computations are started before either is awaited; if both fail,
    /// the failure of `function` is kept.
    #[must_use]
    pub fn apply<B, F>(self, function: TaskEither<E, F>) -> TaskEither<E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        TaskEither::new(move || {
            let function = function.run();
            let value = self.run();
            async move {
                let (function, value) = tokio::join!(function, value);
                value.apply(function)
            }
        })
    }

    /// Like [`TaskEither::apply`] with differing error types, widened into `E3`.
    #[must_use]
    pub fn applyw<E2, E3, B, F>(self, function: TaskEither<E2, F>) -> TaskEither<E3, B>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        self.widen_error::<E3>().apply(function.widen_error())
    }

    /// Sequential variant of [`TaskEither::apply`]: `function` settles first,
    /// and this computation only starts if it succeeded.
    #[must_use]
    pub fn sapply<B, F>(self, function: TaskEither<E, F>) -> TaskEither<E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        TaskEither::new(move || {
            let function = function.run();
            let value = self.clone();
            async move {
                match function.await {
                    Either::Left(error) => Either::Left(error),
                    Either::Right(function) => value.run().await.map(function),
                }
            }
        })
    }

    /// Like [`TaskEither::sapply`] with differing error types, widened into `E3`.
    #[must_use]
    pub fn sapplyw<E2, E3, B, F>(self, function: TaskEither<E2, F>) -> TaskEither<E3, B>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        self.widen_error::<E3>().sapply(function.widen_error())
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Observes the success value.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self {
            task: self.task.map(move |either| either.tap(&function)),
        }
    }

    /// Observes the failure.
    #[must_use]
    pub fn tap_left<F>(self, function: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self {
            task: self.task.map(move |either| either.tap_left(&function)),
        }
    }

    /// Runs a side computation on success and waits for it.
    ///
    /// Its value is discarded; its failure replaces the result (widened into `E3`).
    #[must_use]
    pub fn tap_te<E2, E3, B, F>(self, function: F) -> TaskEither<E3, A>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> TaskEither<E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let function = Arc::clone(&function);
            let source = self.run();
            async move {
                match source.await {
                    Either::Left(error) => Either::Left(E3::from(error)),
                    Either::Right(value) => match function(&value).run().await {
                        Either::Left(error) => Either::Left(E3::from(error)),
                        Either::Right(_) => Either::Right(value),
                    },
                }
            }
        })
    }

    /// Runs a side computation on failure and waits for it.
    ///
    /// The original failure is kept whatever the side computation produces.
    #[must_use]
    pub fn tap_left_te<E2, E3, B, F>(self, function: F) -> TaskEither<E3, A>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> TaskEither<E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        TaskEither::new(move || {
            let function = Arc::clone(&function);
            let source = self.run();
            async move {
                match source.await {
                    Either::Left(error) => {
                        let _ = function(&error).run().await;
                        Either::Left(E3::from(error))
                    }
                    Either::Right(value) => Either::Right(value),
                }
            }
        })
    }

    /// Spawns a side computation on success without waiting for it.
    ///
    /// The result flows through unchanged. A failure of the side computation
    /// is logged at `warn` level.
    #[must_use]
    pub fn tap_te_detached<E2, B, F>(self, function: F) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> TaskEither<E2, B> + Send + Sync + 'static,
    {
        self.detached(Some(Arc::new(function)), None, None)
    }

    /// Like [`TaskEither::tap_te_detached`], reporting side failures to `on_error`.
    #[must_use]
    pub fn tap_te_detached_with<E2, B, F, H>(self, function: F, on_error: H) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> TaskEither<E2, B> + Send + Sync + 'static,
        H: Fn(E2) + Send + Sync + 'static,
    {
        self.detached(Some(Arc::new(function)), None, Some(Arc::new(on_error)))
    }

    /// Spawns a side computation on failure without waiting for it.
    #[must_use]
    pub fn tap_left_te_detached<E2, B, F>(self, function: F) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> TaskEither<E2, B> + Send + Sync + 'static,
    {
        self.detached(None, Some(Arc::new(function)), None)
    }

    /// Like [`TaskEither::tap_left_te_detached`], reporting side failures to `on_error`.
    #[must_use]
    pub fn tap_left_te_detached_with<E2, B, F, H>(self, function: F, on_error: H) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> TaskEither<E2, B> + Send + Sync + 'static,
        H: Fn(E2) + Send + Sync + 'static,
    {
        self.detached(None, Some(Arc::new(function)), Some(Arc::new(on_error)))
    }

    #[allow(clippy::type_complexity)]
    fn detached<E2, B>(
        self,
        on_right: Option<Arc<dyn Fn(&A) -> TaskEither<E2, B> + Send + Sync>>,
        on_left: Option<Arc<dyn Fn(&E) -> TaskEither<E2, B> + Send + Sync>>,
        on_error: Option<FailureCallback<E2>>,
    ) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
    {
        Self::new(move || {
            let on_right = on_right.clone();
            let on_left = on_left.clone();
            let on_error = on_error.clone();
            self.run().map(move |either| {
                let side = match (&either, on_right, on_left) {
                    (Either::Right(value), Some(function), _) => Some(function(value)),
                    (Either::Left(error), _, Some(function)) => Some(function(error)),
                    _ => None,
                };
                if let Some(side) = side {
                    spawn_detached(side, on_error);
                }
                either
            })
        })
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// Settles the computation, then waits `duration` before yielding its result.
    #[must_use]
    pub fn delay(self, duration: Duration) -> Self {
        Self {
            task: self.task.delay(duration),
        }
    }

    /// Re-runs the computation after a failure, as described by `options`.
    ///
    /// The attempt counter starts at zero and is compared with
    /// `max_retries` before every additional attempt. A failure matching
    /// `skip_if` is returned at once. Otherwise `on_error` is called, the
    /// configured delay elapses, and the computation runs again. When the
    /// retries are exhausted the last failure is returned.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use kindred::control::Either;
    /// use kindred::effect::{RetryOptions, TaskEither};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let attempts = Arc::new(AtomicUsize::new(0));
    ///     let counter = Arc::clone(&attempts);
    ///     let flaky = TaskEither::<String, u32>::new(move || {
    ///         let attempt = counter.fetch_add(1, Ordering::SeqCst);
    ///         async move {
    ///             if attempt < 2 { Either::left("busy".to_string()) } else { Either::right(7) }
    ///         }
    ///     });
    ///
    ///     let result = flaky.retry(RetryOptions::new(5)).run().await;
    ///     assert_eq!(result, Either::right(7));
    ///     assert_eq!(attempts.load(Ordering::SeqCst), 3);
    /// }
    /// ```
    #[must_use]
    pub fn retry(self, options: RetryOptions<E>) -> Self {
        Self::new(move || {
            let source = self.clone();
            let options = options.clone();
            async move {
                let mut attempt = 0_usize;
                loop {
                    let error = match source.run().await {
                        Either::Right(value) => return Either::Right(value),
                        Either::Left(error) => error,
                    };
                    if options.should_skip(&error) || attempt >= options.max_retries() {
                        return Either::Left(error);
                    }
                    options.notify(&error);
                    attempt += 1;
                    log_debug!(
                        attempt,
                        max_retries = options.max_retries(),
                        "retrying failed computation"
                    );
                    if let Some(duration) = options.delay() {
                        tokio::time::sleep(duration).await;
                    }
                }
            }
        })
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Reduces both outcomes to a single value.
    #[must_use]
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(E) -> B + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.task
            .map(move |either| either.fold(&on_left, &on_right))
    }

    /// Yields the success value, or one computed from the failure.
    #[must_use]
    pub fn get_or_else<F>(self, function: F) -> Task<A>
    where
        F: Fn(E) -> A + Send + Sync + 'static,
    {
        self.task.map(move |either| either.get_or_else(&function))
    }

    /// Yields the success value as an `Option`.
    #[must_use]
    pub fn to_option(self) -> Task<Option<A>> {
        self.task.map(Either::to_option)
    }

    /// Runs the computation and converts its outcome into a `Result`.
    pub fn to_result(&self) -> BoxFuture<'static, Result<A, E>> {
        self.run().map(Result::from).boxed()
    }
}

impl<A> TaskEither<A, A>
where
    A: Send + 'static,
{
    /// Settles to whichever value is present when both sides share a type.
    #[must_use]
    pub fn into_inner(self) -> Task<A> {
        self.task.map(Either::into_inner)
    }
}

impl<E, A> TaskEither<E, TaskEither<E, A>>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Removes one level of nesting; a failure at either level propagates.
    #[must_use]
    pub fn join(self) -> TaskEither<E, A> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Batch Execution
// =============================================================================

impl<E, A> TaskEither<E, A>
where
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
{
    /// Runs the computations one after another and collects their values in order.
    ///
    /// The first failure stops the sequence; later computations are not started.
    /// The items are awaited in one loop, so the input length does not grow
    /// the stack.
    pub fn sequence_array(items: Vec<Self>) -> TaskEither<E, Vec<A>> {
        let items: Arc<[Self]> = items.into();
        TaskEither::new(move || {
            let items = Arc::clone(&items);
            async move {
                let mut values = Vec::with_capacity(items.len());
                for item in items.iter() {
                    match item.run().await {
                        Either::Left(error) => return Either::Left(error),
                        Either::Right(value) => values.push(value),
                    }
                }
                Either::Right(values)
            }
        })
    }

    /// Runs keyed computations concurrently and collects them into a map.
    pub fn sequence_object<K, I>(items: I) -> TaskEither<E, BTreeMap<K, A>>
    where
        K: Ord + Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (K, Self)>,
    {
        sequence_object2(TASK_EITHER, items)
    }

    /// Runs the computations in windows of `config.concurrency()`.
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::effect::TaskEither;
    /// use kindred::typeclass::ConcurrencyConfig;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let items: Vec<TaskEither<String, i32>> = (1..=5).map(TaskEither::right).collect();
    ///     let collected = TaskEither::concurrency(&ConcurrencyConfig::new(2), items);
    ///     assert_eq!(collected.run().await, Either::right(vec![1, 2, 3, 4, 5]));
    /// }
    /// ```
    pub fn concurrency(config: &ConcurrencyConfig, items: Vec<Self>) -> TaskEither<E, Vec<A>> {
        let config = *config;
        let items: Arc<[Self]> = items.into();
        TaskEither::new(move || {
            let items = Arc::clone(&items);
            async move {
                let mut values = Vec::with_capacity(items.len());
                for (index, window) in items.chunks(config.concurrency()).enumerate() {
                    if index > 0
                        && let Some(duration) = config.delay()
                    {
                        tokio::time::sleep(duration).await;
                    }
                    log_debug!(window = index, size = window.len(), "scheduling concurrency window");
                    let settled = future::join_all(window.iter().map(Self::run)).await;
                    for either in settled {
                        match either {
                            Either::Left(error) => return Either::Left(error),
                            Either::Right(value) => values.push(value),
                        }
                    }
                }
                Either::Right(values)
            }
        })
    }
}

fn spawn_detached<E2, B>(side: TaskEither<E2, B>, on_error: Option<FailureCallback<E2>>)
where
    E2: Send + 'static,
    B: Send + 'static,
{
    let running = side.run();
    tokio::spawn(async move {
        if let Either::Left(error) = running.await {
            match on_error {
                Some(callback) => callback(error),
                None => {
                    log_warn!(
                        error_type = std::any::type_name::<E2>(),
                        "detached side computation failed"
                    );
                }
            }
        }
    });
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<E, A> Clone for TaskEither<E, A> {
    fn clone(&self) -> Self {
        Self {
            task: self.task.clone(),
        }
    }
}

impl<E, A> fmt::Display for TaskEither<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<TaskEither>")
    }
}

impl<E, A> fmt::Debug for TaskEither<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TaskEither").finish_non_exhaustive()
    }
}

impl<E, A> From<Task<Either<E, A>>> for TaskEither<E, A> {
    fn from(task: Task<Either<E, A>>) -> Self {
        Self { task }
    }
}

impl<E, A> IntoFuture for TaskEither<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output = Either<E, A>;
    type IntoFuture = BoxFuture<'static, Either<E, A>>;

    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}

static_assertions::assert_impl_all!(TaskEither<String, i32>: Send, Sync, Clone);

// =============================================================================
// Kind Registration
// =============================================================================

/// Registry tag for [`TaskEither`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaskEitherKind;

/// The `TaskEither` instance object.
pub const TASK_EITHER: TaskEitherKind = TaskEitherKind;

impl Kind2 for TaskEitherKind {
    type Of<E, A> = TaskEither<E, A>;
}

impl Functor2 for TaskEitherKind {
    fn map<E, A, B, F>(self, fa: TaskEither<E, A>, function: F) -> TaskEither<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

impl Applicative2 for TaskEitherKind {
    fn of<E, A>(self, value: A) -> TaskEither<E, A>
    where
        E: Send + 'static,
        A: Clone + Send + Sync + 'static,
    {
        TaskEither::right(value)
    }

    fn apply<E, A, B, F>(self, ff: TaskEither<E, F>, fa: TaskEither<E, A>) -> TaskEither<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.apply(ff)
    }
}

impl Monad2 for TaskEitherKind {
    fn chain<E, A, B, F>(self, fa: TaskEither<E, A>, function: F) -> TaskEither<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
    {
        fa.chain(function)
    }
}

impl Bifunctor for TaskEitherKind {
    fn bimap<E, A, E2, B, F, G>(self, fa: TaskEither<E, A>, left: F, right: G) -> TaskEither<E2, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.bimap(left, right)
    }
}

impl Delayable2 for TaskEitherKind {
    fn delay<E, A>(self, fa: TaskEither<E, A>, duration: Duration) -> TaskEither<E, A>
    where
        E: Send + 'static,
        A: Send + 'static,
    {
        fa.delay(duration)
    }
}
