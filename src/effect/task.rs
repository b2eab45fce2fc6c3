//! Task - a deferred, re-runnable asynchronous computation.
//!
//! A `Task<A>` describes how to produce an `A` asynchronously. Nothing happens
//! until the task is run; every run builds a fresh future, so the same task
//! can be awaited any number of times.
//!
//! A task is assumed never to fail. An unexpected failure is a panic inside
//! its future, which `map`, `chain` and `apply` let through untouched. Use
//! `TaskEither::try_catch` at the boundary to turn it into a value.
//!
//! # Concurrency
//!
//! `chain` runs its steps strictly one after another. `apply` and `map2` start
//! both operands before awaiting either and join them with `tokio::join!`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Task;
//!
//! #[tokio::main]
//! async fn main() {
//!     let task = Task::of(10)
//!         .map(|n| n * 2)
//!         .chain(|n| Task::of(n + 1));
//!
//!     assert_eq!(task.run().await, 21);
//!     assert_eq!(task.await, 21);
//! }
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};

use crate::typeclass::{Applicative, Delayable, Functor, Kind, Monad};

/// A deferred asynchronous computation producing an `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Task::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Task::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub struct Task<A> {
    run_function: Arc<dyn Fn() -> BoxFuture<'static, A> + Send + Sync>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Task<A>
where
    A: Send + 'static,
{
    /// Creates a task from a future factory. The factory is called on every run.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use kindred::effect::Task;
    ///
    /// let task = Task::new(|| async {
    ///     tokio::time::sleep(Duration::from_millis(10)).await;
    ///     42
    /// });
    /// # drop(task);
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_function: Arc::new(move || action().boxed()),
        }
    }

    /// Creates an already-resolved task.
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || future::ready(value.clone()))
    }

    /// Creates a task that panics with `message` when run.
    ///
    /// This stands for an asynchronous operation that rejects. Capture it
    /// with `TaskEither::try_catch` or `TaskEither::from_task`.
    pub fn rejected(message: impl Into<String>) -> Self {
        let message: Arc<str> = Arc::from(message.into());
        Self::new(move || reject(Arc::clone(&message)))
    }

    /// Wraps an asynchronous function so that each call yields a task.
    ///
    /// Multiple arguments are passed as one tuple.
    ///
    /// ```rust
    /// use kindred::effect::Task;
    ///
    /// async fn add(pair: (i32, i32)) -> i32 {
    ///     pair.0 + pair.1
    /// }
    ///
    /// let add_task = Task::taskify(add);
    /// let task: Task<i32> = add_task((1, 2));
    /// # drop(task);
    /// ```
    pub fn taskify<Args, F, Fut>(function: F) -> impl Fn(Args) -> Self + Send + Sync + 'static
    where
        Args: Clone + Send + Sync + 'static,
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        let function = Arc::new(function);
        move |arguments: Args| {
            let function = Arc::clone(&function);
            Self::new(move || function(arguments.clone()))
        }
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Starts a fresh run of the task.
    pub fn run(&self) -> BoxFuture<'static, A> {
        (self.run_function)()
    }

    // =========================================================================
    // Functor / Applicative
    // =========================================================================

    /// Transforms the result.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let function = Arc::clone(&function);
            self.run().map(move |value| function(value))
        })
    }

    /// Applies the function produced by `function` to this task's result.
    ///
    /// Both tasks are started before either is awaited, the function side first.
    #[must_use]
    pub fn apply<B, F>(self, function: Task<F>) -> Task<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::new(move || {
            let function = function.run();
            let value = self.run();
            async move {
                let (function, value) = tokio::join!(function, value);
                function(value)
            }
        })
    }

    /// Runs both tasks concurrently and combines their results.
    #[must_use]
    pub fn map2<B, C, F>(self, other: Task<B>, function: F) -> Task<C>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let function = Arc::clone(&function);
            let first = self.run();
            let second = other.run();
            async move {
                let (first, second) = tokio::join!(first, second);
                function(first, second)
            }
        })
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Runs the task returned by `function` after this one.
    #[must_use]
    pub fn chain<B, F>(self, function: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let function = Arc::clone(&function);
            self.run().then(move |value| function(value).run())
        })
    }

    /// Runs `function` on the result for its side effect.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        self.map(move |value| {
            function(&value);
            value
        })
    }

    /// Runs the task built by `function` from the result, then yields the
    /// original result.
    #[must_use]
    pub fn tchain<B, F>(self, function: F) -> Self
    where
        B: Send + 'static,
        F: Fn(&A) -> Task<B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move || {
            let function = Arc::clone(&function);
            self.run().then(move |value| {
                let effect = function(&value);
                async move {
                    effect.run().await;
                    value
                }
            })
        })
    }

    /// Settles the task, then waits `duration` before yielding its result.
    ///
    /// The start is not postponed; the result is.
    #[must_use]
    pub fn delay(self, duration: Duration) -> Self {
        Self::new(move || {
            let running = self.run();
            async move {
                let value = running.await;
                tokio::time::sleep(duration).await;
                value
            }
        })
    }
}

impl<A> Task<Task<A>>
where
    A: Send + 'static,
{
    /// Removes one level of nesting.
    #[must_use]
    pub fn join(self) -> Task<A> {
        self.chain(|inner| inner)
    }
}

#[allow(clippy::unused_async)]
async fn reject<A>(message: Arc<str>) -> A {
    panic!("{message}")
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<A> fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

impl<A> IntoFuture for Task<A>
where
    A: Send + 'static,
{
    type Output = A;
    type IntoFuture = BoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}

// =============================================================================
// Kind Registration
// =============================================================================

/// Registry tag for [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaskKind;

/// The `Task` instance object.
pub const TASK: TaskKind = TaskKind;

impl Kind for TaskKind {
    type Of<A> = Task<A>;
}

impl Functor for TaskKind {
    fn map<A, B, F>(self, fa: Task<A>, function: F) -> Task<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for TaskKind {
    fn of<A>(self, value: A) -> Task<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        Task::of(value)
    }

    fn apply<A, B, F>(self, ff: Task<F>, fa: Task<A>) -> Task<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.apply(ff)
    }
}

impl Monad for TaskKind {
    fn chain<A, B, F>(self, fa: Task<A>, function: F) -> Task<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
    {
        fa.chain(function)
    }
}

impl Delayable for TaskKind {
    fn delay<A>(self, fa: Task<A>, duration: Duration) -> Task<A>
    where
        A: Send + 'static,
    {
        fa.delay(duration)
    }
}
