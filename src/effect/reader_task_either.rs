//! `ReaderTaskEither` - a fallible asynchronous computation that needs an environment.
//!
//! `ReaderTaskEither<R, E, A>` is a [`Reader`] from `R` to a
//! [`TaskEither<E, A>`]. Composition defers both supplying the environment
//! and running the asynchronous work until [`ReaderTaskEither::run`] is given
//! an environment and the resulting `TaskEither` is awaited.
//!
//! Every operation resolves the environment first and then delegates to the
//! corresponding `TaskEither` operation. Continuations that run after an
//! asynchronous step receive a clone of the environment, so most operations
//! require `R: Clone + Send + Sync`.
//!
//! # Environment Intersection
//!
//! [`ReaderTaskEither::chainw`] and the `sequence_t*` constructors combine
//! computations with different environment requirements. The combined
//! computation runs against any `R3` implementing [`Has`] for every part.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::ReaderTaskEither;
//!
//! #[derive(Clone)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let budget = ReaderTaskEither::<Config, String, u32>::asks(|config| config.retries)
//!         .chain(|retries| {
//!             if retries > 0 {
//!                 ReaderTaskEither::right(retries * 100)
//!             } else {
//!                 ReaderTaskEither::left("no retries configured".to_string())
//!             }
//!         });
//!
//!     assert_eq!(budget.run(&Config { retries: 3 }).run().await, Either::right(300));
//!     assert!(budget.run(&Config { retries: 0 }).run().await.is_left());
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future;

use super::environment::Has;
use super::reader::Reader;
use super::retry::RetryOptions;
use super::task::Task;
use super::task_either::{TASK_EITHER, TaskEither};
use crate::control::Either;
use crate::typeclass::{
    Applicative3, ConcurrencyConfig, Delayable3, Functor3, Kind3, Monad3, sequence_t2,
    sequence_t3,
};

/// A computation that, given an environment `R`, yields a [`TaskEither<E, A>`].
///
/// # Monad Laws
///
/// 1. **Left Identity**: `ReaderTaskEither::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(ReaderTaskEither::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub struct ReaderTaskEither<R, E, A> {
    reader: Reader<R, TaskEither<E, A>>,
}

impl<R, E, A> ReaderTaskEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a computation from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&R) -> TaskEither<E, A> + Send + Sync + 'static,
    {
        Self {
            reader: Reader::new(function),
        }
    }

    /// Succeeds with `value` whatever the environment.
    pub fn right(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move |_| TaskEither::right(value.clone()))
    }

    /// Alias of [`ReaderTaskEither::right`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::right(value)
    }

    /// Fails with `error` whatever the environment.
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |_| TaskEither::left(error.clone()))
    }

    /// Lifts an already-known result.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::new(move |_| TaskEither::from_either(either.clone()))
    }

    /// Succeeds with a value projected from the environment.
    ///
    /// The projection runs when the resulting `TaskEither` is run.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + Send + Sync + 'static,
    {
        let projection = Arc::new(projection);
        Self::new(move |environment| {
            let environment = environment.clone();
            let projection = Arc::clone(&projection);
            TaskEither::new(move || future::ready(Either::Right(projection(&environment))))
        })
    }

    /// Lifts a reader; its result becomes the success value.
    pub fn from_reader(reader: Reader<R, A>) -> Self {
        Self::asks(move |environment| reader.run(environment))
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Supplies the environment, yielding the computation to await.
    pub fn run(&self, environment: &R) -> TaskEither<E, A> {
        self.reader.run(environment)
    }

    /// Returns the underlying reader.
    #[must_use]
    pub fn into_reader(self) -> Reader<R, TaskEither<E, A>> {
        self.reader
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> ReaderTaskEither<R, E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither {
            reader: self.reader.map(move |task_either| {
                let function = Arc::clone(&function);
                task_either.map(move |value| function(value))
            }),
        }
    }

    /// Transforms the success value with access to the environment.
    #[must_use]
    pub fn map_with_environment<B, F>(self, function: F) -> ReaderTaskEither<R, E, B>
    where
        B: Send + 'static,
        F: Fn(&R, A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.map(move |value| function(&environment, value))
        })
    }

    /// Transforms the failure.
    #[must_use]
    pub fn map_left<E2, F>(self, function: F) -> ReaderTaskEither<R, E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither {
            reader: self.reader.map(move |task_either| {
                let function = Arc::clone(&function);
                task_either.map_left(move |error| function(error))
            }),
        }
    }

    /// Transforms whichever side is produced.
    #[must_use]
    pub fn bimap<E2, B, F, G>(self, left_function: F, right_function: G) -> ReaderTaskEither<R, E2, B>
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map_left(left_function).map(right_function)
    }

    /// Converts the failure into a wider error type.
    #[must_use]
    pub fn widen_error<E2>(self) -> ReaderTaskEither<R, E2, A>
    where
        E2: From<E> + Send + 'static,
    {
        self.map_left(E2::from)
    }

    /// Runs against a larger environment containing an `R`.
    #[must_use]
    pub fn widen_env<R2>(self) -> ReaderTaskEither<R2, E, A>
    where
        R2: Has<R> + Clone + Send + Sync + 'static,
    {
        ReaderTaskEither::new(move |environment: &R2| self.run(<R2 as Has<R>>::get(environment)))
    }

    /// Runs against an environment derived from another one.
    #[must_use]
    pub fn lmap<R2, F>(self, function: F) -> ReaderTaskEither<R2, E, A>
    where
        R2: Clone + Send + Sync + 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static,
    {
        ReaderTaskEither {
            reader: self.reader.lmap(function),
        }
    }

    /// Runs against a modified environment of the same type.
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(&R) -> R + Send + Sync + 'static,
    {
        self.lmap(modifier)
    }

    /// Supplies part of a composite environment; the result needs only the rest.
    #[must_use]
    pub fn provide<P, Rest>(self, part: P) -> ReaderTaskEither<Rest, E, A>
    where
        P: Clone + Send + Sync + 'static,
        Rest: Clone + Send + Sync + 'static,
        R: From<(P, Rest)>,
    {
        ReaderTaskEither {
            reader: self.reader.provide(part),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Feeds the success value to `function`; both steps see the same environment.
    #[must_use]
    pub fn chain<B, F>(self, function: F) -> ReaderTaskEither<R, E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> ReaderTaskEither<R, E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.chain(move |value| function(value).run(&environment))
        })
    }

    /// Like [`ReaderTaskEither::chain`] for a continuation with its own
    /// environment and error type.
    ///
    /// The result runs against any `R3` containing both environments and
    /// fails with any `E3` both errors convert into.
    ///
    /// ```rust
    /// use kindred::control::Either;
    /// use kindred::effect::{Has, ReaderTaskEither, TaskEither};
    ///
    /// #[derive(Clone)]
    /// struct Users(Vec<&'static str>);
    /// #[derive(Clone)]
    /// struct Greeting(&'static str);
    ///
    /// #[derive(Clone)]
    /// struct AppEnv { users: Users, greeting: Greeting }
    ///
    /// impl Has<Users> for AppEnv { fn get(&self) -> &Users { &self.users } }
    /// impl Has<Greeting> for AppEnv { fn get(&self) -> &Greeting { &self.greeting } }
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct NotFound;
    /// #[derive(Debug, PartialEq)]
    /// struct Blank;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError { NotFound, Blank }
    /// impl From<NotFound> for AppError { fn from(_: NotFound) -> Self { Self::NotFound } }
    /// impl From<Blank> for AppError { fn from(_: Blank) -> Self { Self::Blank } }
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let first_user = ReaderTaskEither::<Users, NotFound, &'static str>::new(|users| {
    ///         match users.0.first() {
    ///             Some(name) => TaskEither::right(*name),
    ///             None => TaskEither::left(NotFound),
    ///         }
    ///     });
    ///     let greet = first_user.chainw(|name| {
    ///         ReaderTaskEither::<Greeting, Blank, String>::asks(move |greeting| {
    ///             format!("{}, {name}", greeting.0)
    ///         })
    ///     });
    ///
    ///     let environment = AppEnv { users: Users(vec!["ada"]), greeting: Greeting("hello") };
    ///     let greeted: ReaderTaskEither<AppEnv, AppError, String> = greet;
    ///     assert_eq!(greeted.run(&environment).run().await, Either::right("hello, ada".to_string()));
    /// }
    /// ```
    ///
    /// An environment missing one of the parts is rejected at compile time:
    ///
    /// ```compile_fail
    /// use kindred::effect::ReaderTaskEither;
    ///
    /// #[derive(Clone)]
    /// struct Left(i32);
    /// #[derive(Clone)]
    /// struct Right(i32);
    ///
    /// let left = ReaderTaskEither::<Left, String, i32>::asks(|part| part.0);
    /// let combined: ReaderTaskEither<Left, String, i32> = left
    ///     .chainw(|n| ReaderTaskEither::<Right, String, i32>::asks(move |part| n + part.0));
    /// ```
    #[must_use]
    pub fn chainw<R2, R3, E2, E3, B, F>(self, function: F) -> ReaderTaskEither<R3, E3, B>
    where
        R2: Clone + Send + Sync + 'static,
        R3: Has<R> + Has<R2> + Clone + Send + Sync + 'static,
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> ReaderTaskEither<R2, E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R3| {
            let source = self
                .run(<R3 as Has<R>>::get(environment))
                .widen_error::<E3>();
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.chain(move |value| {
                function(value)
                    .run(<R3 as Has<R2>>::get(&environment))
                    .widen_error()
            })
        })
    }

    /// Feeds the success value to a `TaskEither` that needs no environment.
    #[must_use]
    pub fn chain_te<B, F>(self, function: F) -> ReaderTaskEither<R, E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> TaskEither<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R| {
            let function = Arc::clone(&function);
            self.run(environment).chain(move |value| function(value))
        })
    }

    /// Recovers from a failure with a computation over the same environment.
    #[must_use]
    pub fn chain_left<F>(self, function: F) -> Self
    where
        F: Fn(E) -> Self + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.chain_left(move |error| function(error).run(&environment))
        })
    }

    /// Applies the function produced by `function` to this computation's value.
    ///
    /// Both sides see the same environment and run concurrently.
    #[must_use]
    pub fn apply<B, F>(self, function: ReaderTaskEither<R, E, F>) -> ReaderTaskEither<R, E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        ReaderTaskEither::new(move |environment: &R| {
            self.run(environment).apply(function.run(environment))
        })
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
        let function = Arc::new(function);
        Self {
            reader: self.reader.map(move |task_either| {
                let function = Arc::clone(&function);
                task_either.tap(move |value| function(value))
            }),
        }
    }

    /// Observes the success value together with the environment.
    #[must_use]
    pub fn tap_with_environment<F>(self, function: F) -> Self
    where
        F: Fn(&R, &A) + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.tap(move |value| function(&environment, value))
        })
    }

    /// Observes the failure.
    #[must_use]
    pub fn tap_left<F>(self, function: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self {
            reader: self.reader.map(move |task_either| {
                let function = Arc::clone(&function);
                task_either.tap_left(move |error| function(error))
            }),
        }
    }

    /// Runs a side computation on success against the same environment and
    /// waits for it. Its failure replaces the result.
    #[must_use]
    pub fn tap_rte<E2, E3, B, F>(self, function: F) -> ReaderTaskEither<R, E3, A>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.tap_te(move |value| function(value).run(&environment))
        })
    }

    /// Runs a side computation on failure and waits for it; the original
    /// failure is kept.
    #[must_use]
    pub fn tap_left_rte<E2, E3, B, F>(self, function: F) -> ReaderTaskEither<R, E3, A>
    where
        E2: Send + 'static,
        E3: From<E> + From<E2> + Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        ReaderTaskEither::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.tap_left_te(move |error| function(error).run(&environment))
        })
    }

    /// Spawns a side computation on success without waiting for it.
    ///
    /// See [`TaskEither::tap_te_detached`].
    #[must_use]
    pub fn tap_rte_detached<E2, B, F>(self, function: F) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.tap_te_detached(move |value| function(value).run(&environment))
        })
    }

    /// Like [`ReaderTaskEither::tap_rte_detached`], reporting side failures to `on_error`.
    #[must_use]
    pub fn tap_rte_detached_with<E2, B, F, H>(self, function: F, on_error: H) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&A) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
        H: Fn(E2) + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let on_error = Arc::new(on_error);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            let on_error = Arc::clone(&on_error);
            source.tap_te_detached_with(
                move |value| function(value).run(&environment),
                move |error| on_error(error),
            )
        })
    }

    /// Spawns a side computation on failure without waiting for it.
    #[must_use]
    pub fn tap_left_rte_detached<E2, B, F>(self, function: F) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            source.tap_left_te_detached(move |error| function(error).run(&environment))
        })
    }

    /// Like [`ReaderTaskEither::tap_left_rte_detached`], reporting side failures to `on_error`.
    #[must_use]
    pub fn tap_left_rte_detached_with<E2, B, F, H>(self, function: F, on_error: H) -> Self
    where
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(&E) -> ReaderTaskEither<R, E2, B> + Send + Sync + 'static,
        H: Fn(E2) + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let on_error = Arc::new(on_error);
        Self::new(move |environment: &R| {
            let source = self.run(environment);
            let environment = environment.clone();
            let function = Arc::clone(&function);
            let on_error = Arc::clone(&on_error);
            source.tap_left_te_detached_with(
                move |error| function(error).run(&environment),
                move |error| on_error(error),
            )
        })
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// Re-runs the computation against the same environment after a failure.
    ///
    /// See [`TaskEither::retry`].
    #[must_use]
    pub fn retry(self, options: RetryOptions<E>) -> Self {
        Self::new(move |environment: &R| self.run(environment).retry(options.clone()))
    }

    /// Settles the computation, then waits `duration` before yielding its result.
    #[must_use]
    pub fn delay(self, duration: Duration) -> Self {
        Self {
            reader: self
                .reader
                .map(move |task_either| task_either.delay(duration)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Reduces both outcomes to a single value once an environment is given.
    #[must_use]
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> Reader<R, Task<B>>
    where
        B: Send + 'static,
        F: Fn(E) -> B + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        let on_left = Arc::new(on_left);
        let on_right = Arc::new(on_right);
        self.reader.map(move |task_either| {
            let on_left = Arc::clone(&on_left);
            let on_right = Arc::clone(&on_right);
            task_either.fold(move |error| on_left(error), move |value| on_right(value))
        })
    }
}

impl<R> ReaderTaskEither<R, std::convert::Infallible, R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Succeeds with a copy of the whole environment.
    ///
    /// The error type is `Infallible`; use [`ReaderTaskEither::widen_error`]
    /// or [`ReaderTaskEither::asks`] to pick another one.
    #[must_use]
    pub fn ask() -> Self {
        Self::asks(R::clone)
    }
}

impl<R, E, A> ReaderTaskEither<R, E, ReaderTaskEither<R, E, A>>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Removes one level of nesting; both levels see the same environment.
    #[must_use]
    pub fn join(self) -> ReaderTaskEither<R, E, A> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Batch Execution
// =============================================================================

impl<R, E, A> ReaderTaskEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
{
    /// Runs the computations in order against one environment.
    ///
    /// See [`TaskEither::sequence_array`].
    pub fn sequence_array(items: Vec<Self>) -> ReaderTaskEither<R, E, Vec<A>> {
        ReaderTaskEither::new(move |environment: &R| {
            TaskEither::sequence_array(items.iter().map(|item| item.run(environment)).collect())
        })
    }

    /// Runs keyed computations against one environment and collects a map.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use kindred::control::Either;
    /// use kindred::effect::ReaderTaskEither;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let lookups = ReaderTaskEither::<u32, String, u32>::sequence_object([
    ///         ("double", ReaderTaskEither::asks(|n| n * 2)),
    ///         ("square", ReaderTaskEither::asks(|n| n * n)),
    ///     ]);
    ///
    ///     let expected = BTreeMap::from([("double", 8), ("square", 16)]);
    ///     assert_eq!(lookups.run(&4).run().await, Either::right(expected));
    /// }
    /// ```
    pub fn sequence_object<K, I>(items: I) -> ReaderTaskEither<R, E, BTreeMap<K, A>>
    where
        K: Ord + Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (K, Self)>,
    {
        let items: Vec<(K, Self)> = items.into_iter().collect();
        ReaderTaskEither::new(move |environment: &R| {
            TaskEither::sequence_object(
                items
                    .iter()
                    .map(|(key, item)| (key.clone(), item.run(environment))),
            )
        })
    }

    /// Runs the computations in windows of `config.concurrency()` against one environment.
    ///
    /// See [`TaskEither::concurrency`].
    pub fn concurrency(config: &ConcurrencyConfig, items: Vec<Self>) -> ReaderTaskEither<R, E, Vec<A>> {
        let config = *config;
        ReaderTaskEither::new(move |environment: &R| {
            TaskEither::concurrency(&config, items.iter().map(|item| item.run(environment)).collect())
        })
    }
}

impl<R, E, A, B> ReaderTaskEither<R, E, (A, B)>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    /// Runs two computations with their own environments and errors concurrently.
    ///
    /// The pair runs against any `R` containing both environments.
    pub fn sequence_t2<R1, R2, E1, E2>(
        first: ReaderTaskEither<R1, E1, A>,
        second: ReaderTaskEither<R2, E2, B>,
    ) -> Self
    where
        R: Has<R1> + Has<R2>,
        R1: Clone + Send + Sync + 'static,
        R2: Clone + Send + Sync + 'static,
        E1: Send + 'static,
        E2: Send + 'static,
        E: From<E1> + From<E2>,
    {
        Self::new(move |environment: &R| {
            sequence_t2(
                TASK_EITHER,
                first
                    .run(<R as Has<R1>>::get(environment))
                    .widen_error(),
                second
                    .run(<R as Has<R2>>::get(environment))
                    .widen_error(),
            )
        })
    }
}

impl<R, E, A, B, C> ReaderTaskEither<R, E, (A, B, C)>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    /// Runs three computations with their own environments and errors concurrently.
    pub fn sequence_t3<R1, R2, R3, E1, E2, E3>(
        first: ReaderTaskEither<R1, E1, A>,
        second: ReaderTaskEither<R2, E2, B>,
        third: ReaderTaskEither<R3, E3, C>,
    ) -> Self
    where
        R: Has<R1> + Has<R2> + Has<R3>,
        R1: Clone + Send + Sync + 'static,
        R2: Clone + Send + Sync + 'static,
        R3: Clone + Send + Sync + 'static,
        E1: Send + 'static,
        E2: Send + 'static,
        E3: Send + 'static,
        E: From<E1> + From<E2> + From<E3>,
    {
        Self::new(move |environment: &R| {
            sequence_t3(
                TASK_EITHER,
                first
                    .run(<R as Has<R1>>::get(environment))
                    .widen_error(),
                second
                    .run(<R as Has<R2>>::get(environment))
                    .widen_error(),
                third
                    .run(<R as Has<R3>>::get(environment))
                    .widen_error(),
            )
        })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<R, E, A> Clone for ReaderTaskEither<R, E, A> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<R, E, A> fmt::Display for ReaderTaskEither<R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<ReaderTaskEither>")
    }
}

impl<R, E, A> fmt::Debug for ReaderTaskEither<R, E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReaderTaskEither")
            .finish_non_exhaustive()
    }
}

impl<R, E, A> From<TaskEither<E, A>> for ReaderTaskEither<R, E, A>
where
    R: Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Ignores the environment and runs `task_either`.
    fn from(task_either: TaskEither<E, A>) -> Self {
        Self::new(move |_| task_either.clone())
    }
}

impl<R, E, A> From<Reader<R, TaskEither<E, A>>> for ReaderTaskEither<R, E, A> {
    fn from(reader: Reader<R, TaskEither<E, A>>) -> Self {
        Self { reader }
    }
}

// =============================================================================
// Kind Registration
// =============================================================================

/// Registry tag for [`ReaderTaskEither`]: environment, error, value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReaderTaskEitherKind;

/// The `ReaderTaskEither` instance object.
pub const READER_TASK_EITHER: ReaderTaskEitherKind = ReaderTaskEitherKind;

impl Kind3 for ReaderTaskEitherKind {
    type Of<R, E, A> = ReaderTaskEither<R, E, A>;
}

impl Functor3 for ReaderTaskEitherKind {
    fn map<R, E, A, B, F>(self, fa: ReaderTaskEither<R, E, A>, function: F) -> ReaderTaskEither<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

impl Applicative3 for ReaderTaskEitherKind {
    fn of<R, E, A>(self, value: A) -> ReaderTaskEither<R, E, A>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Clone + Send + Sync + 'static,
    {
        ReaderTaskEither::right(value)
    }

    fn apply<R, E, A, B, F>(
        self,
        ff: ReaderTaskEither<R, E, F>,
        fa: ReaderTaskEither<R, E, A>,
    ) -> ReaderTaskEither<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.apply(ff)
    }
}

impl Monad3 for ReaderTaskEitherKind {
    fn chain<R, E, A, B, F>(self, fa: ReaderTaskEither<R, E, A>, function: F) -> ReaderTaskEither<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> ReaderTaskEither<R, E, B> + Send + Sync + 'static,
    {
        fa.chain(function)
    }
}

impl Delayable3 for ReaderTaskEitherKind {
    fn delay<R, E, A>(self, fa: ReaderTaskEither<R, E, A>, duration: Duration) -> ReaderTaskEither<R, E, A>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
    {
        fa.delay(duration)
    }
}
