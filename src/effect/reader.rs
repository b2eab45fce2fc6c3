//! Reader - computations that read from an environment.
//!
//! A `Reader<R, A>` wraps a function `&R -> A`. Composing readers threads one
//! environment value through every step without passing it by hand, which
//! makes the type a lightweight dependency-injection tool.
//!
//! The environment is borrowed rather than moved, so running a reader never
//! requires `R: Clone`, and a single environment can serve any number of runs.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `reader.map(|x| x) == reader`
//! - Composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Reader::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! ## Environment Laws
//!
//! - Ask Retrieval: `Reader::ask().run(&r) == r`
//! - Local Identity: `m.local(|r| r.clone()) == m`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     let host = Reader::asks(|config: &Config| config.host.clone());
//!     let port = Reader::asks(|config: &Config| config.port);
//!     host.map2(port, |host, port| format!("{host}:{port}"))
//! }
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address().run(&config), "localhost:8080");
//! ```

use std::fmt;
use std::sync::Arc;

use super::environment::Has;
use crate::typeclass::{Applicative2, Functor2, Kind2, Monad2, Profunctor};

/// A computation that produces an `A` from a borrowed environment `R`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::Reader;
///
/// let doubled = Reader::ask().chain(|environment: i32| Reader::of(environment * 2));
/// assert_eq!(doubled.run(&21), 42);
/// ```
pub struct Reader<R, A> {
    run_function: Arc<dyn Fn(&R) -> A + Send + Sync>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&R) -> A + Send + Sync + 'static,
    {
        Self {
            run_function: Arc::new(function),
        }
    }

    /// Alias of [`Reader::new`].
    #[allow(clippy::should_implement_trait)]
    pub fn from<F>(function: F) -> Self
    where
        F: Fn(&R) -> A + Send + Sync + 'static,
    {
        Self::new(function)
    }

    /// Creates a reader that ignores its environment and returns `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Alias of [`Reader::of`].
    pub fn pure(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::of(value)
    }

    /// Creates a reader that projects a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// struct Config { port: u16 }
    ///
    /// let port: Reader<Config, u16> = Reader::asks(|config: &Config| config.port);
    /// assert_eq!(port.run(&Config { port: 8080 }), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + Send + Sync + 'static,
    {
        Self::new(projection)
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the reader against `environment`.
    pub fn run(&self, environment: &R) -> A {
        (self.run_function)(environment)
    }

    /// Alias of [`Reader::run`].
    pub fn call(&self, environment: &R) -> A {
        self.run(environment)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the result.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Alias of [`Reader::map`].
    #[must_use]
    pub fn rmap<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map(function)
    }

    /// Adapts the environment: the result runs against an `R2` converted to `R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let length = Reader::asks(|text: &String| text.len());
    /// let from_number = length.lmap(|number: &u32| number.to_string());
    /// assert_eq!(from_number.run(&12345), 5);
    /// ```
    #[must_use]
    pub fn lmap<R2, F>(self, function: F) -> Reader<R2, A>
    where
        R2: 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static,
    {
        Reader::new(move |environment: &R2| self.run(&function(environment)))
    }

    /// Adapts both the environment and the result.
    #[must_use]
    pub fn dimap<R2, B, F, G>(self, input: F, output: G) -> Reader<R2, B>
    where
        R2: 'static,
        B: 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.lmap(input).map(output)
    }

    /// Runs the reader against a modified environment of the same type.
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(&R) -> R + Send + Sync + 'static,
    {
        self.lmap(modifier)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Feeds the result to `function`; both readers see the same environment.
    #[must_use]
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)).run(environment))
    }

    /// Like [`Reader::chain`], but the continuation may need a different
    /// environment. The result runs against any environment containing both.
    ///
    /// ```compile_fail
    /// use kindred::effect::Reader;
    ///
    /// struct Left(i32);
    /// struct Right(i32);
    ///
    /// let left = Reader::asks(|part: &Left| part.0);
    /// let combined: Reader<Left, i32> =
    ///     left.chainw(|n| Reader::asks(move |part: &Right| n + part.0));
    /// ```
    #[must_use]
    pub fn chainw<R2, R3, B, F>(self, function: F) -> Reader<R3, B>
    where
        R2: 'static,
        R3: Has<R> + Has<R2> + 'static,
        B: 'static,
        F: Fn(A) -> Reader<R2, B> + Send + Sync + 'static,
    {
        Reader::new(move |environment: &R3| {
            let value = self.run(<R3 as Has<R>>::get(environment));
            function(value).run(<R3 as Has<R2>>::get(environment))
        })
    }

    /// Runs `next` after this reader, discarding this reader's result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
    {
        Reader::new(move |environment| {
            let _ = self.run(environment);
            next.run(environment)
        })
    }

    /// Applies the function produced by `function` to this reader's result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let increment = Reader::new(|step: &i32| { let step = *step; move |n: i32| n + step });
    /// let base = Reader::asks(|step: &i32| step * 10);
    /// assert_eq!(base.apply(increment).run(&2), 22);
    /// ```
    #[must_use]
    pub fn apply<B, F>(self, function: Reader<R, F>) -> Reader<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Reader::new(move |environment| {
            let function = function.run(environment);
            function(self.run(environment))
        })
    }

    /// Combines two readers over the same environment.
    #[must_use]
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        Reader::new(move |environment| function(self.run(environment), other.run(environment)))
    }

    /// Supplies part of a composite environment.
    ///
    /// The returned reader needs only the remainder; the full environment is
    /// rebuilt from `(part, rest)` on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Token(String);
    /// #[derive(Clone)]
    /// struct Region(String);
    ///
    /// struct Request { token: Token, region: Region }
    ///
    /// impl From<(Token, Region)> for Request {
    ///     fn from((token, region): (Token, Region)) -> Self { Self { token, region } }
    /// }
    ///
    /// let describe = Reader::asks(|request: &Request| format!("{}@{}", request.token.0, request.region.0));
    /// let regional: Reader<Region, String> = describe.provide(Token("t-1".to_string()));
    /// assert_eq!(regional.run(&Region("eu".to_string())), "t-1@eu");
    /// ```
    #[must_use]
    pub fn provide<P, Rest>(self, part: P) -> Reader<Rest, A>
    where
        P: Clone + Send + Sync + 'static,
        Rest: Clone + 'static,
        R: From<(P, Rest)>,
    {
        Reader::new(move |rest: &Rest| self.run(&R::from((part.clone(), rest.clone()))))
    }
}

impl<R> Reader<R, R>
where
    R: Clone + 'static,
{
    /// Creates a reader returning a copy of the whole environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(R::clone)
    }
}

impl<R, A> Reader<R, Reader<R, A>>
where
    R: 'static,
    A: 'static,
{
    /// Removes one level of nesting; both levels see the same environment.
    #[must_use]
    pub fn join(self) -> Reader<R, A> {
        Reader::new(move |environment| self.run(environment).run(environment))
    }
}

// =============================================================================
// Clone / Display Implementations
// =============================================================================

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Arc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Reader").finish_non_exhaustive()
    }
}

// =============================================================================
// Kind Registration
// =============================================================================

/// Registry tag for [`Reader`]. The first slot is the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReaderKind;

/// The `Reader` instance object.
pub const READER: ReaderKind = ReaderKind;

impl Kind2 for ReaderKind {
    type Of<R, A> = Reader<R, A>;
}

impl Functor2 for ReaderKind {
    fn map<R, A, B, F>(self, fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        R: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

impl Applicative2 for ReaderKind {
    fn of<R, A>(self, value: A) -> Reader<R, A>
    where
        R: Send + 'static,
        A: Clone + Send + Sync + 'static,
    {
        Reader::of(value)
    }

    fn apply<R, A, B, F>(self, ff: Reader<R, F>, fa: Reader<R, A>) -> Reader<R, B>
    where
        R: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.apply(ff)
    }
}

impl Monad2 for ReaderKind {
    fn chain<R, A, B, F>(self, fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        R: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Reader<R, B> + Send + Sync + 'static,
    {
        fa.chain(function)
    }
}

impl Profunctor for ReaderKind {
    fn lmap<R, R2, A, F>(self, fa: Reader<R, A>, function: F) -> Reader<R2, A>
    where
        R: Send + 'static,
        R2: Send + 'static,
        A: Send + 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static,
    {
        fa.lmap(function)
    }
}
