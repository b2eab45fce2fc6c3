//! Either type - a computation that either failed or succeeded.
//!
//! `Either<E, A>` is `Left(E)` for a modeled failure and `Right(A)` for a
//! success. All combinators are right-biased: `map`, `chain` and `apply`
//! operate on the `Right` value and pass a `Left` through untouched.
//!
//! The type is registered in the kind registry under [`EitherKind`]; the
//! instance object [`EITHER`] plugs it into the generic combinators.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::right(42));
//!
//! let failed = parse("x").chain(|n| Either::right(n + 1));
//! assert_eq!(failed, Either::left("not a number: x".to_string()));
//!
//! let message = parse("7").fold(|e| e, |n| format!("got {n}"));
//! assert_eq!(message, "got 7");
//! ```

use std::fmt;

use crate::typeclass::{Applicative2, Bifunctor, Functor2, Kind2, Monad2};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `E` - The failure type
/// * `A` - The success type
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<E, A> {
    /// A modeled failure.
    Left(E),
    /// A success.
    Right(A),
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a failed `Either`.
    #[inline]
    pub const fn left(error: E) -> Self {
        Self::Left(error)
    }

    /// Creates a successful `Either`.
    #[inline]
    pub const fn right(value: A) -> Self {
        Self::Right(value)
    }

    /// Lifts a value into a successful `Either`. Alias of [`Either::right`].
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// assert!(Either::<i32, ()>::left(42).is_left());
    /// assert!(!Either::<(), i32>::right(42).is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns a reference to the failure, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let value: Either<String, i32> = Either::right(5);
    /// assert_eq!(value.map(|n| n + 1), Either::right(6));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Alias of [`Either::map`].
    #[inline]
    pub fn rmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    /// Transforms the failure, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let failed: Either<i32, String> = Either::left(4);
    /// assert_eq!(failed.map_left(|code| code * 10), Either::left(40));
    /// ```
    #[inline]
    pub fn map_left<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Alias of [`Either::map_left`].
    #[inline]
    pub fn lmap<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_left(function)
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, left_function: F, right_function: G) -> Either<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts the failure into a wider error type.
    #[inline]
    pub fn widen_error<E2>(self) -> Either<E2, A>
    where
        E2: From<E>,
    {
        self.map_left(E2::from)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Continues with `function` when this is a success; a failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let checked = |n: i32| if n > 0 { Either::right(n) } else { Either::left("negative") };
    /// assert_eq!(Either::right(3).chain(checked), Either::right(3));
    /// assert_eq!(Either::right(-3).chain(checked), Either::left("negative"));
    /// assert_eq!(Either::left("early").chain(checked), Either::left("early"));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Like [`Either::chain`], but the continuation may fail with another error
    /// type. Both errors are widened into `E3`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Parse(String),
    ///     Range(u8),
    /// }
    ///
    /// impl From<String> for AppError {
    ///     fn from(message: String) -> Self { Self::Parse(message) }
    /// }
    ///
    /// impl From<u8> for AppError {
    ///     fn from(code: u8) -> Self { Self::Range(code) }
    /// }
    ///
    /// let parsed: Either<String, i32> = Either::right(300);
    /// let bounded: Either<AppError, u8> =
    ///     parsed.or_chain(|n| u8::try_from(n).map_or(Either::left(1_u8), Either::right));
    /// assert_eq!(bounded, Either::left(AppError::Range(1)));
    /// ```
    #[inline]
    pub fn or_chain<E2, E3, B, F>(self, function: F) -> Either<E3, B>
    where
        F: FnOnce(A) -> Either<E2, B>,
        E3: From<E> + From<E2>,
    {
        match self {
            Self::Left(error) => Either::Left(E3::from(error)),
            Self::Right(value) => function(value).widen_error(),
        }
    }

    /// Recovers from a failure with `function`; a success is passed through.
    #[inline]
    pub fn chain_left<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> Either<E2, A>,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies the function held by `function` to this value.
    ///
    /// The function side is checked first: if both sides failed, the failure
    /// of `function` is returned.
    #[inline]
    pub fn apply<B, F>(self, function: Either<E, F>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (function, self) {
            (Either::Left(error), _) | (Either::Right(_), Self::Left(error)) => Either::Left(error),
            (Either::Right(function), Self::Right(value)) => Either::Right(function(value)),
        }
    }

    /// Runs `function` on the success value for its side effect.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Runs `function` on the failure for its side effect.
    #[inline]
    #[must_use]
    pub fn tap_left<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Left(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Reduces the `Either` to a single value by handling both cases.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the success value, or computes one from the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let failed: Either<&str, usize> = Either::left("oops");
    /// assert_eq!(failed.get_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => value,
        }
    }

    /// Returns the failure, or `default` for a success.
    #[inline]
    pub fn get_left_or_else(self, default: E) -> E {
        match self {
            Self::Left(error) => error,
            Self::Right(_) => default,
        }
    }

    /// Converts the success value into an `Option`, dropping any failure.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts the failure into an `Option`, dropping any success.
    #[inline]
    pub fn left_option(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> E {
        match self {
            Self::Left(error) => error,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> A {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }
}

impl<E, A> Either<E, Either<E, A>> {
    /// Removes one level of nesting; a failure at either level propagates.
    #[inline]
    pub fn join(self) -> Either<E, A> {
        self.chain(|inner| inner)
    }
}

impl<A> Either<A, A> {
    /// Returns whichever value is present when both sides share a type.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    /// `Ok(a)` becomes `Right(a)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    /// `Right(a)` becomes `Ok(a)` and `Left(e)` becomes `Err(e)`.
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Kind Registration
// =============================================================================

/// Registry tag for [`Either`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EitherKind;

/// The `Either` instance object.
pub const EITHER: EitherKind = EitherKind;

impl Kind2 for EitherKind {
    type Of<E, A> = Either<E, A>;
}

impl Functor2 for EitherKind {
    #[inline]
    fn map<E, A, B, F>(self, fa: Either<E, A>, function: F) -> Either<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

impl Applicative2 for EitherKind {
    #[inline]
    fn of<E, A>(self, value: A) -> Either<E, A>
    where
        E: Send + 'static,
        A: Clone + Send + Sync + 'static,
    {
        Either::Right(value)
    }

    #[inline]
    fn apply<E, A, B, F>(self, ff: Either<E, F>, fa: Either<E, A>) -> Either<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        fa.apply(ff)
    }
}

impl Monad2 for EitherKind {
    #[inline]
    fn chain<E, A, B, F>(self, fa: Either<E, A>, function: F) -> Either<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Either<E, B> + Send + Sync + 'static,
    {
        fa.chain(function)
    }
}

impl Bifunctor for EitherKind {
    #[inline]
    fn bimap<E, A, E2, B, F, G>(self, fa: Either<E, A>, left: F, right: G) -> Either<E2, B>
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

impl<E, A> Either<E, A>
where
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
    Self: Clone + Send + Sync + 'static,
{
    /// Collects an ordered sequence of `Either` values, stopping at the first `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let all = Either::<&str, i32>::sequence_array(vec![Either::right(1), Either::right(2)]);
    /// assert_eq!(all, Either::right(vec![1, 2]));
    /// ```
    pub fn sequence_array(items: Vec<Self>) -> Either<E, Vec<A>> {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Self::Left(error) => return Either::Left(error),
                Self::Right(value) => values.push(value),
            }
        }
        Either::Right(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_and_right_construction() {
        let failed: Either<i32, String> = Either::left(42);
        assert!(failed.is_left());
        assert_eq!(failed.left_ref(), Some(&42));

        let succeeded: Either<i32, String> = Either::of("hello".to_string());
        assert!(succeeded.is_right());
        assert_eq!(succeeded.right_ref().map(String::as_str), Some("hello"));
    }

    #[rstest]
    #[case(Either::right(2), Either::right(3), Either::right(5))]
    #[case(Either::left("f"), Either::right(3), Either::left("f"))]
    #[case(Either::right(2), Either::left("v"), Either::left("v"))]
    #[case(Either::left("f"), Either::left("v"), Either::left("f"))]
    fn apply_checks_function_side_first(
        #[case] function_side: Either<&'static str, i32>,
        #[case] value_side: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let function = function_side.map(|a| move |b: i32| a + b);
        assert_eq!(value_side.apply(function), expected);
    }

    #[rstest]
    fn join_propagates_failure_from_either_level() {
        let outer: Either<&str, Either<&str, i32>> = Either::left("outer");
        let inner: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(1));

        assert_eq!(outer.join(), Either::left("outer"));
        assert_eq!(inner.join(), Either::left("inner"));
        assert_eq!(nested.join(), Either::right(1));
    }

    #[rstest]
    fn chain_left_recovers() {
        let failed: Either<&str, usize> = Either::left("four");
        assert_eq!(failed.chain_left(|e| Either::<(), _>::right(e.len())), Either::right(4));
    }

    #[rstest]
    fn tap_observes_without_changing() {
        let mut seen = Vec::new();
        let value: Either<&str, i32> = Either::right(7);
        let tapped = value.tap(|n| seen.push(*n)).tap_left(|_| seen.push(-1));
        assert_eq!(tapped, Either::right(7));
        assert_eq!(seen, vec![7]);
    }

    #[rstest]
    fn eliminators() {
        let failed: Either<&str, i32> = Either::left("e");
        assert_eq!(failed.to_option(), None);
        assert_eq!(failed.get_left_or_else("d"), "e");
        assert_eq!(Either::<&str, i32>::right(1).get_left_or_else("d"), "d");
        assert_eq!(Either::<i32, i32>::left(3).into_inner(), 3);
        assert_eq!(Either::<i32, &str>::left(3).swap(), Either::right(3));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn instance_object_dispatches_to_inherent_methods() {
        let value: Either<String, i32> = EITHER.of(10);
        let mapped = EITHER.map(value, |n| n + 1);
        let chained = EITHER.chain(mapped, |n| Either::right(n * 2));
        assert_eq!(chained, Either::right(22));
        assert_eq!(
            EITHER.map_left(Either::<i32, ()>::left(1), |e| e + 1),
            Either::left(2)
        );
    }

    static_assertions::assert_impl_all!(EitherKind: Copy, Send, Sync);
}
