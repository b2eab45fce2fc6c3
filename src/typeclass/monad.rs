//! Monad type classes - sequencing computations where each step depends on the last.
//!
//! `Monad` extends `Applicative` with `chain` (also known as `flatMap` or
//! `bind`). The continuation receives the value produced by the previous step
//! and returns the next container.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M.chain(M.of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! M.chain(m, M.of) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! M.chain(M.chain(m, f), g) == M.chain(m, |x| M.chain(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Monad, OPTION};
//!
//! let halved = OPTION.chain(Some(10), |n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! let flattened: Option<i32> = OPTION.join(Some(Some(3)));
//! assert_eq!(flattened, Some(3));
//! ```

use super::applicative::{Applicative, Applicative2, Applicative3};
use super::higher::OptionKind;

/// A type class for one-argument kinds that support dependent sequencing.
pub trait Monad: Applicative {
    /// Feeds the value inside `fa` to `function` and returns the resulting container.
    fn chain<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Self::Of<B> + Send + Sync + 'static;

    /// Removes one layer of nesting.
    #[inline]
    fn join<A>(self, ffa: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: Send + 'static,
        Self::Of<A>: Send + 'static,
    {
        self.chain(ffa, |inner| inner)
    }
}

/// A type class for two-argument kinds that support dependent sequencing.
///
/// A failed first step short-circuits: the continuation is never invoked.
pub trait Monad2: Applicative2 {
    /// Feeds the value slot of `fa` to `function`.
    fn chain<E, A, B, F>(self, fa: Self::Of<E, A>, function: F) -> Self::Of<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Self::Of<E, B> + Send + Sync + 'static;

    /// Removes one layer of nesting.
    #[inline]
    fn join<E, A>(self, ffa: Self::Of<E, Self::Of<E, A>>) -> Self::Of<E, A>
    where
        E: Send + 'static,
        A: Send + 'static,
        Self::Of<E, A>: Send + 'static,
    {
        self.chain(ffa, |inner| inner)
    }
}

/// A type class for three-argument kinds that support dependent sequencing.
pub trait Monad3: Applicative3 {
    /// Feeds the value slot of `fa` to `function`; both steps see the same environment.
    fn chain<R, E, A, B, F>(self, fa: Self::Of<R, E, A>, function: F) -> Self::Of<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Self::Of<R, E, B> + Send + Sync + 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Monad for OptionKind {
    #[inline]
    fn chain<A, B, F>(self, fa: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Option<B> + Send + Sync + 'static,
    {
        fa.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OPTION;
    use rstest::rstest;

    fn checked_half(value: i32) -> Option<i32> {
        (value % 2 == 0).then_some(value / 2)
    }

    #[rstest]
    #[case(Some(8), Some(4))]
    #[case(Some(7), None)]
    #[case(None, None)]
    fn option_chain_short_circuits(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OPTION.chain(input, checked_half), expected);
    }

    #[rstest]
    fn option_left_identity() {
        assert_eq!(OPTION.chain(OPTION.of(12), checked_half), checked_half(12));
    }

    #[rstest]
    fn option_associativity() {
        let left = OPTION.chain(OPTION.chain(Some(16), checked_half), checked_half);
        let right = OPTION.chain(Some(16), |x| OPTION.chain(checked_half(x), checked_half));
        assert_eq!(left, right);
    }

    #[rstest]
    fn option_join_flattens() {
        assert_eq!(OPTION.join(Some(Some(1))), Some(1));
        assert_eq!(OPTION.join(Some(None::<i32>)), None);
    }
}
