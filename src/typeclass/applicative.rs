//! Applicative type classes - lifting values and combining independent containers.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `of`: lift a plain value into the container
//! - `apply`: combine a container of functions with a container of values
//! - `map2`: combine two containers with a binary function
//!
//! Unlike `chain`, neither operand of `apply` depends on the other's result,
//! which lets asynchronous instances start both operands at once.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F.apply(F.of(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F.apply(F.of(f), F.of(x)) == F.of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! F.apply(u, F.of(y)) == F.apply(F.of(|f| f(y)), u)
//! ```
//!
//! # Failure Order
//!
//! When both operands fail, the function side wins. `map2` places its first
//! operand on the function side, so the earlier operand's failure is reported.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Applicative, OPTION};
//!
//! let lifted: Option<i32> = OPTION.of(42);
//! assert_eq!(lifted, Some(42));
//!
//! let sum = OPTION.map2(Some(1), Some(2), |x: i32, y: i32| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use std::sync::Arc;

use super::functor::{Functor, Functor2, Functor3};
use super::higher::OptionKind;

/// A type class for one-argument kinds that support lifting and combining.
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    ///
    /// The value is `Clone` because re-runnable instances produce it on every run.
    fn of<A>(self, value: A) -> Self::Of<A>
    where
        A: Clone + Send + Sync + 'static;

    /// Applies the function held by `ff` to the value held by `fa`.
    ///
    /// If both fail, the failure of `ff` is the one kept.
    fn apply<A, B, F>(self, ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static;

    /// Combines two containers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Applicative, OPTION};
    ///
    /// assert_eq!(OPTION.map2(Some(3), Some(4), |a: i32, b: i32| a * b), Some(12));
    /// assert_eq!(OPTION.map2(Some(3), None, |a: i32, b: i32| a * b), None);
    /// ```
    fn map2<A, B, C, F>(self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let lifted = self.map(fa, move |a| {
            let function = Arc::clone(&function);
            move |b| function(a, b)
        });
        self.apply(lifted, fb)
    }
}

/// A type class for two-argument kinds that support lifting and combining.
pub trait Applicative2: Functor2 {
    /// Lifts a pure value into the value slot.
    fn of<E, A>(self, value: A) -> Self::Of<E, A>
    where
        E: Send + 'static,
        A: Clone + Send + Sync + 'static;

    /// Applies the function held by `ff` to the value held by `fa`.
    ///
    /// If both fail, the failure of `ff` is the one kept.
    fn apply<E, A, B, F>(self, ff: Self::Of<E, F>, fa: Self::Of<E, A>) -> Self::Of<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static;

    /// Combines two containers using a binary function.
    ///
    /// A failure of `fa` takes precedence over a failure of `fb`.
    fn map2<E, A, B, C, F>(
        self,
        fa: Self::Of<E, A>,
        fb: Self::Of<E, B>,
        function: F,
    ) -> Self::Of<E, C>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let lifted = self.map(fa, move |a| {
            let function = Arc::clone(&function);
            move |b| function(a, b)
        });
        self.apply(lifted, fb)
    }
}

/// A type class for three-argument kinds that support lifting and combining.
pub trait Applicative3: Functor3 {
    /// Lifts a pure value into the value slot.
    fn of<R, E, A>(self, value: A) -> Self::Of<R, E, A>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Clone + Send + Sync + 'static;

    /// Applies the function held by `ff` to the value held by `fa`, both
    /// evaluated against the same environment.
    fn apply<R, E, A, B, F>(self, ff: Self::Of<R, E, F>, fa: Self::Of<R, E, A>) -> Self::Of<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Applicative for OptionKind {
    #[inline]
    fn of<A>(self, value: A) -> Option<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        Some(value)
    }

    #[inline]
    fn apply<A, B, F>(self, ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        match (ff, fa) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OPTION;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(3), Some(5))]
    #[case(None, Some(3), None)]
    #[case(Some(2), None, None)]
    fn option_map2_requires_both(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OPTION.map2(first, second, |a, b| a + b), expected);
    }

    #[rstest]
    fn option_apply_identity_law() {
        let identity = OPTION.apply(Some(|x: i32| x), Some(9));
        assert_eq!(identity, Some(9));
    }

    #[rstest]
    fn option_apply_homomorphism_law() {
        let function = |x: i32| x * 3;
        let left = OPTION.apply(Some(function), OPTION.of(4));
        let right = OPTION.of(function(4));
        assert_eq!(left, right);
    }
}
