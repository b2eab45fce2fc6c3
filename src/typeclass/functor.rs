//! Functor type classes - mapping over the value slot of a registered kind.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape. The traits here are written against the tags of the kind registry,
//! so one generic function can map over any registered container:
//!
//! - [`Functor`] for one-argument kinds (`Option`, `Task`)
//! - [`Functor2`] for two-argument kinds (`Either`, `Reader`, `TaskEither`)
//! - [`Functor3`] for three-argument kinds (`ReaderTaskEither`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F.map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F.map(F.map(fa, f), g) == F.map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, OPTION};
//!
//! let transformed = OPTION.map(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let missing = OPTION.map(None, |n: i32| n.to_string());
//! assert_eq!(missing, None);
//! ```
//!
//! # Why `Fn` and not `FnOnce`
//!
//! `Task` and everything built on it can be run more than once, and every run
//! calls the mapping function again. The trait therefore asks for
//! `Fn + Send + Sync + 'static`, which every instance can satisfy.

use super::higher::{Kind, Kind2, Kind3, OptionKind};

/// A type class for one-argument kinds that can have a function mapped over their contents.
pub trait Functor: Kind {
    /// Applies `function` to the value inside `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::{Functor, OPTION};
    ///
    /// assert_eq!(OPTION.map(Some(5), |n: i32| n * 2), Some(10));
    /// ```
    fn map<A, B, F>(self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static;

    /// Replaces the value inside the functor with a constant.
    #[inline]
    fn replace<A, B>(self, fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Clone + Send + Sync + 'static,
    {
        self.map(fa, move |_| value.clone())
    }
}

/// A type class for two-argument kinds that map over their second (value) slot.
///
/// The first slot (a failure type or an environment) is left untouched.
pub trait Functor2: Kind2 {
    /// Applies `function` to the value slot of `fa`.
    fn map<E, A, B, F>(self, fa: Self::Of<E, A>, function: F) -> Self::Of<E, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static;
}

/// A type class for three-argument kinds that map over their value slot.
pub trait Functor3: Kind3 {
    /// Applies `function` to the value slot of `fa`.
    fn map<R, E, A, B, F>(self, fa: Self::Of<R, E, A>, function: F) -> Self::Of<R, E, B>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionKind {
    #[inline]
    fn map<A, B, F>(self, fa: Option<A>, function: F) -> Option<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OPTION;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_map_doubles_present_values(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OPTION.map(input, |n| n * 2), expected);
    }

    #[rstest]
    fn option_replace_keeps_shape() {
        assert_eq!(OPTION.replace(Some(1), "x"), Some("x"));
        assert_eq!(OPTION.replace(None::<i32>, "x"), None);
    }

    #[rstest]
    fn generic_map_works_through_the_tag() {
        fn stringify<F: Functor>(tag: F, fa: F::Of<i32>) -> F::Of<String> {
            tag.map(fa, |n| n.to_string())
        }

        assert_eq!(stringify(OPTION, Some(7)), Some("7".to_string()));
    }
}
