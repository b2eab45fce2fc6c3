//! Bifunctor type class - mapping over both slots of a two-argument kind.
//!
//! `Functor2` only touches the value slot. A `Bifunctor` can also rewrite the
//! failure slot, which is how error types are translated between layers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F.bimap(fa, |e| e, |a| a) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F.bimap(F.bimap(fa, f1, g1), f2, g2) == F.bimap(fa, |e| f2(f1(e)), |a| g2(g1(a)))
//! ```
//!
//! ## `map_left` Consistency
//!
//! ```text
//! F.map_left(fa, f) == F.bimap(fa, f, |a| a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{EITHER, Either};
//! use kindred::typeclass::Bifunctor;
//!
//! let failed: Either<i32, String> = Either::Left(42);
//! let mapped = EITHER.bimap(failed, |e: i32| e * 2, |s: String| s.len());
//! assert_eq!(mapped, Either::Left(84));
//! ```

use super::higher::Kind2;

/// A type class for two-argument kinds whose both slots can be mapped.
pub trait Bifunctor: Kind2 {
    /// Maps the failure slot with `left` and the value slot with `right`.
    fn bimap<E, A, E2, B, F, G>(self, fa: Self::Of<E, A>, left: F, right: G) -> Self::Of<E2, B>
    where
        E: Send + 'static,
        A: Send + 'static,
        E2: Send + 'static,
        B: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static;

    /// Maps the failure slot only.
    #[inline]
    fn map_left<E, A, E2, F>(self, fa: Self::Of<E, A>, function: F) -> Self::Of<E2, A>
    where
        E: Send + 'static,
        A: Send + 'static,
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.bimap(fa, function, |value| value)
    }
}
