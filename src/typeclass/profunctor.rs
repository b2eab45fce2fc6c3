//! Profunctor type class - contravariant in the input, covariant in the output.
//!
//! A profunctor is a two-argument kind `P<R, A>` that consumes an `R` and
//! produces an `A`. Its input can be adapted before it is consumed (`lmap`)
//! and its output after it is produced (`rmap`). `Reader` is the instance in
//! this crate.
//!
//! Inputs are handed to the adapter by reference: a reader borrows its
//! environment, so the adapter must derive the inner environment from a
//! borrowed outer one.
//!
//! # Laws
//!
//! ```text
//! P.dimap(p, |r| r.clone(), |a| a) == p
//! P.dimap(p, |r| f1(&f2(r)), |a| g2(g1(a))) == P.dimap(P.dimap(p, f1, g1), f2, g2)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{READER, Reader};
//! use kindred::typeclass::Profunctor;
//!
//! let length = Reader::new(|text: &String| text.len());
//! let adapted = READER.dimap(length, |n: &i32| "x".repeat(*n as usize), |len| len * 10);
//! assert_eq!(adapted.run(&3), 30);
//! ```

use super::functor::Functor2;

/// A type class for two-argument kinds that consume their first argument.
pub trait Profunctor: Functor2 {
    /// Adapts the input: the result consumes `R2` and turns it into `R` first.
    fn lmap<R, R2, A, F>(self, fa: Self::Of<R, A>, function: F) -> Self::Of<R2, A>
    where
        R: Send + 'static,
        R2: Send + 'static,
        A: Send + 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static;

    /// Adapts the output. Identical to `Functor2::map`.
    #[inline]
    fn rmap<R, A, B, F>(self, fa: Self::Of<R, A>, function: F) -> Self::Of<R, B>
    where
        R: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.map(fa, function)
    }

    /// Adapts both the input and the output.
    #[inline]
    fn dimap<R, R2, A, B, F, G>(self, fa: Self::Of<R, A>, input: F, output: G) -> Self::Of<R2, B>
    where
        R: Send + 'static,
        R2: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(&R2) -> R + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        self.rmap(self.lmap(fa, input), output)
    }
}
