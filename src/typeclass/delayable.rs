//! Delayable type classes - postponing the result of an asynchronous computation.
//!
//! Instances wait for the wrapped computation to settle and then hold the
//! result for the given duration before handing it on. Successes and
//! failures are delayed alike. The concurrency combinators use this to pace
//! consecutive windows.

use std::time::Duration;

use super::higher::{Kind, Kind2, Kind3, OptionKind};

/// A one-argument kind whose result can be postponed.
pub trait Delayable: Kind {
    /// Settles `fa`, then waits `duration` before yielding its result.
    fn delay<A>(self, fa: Self::Of<A>, duration: Duration) -> Self::Of<A>
    where
        A: Send + 'static;
}

/// A two-argument kind whose result can be postponed.
pub trait Delayable2: Kind2 {
    /// Settles `fa`, then waits `duration` before yielding its result.
    fn delay<E, A>(self, fa: Self::Of<E, A>, duration: Duration) -> Self::Of<E, A>
    where
        E: Send + 'static,
        A: Send + 'static;
}

/// A three-argument kind whose result can be postponed.
pub trait Delayable3: Kind3 {
    /// Settles `fa` for some environment, then waits `duration`.
    fn delay<R, E, A>(self, fa: Self::Of<R, E, A>, duration: Duration) -> Self::Of<R, E, A>
    where
        R: Clone + Send + Sync + 'static,
        E: Send + 'static,
        A: Send + 'static;
}

// `Option` is synchronous and has nothing to wait for; the instance lets the
// concurrency combinators run over it unchanged.
impl Delayable for OptionKind {
    #[inline]
    fn delay<A>(self, fa: Option<A>, _duration: Duration) -> Option<A>
    where
        A: Send + 'static,
    {
        fa
    }
}
