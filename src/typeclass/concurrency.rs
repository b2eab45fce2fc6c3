//! Bounded-concurrency batch execution.
//!
//! The input is split into consecutive windows of `concurrency` elements.
//! Elements inside a window are combined with `apply`, so asynchronous
//! instances run them together. Windows are chained: window `k + 1` is not
//! started before the combined result of window `k` is available, and a
//! failed window stops the rest. When a delay is configured it is inserted
//! after each completed window, never before the first one.
//!
//! ```rust
//! use kindred::typeclass::{ConcurrencyConfig, OPTION, concurrency};
//!
//! let config = ConcurrencyConfig::new(2);
//! let collected = concurrency(OPTION, &config, vec![Some(1), Some(2), Some(3)]);
//! assert_eq!(collected, Some(vec![1, 2, 3]));
//! ```

use std::time::Duration;

use super::delayable::{Delayable, Delayable2};
use super::monad::{Monad, Monad2};

/// Window size and pacing for [`concurrency`] and [`concurrency2`].
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use kindred::typeclass::ConcurrencyConfig;
///
/// let config = ConcurrencyConfig::new(4).with_delay(Duration::from_millis(50));
/// assert_eq!(config.concurrency(), 4);
/// assert_eq!(config.delay(), Some(Duration::from_millis(50)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcurrencyConfig {
    concurrency: usize,
    #[cfg_attr(feature = "serde", serde(default, with = "delay_millis"))]
    delay: Option<Duration>,
}

impl ConcurrencyConfig {
    /// Creates a configuration running `concurrency` elements per window with no delay.
    #[must_use]
    pub const fn new(concurrency: usize) -> Self {
        Self {
            concurrency,
            delay: None,
        }
    }

    /// Sets the pause inserted between consecutive windows.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The effective window size. A configured zero is treated as one.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    /// The pause between consecutive windows, if any.
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }
}

impl Default for ConcurrencyConfig {
    /// One window slot per logical CPU, no delay.
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(feature = "serde")]
mod delay_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(delay: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match delay {
            Some(duration) => {
                serializer.serialize_some(&u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

fn push<A>(mut values: Vec<A>, value: A) -> Vec<A> {
    values.push(value);
    values
}

/// Runs one-argument containers in windows of `config.concurrency()` elements.
pub fn concurrency<F, A>(tag: F, config: &ConcurrencyConfig, items: Vec<F::Of<A>>) -> F::Of<Vec<A>>
where
    F: Monad + Delayable,
    A: Clone + Send + Sync + 'static,
    F::Of<A>: Clone + Send + Sync + 'static,
{
    let size = config.concurrency();
    let mut accumulator = tag.of(Vec::new());

    for (index, window) in items.chunks(size).enumerate() {
        crate::trace::log_debug!(window = index, size = window.len(), "scheduling concurrency window");
        if index > 0
            && let Some(duration) = config.delay()
        {
            accumulator = tag.delay(accumulator, duration);
        }
        let window = window.to_vec();
        accumulator = tag.chain(accumulator, move |values: Vec<A>| {
            window
                .iter()
                .cloned()
                .fold(tag.of(values), |collected, item| tag.map2(collected, item, push))
        });
    }

    accumulator
}

/// Runs two-argument containers in windows of `config.concurrency()` elements.
///
/// The first failure in input order within the failing window is reported;
/// later windows are never started.
pub fn concurrency2<F, E, A>(
    tag: F,
    config: &ConcurrencyConfig,
    items: Vec<F::Of<E, A>>,
) -> F::Of<E, Vec<A>>
where
    F: Monad2 + Delayable2,
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
    F::Of<E, A>: Clone + Send + Sync + 'static,
{
    let size = config.concurrency();
    let mut accumulator = tag.of(Vec::new());

    for (index, window) in items.chunks(size).enumerate() {
        crate::trace::log_debug!(window = index, size = window.len(), "scheduling concurrency window");
        if index > 0
            && let Some(duration) = config.delay()
        {
            accumulator = tag.delay(accumulator, duration);
        }
        let window = window.to_vec();
        accumulator = tag.chain(accumulator, move |values: Vec<A>| {
            window
                .iter()
                .cloned()
                .fold(tag.of(values), |collected, item| tag.map2(collected, item, push))
        });
    }

    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OPTION;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn option_windows_preserve_order(#[case] size: usize) {
        let items = vec![Some(1), Some(2), Some(3), Some(4)];
        assert_eq!(
            concurrency(OPTION, &ConcurrencyConfig::new(size), items),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[rstest]
    fn zero_concurrency_is_clamped_to_one() {
        let config = ConcurrencyConfig::new(0);
        assert_eq!(config.concurrency(), 1);
        assert_eq!(
            concurrency(OPTION, &config, vec![Some(1), Some(2)]),
            Some(vec![1, 2])
        );
    }

    #[rstest]
    fn default_uses_available_cpus() {
        let config = ConcurrencyConfig::default();
        assert_eq!(config.concurrency(), num_cpus::get().max(1));
        assert_eq!(config.delay(), None);
    }

    #[rstest]
    fn empty_input_yields_empty_collection() {
        let collected = concurrency::<_, i32>(OPTION, &ConcurrencyConfig::new(3), Vec::new());
        assert_eq!(collected, Some(Vec::new()));
    }

    #[rstest]
    fn missing_element_fails_the_batch() {
        let items = vec![Some(1), None, Some(3)];
        assert_eq!(concurrency(OPTION, &ConcurrencyConfig::new(2), items), None);
    }
}
