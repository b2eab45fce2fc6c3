//! Tests for the plain configuration values: `ConcurrencyConfig` and `RetryOptions`.

#![cfg(feature = "async")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kindred::effect::RetryOptions;
use kindred::typeclass::ConcurrencyConfig;
use rstest::rstest;

// =============================================================================
// ConcurrencyConfig
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(8, 8)]
fn concurrency_is_at_least_one(#[case] configured: usize, #[case] effective: usize) {
    assert_eq!(ConcurrencyConfig::new(configured).concurrency(), effective);
}

#[rstest]
fn default_uses_the_logical_cpu_count_without_delay() {
    let config = ConcurrencyConfig::default();
    assert_eq!(config.concurrency(), num_cpus::get().max(1));
    assert_eq!(config.delay(), None);
}

#[rstest]
fn with_delay_keeps_the_window_size() {
    let config = ConcurrencyConfig::new(3).with_delay(Duration::from_millis(250));
    assert_eq!(config, ConcurrencyConfig::new(3).with_delay(Duration::from_millis(250)));
    assert_eq!(config.concurrency(), 3);
    assert_eq!(config.delay(), Some(Duration::from_millis(250)));
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[rstest]
    fn deserializes_delay_in_milliseconds() {
        let config: ConcurrencyConfig =
            serde_json::from_str(r#"{"concurrency": 4, "delay": 1500}"#).unwrap();
        assert_eq!(config, ConcurrencyConfig::new(4).with_delay(Duration::from_millis(1500)));
    }

    #[rstest]
    fn missing_delay_means_no_pause() {
        let config: ConcurrencyConfig = serde_json::from_str(r#"{"concurrency": 2}"#).unwrap();
        assert_eq!(config, ConcurrencyConfig::new(2));
    }

    #[rstest]
    fn serializes_back_to_the_same_shape() {
        let config = ConcurrencyConfig::new(5).with_delay(Duration::from_millis(20));
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json, serde_json::json!({"concurrency": 5, "delay": 20}));
    }

    #[rstest]
    fn rejects_a_negative_window() {
        let parsed = serde_json::from_str::<ConcurrencyConfig>(r#"{"concurrency": -1}"#);
        assert!(parsed.is_err());
    }
}

// =============================================================================
// RetryOptions
// =============================================================================

#[rstest]
fn retry_options_default_to_immediate_unhooked_retries() {
    let options = RetryOptions::<String>::new(2);
    assert_eq!(options.max_retries(), 2);
    assert_eq!(options.delay(), None);
    assert!(!options.should_skip(&"anything".to_string()));
}

#[rstest]
fn cloned_options_share_their_hooks() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let options = RetryOptions::<i32>::new(1)
        .on_error(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .skip_if(|code| *code >= 500);

    let cloned = options.clone();

    assert!(cloned.should_skip(&503));
    assert!(!cloned.should_skip(&404));
    assert_eq!(
        format!("{cloned:?}"),
        "RetryOptions { max_retries: 1, delay: None, on_error: true, skip_if: true }"
    );
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}
