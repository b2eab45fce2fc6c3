//! Logging shims over `tracing`.
//!
//! The macros forward to the `tracing` crate when the `tracing` feature is
//! enabled and expand to nothing otherwise, so call sites need no `cfg`.

#[allow(unused_macros)]
macro_rules! log_trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    }};
}

#[allow(unused_macros)]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    }};
}

#[allow(unused_macros)]
macro_rules! log_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)+);
    }};
}

#[allow(unused_imports)]
pub(crate) use {log_debug, log_trace, log_warn};
