//! Logging shims.
//!
//! Forward to `tracing` or `log` when the matching feature is enabled and
//! compile to nothing otherwise. `tracing` wins when both are enabled. Only
//! usable in statement position.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::trace!($($arg)*);
        #[cfg(not(any(feature = "tracing", feature = "log")))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        ::log::debug!($($arg)*);
        #[cfg(not(any(feature = "tracing", feature = "log")))]
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use {debug, trace};
