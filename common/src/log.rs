//! Logging macros.
//!
//! Thin wrappers around `tracing` so every crate reports outcomes the same way.
//! The CLI formatter renders `INFO` with a `[+]` marker and `ERROR` with `[-]`.

#[doc(hidden)]
pub use tracing;

/// Reports a successful step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Reports a failed step without aborting.
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
