//! Optional structured logging.
//!
//! With the `tracing` feature enabled, [`debug_event!`] forwards to
//! `tracing::debug!`. Without it the macro expands to nothing and the
//! arguments are not evaluated.

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

pub(crate) use debug_event;
