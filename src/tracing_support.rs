//! Log output for tests and demos.
//!
//! With the `tracing` feature enabled, [`init_tracing`] installs a `fmt`
//! subscriber whose level is read from the `WEIGHTED_GRAPHS_LOG` environment
//! variable (`warn` if unset or unparsable).  Without the feature it does
//! nothing, and spans and events from the library go nowhere.

/// Environment variable holding the maximum log level, e.g. `debug`.
pub const LOG_LEVEL_VAR: &str = "WEIGHTED_GRAPHS_LOG";

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::filter::LevelFilter;

    use super::LOG_LEVEL_VAR;

    /// Gets the log level requested through [`LOG_LEVEL_VAR`].
    pub fn log_level() -> LevelFilter {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::WARN)
    }

    /// Installs the global subscriber.  Safe to call any number of times;
    /// only the first call has an effect, and a subscriber installed by
    /// someone else is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(log_level())
                .with_test_writer()
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
