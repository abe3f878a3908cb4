//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the affinity tracing/logging system.
///
/// Reads the `AFFINITY_LOG` environment variable for per-subsystem log
/// levels, e.g. `AFFINITY_LOG=affinity_analysis=debug,affinity_storage=warn`.
/// Falls back to `affinity=info` if `AFFINITY_LOG` is not set or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("AFFINITY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("affinity=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
