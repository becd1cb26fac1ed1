//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the dqgate tracing/logging system.
///
/// Reads the `DQGATE_LOG` environment variable for per-subsystem log
/// levels, e.g. `DQGATE_LOG=dqgate_checks=debug,dqgate_core=warn`.
///
/// Falls back to `dqgate=info` if `DQGATE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("DQGATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("dqgate=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
