//! Test support: once-guarded tracing initialization.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Initializes the global tracing subscriber once per test binary.
///
/// `RUST_LOG` controls the filter; without it, everything at debug and
/// above goes to stderr. Repeated calls are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .try_init();

        info!("test setup complete");
    });
}
