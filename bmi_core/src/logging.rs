//! Logging setup for the BMI planner.
//!
//! Logs go to stderr so stdout stays clean for reports and JSON output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber used by `bmi-planner`
///
/// `RUST_LOG` wins over `default_level` when set, e.g. `RUST_LOG=bmi_core=debug`
/// to see category fallbacks and report delivery.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route engine logs through the test harness
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
