//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable for filtering. Call once at
/// application startup; library code only uses the `log` facade.
pub fn init() {
    env_logger::init();
}
