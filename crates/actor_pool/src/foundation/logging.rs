//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize logging with a default level that `RUST_LOG` can still override
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
