//! Logging utilities.
//!
//! The library logs through the standard `log` facade; this module only
//! centralizes initialization of the `env_logger` backend for binaries that
//! want it. Platform sinks log each submission at debug level.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "triptych_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // RUST_LOG wins over nothing, an explicit filter wins over RUST_LOG.
        let mut builder = match config.env_filter {
            Some(filter) => {
                let mut builder = env_logger::Builder::new();
                builder.parse_filters(&filter);
                builder
            }
            None => env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            ),
        };

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
