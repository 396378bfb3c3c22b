//! Logging configuration using env_logger.
//!
//! All log output goes to stderr. The default level is `warn`, so a
//! successful run prints nothing; set `RUST_LOG` to see more.

use anyhow::Result;
use log::{Level, LevelFilter, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Initialize env_logger-based logging with stderr output
///
/// Only the first call installs the logger; later calls return `Ok(())`.
pub fn init() -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| match setup_logger() {
        Ok(_) => {
            log::debug!("Logging initialized with stderr output");
        }
        Err(e) => {
            // Cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use binfile::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Debug,
///     LogMessage {
///         message: "Payload written".to_string(),
///         module: "writer",
///         context: Some(vec![
///             ("file_path", "binaryFile.bin".to_string()),
///             ("bytes", "4".to_string()),
///         ]),
///     }
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    match level {
        Level::Error => {
            error!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Warn => {
            warn!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Info => {
            info!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Debug => {
            log::debug!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Trace => {
            log::trace!(target: msg.module, "{}", format_context(&msg));
        }
    }
}

/// Format a log message with its context for display
pub fn format_context(msg: &LogMessage) -> String {
    match &msg.context {
        Some(context) if !context.is_empty() => {
            let context_str = context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");

            format!("{} [{}]", msg.message, context_str)
        }
        _ => msg.message.clone(),
    }
}

fn setup_logger() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .target(env_logger::Target::Stderr)
        .try_init()?;

    Ok(())
}
