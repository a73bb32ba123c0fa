// Rust guideline compliant 2026-10-16

//! Tracing setup for the Ruru CLI.
//!
//! Logs always go to stderr so stdout stays reserved for results.

use ruru_core::match_one;
use tracing::Level;
use tracing_subscriber::fmt;

/// Log level names accepted by `--log-level`, abbreviations included.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level, e.g. `warn` or `debug`
/// * `json` - Emit JSON lines instead of human-readable text
///
/// # Errors
///
/// Returns an error if the level name is not recognized.
pub fn init_tracing(level: &str, json: bool) -> ruru_core::Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error if the name matches no level or several levels.
pub fn parse_log_level(level: &str) -> ruru_core::Result<Level> {
    let level = match match_one(&level.to_lowercase(), &LOG_LEVELS)?.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => Level::TRACE,
    };
    Ok(level)
}
