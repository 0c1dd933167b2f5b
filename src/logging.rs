//! Logging bootstrap for hosts and tests.
//!
//! The engine itself only talks to the `log` facade and emits one-line
//! `key=value` events, e.g.
//! `event=to_pixel_fallback module=mapper status=degraded reason="..."`.
//! Hosts that already install a logger never need this module.

use log::{info, LevelFilter};

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Install an `env_logger` backend at `level`.
///
/// Idempotent: if a logger is already installed (by this function or by the
/// host) the call succeeds without replacing it. Never panics.
///
/// # Errors
/// - Returns an error when `level` is not one of the supported level names.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter = normalize_level(level)?;

    let installed = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp_millis()
        .is_test(cfg!(test))
        .try_init()
        .is_ok();

    if installed {
        info!(
            "event=logging_init module=logging status=ok level={} version={}",
            filter,
            env!("CARGO_PKG_VERSION")
        );
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<LevelFilter, String> {
    let normalized = level.trim().to_ascii_lowercase();
    if !SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        return Err(format!(
            "unsupported log level `{level}`; expected one of {}",
            SUPPORTED_LEVELS.join("|")
        ));
    }
    normalized
        .parse::<LevelFilter>()
        .map_err(|err| format!("invalid log level `{level}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_level() {
        assert!(init_logging("verbose").is_err());
    }

    #[test]
    fn repeated_init_is_ok() {
        assert!(init_logging("debug").is_ok());
        assert!(init_logging(" WARN ").is_ok());
    }
}
