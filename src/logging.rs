// SPDX-License-Identifier: MPL-2.0
//! Logging bootstrap for the binary.
//!
//! The library only talks to the `log` facade. The binary starts a
//! `flexi_logger` backend writing to stderr, once per process.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

/// Environment variable read when `--log-level` is not given.
pub const ENV_LOG_LEVEL: &str = "FOLIO_STORE_LOG";

/// Level used when neither flag nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

/// Starts stderr logging at `level`.
///
/// Calling again with the same level is a no-op.
///
/// # Errors
///
/// Returns a message when `level` is unsupported, when logging is already
/// running at another level, or when the backend fails to start.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{level}`",
                state.level
            ));
        }
        return Ok(());
    }

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    log::info!(
        "event=app_start status=ok version={} level={level}",
        env!("CARGO_PKG_VERSION")
    );

    let state = LoggingState {
        level,
        _logger: logger,
    };
    if LOGGING_STATE.set(state).is_err() {
        // Another caller stored its handle first; that one stays in effect.
        return match LOGGING_STATE.get() {
            Some(winner) if winner.level == level => Ok(()),
            Some(winner) => Err(format!(
                "logging initialized concurrently with level `{}`; refusing `{level}`",
                winner.level
            )),
            None => Err("logging state missing after initialization".to_string()),
        };
    }
    Ok(())
}

/// Level from the flag, else [`ENV_LOG_LEVEL`], else [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn resolve_level(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(ENV_LOG_LEVEL).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("WARNING"), Ok("warn"));
        assert_eq!(normalize_level(" debug "), Ok("debug"));
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn repeated_init_keeps_first_level() {
        assert_eq!(init_logging("warn"), Ok(()));
        assert_eq!(init_logging("WARNING"), Ok(()));

        let err = init_logging("debug").expect_err("level change refused");
        assert!(err.contains("`warn`"));
    }

    #[test]
    fn flag_takes_precedence_over_default() {
        assert_eq!(resolve_level(Some("error")), "error");
    }
}
