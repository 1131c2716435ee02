//! Shared logging initialization for bridge hosts.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Map a configured level name to a tracing level, defaulting to INFO.
pub fn parse_level(level: &str) -> tracing::Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Initialize process-level tracing output at `level`.
///
/// Only the first call installs a subscriber; later calls are no-ops. Never
/// fails: if another subscriber is already installed it is left in place.
pub fn init(level: &str) {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(parse_level(level))
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), tracing::Level::TRACE);
        assert_eq!(parse_level("DEBUG"), tracing::Level::DEBUG);
        assert_eq!(parse_level("warn"), tracing::Level::WARN);
        assert_eq!(parse_level("error"), tracing::Level::ERROR);
        assert_eq!(parse_level("info"), tracing::Level::INFO);
        assert_eq!(parse_level("verbose"), tracing::Level::INFO);
    }
}
