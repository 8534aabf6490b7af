//! Logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Filter directive for a level.
///
/// When `RUST_LOG` is set it is used as given, so per-crate directives keep
/// working; otherwise the level applies everywhere.
pub fn filter_directive(level: LogLevel, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => level.as_filter_str().to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::try_new(filter_directive(level, rust_log.as_deref()))
        .or_else(|_| EnvFilter::try_new(level.as_filter_str()))
        .map_err(|e| anyhow!("invalid log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(LogLevel::Info, None), "info");
        assert_eq!(filter_directive(LogLevel::Info, Some("  ")), "info");
        assert_eq!(
            filter_directive(LogLevel::Info, Some("datax_shell=trace")),
            "datax_shell=trace"
        );
    }
}
