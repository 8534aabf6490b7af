//! CLI argument structures and parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "DATAX_LOG_LEVEL";

/// How much the shell logs to stderr.
///
/// Quiet by default: only warnings and errors, so log lines do not mix with
/// command output in an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Startup summary
    Info,
    /// Each registration, duplicates, unmatched input and failures
    Debug,
    /// Every dispatch with its resolved command and remainder
    Trace,
}

impl LogLevel {
    /// Directive for the `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Lenient parse for `DATAX_LOG_LEVEL` and the config file.
    ///
    /// Case and surrounding whitespace are ignored, and `warning` is
    /// accepted for `warn`. Unknown names give `None`.
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("warning") {
            return Some(LogLevel::Warn);
        }
        <LogLevel as ValueEnum>::from_str(s, true).ok()
    }
}

/// datax interactive shell
///
/// Reads commands from stdin, or runs the lines given with `--command`.
#[derive(Debug, Parser)]
#[command(name = "datax")]
#[command(author, version)]
#[command(about = "datax - interactive command shell", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.datax/config.toml)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace")]
    pub trace: bool,

    /// Override the prompt from the config file
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Run a command line and exit (repeatable)
    #[arg(long = "command", short = 'c', value_name = "LINE")]
    pub commands: Vec<String>,
}

impl Cli {
    /// Pick the effective log level.
    ///
    /// `--trace`, then `--verbose`, then `--log-level`, then the environment
    /// value, then the config value, then the default.
    pub fn resolve_log_level(
        &self,
        env_level: Option<&str>,
        config_level: Option<&str>,
    ) -> LogLevel {
        if self.trace {
            return LogLevel::Trace;
        }
        if self.verbose {
            return LogLevel::Debug;
        }
        self.log_level
            .or_else(|| env_level.and_then(LogLevel::from_str_loose))
            .or_else(|| config_level.and_then(LogLevel::from_str_loose))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datax").chain(args.iter().copied()))
            .expect("should parse")
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.config.is_none());
        assert!(cli.commands.is_empty());
        assert!(!cli.verbose);
        assert_eq!(cli.resolve_log_level(None, None), LogLevel::Warn);
    }

    #[test]
    fn test_repeated_commands() {
        let cli = parse(&["-c", "help", "--command", "version"]);
        assert_eq!(cli.commands, vec!["help", "version"]);
    }

    #[test]
    fn test_log_level_precedence() {
        let cli = parse(&["--trace", "--verbose", "--log-level", "error"]);
        assert_eq!(cli.resolve_log_level(Some("info"), None), LogLevel::Trace);

        let cli = parse(&["--verbose", "--log-level", "error"]);
        assert_eq!(cli.resolve_log_level(Some("info"), None), LogLevel::Debug);

        let cli = parse(&["--log-level", "error"]);
        assert_eq!(cli.resolve_log_level(Some("info"), Some("trace")), LogLevel::Error);

        let cli = parse(&[]);
        assert_eq!(cli.resolve_log_level(Some("INFO"), Some("trace")), LogLevel::Info);
        assert_eq!(cli.resolve_log_level(Some("bogus"), Some("trace")), LogLevel::Trace);
        assert_eq!(cli.resolve_log_level(None, Some("debug")), LogLevel::Debug);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose(" trace "), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["datax", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
