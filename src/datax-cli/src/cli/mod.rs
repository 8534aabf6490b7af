//! Command-line entry: argument parsing and startup.

mod args;

pub use args::{Cli, LOG_LEVEL_ENV, LogLevel};

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Result, bail};
use datax_shell::{CommandRegistry, Dispatcher, Session};

use crate::commands;
use crate::config::ShellConfig;
use crate::repl::Repl;

/// Build the registry with every built-in command registered.
pub fn build_registry(config: &ShellConfig) -> Arc<CommandRegistry> {
    let registry = Arc::new(CommandRegistry::new());
    commands::register_all(&registry, config.service_catalog());
    tracing::info!("Registered {} commands", registry.len());
    registry
}

/// Build the session from config and CLI overrides.
pub fn build_session(cli: &Cli, config: &ShellConfig) -> Session {
    let prompt = cli.prompt.as_deref().unwrap_or(&config.prompt);
    Session::new()
        .with_prompt(prompt)
        .with_history_limit(config.history_limit)
}

/// Run the shell.
///
/// With `--command` lines, runs them and fails if any of them failed;
/// otherwise reads from stdin until EOF or `exit`.
pub fn run(cli: Cli, config: ShellConfig) -> Result<()> {
    let dispatcher = Dispatcher::new(build_registry(&config));
    let mut session = build_session(&cli, &config);
    let mut repl = Repl::new(&dispatcher, &mut session);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if !cli.commands.is_empty() {
        let summary = repl.run_commands(&cli.commands, &mut out, &mut err)?;
        if summary.failed > 0 {
            bail!(
                "{} of {} command(s) failed",
                summary.failed,
                summary.dispatched
            );
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let summary = repl.run(stdin.lock(), &mut out, &mut err, interactive)?;
    tracing::debug!(
        dispatched = summary.dispatched,
        failed = summary.failed,
        "Session ended"
    );
    Ok(())
}
