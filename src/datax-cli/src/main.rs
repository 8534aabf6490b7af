//! datax - main entry point.

use anyhow::Result;
use clap::Parser;

use datax_cli::cli::{Cli, LOG_LEVEL_ENV};
use datax_cli::config::ShellConfig;
use datax_cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ShellConfig::load(cli.config.as_deref())?;

    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let level = cli.resolve_log_level(env_level.as_deref(), config.log_level.as_deref());
    init_logging(level)?;

    datax_cli::cli::run(cli, config)
}
