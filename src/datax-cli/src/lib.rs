//! datax interactive shell.
//!
//! The binary wires the `datax-shell` dispatcher to a line-reading front end:
//! - `cli/` - Command-line argument parsing and startup
//! - `config` - `config.toml` loading
//! - `logging` - tracing subscriber setup
//! - `commands/` - Commands registered at startup
//! - `repl` - Line loop feeding the dispatcher

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod repl;
