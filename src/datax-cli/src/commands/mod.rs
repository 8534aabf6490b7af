//! Commands registered by the datax binary.
//!
//! - `version` - Show the shell version
//! - `history` - Show lines entered in this session
//! - `help` - From `datax_shell::builtin`

mod history_cmd;
mod version_cmd;

pub use history_cmd::HistoryCommand;
pub use version_cmd::VersionCommand;

use datax_shell::builtin::{BuiltinCommand, register_builtins};
use datax_shell::{CommandRegistry, ServiceCatalog};

impl BuiltinCommand for VersionCommand {
    const PATH: &'static str = "version";
    const DESCRIPTION: &'static str = "Show the datax shell version";
}

impl BuiltinCommand for HistoryCommand {
    const PATH: &'static str = "history";
    const DESCRIPTION: &'static str = "Show command history [-n COUNT]";
}

/// Register every command the binary ships with.
pub fn register_all(registry: &CommandRegistry, services: ServiceCatalog) {
    register_builtins(registry, services);
    registry.register(VersionCommand);
    registry.register(HistoryCommand);
}
