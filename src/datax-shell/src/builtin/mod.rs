//! Built-in shell commands.
//!
//! - `help` - List common and management commands

mod help_cmd;

pub use help_cmd::HelpCommand;

use crate::command::CommandSpec;
use crate::registry::CommandRegistry;
use crate::services::ServiceCatalog;

/// Trait for built-in commands.
pub trait BuiltinCommand {
    /// The command path.
    const PATH: &'static str;

    /// Human-readable description.
    const DESCRIPTION: &'static str;

    /// Spec built from the constants.
    fn builtin_spec() -> CommandSpec {
        CommandSpec::new(Self::PATH, Self::DESCRIPTION)
    }
}

impl BuiltinCommand for HelpCommand {
    const PATH: &'static str = "help";
    const DESCRIPTION: &'static str = "";
}

/// Register the built-in commands of this crate.
pub fn register_builtins(registry: &CommandRegistry, services: ServiceCatalog) {
    registry.register(HelpCommand::new(services));
}
