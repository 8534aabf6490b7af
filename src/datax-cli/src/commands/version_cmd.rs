//! Built-in `version` command.

use datax_shell::builtin::BuiltinCommand;
use datax_shell::{CommandHandler, CommandResult, CommandSpec, Invocation};

/// The `version` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionCommand;

impl VersionCommand {
    /// Version line printed by the command.
    pub fn version_line() -> String {
        format!("datax {}", env!("CARGO_PKG_VERSION"))
    }
}

impl CommandHandler for VersionCommand {
    fn spec(&self) -> CommandSpec {
        Self::builtin_spec()
    }

    fn invoke(&self, _invocation: &mut Invocation<'_>) -> CommandResult {
        Ok(Self::version_line())
    }
}
