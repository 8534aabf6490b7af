//! Built-in `help` command.
//!
//! Lists registered commands and management services in two tables.

use super::BuiltinCommand;
use crate::command::{CommandHandler, CommandResult, CommandSpec, Invocation, RegisteredCommand};
use crate::services::ServiceCatalog;
use crate::table::render_table;

/// The `help` built-in command.
#[derive(Debug, Clone, Default)]
pub struct HelpCommand {
    services: ServiceCatalog,
}

impl HelpCommand {
    /// Create a help command listing the given management services.
    pub fn new(services: ServiceCatalog) -> Self {
        Self { services }
    }

    /// Render the help text for the given commands.
    ///
    /// Management-flagged commands and `help` itself are left out of the
    /// common table; `help` is appended as its last row instead.
    pub fn render(&self, commands: &[RegisteredCommand]) -> String {
        let mut common: Vec<[&str; 2]> = commands
            .iter()
            .map(RegisteredCommand::spec)
            .filter(|spec| !spec.management && spec.path != Self::PATH)
            .map(|spec| [spec.path.as_str(), spec.description.as_str()])
            .collect();
        common.push([Self::PATH, ""]);

        let management: Vec<[&str; 2]> = self
            .services
            .iter()
            .map(|svc| [svc.lower_name(), svc.name()])
            .collect();

        let mut body = String::from("Common Commands:\n");
        body.push_str(&render_table(&common));
        body.push_str("\nManagement Commands:\n");
        body.push_str(&render_table(&management));

        format!("\n{body}\n")
    }
}

impl CommandHandler for HelpCommand {
    fn spec(&self) -> CommandSpec {
        Self::builtin_spec()
    }

    fn invoke(&self, invocation: &mut Invocation<'_>) -> CommandResult {
        Ok(self.render(invocation.commands()))
    }
}
