//! Command handler abstraction.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::input::{ParsedInput, VarArgs};
use crate::session::Session;

/// Errors a command handler can report.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An argument was present but could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required argument was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// The command ran and failed.
    #[error("{0}")]
    Failed(String),
}

/// Output text of a command, or the error it reported.
pub type CommandResult = Result<String, CommandError>;

/// Static description of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Invocable name, may contain several words.
    pub path: String,

    /// Human-readable description shown by `help`.
    pub description: String,

    /// Whether the command belongs to the management category.
    pub management: bool,
}

impl CommandSpec {
    /// Create a spec for an ordinary command.
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            management: false,
        }
    }

    /// Create a spec for a management command.
    pub fn management(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            management: true,
            ..Self::new(path, description)
        }
    }
}

/// A command that can be registered and dispatched.
///
/// Handlers run while the registry lock is held, so an implementation must
/// never register commands or dispatch input itself.
pub trait CommandHandler: Send + Sync {
    /// Describe the command. Called once, at registration.
    fn spec(&self) -> CommandSpec;

    /// Run the command.
    fn invoke(&self, invocation: &mut Invocation<'_>) -> CommandResult;
}

/// Handler body for [`FnCommand`].
pub type CommandFn = Arc<dyn Fn(&mut Invocation<'_>) -> CommandResult + Send + Sync>;

/// A command built from a spec and a closure.
#[derive(Clone)]
pub struct FnCommand {
    spec: CommandSpec,
    run: CommandFn,
}

impl FnCommand {
    /// Create a command from a spec and a closure.
    pub fn new<F>(spec: CommandSpec, run: F) -> Self
    where
        F: Fn(&mut Invocation<'_>) -> CommandResult + Send + Sync + 'static,
    {
        Self {
            spec,
            run: Arc::new(run),
        }
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl CommandHandler for FnCommand {
    fn spec(&self) -> CommandSpec {
        self.spec.clone()
    }

    fn invoke(&self, invocation: &mut Invocation<'_>) -> CommandResult {
        (self.run)(invocation)
    }
}

/// A handler together with the spec captured when it was registered.
#[derive(Clone)]
pub struct RegisteredCommand {
    spec: CommandSpec,
    handler: Arc<dyn CommandHandler>,
}

impl RegisteredCommand {
    pub(crate) fn new(spec: CommandSpec, handler: Arc<dyn CommandHandler>) -> Self {
        Self { spec, handler }
    }

    /// The spec captured at registration.
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Shorthand for `spec().path`.
    pub fn path(&self) -> &str {
        &self.spec.path
    }

    /// The registered handler.
    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }
}

impl fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Everything a handler receives when it is dispatched.
pub struct Invocation<'a> {
    /// Input with the matched command path stripped.
    pub input: ParsedInput,

    /// The interactive session.
    pub session: &'a mut Session,

    commands: &'a [RegisteredCommand],
}

impl<'a> Invocation<'a> {
    /// Create an invocation over a view of the registered commands.
    pub fn new(
        input: ParsedInput,
        session: &'a mut Session,
        commands: &'a [RegisteredCommand],
    ) -> Self {
        Self {
            input,
            session,
            commands,
        }
    }

    /// Registered commands in path order.
    pub fn commands(&self) -> &[RegisteredCommand] {
        self.commands
    }

    /// Text following the matched command path.
    pub fn remainder(&self) -> &str {
        &self.input.path
    }

    /// Variable arguments parsed from the remainder.
    pub fn args(&self) -> &VarArgs {
        &self.input.var_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_constructors() {
        let spec = CommandSpec::new("status", "Show status");
        assert_eq!(spec.path, "status");
        assert_eq!(spec.description, "Show status");
        assert!(!spec.management);

        let spec = CommandSpec::management("node", "Manage nodes");
        assert!(spec.management);
        assert_eq!(spec.path, "node");
    }

    #[test]
    fn test_fn_command_invoke() {
        let cmd = FnCommand::new(CommandSpec::new("echo", "Echo input"), |inv| {
            Ok(inv.remainder().to_string())
        });

        let mut session = Session::new();
        let mut inv = Invocation::new(ParsedInput::parse("hello world"), &mut session, &[]);

        assert_eq!(cmd.spec().path, "echo");
        assert_eq!(cmd.invoke(&mut inv).unwrap(), "hello world");
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::InvalidArgument("n".to_string()).to_string(),
            "Invalid argument: n"
        );
        assert_eq!(
            CommandError::Failed("backend unavailable".to_string()).to_string(),
            "backend unavailable"
        );
        assert_eq!(
            CommandError::MissingArgument("-n needs a COUNT".to_string()).to_string(),
            "Missing argument: -n needs a COUNT"
        );
    }
}
