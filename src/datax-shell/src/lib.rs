//! Command registry and dispatcher for the datax interactive shell.
//!
//! Commands implement [`CommandHandler`] and are registered into a
//! [`CommandRegistry`] at startup. The [`Dispatcher`] takes a raw input line,
//! selects the first registered command (in path order) whose path is a
//! prefix of the line, and invokes it with the rest of the line parsed into
//! [`VarArgs`].
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use datax_shell::{CommandRegistry, CommandSpec, Dispatcher, FnCommand, Session};
//!
//! let registry = Arc::new(CommandRegistry::new());
//! registry.register(FnCommand::new(CommandSpec::new("status", "Show status"), |_| {
//!     Ok("all good".to_string())
//! }));
//!
//! let dispatcher = Dispatcher::new(registry);
//! let mut session = Session::new();
//! println!("{}", dispatcher.dispatch("status", &mut session)?);
//! ```
//!
//! # Built-in Commands
//!
//! - `help` - List common commands and management services

pub mod builtin;
mod command;
mod dispatcher;
mod input;
mod registry;
mod services;
mod session;
mod table;

pub use command::{
    CommandError, CommandFn, CommandHandler, CommandResult, CommandSpec, FnCommand, Invocation,
    RegisteredCommand,
};
pub use dispatcher::{DispatchError, Dispatcher, resolve};
pub use input::{ParsedInput, VarArgs};
pub use registry::CommandRegistry;
pub use services::{ManagementService, ServiceCatalog};
pub use session::{DEFAULT_HISTORY_LIMIT, DEFAULT_PROMPT, Session};
pub use table::render_table;

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::builtin::{BuiltinCommand, HelpCommand};
    pub use crate::{
        CommandError, CommandHandler, CommandRegistry, CommandResult, CommandSpec, DispatchError,
        Dispatcher, Invocation, ServiceCatalog, Session,
    };
}
