//! Command line dispatch.

use std::sync::Arc;

use thiserror::Error;

use crate::command::{CommandError, Invocation, RegisteredCommand};
use crate::input::ParsedInput;
use crate::registry::CommandRegistry;
use crate::session::Session;

/// Errors returned by [`Dispatcher::dispatch`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered path is a prefix of the input.
    #[error("no command match")]
    NoMatch,

    /// The matched command failed.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Resolves input lines to registered commands and runs them.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// The registry commands are resolved from.
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Run the command matching `line`.
    ///
    /// The registry lock is held until the handler returns, so the handler
    /// must not register commands or dispatch again; doing so deadlocks.
    ///
    /// The first command in path order whose path is a prefix of the line is
    /// selected. That is not necessarily the longest match: with `status` and
    /// `status detail` registered, `status detail` resolves to `status`.
    pub fn dispatch(&self, line: &str, session: &mut Session) -> Result<String, DispatchError> {
        let state = self.registry.lock();
        let mut input = ParsedInput::parse(line);
        session.record(&input.path);

        let Some(command) = resolve(state.ordered(), &input.path) else {
            tracing::debug!("No command matches input '{}'", input.path);
            return Err(DispatchError::NoMatch);
        };

        input.strip_command(command.path());
        tracing::trace!(
            command = command.path(),
            remainder = %input.path,
            "Dispatching command"
        );

        let mut invocation = Invocation::new(input, session, state.ordered());
        command
            .handler()
            .invoke(&mut invocation)
            .map_err(DispatchError::from)
    }
}

/// First command in `commands` whose path is a prefix of `candidate`.
pub fn resolve<'a>(
    commands: &'a [RegisteredCommand],
    candidate: &str,
) -> Option<&'a RegisteredCommand> {
    commands
        .iter()
        .find(|command| candidate.starts_with(command.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandSpec, FnCommand};

    fn echo(path: &str) -> FnCommand {
        let name = path.to_string();
        FnCommand::new(CommandSpec::new(path, ""), move |inv| {
            Ok(format!("{name}|{}", inv.remainder()))
        })
    }

    fn dispatcher(paths: &[&str]) -> Dispatcher {
        let registry = CommandRegistry::new();
        for path in paths {
            registry.register(echo(path));
        }
        Dispatcher::new(Arc::new(registry))
    }

    #[test]
    fn test_exact_match_has_empty_remainder() {
        let d = dispatcher(&["status"]);
        let mut session = Session::new();
        assert_eq!(d.dispatch("status", &mut session).unwrap(), "status|");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let d = dispatcher(&["status"]);
        let mut session = Session::new();
        assert_eq!(d.dispatch("  status  ", &mut session).unwrap(), "status|");
    }

    #[test]
    fn test_first_sorted_prefix_wins() {
        let d = dispatcher(&["status detail", "status", "help"]);
        let mut session = Session::new();
        assert_eq!(
            d.dispatch("status detail extra", &mut session).unwrap(),
            "status|detail extra"
        );
    }

    #[test]
    fn test_prefix_is_plain_string_prefix() {
        let d = dispatcher(&["stat"]);
        let mut session = Session::new();
        assert_eq!(d.dispatch("status", &mut session).unwrap(), "stat|us");
    }

    #[test]
    fn test_no_match() {
        let d = dispatcher(&["help"]);
        let mut session = Session::new();
        let err = d.dispatch("nonexistent", &mut session).unwrap_err();
        assert!(matches!(err, DispatchError::NoMatch));
        assert_eq!(err.to_string(), "no command match");
    }

    #[test]
    fn test_handler_error_passes_through() {
        let registry = CommandRegistry::new();
        registry.register(FnCommand::new(CommandSpec::new("fail", ""), |_| {
            Err(CommandError::Failed("backend unavailable".to_string()))
        }));
        let d = Dispatcher::new(Arc::new(registry));
        let mut session = Session::new();

        let err = d.dispatch("fail", &mut session).unwrap_err();
        assert!(matches!(err, DispatchError::Command(CommandError::Failed(_))));
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn test_var_args_attached() {
        let registry = CommandRegistry::new();
        registry.register(FnCommand::new(CommandSpec::new("get", ""), |inv| {
            Ok(inv.args().get("key").unwrap_or("none").to_string())
        }));
        let d = Dispatcher::new(Arc::new(registry));
        let mut session = Session::new();

        assert_eq!(d.dispatch("get --key users", &mut session).unwrap(), "users");
        assert_eq!(d.dispatch("get", &mut session).unwrap(), "none");
    }

    #[test]
    fn test_dispatch_records_history() {
        let d = dispatcher(&["status"]);
        let mut session = Session::new();
        d.dispatch(" status ", &mut session).unwrap();
        let _ = d.dispatch("unknown", &mut session);
        assert_eq!(
            session.history().collect::<Vec<_>>(),
            vec!["status", "unknown"]
        );
    }

    #[test]
    fn test_handler_sees_registered_commands() {
        let registry = CommandRegistry::new();
        registry.register(echo("b"));
        registry.register(FnCommand::new(CommandSpec::new("list", ""), |inv| {
            Ok(inv
                .commands()
                .iter()
                .map(|c| c.path())
                .collect::<Vec<_>>()
                .join(","))
        }));
        let d = Dispatcher::new(Arc::new(registry));
        let mut session = Session::new();

        assert_eq!(d.dispatch("list", &mut session).unwrap(), "b,list");
    }

    #[test]
    fn test_registration_waits_for_running_handler() {
        use std::sync::{Mutex, mpsc};
        use std::thread;
        use std::time::Duration;

        let (started_tx, started_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let release_rx = Mutex::new(release_rx);

        let registry = Arc::new(CommandRegistry::new());
        registry.register(FnCommand::new(CommandSpec::new("block", ""), move |_| {
            started_tx.send(()).unwrap();
            release_rx.lock().unwrap().recv().unwrap();
            Ok("released".to_string())
        }));
        let d = Dispatcher::new(Arc::clone(&registry));

        let dispatching = thread::spawn(move || {
            let mut session = Session::new();
            d.dispatch("block", &mut session).unwrap()
        });
        started_rx.recv().unwrap();

        let (done_tx, done_rx) = mpsc::channel::<bool>();
        let registering = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let added = registry.register(echo("x"));
                done_tx.send(added).unwrap();
            })
        };

        assert!(
            done_rx.recv_timeout(Duration::from_millis(200)).is_err(),
            "register finished while a handler was running"
        );

        release_tx.send(()).unwrap();
        assert!(done_rx.recv_timeout(Duration::from_secs(5)).unwrap());
        assert_eq!(dispatching.join().unwrap(), "released");
        registering.join().unwrap();
        assert!(registry.contains("x"));
    }

    #[test]
    fn test_resolve_empty_registry() {
        assert!(resolve(&[], "anything").is_none());
    }
}
