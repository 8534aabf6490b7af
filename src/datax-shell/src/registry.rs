//! Command registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::command::{CommandHandler, CommandSpec, RegisteredCommand};

/// Registered commands, guarded by the registry lock.
#[derive(Default)]
pub(crate) struct RegistryState {
    /// Commands sorted by path.
    ordered: Vec<RegisteredCommand>,
    /// Commands by path.
    index: HashMap<String, RegisteredCommand>,
}

impl RegistryState {
    pub(crate) fn ordered(&self) -> &[RegisteredCommand] {
        &self.ordered
    }
}

/// Registry of shell commands.
///
/// Paths are unique: the first registration of a path wins and later ones are
/// ignored. Commands are always listed in byte-wise lexicographic path order.
///
/// One lock serializes registration with dispatch. The lock is not
/// re-entrant, so command handlers must never call back into the registry.
#[derive(Default)]
pub struct CommandRegistry {
    state: Mutex<RegistryState>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    ///
    /// Returns `false` if the path was already registered, in which case the
    /// registry is left unchanged.
    pub fn register<H>(&self, handler: H) -> bool
    where
        H: CommandHandler + 'static,
    {
        self.register_arc(Arc::new(handler))
    }

    /// Register a shared command handler.
    pub fn register_arc(&self, handler: Arc<dyn CommandHandler>) -> bool {
        let spec = handler.spec();
        let mut state = self.state.lock();

        if state.index.contains_key(&spec.path) {
            tracing::debug!("Ignoring duplicate registration of command '{}'", spec.path);
            return false;
        }

        tracing::debug!("Registered command: {}", spec.path);

        let entry = RegisteredCommand::new(spec, handler);
        state.index.insert(entry.path().to_string(), entry.clone());
        state.ordered.push(entry);
        state.ordered.sort_by(|a, b| a.path().cmp(b.path()));
        true
    }

    /// Register several handlers, returning how many were new.
    pub fn register_all<I>(&self, handlers: I) -> usize
    where
        I: IntoIterator<Item = Arc<dyn CommandHandler>>,
    {
        handlers
            .into_iter()
            .filter(|handler| self.register_arc(Arc::clone(handler)))
            .count()
    }

    /// Snapshot of all commands in path order.
    pub fn all_handlers(&self) -> Vec<RegisteredCommand> {
        self.state.lock().ordered.clone()
    }

    /// Specs of all commands in path order.
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.state
            .lock()
            .ordered
            .iter()
            .map(|cmd| cmd.spec().clone())
            .collect()
    }

    /// Get a command by exact path.
    pub fn get(&self, path: &str) -> Option<RegisteredCommand> {
        self.state.lock().index.get(path).cloned()
    }

    /// Check if a path is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.state.lock().index.contains_key(path)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.state.lock().ordered.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.state.lock().ordered.is_empty()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CommandRegistry")
            .field(
                "paths",
                &state.ordered.iter().map(|c| c.path()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FromIterator<Arc<dyn CommandHandler>> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn CommandHandler>>>(iter: I) -> Self {
        let registry = Self::new();
        registry.register_all(iter);
        registry
    }
}
