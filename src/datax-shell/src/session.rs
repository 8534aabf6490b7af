//! Interactive session state handed to every command.

use std::collections::VecDeque;

/// Prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "datax> ";

/// Number of history lines kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// State of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    prompt: String,
    history: VecDeque<String>,
    history_limit: usize,
    quit_requested: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the default prompt and history limit.
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            quit_requested: false,
        }
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set how many history lines are kept. Zero disables history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.truncate_history();
        self
    }

    /// The prompt shown before each line.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Append a line to the history, dropping the oldest past the limit.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.history_limit == 0 {
            return;
        }
        self.history.push_back(line.to_string());
        self.truncate_history();
    }

    fn truncate_history(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Recorded lines, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.history.iter().map(String::as_str)
    }

    /// Ask the front end to stop reading input.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Whether a quit was requested.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.prompt(), DEFAULT_PROMPT);
        assert_eq!(session.history().len(), 0);
        assert!(!session.quit_requested());
    }

    #[test]
    fn test_record_skips_blank_lines() {
        let mut session = Session::new();
        session.record("  status ");
        session.record("   ");
        assert_eq!(session.history().collect::<Vec<_>>(), vec!["status"]);
    }

    #[test]
    fn test_history_limit() {
        let mut session = Session::new().with_history_limit(2);
        session.record("a");
        session.record("b");
        session.record("c");
        assert_eq!(session.history().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_limit_disables_history() {
        let mut session = Session::new().with_history_limit(0);
        session.record("a");
        assert_eq!(session.history().len(), 0);
    }

    #[test]
    fn test_request_quit() {
        let mut session = Session::new().with_prompt("> ");
        assert_eq!(session.prompt(), "> ");
        session.request_quit();
        assert!(session.quit_requested());
    }
}
