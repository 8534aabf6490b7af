//! Line-oriented front end.
//!
//! Feeds input lines to the [`Dispatcher`] and writes results: command
//! output to `out`, errors to `err` as `Error: <message>`.

use std::io::{BufRead, Write};

use anyhow::Result;
use datax_shell::{Dispatcher, Session};

/// Words that end the session without being dispatched.
const QUIT_WORDS: &[&str] = &["exit", "quit"];

/// Counts from a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines handed to the dispatcher.
    pub dispatched: usize,
    /// Lines that produced an error.
    pub failed: usize,
}

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineOutcome {
    Skipped,
    Quit,
    Succeeded,
    Failed,
}

/// Executes lines against a dispatcher and session.
pub struct Repl<'a> {
    dispatcher: &'a Dispatcher,
    session: &'a mut Session,
}

impl<'a> Repl<'a> {
    /// Create a front end over a dispatcher and session.
    pub fn new(dispatcher: &'a Dispatcher, session: &'a mut Session) -> Self {
        Self {
            dispatcher,
            session,
        }
    }

    /// Read lines from `input` until EOF or a quit.
    ///
    /// The prompt is written before each line only when `interactive`.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a bad
    /// line fails on its own instead of ending the session.
    pub fn run<R, W, E>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        interactive: bool,
    ) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        loop {
            if interactive {
                write!(out, "{}", self.session.prompt())?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                if interactive {
                    writeln!(out)?;
                }
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line, out, err, &mut summary)? == LineOutcome::Quit {
                break;
            }
        }

        Ok(summary)
    }

    /// Execute the given lines in order, stopping early on a quit.
    pub fn run_commands<W, E>(
        &mut self,
        commands: &[String],
        out: &mut W,
        err: &mut E,
    ) -> Result<RunSummary>
    where
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        for line in commands {
            if self.execute(line, out, err, &mut summary)? == LineOutcome::Quit {
                break;
            }
        }
        Ok(summary)
    }

    fn execute<W, E>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
        summary: &mut RunSummary,
    ) -> Result<LineOutcome>
    where
        W: Write,
        E: Write,
    {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Skipped);
        }
        if QUIT_WORDS.contains(&line) {
            self.session.request_quit();
            return Ok(LineOutcome::Quit);
        }

        summary.dispatched += 1;
        let outcome = match self.dispatcher.dispatch(line, self.session) {
            Ok(text) => {
                out.write_all(text.as_bytes())?;
                if !text.is_empty() && !text.ends_with('\n') {
                    writeln!(out)?;
                }
                LineOutcome::Succeeded
            }
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                writeln!(err, "Error: {e}")?;
                summary.failed += 1;
                LineOutcome::Failed
            }
        };
        out.flush()?;

        if self.session.quit_requested() {
            return Ok(LineOutcome::Quit);
        }
        Ok(outcome)
    }
}
