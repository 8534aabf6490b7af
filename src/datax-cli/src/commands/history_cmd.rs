//! Built-in `history` command.
//!
//! Prints the lines entered in the current session, numbered from 1. The
//! count of lines shown can be limited with `-n COUNT` or a bare `COUNT`.

use datax_shell::builtin::BuiltinCommand;
use datax_shell::{CommandError, CommandHandler, CommandResult, CommandSpec, Invocation};

/// The `history` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistoryCommand;

impl HistoryCommand {
    fn limit(invocation: &Invocation<'_>) -> Result<Option<usize>, CommandError> {
        let args = invocation.args();
        if args.get("n") == Some("") {
            return Err(CommandError::MissingArgument("-n needs a COUNT".to_string()));
        }
        if let Some(limit) = args.get_parsed::<usize>("n")? {
            return Ok(Some(limit));
        }
        match args.positional().first() {
            Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
                CommandError::InvalidArgument(format!("history count must be a number: '{raw}'"))
            }),
            None => Ok(None),
        }
    }
}

impl CommandHandler for HistoryCommand {
    fn spec(&self) -> CommandSpec {
        Self::builtin_spec()
    }

    fn invoke(&self, invocation: &mut Invocation<'_>) -> CommandResult {
        let limit = Self::limit(invocation)?;
        let total = invocation.session.history().len();
        let skip = limit.map_or(0, |n| total.saturating_sub(n));

        let mut output = String::new();
        for (index, line) in invocation.session.history().enumerate().skip(skip) {
            output.push_str(&format!("{:>5}  {line}\n", index + 1));
        }
        Ok(output)
    }
}
