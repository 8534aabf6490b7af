//! Input line parsing.
//!
//! A raw line becomes a [`ParsedInput`]: the candidate command path used for
//! prefix matching, plus the [`VarArgs`] parsed from it. After a command is
//! resolved the dispatcher strips the matched path and re-parses what is left.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::command::CommandError;

/// A tokenized input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// Candidate path; holds the remainder once a command is matched.
    pub path: String,

    /// Arguments parsed from `path`.
    pub var_args: VarArgs,
}

impl ParsedInput {
    /// Parse a raw input line.
    pub fn parse(line: &str) -> Self {
        let path = line.trim().to_string();
        let var_args = VarArgs::parse(&path);
        Self { path, var_args }
    }

    /// Remove a matched command path and re-parse the remainder.
    ///
    /// `matched` must be a prefix of `path`.
    pub fn strip_command(&mut self, matched: &str) {
        if self.path == matched {
            self.path.clear();
        } else {
            let remainder = self
                .path
                .get(matched.len()..)
                .unwrap_or_default()
                .trim()
                .to_string();
            self.path = remainder;
        }
        self.var_args = VarArgs::parse(&self.path);
    }
}

/// Key/value and positional arguments.
///
/// Tokens are split shell-style. Recognised forms:
///
/// - `--key=value`, `-key=value` and `key=value`
/// - `--key value`, `-key value` when `value` is not itself a flag
/// - `--key`, `-key` on their own, stored with an empty value
///
/// Anything else is positional. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarArgs {
    values: BTreeMap<String, String>,
    positional: Vec<String>,
}

impl VarArgs {
    /// Parse arguments from text.
    pub fn parse(text: &str) -> Self {
        let mut args = Self::default();
        let mut tokens = split_tokens(text).into_iter().peekable();

        while let Some(token) = tokens.next() {
            if let Some(flag) = flag_name(&token) {
                match flag.split_once('=') {
                    Some((key, value)) => args.insert(key, value),
                    None => {
                        let value = tokens
                            .next_if(|next| flag_name(next).is_none())
                            .unwrap_or_default();
                        args.insert(flag, value);
                    }
                }
                continue;
            }

            if let Some((key, value)) = token.split_once('=').filter(|(key, _)| !key.is_empty()) {
                args.insert(key, value);
                continue;
            }
            args.positional.push(token);
        }

        args
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Value of a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a key was given, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Parse the value of a key.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, CommandError> {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>().map_err(|_| {
                    CommandError::InvalidArgument(format!("{key}: cannot parse '{raw}'"))
                })
            })
            .transpose()
    }

    /// Positional arguments, in input order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Iterate key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are neither key/value pairs nor positional arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.positional.is_empty()
    }
}

/// Split text shell-style, falling back to whitespace on unbalanced quotes.
fn split_tokens(text: &str) -> Vec<String> {
    shlex::split(text)
        .unwrap_or_else(|| text.split_whitespace().map(str::to_string).collect())
}

/// Name of a flag token (`-name` or `--name`), or `None` if not a flag.
///
/// A flag name must start with a letter, so `-5` is a value.
fn flag_name(token: &str) -> Option<&str> {
    let name = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(name)
}
