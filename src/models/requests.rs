//! Command models for the cache driver
//!
//! Parses one input line into a cache command.

use crate::error::{CacheError, Result};

/// A single driver command.
///
/// # Grammar
/// - `PUT <key> <value>` - value is the rest of the line, trimmed
/// - `GET <key>`
/// - `PEEK <key>`
/// - `STATS`
/// - `KEYS`
///
/// Command words are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Stats,
    Keys,
}

impl Command {
    /// Parses a line of input.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_token(line);
        let command = match word.to_ascii_uppercase().as_str() {
            "PUT" => {
                let (key, value) = split_token(rest);
                if key.is_empty() || value.is_empty() {
                    return Err(invalid("PUT requires a key and a value", line));
                }
                Command::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            "GET" => Command::Get {
                key: single_key(rest, line)?,
            },
            "PEEK" => Command::Peek {
                key: single_key(rest, line)?,
            },
            "STATS" => no_args(Command::Stats, rest, line)?,
            "KEYS" => no_args(Command::Keys, rest, line)?,
            _ => return Err(invalid("unknown command", line)),
        };

        Ok(Some(command))
    }
}

/// Splits off the first whitespace-delimited token; the remainder is trimmed.
fn split_token(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

fn single_key(rest: &str, line: &str) -> Result<String> {
    let (key, extra) = split_token(rest);
    if key.is_empty() || !extra.is_empty() {
        return Err(invalid("expected exactly one key", line));
    }
    Ok(key.to_string())
}

fn no_args(command: Command, rest: &str, line: &str) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(invalid("takes no arguments", line))
    }
}

fn invalid(reason: &str, line: &str) -> CacheError {
    CacheError::InvalidCommand(format!("{}: '{}'", reason, line))
}
