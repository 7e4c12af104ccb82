use crate::core::{KvError, Result, usage};
use crate::parser::ast::*;

/// Turns a raw input line into a [`Command`].
///
/// The keyword is case-insensitive; arguments are whitespace-delimited and
/// taken verbatim. A blank line parses to `Ok(None)`: hosts record it as
/// input but no outcome is produced. Arity violations report the usage line
/// of the target operation; unknown keywords are reported as typed.
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.to_uppercase().as_str() {
            KEYWORD_SET => match args.as_slice() {
                [key, value] => Command::Set {
                    key: (*key).to_string(),
                    value: (*value).to_string(),
                },
                _ => return Err(KvError::bad_arity(usage::SET)),
            },
            KEYWORD_GET => match args.as_slice() {
                [key] => Command::Get {
                    key: (*key).to_string(),
                },
                _ => return Err(KvError::bad_arity(usage::GET)),
            },
            KEYWORD_DELETE => match args.as_slice() {
                [key] => Command::Delete {
                    key: (*key).to_string(),
                },
                _ => return Err(KvError::bad_arity(usage::DELETE)),
            },
            KEYWORD_COUNT => match args.as_slice() {
                [value] => Command::Count {
                    value: (*value).to_string(),
                },
                _ => return Err(KvError::bad_arity(usage::COUNT)),
            },
            KEYWORD_BEGIN => match args.as_slice() {
                [] => Command::Begin,
                _ => return Err(KvError::bad_arity(usage::BEGIN)),
            },
            KEYWORD_COMMIT => match args.as_slice() {
                [] => Command::Commit,
                _ => return Err(KvError::bad_arity(usage::COMMIT)),
            },
            KEYWORD_ROLLBACK => match args.as_slice() {
                [] => Command::Rollback,
                _ => return Err(KvError::bad_arity(usage::ROLLBACK)),
            },
            _ => return Err(KvError::unknown_command(keyword)),
        };

        Ok(Some(command))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
