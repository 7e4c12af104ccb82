use crate::core::KvError;
use crate::parser::CommandParser;
use crate::parser::ast::{self, Command};
use crate::result::CommandOutcome;
use crate::transaction::TransactionEngine;
use log::debug;

/// Facade over the parser and the transaction engine.
///
/// One `KvDatabase` is one independent store: construct as many as needed
/// (tests in particular get a fresh instance each). The facade owns the only
/// dispatch path, so the textual and structured entry points cannot drift
/// apart. All access must be serialized by the host; [`crate::Client`] is a
/// ready-made shared handle.
pub struct KvDatabase {
    parser: CommandParser,
    engine: TransactionEngine,
}

impl KvDatabase {
    pub fn new() -> Self {
        Self {
            parser: CommandParser::new(),
            engine: TransactionEngine::new(),
        }
    }

    /// Execute a raw command line.
    ///
    /// Returns `None` for blank input: the line is a no-op and produces no
    /// outcome. Parse failures and engine failures both surface as
    /// [`CommandOutcome::Failure`].
    pub fn execute(&mut self, line: &str) -> Option<CommandOutcome> {
        match self.parser.parse(line) {
            Ok(Some(command)) => Some(self.dispatch(command)),
            Ok(None) => None,
            Err(err) => Some(err.into()),
        }
    }

    /// Structured entry point: submit a command without going through the
    /// tokenizer.
    ///
    /// Equivalent to executing `"$keyword $key $value"`, minus the parsing;
    /// fields an operation does not take are passed as `""`. The keyword is
    /// case-insensitive; an unrecognized one fails with the same message as
    /// on the textual path.
    pub fn submit(&mut self, keyword: &str, key: &str, value: &str) -> CommandOutcome {
        let command = match keyword.to_uppercase().as_str() {
            ast::KEYWORD_SET => Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            ast::KEYWORD_GET => Command::Get {
                key: key.to_string(),
            },
            ast::KEYWORD_DELETE => Command::Delete {
                key: key.to_string(),
            },
            ast::KEYWORD_COUNT => Command::Count {
                value: value.to_string(),
            },
            ast::KEYWORD_BEGIN => Command::Begin,
            ast::KEYWORD_COMMIT => Command::Commit,
            ast::KEYWORD_ROLLBACK => Command::Rollback,
            _ => return KvError::unknown_command(keyword).into(),
        };
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> CommandOutcome {
        debug!("dispatch: {:?}", command);
        let result = match command {
            Command::Set { key, value } => self.engine.set(&key, &value).map(|_| String::new()),
            Command::Get { key } => self.engine.get(&key),
            Command::Delete { key } => self.engine.delete(&key).map(|_| String::new()),
            Command::Count { value } => self.engine.count_value(&value).map(|n| n.to_string()),
            Command::Begin => {
                self.engine.begin();
                Ok(String::new())
            }
            Command::Commit => self.engine.commit().map(|_| String::new()),
            Command::Rollback => self.engine.rollback().map(|_| String::new()),
        };
        match result {
            Ok(payload) => CommandOutcome::success(payload),
            Err(err) => err.into(),
        }
    }

    /// Number of currently open transactions.
    pub fn transaction_depth(&self) -> usize {
        self.engine.depth()
    }

    pub fn in_transaction(&self) -> bool {
        self.engine.in_transaction()
    }

    /// Keys currently present in the live store, sorted for stable display.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.engine.keys().map(str::to_string).collect();
        keys.sort();
        keys
    }
}

impl Default for KvDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_round_trip() {
        let mut db = KvDatabase::new();
        assert_eq!(db.execute("SET a 1").unwrap(), CommandOutcome::success(""));
        assert_eq!(db.execute("GET a").unwrap(), CommandOutcome::success("1"));
    }

    #[test]
    fn test_blank_input_produces_no_outcome() {
        let mut db = KvDatabase::new();
        assert_eq!(db.execute(""), None);
        assert_eq!(db.execute("   "), None);
    }

    #[test]
    fn test_submit_matches_textual_path() {
        let mut db = KvDatabase::new();
        assert_eq!(db.submit("SET", "a", "1"), CommandOutcome::success(""));
        assert_eq!(db.submit("get", "a", ""), CommandOutcome::success("1"));
        assert_eq!(db.submit("COUNT", "", "1"), CommandOutcome::success("1"));
        assert_eq!(
            db.submit("PURGE", "", ""),
            CommandOutcome::failure("Invalid Syntax: PURGE")
        );
    }

    #[test]
    fn test_submit_empty_fields_hit_operation_validation() {
        let mut db = KvDatabase::new();
        assert_eq!(
            db.submit("SET", "a", ""),
            CommandOutcome::failure("Usage: SET $key $value")
        );
        assert_eq!(
            db.submit("GET", "", ""),
            CommandOutcome::failure("Usage: GET $key")
        );
    }

    #[test]
    fn test_stack_operations_via_text() {
        let mut db = KvDatabase::new();
        db.execute("SET a 1");
        assert_eq!(db.execute("BEGIN").unwrap(), CommandOutcome::success(""));
        db.execute("DELETE a");
        assert_eq!(db.execute("ROLLBACK").unwrap(), CommandOutcome::success(""));
        assert_eq!(db.execute("GET a").unwrap(), CommandOutcome::success("1"));
        assert_eq!(db.transaction_depth(), 0);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut db = KvDatabase::new();
        db.execute("SET b 1");
        db.execute("SET a 1");
        db.execute("SET c 1");
        assert_eq!(db.keys(), vec!["a", "b", "c"]);
    }
}
