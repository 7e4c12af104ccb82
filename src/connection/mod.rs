use crate::facade::KvDatabase;
use crate::parser::ast;
use crate::result::CommandOutcome;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to a database shared with a [`crate::Client`].
///
/// The engine performs no locking of its own; every handle serializes its
/// commands through the owning client's mutex, which is the single-writer
/// contract made explicit. Connections are cheap to create and carry an id
/// for host-side bookkeeping.
pub struct Connection {
    id: u64,
    db: Arc<Mutex<KvDatabase>>,
}

impl Connection {
    pub(crate) fn new(id: u64, db: Arc<Mutex<KvDatabase>>) -> Self {
        Self { id, db }
    }

    /// Connection id, unique within the owning client.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Execute a raw command line. `None` for blank input.
    pub fn execute(&self, line: &str) -> Option<CommandOutcome> {
        lock(&self.db).execute(line)
    }

    /// Structured submission, bypassing the tokenizer.
    pub fn submit(&self, keyword: &str, key: &str, value: &str) -> CommandOutcome {
        lock(&self.db).submit(keyword, key, value)
    }

    /// Open a nested transaction on the shared store.
    pub fn begin(&self) -> CommandOutcome {
        self.submit(ast::KEYWORD_BEGIN, "", "")
    }

    /// Commit the innermost transaction on the shared store.
    pub fn commit(&self) -> CommandOutcome {
        self.submit(ast::KEYWORD_COMMIT, "", "")
    }

    /// Roll back the innermost transaction on the shared store.
    pub fn rollback(&self) -> CommandOutcome {
        self.submit(ast::KEYWORD_ROLLBACK, "", "")
    }

    /// Number of currently open transactions on the shared store.
    pub fn transaction_depth(&self) -> usize {
        lock(&self.db).transaction_depth()
    }
}

// Every operation leaves the engine valid, so a poisoned lock is recovered
// rather than treated as fatal.
pub(crate) fn lock(db: &Arc<Mutex<KvDatabase>>) -> MutexGuard<'_, KvDatabase> {
    db.lock().unwrap_or_else(PoisonError::into_inner)
}
