use crate::core::{KvError, Result};
use crate::storage::KeyStore;
use log::debug;

/// Owns the live store plus a stack of snapshots, one per open transaction.
///
/// `begin` pushes a full copy of the live store; `rollback` pops the top
/// snapshot back into place wholesale; `commit` discards the top snapshot,
/// making the live state permanent. Point operations always act on the live
/// store and are transaction-agnostic.
///
/// The engine performs no locking and must be accessed by one logical
/// thread at a time; see [`crate::Client`] for a shared handle that
/// enforces this.
#[derive(Debug, Default)]
pub struct TransactionEngine {
    current: KeyStore,
    stack: Vec<KeyStore>,
}

impl TransactionEngine {
    pub fn new() -> Self {
        Self {
            current: KeyStore::new(),
            stack: Vec::new(),
        }
    }

    /// Open a nested transaction. Snapshots the live store; never fails and
    /// does not change the live store.
    pub fn begin(&mut self) {
        self.stack.push(self.current.clone());
        debug!("BEGIN: transaction depth now {}", self.stack.len());
    }

    /// Close the innermost transaction, keeping every change made since its
    /// `begin`. An enclosing transaction sees those changes as its own
    /// pending ones.
    pub fn commit(&mut self) -> Result<()> {
        if self.stack.pop().is_none() {
            return Err(KvError::NoTransaction);
        }
        debug!("COMMIT: transaction depth now {}", self.stack.len());
        Ok(())
    }

    /// Undo every change made since the innermost `begin`, restoring its
    /// snapshot wholesale.
    pub fn rollback(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(snapshot) => {
                self.current = snapshot;
                debug!("ROLLBACK: transaction depth now {}", self.stack.len());
                Ok(())
            }
            None => Err(KvError::NoTransaction),
        }
    }

    /// Number of currently open transactions.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    // Point operations: pure delegation to the live store.

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.current.set(key, value)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        self.current.get(key)
    }

    pub fn delete(&mut self, key: &str) -> Result<()> {
        self.current.delete(key)
    }

    pub fn count_value(&self, value: &str) -> Result<usize> {
        self.current.count_value(value)
    }

    /// Keys in the live store, unordered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.current.keys()
    }
}
