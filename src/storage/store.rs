use crate::core::{KvError, Result, usage};
use std::collections::HashMap;

/// The live key→value mapping acted on by point operations.
///
/// Keys and values are non-empty strings; absence of a key means "not set".
/// The store has no transactional awareness. `Clone` produces an
/// independent full copy, which is how snapshots are taken.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    entries: HashMap<String, String>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite `key` with `value`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return Err(KvError::InvalidArgument(usage::SET.to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(KvError::InvalidArgument(usage::GET.to_string()));
        }
        self.entries.get(key).cloned().ok_or(KvError::NotFound)
    }

    /// Remove `key` and its value.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidArgument(usage::DELETE.to_string()));
        }
        self.entries.remove(key).map(|_| ()).ok_or(KvError::NotFound)
    }

    /// Number of keys currently mapped to exactly `value`. Zero matches is
    /// a valid count, not an error.
    pub fn count_value(&self, value: &str) -> Result<usize> {
        if value.is_empty() {
            return Err(KvError::InvalidArgument(usage::COUNT.to_string()));
        }
        Ok(self
            .entries
            .values()
            .filter(|stored| stored.as_str() == value)
            .count())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys currently present, unordered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
