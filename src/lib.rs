// ============================================================================
// TxKV Library
// ============================================================================

pub mod connection;
pub mod core;
pub mod facade;
pub mod result;
pub mod storage;
pub mod transaction;
mod parser;

// Re-export main types for convenience
pub use connection::Connection;
pub use crate::core::{KvError, Result};
pub use facade::KvDatabase;
pub use result::CommandOutcome;
pub use storage::KeyStore;
pub use transaction::TransactionEngine;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// High-level Client API
// ============================================================================

/// Shared handle over one database instance
///
/// The engine itself is single-threaded and performs no locking; `Client`
/// is the single-writer contract made explicit. It owns the database behind
/// a mutex, serializes every command, and hands out [`Connection`] handles
/// that share the same store. Each `Client::new()` builds an independent
/// instance — there is no global state.
///
/// # Examples
///
/// ```
/// use txkv::Client;
///
/// let client = Client::new();
///
/// client.execute("SET balance 100");
/// let result = client.execute("GET balance").unwrap();
/// assert_eq!(result.payload(), Some("100"));
/// ```
///
/// Nested transactions roll back to the matching `BEGIN`:
///
/// ```
/// use txkv::Client;
///
/// let client = Client::new();
/// client.execute("SET a 1");
/// client.execute("BEGIN");
/// client.execute("SET a 2");
/// client.execute("ROLLBACK");
/// assert_eq!(client.execute("GET a").unwrap().payload(), Some("1"));
/// ```
#[derive(Clone)]
pub struct Client {
    db: Arc<Mutex<KvDatabase>>,
    next_id: Arc<AtomicU64>,
}

impl Client {
    /// Create a client over a fresh, empty database.
    pub fn new() -> Self {
        Self {
            db: Arc::new(Mutex::new(KvDatabase::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Open a connection sharing this client's database.
    ///
    /// # Examples
    ///
    /// ```
    /// use txkv::Client;
    ///
    /// let client = Client::new();
    /// let conn = client.connection();
    ///
    /// conn.begin();
    /// conn.submit("SET", "a", "1");
    /// conn.commit();
    /// assert_eq!(client.execute("GET a").unwrap().payload(), Some("1"));
    /// ```
    pub fn connection(&self) -> Connection {
        Connection::new(self.next_id.fetch_add(1, Ordering::SeqCst), Arc::clone(&self.db))
    }

    /// Execute a raw command line. `None` for blank input.
    pub fn execute(&self, line: &str) -> Option<CommandOutcome> {
        connection::lock(&self.db).execute(line)
    }

    /// Structured submission, bypassing the tokenizer.
    ///
    /// # Examples
    ///
    /// ```
    /// use txkv::Client;
    ///
    /// let client = Client::new();
    /// client.submit("SET", "color", "red");
    /// assert_eq!(client.submit("COUNT", "", "red").payload(), Some("1"));
    /// ```
    pub fn submit(&self, keyword: &str, key: &str, value: &str) -> CommandOutcome {
        connection::lock(&self.db).submit(keyword, key, value)
    }

    /// Number of currently open transactions.
    pub fn transaction_depth(&self) -> usize {
        connection::lock(&self.db).transaction_depth()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
