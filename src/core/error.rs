use thiserror::Error;

/// Recoverable command errors.
///
/// Every variant renders to the exact message a caller sees; there is no
/// fatal class, and the engine remains usable after any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    /// A point operation was given an empty key or value. Carries the
    /// usage line of the operation.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("key not set")]
    NotFound,

    #[error("no transaction")]
    NoTransaction,

    /// Unknown keyword or wrong argument count. Carries the full message.
    #[error("{0}")]
    InvalidSyntax(String),
}

impl KvError {
    /// Arity violation: reuses the usage line of the target operation.
    pub(crate) fn bad_arity(usage: &str) -> Self {
        KvError::InvalidSyntax(usage.to_string())
    }

    /// Unrecognized keyword, reported as typed.
    pub(crate) fn unknown_command(keyword: &str) -> Self {
        KvError::InvalidSyntax(format!("Invalid Syntax: {}", keyword))
    }
}

pub type Result<T> = std::result::Result<T, KvError>;
