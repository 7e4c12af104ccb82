// Canonical keyword spellings for the command surface. Matching is
// case-insensitive; these are the normalized forms.
pub const KEYWORD_SET: &str = "SET";
pub const KEYWORD_GET: &str = "GET";
pub const KEYWORD_DELETE: &str = "DELETE";
pub const KEYWORD_COUNT: &str = "COUNT";
pub const KEYWORD_BEGIN: &str = "BEGIN";
pub const KEYWORD_COMMIT: &str = "COMMIT";
pub const KEYWORD_ROLLBACK: &str = "ROLLBACK";

/// A fully validated command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
    Count { value: String },
    Begin,
    Commit,
    Rollback,
}
