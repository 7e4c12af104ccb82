//! Usage lines shared by the point operations (empty-argument errors) and
//! the parser (arity errors), so each text exists exactly once.

pub const SET: &str = "Usage: SET $key $value";
pub const GET: &str = "Usage: GET $key";
pub const DELETE: &str = "Usage: DELETE $key";
pub const COUNT: &str = "Usage: COUNT $value";
pub const BEGIN: &str = "Usage: BEGIN";
pub const COMMIT: &str = "Usage: COMMIT";
pub const ROLLBACK: &str = "Usage: ROLLBACK";
