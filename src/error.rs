use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering parsing and I/O.
///
/// Returned by convenience methods like
/// [`RoleRule::from_file()`](crate::RoleRule::from_file).
#[derive(Debug, Error)]
pub enum RoleRuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
