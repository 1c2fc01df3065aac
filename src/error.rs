use thiserror::Error;

use crate::parse::ParseError;
use crate::{CompileError, ValidationError};

/// Unified error type covering parsing, compilation, I/O and validation.
///
/// Returned by convenience methods like
/// [`Validator::from_dsl()`](crate::Validator::from_dsl) and
/// [`Validator::from_file()`](crate::Validator::from_file). Configuration
/// problems and invalid input stay in separate variants.
#[derive(Debug, Error)]
pub enum RulevalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[cfg(feature = "json")]
    #[error("valid input did not deserialize: {0}")]
    Deserialize(#[from] serde_json::Error),
}
