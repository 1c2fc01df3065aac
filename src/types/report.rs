use std::fmt;
use std::time::Duration;

use super::error_map::{ErrorMap, ValidationError};

/// Detailed validation report returned by
/// [`Validator::check()`](super::Validator::check).
///
/// Contains the error map, every concrete path that was checked (wildcards
/// expanded to indices), and the wall-clock duration of the run.
#[derive(Debug, Clone)]
#[must_use]
pub struct ValidationReport {
    errors: ErrorMap,
    checked: Vec<String>,
    duration: Duration,
}

impl ValidationReport {
    pub(crate) fn new(errors: ErrorMap, checked: Vec<String>, duration: Duration) -> Self {
        Self {
            errors,
            checked,
            duration,
        }
    }

    /// `true` when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error map, same as the one carried by
    /// [`Validator::validate()`](super::Validator::validate) on failure.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Concrete paths in the order they were checked.
    #[must_use]
    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    /// Wall-clock duration of the validation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Convert into the plain validation outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any rule failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "valid")?;
        } else {
            write!(f, "invalid: [{}]", self.errors.keys().collect::<Vec<_>>().join(", "))?;
        }
        write!(f, ", checked: {}", self.checked.len())?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
