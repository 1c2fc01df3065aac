use thiserror::Error;

/// A broken rule declaration. Raised while building a
/// [`Validator`](super::Validator), never during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unknown rule '{rule}' on field '{field}'")]
    UnknownRule { field: String, rule: String },

    #[error("invalid parameter for rule '{rule}' on field '{field}': {reason}")]
    InvalidParameter {
        field: String,
        rule: String,
        reason: String,
    },

    #[error("invalid field path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("duplicate field '{field}'")]
    DuplicateField { field: String },
}

/// A single rule token that could not be parsed, before it is attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenError {
    Unknown(String),
    InvalidParameter { rule: String, reason: String },
}

impl TokenError {
    pub(crate) fn on_field(self, field: &str) -> CompileError {
        match self {
            TokenError::Unknown(rule) => CompileError::UnknownRule {
                field: field.to_owned(),
                rule,
            },
            TokenError::InvalidParameter { rule, reason } => CompileError::InvalidParameter {
                field: field.to_owned(),
                rule,
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rule_message() {
        let err = CompileError::UnknownRule {
            field: "name".into(),
            rule: "bogus".into(),
        };
        assert_eq!(err.to_string(), "unknown rule 'bogus' on field 'name'");
    }

    #[test]
    fn invalid_parameter_message() {
        let err = CompileError::InvalidParameter {
            field: "name".into(),
            rule: "min:x".into(),
            reason: "expected a non-negative integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter for rule 'min:x' on field 'name': expected a non-negative integer"
        );
    }

    #[test]
    fn invalid_path_message() {
        let err = CompileError::InvalidPath {
            path: "a..b".into(),
            reason: "empty segment".into(),
        };
        assert_eq!(err.to_string(), "invalid field path 'a..b': empty segment");
    }

    #[test]
    fn duplicate_field_message() {
        let err = CompileError::DuplicateField {
            field: "tags.*".into(),
        };
        assert_eq!(err.to_string(), "duplicate field 'tags.*'");
    }

    #[test]
    fn token_error_is_attributed_to_field() {
        let err = TokenError::Unknown("strng".into()).on_field("title");
        assert_eq!(
            err,
            CompileError::UnknownRule {
                field: "title".into(),
                rule: "strng".into()
            }
        );
    }
}
