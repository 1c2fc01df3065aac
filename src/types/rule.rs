use std::fmt;

use super::path::FieldPath;

/// An atomic check applied to a single resolved value.
///
/// Rules are written as tokens in a rule map (`"required"`, `"min:3"`,
/// `"in:draft,published"`) and parsed into this enum once, when the
/// [`Validator`](super::Validator) is built. `Display` renders the token form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value is present and not null.
    Required,
    /// The value is a string.
    String,
    /// The value is an integral number within the IEEE-754 safe integer range.
    Number,
    /// The value is a boolean.
    Boolean,
    /// The value is a number, or a string that parses as one.
    Numeric,
    /// The value is a string shaped like `local@domain.tld`.
    Email,
    /// The value is an array.
    Array,
    /// Strings have at least this many characters, arrays at least this many items.
    Min(usize),
    /// Strings have at most this many characters, arrays at most this many items.
    Max(usize),
    /// The value is a string equal to one of the options.
    In(Vec<String>),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::String => write!(f, "string"),
            Rule::Number => write!(f, "number"),
            Rule::Boolean => write!(f, "boolean"),
            Rule::Numeric => write!(f, "numeric"),
            Rule::Email => write!(f, "email"),
            Rule::Array => write!(f, "array"),
            Rule::Min(n) => write!(f, "min:{n}"),
            Rule::Max(n) => write!(f, "max:{n}"),
            Rule::In(options) => write!(f, "in:{}", options.join(",")),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use crate::compile::{parse_token, Token};
        use crate::types::TokenError;
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        match parse_token(&raw) {
            Ok(Token::Rule(rule)) => Ok(rule),
            Ok(Token::Nullable) => Err(D::Error::custom(
                "`nullable` is a field modifier, not a rule",
            )),
            Err(TokenError::Unknown(rule)) => Err(D::Error::custom(format!("unknown rule '{rule}'"))),
            Err(TokenError::InvalidParameter { rule, reason }) => Err(D::Error::custom(format!(
                "invalid parameter for rule '{rule}': {reason}"
            ))),
        }
    }
}

/// The ordered rules declared for one field path, plus the `nullable` modifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub(crate) nullable: bool,
    pub(crate) rules: Vec<Rule>,
}

impl FieldRules {
    /// Whether a null or missing value skips every other rule.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The rules in declaration order, excluding `nullable`.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl fmt::Display for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = self.rules.iter().map(ToString::to_string).collect();
        if self.nullable {
            tokens.push("nullable".to_owned());
        }
        write!(f, "{}", tokens.join(" | "))
    }
}

/// One entry of a rule set as declared, before compilation.
#[derive(Debug, Clone)]
pub(crate) enum Declared {
    Token(String),
    Rule(Rule),
    Nullable,
}

/// A field whose path and rule tokens have been parsed.
///
/// Produced by the compilation step and stored inside a
/// [`Validator`](super::Validator), in declaration order.
#[derive(Debug, Clone)]
pub(crate) struct CompiledField {
    pub(crate) key: String,
    pub(crate) path: FieldPath,
    pub(crate) rules: FieldRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_token_form() {
        assert_eq!(Rule::Required.to_string(), "required");
        assert_eq!(Rule::Min(3).to_string(), "min:3");
        assert_eq!(Rule::Max(10).to_string(), "max:10");
        assert_eq!(
            Rule::In(vec!["foo".into(), "bar".into()]).to_string(),
            "in:foo,bar"
        );
    }

    #[test]
    fn field_rules_display_lists_nullable_last() {
        let rules = FieldRules {
            nullable: true,
            rules: vec![Rule::String, Rule::Max(5)],
        };
        assert_eq!(rules.to_string(), "string | max:5 | nullable");
        assert!(rules.is_nullable());
        assert_eq!(rules.rules(), &[Rule::String, Rule::Max(5)]);
    }
}
