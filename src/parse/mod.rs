//! Text format for rule maps.
//!
//! One entry per field: a path, a colon, and `|`-separated rule tokens.
//! `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! # account form
//! name:       required | string | min:3
//! email:      required | email
//! tags:       array | max:10
//! tags.*:     string | in:news,blog,docs
//! ```

mod error;
pub(crate) mod grammar;

pub use error::ParseError;

use crate::RuleMap;

/// Parse rule map text into a [`RuleMap`].
///
/// Only the syntax is checked here; rule names and paths are checked when the
/// map is compiled into a [`Validator`](crate::Validator).
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid syntax.
pub fn parse(input: &str) -> Result<RuleMap, ParseError> {
    use winnow::Parser;
    grammar::parse_rule_map
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
