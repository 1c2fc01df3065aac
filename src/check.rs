//! The atomic rule predicates. Each is a pure function of one value.

use std::sync::LazyLock;

use regex::Regex;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::{Kind, Rule};

/// Largest integer that an IEEE-754 double represents exactly, along with
/// every integer below it.
pub(crate) const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Apply one rule to a value, returning the message if it fails.
pub(crate) fn apply<N>(rule: &Rule, field: &str, value: &Kind<'_, N>) -> Option<String> {
    if passes(rule, value) {
        None
    } else {
        Some(format!("{field} {}", reason(rule, value)))
    }
}

fn passes<N>(rule: &Rule, value: &Kind<'_, N>) -> bool {
    match rule {
        Rule::Required => !value.is_null(),
        Rule::String => matches!(value, Kind::String(_)),
        Rule::Number => is_safe_integer(value),
        Rule::Boolean => matches!(value, Kind::Bool(_)),
        Rule::Numeric => is_numeric(value),
        Rule::Email => matches!(value, Kind::String(s) if EMAIL_RE.is_match(s)),
        Rule::Array => matches!(value, Kind::Array(_)),
        // Only strings and arrays have a length; other kinds are not constrained.
        Rule::Min(min) => length(value).map_or(true, |len| len >= *min),
        Rule::Max(max) => length(value).map_or(true, |len| len <= *max),
        Rule::In(options) => {
            matches!(value, Kind::String(s) if options.iter().any(|o| o == s))
        }
    }
}

fn reason<N>(rule: &Rule, value: &Kind<'_, N>) -> String {
    let items = matches!(value, Kind::Array(_));
    match rule {
        Rule::Required => "is required".to_owned(),
        Rule::String => "is not a string".to_owned(),
        Rule::Number => "is not a number".to_owned(),
        Rule::Boolean => "is not a boolean".to_owned(),
        Rule::Numeric => "is not numeric".to_owned(),
        Rule::Email => "is not a valid email".to_owned(),
        Rule::Array => "is not an array".to_owned(),
        Rule::Min(n) if items => format!("should contain at least {n} items"),
        Rule::Min(n) => format!("should be at least {n} characters long"),
        Rule::Max(n) if items => format!("should contain no more than {n} items"),
        Rule::Max(n) => format!("should be no more than {n} characters long"),
        Rule::In(options) => format!("must be one of {}", options.join(", ")),
    }
}

#[allow(clippy::cast_precision_loss)]
fn is_safe_integer<N>(value: &Kind<'_, N>) -> bool {
    match value {
        Kind::Int(i) => i.unsigned_abs() <= MAX_SAFE_INTEGER.unsigned_abs(),
        Kind::Float(f) => {
            f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64
        }
        _ => false,
    }
}

/// Whether a value coerces to a number other than NaN.
///
/// Booleans count as 0 or 1 and blank text as 0. Text must otherwise be a
/// decimal literal, `Infinity`, or an unsigned `0x`/`0o`/`0b` literal.
/// Absent values never pass.
fn is_numeric<N>(value: &Kind<'_, N>) -> bool {
    match value {
        Kind::Bool(_) | Kind::Int(_) => true,
        Kind::Float(f) => !f.is_nan(),
        Kind::String(s) => {
            let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
            trimmed.is_empty() || numeric_literal.parse(trimmed).is_ok()
        }
        _ => false,
    }
}

fn numeric_literal(input: &mut &str) -> ModalResult<()> {
    alt((radix_literal, decimal_literal)).parse_next(input)
}

fn radix_literal(input: &mut &str) -> ModalResult<()> {
    alt((
        preceded(('0', one_of(['x', 'X'])), take_while(1.., |c: char| c.is_ascii_hexdigit())),
        preceded(('0', one_of(['o', 'O'])), take_while(1.., |c: char| matches!(c, '0'..='7'))),
        preceded(('0', one_of(['b', 'B'])), take_while(1.., |c: char| matches!(c, '0' | '1'))),
    ))
    .void()
    .parse_next(input)
}

fn decimal_literal(input: &mut &str) -> ModalResult<()> {
    let mantissa = alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void()));
    let exponent = (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1);
    (
        opt(one_of(['+', '-'])),
        alt(("Infinity".void(), (mantissa, opt(exponent)).void())),
    )
        .void()
        .parse_next(input)
}

fn length<N>(value: &Kind<'_, N>) -> Option<usize> {
    match value {
        Kind::String(s) => Some(s.chars().count()),
        Kind::Array(items) => Some(items.len()),
        _ => None,
    }
}
