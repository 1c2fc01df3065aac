use std::collections::HashSet;

use tracing::debug;
use winnow::Parser;

use crate::parse::grammar;
use crate::types::{CompiledField, Declared, FieldPath, FieldRules, TokenError};
use crate::{CompileError, Rule, Validator};

/// A parsed rule token: either a check or the `nullable` modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Rule(Rule),
    Nullable,
}

pub(crate) fn compile(fields: Vec<(String, Vec<Declared>)>) -> Result<Validator, CompileError> {
    check_duplicates(&fields)?;

    let compiled = fields
        .into_iter()
        .map(|(key, declared)| compile_field(key, declared))
        .collect::<Result<Vec<CompiledField>, CompileError>>()?;

    debug!(
        fields = compiled.len(),
        wildcards = compiled.iter().filter(|f| f.path.is_wildcard()).count(),
        "compiled validator"
    );

    Ok(Validator { fields: compiled })
}

fn check_duplicates(fields: &[(String, Vec<Declared>)]) -> Result<(), CompileError> {
    let mut seen = HashSet::new();
    for (key, _) in fields {
        if !seen.insert(key.as_str()) {
            return Err(CompileError::DuplicateField { field: key.clone() });
        }
    }
    Ok(())
}

fn compile_field(key: String, declared: Vec<Declared>) -> Result<CompiledField, CompileError> {
    let path = FieldPath::parse(&key)?;
    let mut rules = FieldRules::default();

    for decl in declared {
        let token = match decl {
            Declared::Token(raw) => parse_token(&raw).map_err(|e| e.on_field(&key))?,
            Declared::Rule(rule) => {
                check_rule(&rule).map_err(|e| e.on_field(&key))?;
                Token::Rule(rule)
            }
            Declared::Nullable => Token::Nullable,
        };
        match token {
            Token::Rule(rule) => rules.rules.push(rule),
            Token::Nullable => rules.nullable = true,
        }
    }

    Ok(CompiledField { key, path, rules })
}

/// Parse a rule token such as `required`, `min:3` or `in:a,b`.
pub(crate) fn parse_token(raw: &str) -> Result<Token, TokenError> {
    let trimmed = raw.trim();
    let (name, param) = grammar::rule_token
        .parse(trimmed)
        .map_err(|_| TokenError::Unknown(trimmed.to_owned()))?;

    let invalid = |reason: &str| TokenError::InvalidParameter {
        rule: trimmed.to_owned(),
        reason: reason.to_owned(),
    };

    let rule = match (name, param) {
        ("nullable", None) => return Ok(Token::Nullable),
        ("required", None) => Rule::Required,
        ("string", None) => Rule::String,
        ("number", None) => Rule::Number,
        ("boolean", None) => Rule::Boolean,
        ("numeric", None) => Rule::Numeric,
        ("email", None) => Rule::Email,
        ("array", None) => Rule::Array,
        ("min", Some(p)) => Rule::Min(parse_size(p).ok_or_else(|| invalid(SIZE_EXPECTED))?),
        ("max", Some(p)) => Rule::Max(parse_size(p).ok_or_else(|| invalid(SIZE_EXPECTED))?),
        ("in", Some(p)) => Rule::In(p.split(',').map(str::to_owned).collect()),
        ("min" | "max" | "in", None) => return Err(invalid("missing parameter")),
        (
            "nullable" | "required" | "string" | "number" | "boolean" | "numeric" | "email"
            | "array",
            Some(_),
        ) => return Err(invalid("rule takes no parameter")),
        _ => return Err(TokenError::Unknown(trimmed.to_owned())),
    };

    check_rule(&rule).map_err(|_| invalid("expected at least one non-empty option"))?;
    Ok(Token::Rule(rule))
}

const SIZE_EXPECTED: &str = "expected a non-negative integer";

fn parse_size(param: &str) -> Option<usize> {
    if param.is_empty() || !param.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    param.parse().ok()
}

/// Reject rules that could never pass.
fn check_rule(rule: &Rule) -> Result<(), TokenError> {
    match rule {
        Rule::In(options) if options.iter().all(String::is_empty) => {
            Err(TokenError::InvalidParameter {
                rule: rule.to_string(),
                reason: "expected at least one non-empty option".to_owned(),
            })
        }
        _ => Ok(()),
    }
}
