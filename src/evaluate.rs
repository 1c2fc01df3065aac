use std::time::Instant;

use tracing::{debug, trace};

use crate::check;
use crate::resolve::{expand, Target};
use crate::types::CompiledField;
use crate::{ErrorMap, FieldRules, Kind, Node, ValidationReport};

/// Apply a field's rules to one resolved value, returning every failure
/// message in rule order.
///
/// Missing values and explicit nulls are treated alike. When the field is
/// nullable, such a value skips all rules.
pub(crate) fn dispatch<N: Node>(field: &str, value: Option<&N>, rules: &FieldRules) -> Vec<String> {
    let kind = value.map_or(Kind::Null, |v| v.kind());
    if rules.nullable && kind.is_null() {
        return Vec::new();
    }
    rules
        .rules
        .iter()
        .filter_map(|rule| check::apply(rule, field, &kind))
        .collect()
}

/// Run every declared field against `data`.
///
/// Returns the accumulated errors and the concrete paths that were checked,
/// both in declaration order. No field is skipped because an earlier one
/// failed. A base that is not an array gets one `is not an array` message,
/// even when an `array` rule or another wildcard entry already recorded it.
pub(crate) fn evaluate<N: Node>(fields: &[CompiledField], data: &N) -> (ErrorMap, Vec<String>) {
    let mut errors = ErrorMap::new();
    let mut checked = Vec::new();

    for field in fields {
        let entry = evaluate_field(field, data, &errors, &mut checked);
        errors.merge(entry);
    }

    debug!(
        fields = fields.len(),
        checked = checked.len(),
        invalid = errors.len(),
        "validation finished"
    );
    (errors, checked)
}

/// Errors from a single declared entry. `recorded` holds what earlier
/// entries already reported.
fn evaluate_field<N: Node>(
    field: &CompiledField,
    data: &N,
    recorded: &ErrorMap,
    checked: &mut Vec<String>,
) -> ErrorMap {
    let mut entry = ErrorMap::new();
    for target in expand(data, &field.path) {
        match target {
            Target::Field { key, value } => {
                let messages = dispatch(&key, value, &field.rules);
                trace!(field = %key, failures = messages.len(), "checked field");
                entry.extend_field(&key, messages);
                checked.push(key);
            }
            Target::NotArray { key } => {
                let message = format!("{key} is not an array");
                if recorded.contains_message(&key, &message)
                    || entry.contains_message(&key, &message)
                {
                    continue;
                }
                trace!(field = %key, "wildcard base is not an array");
                entry.push(key.clone(), message);
                checked.push(key);
            }
        }
    }
    entry
}

pub(crate) fn evaluate_detailed<N: Node>(fields: &[CompiledField], data: &N) -> ValidationReport {
    let start = Instant::now();
    let (errors, checked) = evaluate(fields, data);
    ValidationReport::new(errors, checked, start.elapsed())
}
