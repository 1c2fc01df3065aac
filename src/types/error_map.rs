use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Messages produced by a validation run, grouped by resolved field path.
///
/// Keys keep the order in which their first message was recorded, which
/// follows the declaration order of the rule map. A key is present only if
/// at least one rule failed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ErrorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, creating the field's entry if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.index.get(&field) {
            Some(&idx) => self.entries[idx].1.push(message),
            None => {
                self.index.insert(field.clone(), self.entries.len());
                self.entries.push((field, vec![message]));
            }
        }
    }

    /// Append several messages to a field. An empty list leaves the map untouched.
    pub fn extend_field(&mut self, field: &str, messages: Vec<String>) {
        for message in messages {
            self.push(field, message);
        }
    }

    /// Merge another map into this one, keeping this map's key order first.
    pub fn merge(&mut self, other: ErrorMap) {
        for (field, messages) in other.entries {
            self.extend_field(&field, messages);
        }
    }

    /// Messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.index
            .get(field)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    pub(crate) fn contains_message(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(field, messages)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consume the map into its ordered entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, Vec<String>)> {
        self.entries
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, messages)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// The input failed one or more rules. Carries every message that was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("validation failed: {errors}")]
pub struct ValidationError {
    errors: ErrorMap,
}

impl ValidationError {
    pub(crate) fn new(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// The full error map.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}
