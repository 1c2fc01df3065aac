use super::value::Value;

/// The shape of a single node in a data tree, as seen by the validator.
///
/// Sequences expose their elements directly; mappings are only tagged and
/// their members are reached through [`Node::member`].
#[derive(Debug, Clone)]
pub enum Kind<'a, N> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(&'a str),
    Array(&'a [N]),
    Object,
}

impl<N> Kind<'_, N> {
    /// Whether this is the absence sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Kind::Null)
    }

    /// A short human-readable name of the kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool(_) => "boolean",
            Kind::Int(_) | Kind::Float(_) => "number",
            Kind::String(_) => "string",
            Kind::Array(_) => "array",
            Kind::Object => "object",
        }
    }
}

/// A tree of data that paths can be resolved against.
///
/// Implemented for the crate's own [`Value`] and, with the `json` feature,
/// for `serde_json::Value`. Implement it for other document types to validate
/// them without conversion.
pub trait Node: Sized {
    /// Classify this node.
    fn kind(&self) -> Kind<'_, Self>;

    /// Look up a member of a mapping. Returns `None` for missing keys and
    /// for nodes that are not mappings.
    fn member(&self, key: &str) -> Option<&Self>;
}

impl Node for Value {
    fn kind(&self) -> Kind<'_, Self> {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(b) => Kind::Bool(*b),
            Value::Int(i) => Kind::Int(*i),
            Value::Float(f) => Kind::Float(*f),
            Value::String(s) => Kind::String(s.as_str()),
            Value::Array(items) => Kind::Array(items.as_slice()),
            Value::Object(_) => Kind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}

#[cfg(feature = "json")]
impl Node for serde_json::Value {
    fn kind(&self) -> Kind<'_, Self> {
        match self {
            serde_json::Value::Null => Kind::Null,
            serde_json::Value::Bool(b) => Kind::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Kind::Int(i),
                None => Kind::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Kind::String(s.as_str()),
            serde_json::Value::Array(items) => Kind::Array(items.as_slice()),
            serde_json::Value::Object(_) => Kind::Object,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}
