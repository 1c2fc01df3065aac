/// An ordered mapping from field paths to rule tokens, as written by a user.
///
/// This is the uncompiled form of a [`Validator`](super::Validator). Keys are
/// plain dotted paths (`user.name`) or wildcard paths (`tags.*`,
/// `items.*.id`). Entry order is preserved and decides the order in which
/// fields are checked.
///
/// ```
/// use ruleval::RuleMap;
///
/// let map: RuleMap = [
///     ("name", vec!["required", "string"]),
///     ("tags.*", vec!["string"]),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMap {
    entries: Vec<(String, Vec<String>)>,
}

impl RuleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate paths are kept here and rejected at compile time.
    pub fn insert<I>(&mut self, path: impl Into<String>, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries
            .push((path.into(), tokens.into_iter().map(Into::into).collect()));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<I>(mut self, path: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(path, tokens);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(path, tokens)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Vec<String>)> {
        self.entries
    }
}

impl<K, I> FromIterator<(K, I)> for RuleMap
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = RuleMap::new();
        for (path, tokens) in iter {
            map.insert(path, tokens);
        }
        map
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RuleMap;

    /// Rules for one field: either a list of tokens or a single `|`-separated string.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tokens {
        List(Vec<String>),
        Piped(String),
    }

    impl Tokens {
        fn into_vec(self) -> Vec<String> {
            match self {
                Tokens::List(tokens) => tokens,
                Tokens::Piped(s) => s
                    .split('|')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned)
                    .collect(),
            }
        }
    }

    impl Serialize for RuleMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (path, tokens) in &self.entries {
                map.serialize_entry(path, tokens)?;
            }
            map.end()
        }
    }

    struct RuleMapVisitor;

    impl<'de> Visitor<'de> for RuleMapVisitor {
        type Value = RuleMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a map of field paths to rule lists")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleMap, A::Error> {
            let mut map = RuleMap::new();
            while let Some((path, tokens)) = access.next_entry::<String, Tokens>()? {
                map.insert(path, tokens.into_vec());
            }
            Ok(map)
        }
    }

    impl<'de> Deserialize<'de> for RuleMap {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(RuleMapVisitor)
        }
    }
}
