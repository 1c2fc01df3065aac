use super::error::CompileError;

/// One dot-separated segment of a declared field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Key(String),
    Each,
}

impl Segment {
    /// The segment as it appears in a path string.
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Segment::Key(key) => key,
            Segment::Each => "*",
        }
    }
}

/// A declared field path split into segments. `*` segments mark wildcard
/// positions that fan out over array elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub(crate) fn parse(path: &str) -> Result<Self, CompileError> {
        let invalid = |reason: &str| CompileError::InvalidPath {
            path: path.to_owned(),
            reason: reason.to_owned(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }

        let mut segments = Vec::new();
        for part in path.split('.') {
            match part {
                "" => return Err(invalid("empty segment")),
                "*" if segments.is_empty() => {
                    return Err(invalid("path must start with a field name"));
                }
                "*" => segments.push(Segment::Each),
                key => segments.push(Segment::Key(key.to_owned())),
            }
        }
        Ok(Self { segments })
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        self.segments.contains(&Segment::Each)
    }
}

/// Append plain segments to a resolved key, dot-separated.
pub(crate) fn join_key(mut key: String, segments: &[Segment]) -> String {
    for segment in segments {
        if !key.is_empty() {
            key.push('.');
        }
        key.push_str(segment.as_str());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_path() {
        let path = FieldPath::parse("user.name").unwrap();
        assert_eq!(
            path.segments(),
            &[Segment::Key("user".into()), Segment::Key("name".into())]
        );
        assert!(!path.is_wildcard());
    }

    #[test]
    fn parse_wildcard_path() {
        let path = FieldPath::parse("items.*.id").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("items".into()),
                Segment::Each,
                Segment::Key("id".into())
            ]
        );
        assert!(path.is_wildcard());
    }

    #[test]
    fn star_inside_a_key_is_literal() {
        let path = FieldPath::parse("tags*").unwrap();
        assert!(!path.is_wildcard());
    }

    #[test]
    fn rejects_malformed_paths() {
        for bad in ["", "a..b", ".a", "a.", "*", "*.id"] {
            assert!(
                matches!(FieldPath::parse(bad), Err(CompileError::InvalidPath { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn join_key_reproduces_declared_path() {
        let path = FieldPath::parse("data.user.id").unwrap();
        assert_eq!(join_key(String::new(), path.segments()), "data.user.id");
        assert_eq!(
            join_key("items[0]".into(), &path.segments()[2..]),
            "items[0].id"
        );
    }
}
