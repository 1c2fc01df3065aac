use crate::types::{join_key, FieldPath, Segment};
use crate::{Kind, Node};

/// Resolve a dot-separated path against a data tree.
///
/// Object segments look up members; numeric segments index into arrays. A
/// `*` segment passes an array through unchanged and yields `None` for
/// anything else (fanning out over the elements is done by the validator,
/// not here). Missing members resolve to `None`; nothing here is an error.
///
/// ```
/// use ruleval::{resolve, Value};
///
/// let data = Value::object().set("user.tags", vec!["a", "b"]);
/// assert_eq!(resolve(&data, "user.tags.1"), Some(&Value::from("b")));
/// assert_eq!(resolve(&data, "user.name"), None);
/// ```
#[must_use]
pub fn resolve<'a, N: Node>(root: &'a N, path: &str) -> Option<&'a N> {
    path.split('.').try_fold(root, |acc, part| step(acc, part))
}

pub(crate) fn resolve_segments<'a, N: Node>(root: &'a N, segments: &[Segment]) -> Option<&'a N> {
    segments
        .iter()
        .try_fold(root, |acc, segment| step(acc, segment.as_str()))
}

fn step<'a, N: Node>(acc: &'a N, part: &str) -> Option<&'a N> {
    match (part, acc.kind()) {
        ("*", Kind::Array(_)) => Some(acc),
        ("*", _) => None,
        (key, Kind::Object) => acc.member(key),
        (key, Kind::Array(items)) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// A concrete location produced by expanding a declared path against data.
#[derive(Debug)]
pub(crate) enum Target<'a, N> {
    /// A resolved field path and whatever value sits there.
    Field { key: String, value: Option<&'a N> },
    /// A wildcard position whose value is not an array.
    NotArray { key: String },
}

/// Expand a declared path into the concrete locations it denotes.
///
/// Plain paths yield exactly one [`Target::Field`] keyed by the declared
/// path. Each `*` segment fans out over the array found at its base, keying
/// elements as `base[i]`; a non-array base yields a single
/// [`Target::NotArray`] and no per-element targets.
pub(crate) fn expand<'a, N: Node>(root: &'a N, path: &FieldPath) -> Vec<Target<'a, N>> {
    let mut out = Vec::new();
    walk(Some(root), path.segments(), String::new(), &mut out);
    out
}

fn walk<'a, N: Node>(
    node: Option<&'a N>,
    segments: &[Segment],
    key: String,
    out: &mut Vec<Target<'a, N>>,
) {
    let Some(pos) = segments.iter().position(|s| *s == Segment::Each) else {
        let value = node.and_then(|n| resolve_segments(n, segments));
        out.push(Target::Field {
            key: join_key(key, segments),
            value,
        });
        return;
    };

    let (base, rest) = (&segments[..pos], &segments[pos + 1..]);
    let base_key = join_key(key, base);
    let base_value = node.and_then(|n| resolve_segments(n, base));

    match base_value.map(|n| n.kind()) {
        Some(Kind::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                walk(Some(item), rest, format!("{base_key}[{i}]"), out);
            }
        }
        _ => out.push(Target::NotArray { key: base_key }),
    }
}
