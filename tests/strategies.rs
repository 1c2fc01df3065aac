#![allow(dead_code)]

use proptest::prelude::*;
use ruleval::{Validator, Value};

// --- Fixed field schema ---
// name, age, flags            : any value
// user.name, user.email       : any value, nested under `user`
// tags                        : array of leaves, or a stray leaf
// items                       : array of objects that may carry an `id`

pub const PLAIN_PATHS: &[&str] = &["name", "age", "flags", "user.name", "user.email"];
pub const WILDCARD_PATHS: &[&str] = &["tags.*", "items.*.id"];

const TOKENS: &[&str] = &[
    "required", "string", "number", "boolean", "numeric", "email", "array", "min:2", "max:3",
    "in:a,b", "nullable",
];

/// A scalar value, including null.
pub fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000_i64..1000).prop_map(Value::Int),
        (-1e6..1e6_f64).prop_map(Value::Float),
        "[a-z0-9@.]{0,10}".prop_map(Value::String),
    ]
}

/// An arbitrary value tree of bounded depth.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,3}|id|name", inner, 0..4)
                .prop_map(Value::Object),
        ]
    })
}

fn arb_item() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::option::of(arb_leaf()).prop_map(|id| match id {
            Some(id) => Value::object().set("id", id),
            None => Value::object(),
        }),
        arb_leaf(),
    ]
}

/// Generate input data that aligns with the fixed field schema. Every field
/// may be missing.
pub fn arb_data() -> impl Strategy<Value = Value> {
    (
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(prop_oneof![
            prop::collection::vec(arb_leaf(), 0..5).prop_map(Value::Array),
            arb_leaf(),
        ]),
        prop::option::of(prop::collection::vec(arb_item(), 0..4).prop_map(Value::Array)),
    )
        .prop_map(|(name, age, flags, user_name, user_email, tags, items)| {
            let mut data = Value::object();
            let fields = [
                ("name", name),
                ("age", age),
                ("flags", flags),
                ("user.name", user_name),
                ("user.email", user_email),
                ("tags", tags),
                ("items", items),
            ];
            for (path, value) in fields {
                if let Some(value) = value {
                    data.insert(path, value);
                }
            }
            data
        })
}

/// An ordered list of valid rule tokens for one field.
pub fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(TOKENS).prop_map(str::to_owned), 1..5)
}

/// A generated rule map: unique declared paths, each with valid tokens.
#[derive(Debug, Clone)]
pub struct GenRuleMap {
    pub entries: Vec<(String, Vec<String>)>,
}

impl GenRuleMap {
    pub fn compile(&self) -> Validator {
        Validator::create(self.entries.clone()).expect("generated rule map should compile")
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

fn arb_rule_map_over(paths: Vec<&'static str>) -> impl Strategy<Value = GenRuleMap> {
    let max = paths.len();
    prop::sample::subsequence(paths, 1..=max)
        .prop_flat_map(|paths| {
            let n = paths.len();
            (Just(paths), prop::collection::vec(arb_tokens(), n))
        })
        .prop_map(|(paths, tokens)| GenRuleMap {
            entries: paths
                .into_iter()
                .map(str::to_owned)
                .zip(tokens)
                .collect(),
        })
}

/// Rule maps over both plain and wildcard paths.
pub fn arb_rule_map() -> impl Strategy<Value = GenRuleMap> {
    let paths = PLAIN_PATHS
        .iter()
        .chain(WILDCARD_PATHS)
        .copied()
        .collect::<Vec<_>>();
    arb_rule_map_over(paths)
}

/// Rule maps over plain paths only.
pub fn arb_plain_rule_map() -> impl Strategy<Value = GenRuleMap> {
    arb_rule_map_over(PLAIN_PATHS.to_vec())
}

/// Map a concrete error key back to its declared form: `items[1].id`
/// becomes `items.*.id`.
pub fn declared_form(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c == '[' {
            for c in chars.by_ref() {
                if c == ']' {
                    break;
                }
            }
            out.push_str(".*");
        } else {
            out.push(c);
        }
    }
    out
}
