//! Declarative validation of nested data.
//!
//! A [`Validator`] is compiled once from a rule map (field path to rule
//! tokens) and then checks any tree implementing [`Node`]. Every field is
//! evaluated and every failure is reported, keyed by the concrete path that
//! failed. Paths containing `*` fan out over array elements and report as
//! `tags[0]`, `items[1].id` and so on.
//!
//! ```
//! use ruleval::{Validator, Value};
//!
//! let validator = Validator::from_dsl(
//!     "name: required | string | min:3
//!      tags.*: string",
//! )
//! .unwrap();
//!
//! let data = Value::object()
//!     .set("name", "Jo")
//!     .set("tags", vec![Value::from("rust"), Value::from(7_i64)]);
//!
//! let err = validator.validate(&data).unwrap_err();
//! assert_eq!(
//!     err.errors().get("name").unwrap(),
//!     ["name should be at least 3 characters long"]
//! );
//! assert_eq!(err.errors().get("tags[1]").unwrap(), ["tags[1] is not a string"]);
//! ```

mod check;
mod compile;
mod error;
mod evaluate;
pub mod parse;
mod resolve;
mod types;

pub use error::RulevalError;
pub use parse::ParseError;
pub use resolve::resolve;
pub use types::{
    CompileError, ErrorMap, FieldBuilder, FieldRules, Kind, Node, Rule, RuleMap, ValidationError,
    ValidationReport, Validator, ValidatorBuilder, Value,
};
