mod error;
mod error_map;
mod node;
mod path;
mod report;
mod rule;
mod rule_map;
mod validator;
mod value;

pub use error::CompileError;
pub use error_map::{ErrorMap, ValidationError};
pub use node::{Kind, Node};
pub use report::ValidationReport;
pub use rule::{FieldRules, Rule};
pub use rule_map::RuleMap;
pub use validator::{FieldBuilder, Validator, ValidatorBuilder};
pub use value::Value;

pub(crate) use error::TokenError;
pub(crate) use path::{join_key, FieldPath, Segment};
pub(crate) use rule::{CompiledField, Declared};
