use std::fmt;

use super::error::CompileError;
use super::error_map::ValidationError;
use super::node::Node;
use super::report::ValidationReport;
use super::rule::{CompiledField, Declared, FieldRules, Rule};
use super::rule_map::RuleMap;

/// Builder for constructing a [`Validator`] field by field.
///
/// # Example
///
/// ```
/// use ruleval::ValidatorBuilder;
///
/// let validator = ValidatorBuilder::new()
///     .field("name", |f| f.required().string().min(3))
///     .field("email", |f| f.required().email())
///     .field("nickname", |f| f.string().max(20).nullable())
///     .rules("tags.*", ["string", "in:rust,go"])
///     .compile()
///     .unwrap();
/// assert_eq!(validator.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    fields: Vec<(String, Vec<Declared>)>,
}

/// Intermediate builder passed to the field definition closure.
#[derive(Debug, Default)]
pub struct FieldBuilder {
    declared: Vec<Declared>,
}

impl ValidatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the rules for a field path using typed rule methods.
    #[must_use]
    pub fn field(mut self, path: &str, f: impl FnOnce(FieldBuilder) -> FieldBuilder) -> Self {
        let builder = f(FieldBuilder::default());
        self.fields.push((path.to_owned(), builder.declared));
        self
    }

    /// Declare the rules for a field path as raw tokens (`"required"`, `"min:3"`).
    ///
    /// Tokens are checked by [`compile()`](Self::compile).
    #[must_use]
    pub fn rules<I>(mut self, path: &str, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let declared = tokens
            .into_iter()
            .map(|t| Declared::Token(t.into()))
            .collect();
        self.fields.push((path.to_owned(), declared));
        self
    }

    /// Compile the declared fields into an immutable `Validator`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] for an unknown rule, a malformed parameter,
    /// an invalid path or a path declared twice.
    pub fn compile(self) -> Result<Validator, CompileError> {
        crate::compile::compile(self.fields)
    }
}

impl FieldBuilder {
    fn push(mut self, decl: Declared) -> Self {
        self.declared.push(decl);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    #[must_use]
    pub fn string(self) -> Self {
        self.rule(Rule::String)
    }

    #[must_use]
    pub fn number(self) -> Self {
        self.rule(Rule::Number)
    }

    #[must_use]
    pub fn boolean(self) -> Self {
        self.rule(Rule::Boolean)
    }

    #[must_use]
    pub fn numeric(self) -> Self {
        self.rule(Rule::Numeric)
    }

    #[must_use]
    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    #[must_use]
    pub fn array(self) -> Self {
        self.rule(Rule::Array)
    }

    /// Minimum character count for strings, item count for arrays.
    #[must_use]
    pub fn min(self, n: usize) -> Self {
        self.rule(Rule::Min(n))
    }

    /// Maximum character count for strings, item count for arrays.
    #[must_use]
    pub fn max(self, n: usize) -> Self {
        self.rule(Rule::Max(n))
    }

    /// The value must be a string equal to one of `options`.
    #[must_use]
    pub fn one_of<I>(self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rule(Rule::In(options.into_iter().map(Into::into).collect()))
    }

    /// Skip every rule of this field when the value is null or missing.
    #[must_use]
    pub fn nullable(self) -> Self {
        self.push(Declared::Nullable)
    }

    #[must_use]
    pub fn rule(self, rule: Rule) -> Self {
        self.push(Declared::Rule(rule))
    }

    /// Add a raw rule token, parsed when the validator is compiled.
    #[must_use]
    pub fn token(self, token: &str) -> Self {
        self.push(Declared::Token(token.to_owned()))
    }
}

/// A compiled, immutable set of field rules. Thread-safe and designed to
/// live behind `Arc`.
///
/// # Example
///
/// ```
/// use ruleval::{Validator, Value};
///
/// let validator = Validator::create([
///     ("name", vec!["required", "string"]),
///     ("tags.*", vec!["string"]),
/// ])
/// .unwrap();
///
/// let data = Value::object().set("tags", vec![Value::from("a"), Value::from(1_i64)]);
/// let err = validator.validate(&data).unwrap_err();
/// assert_eq!(err.errors().keys().collect::<Vec<_>>(), ["name", "tags[1]"]);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    pub(crate) fields: Vec<CompiledField>,
}

impl Validator {
    /// Compile a rule map given as `(path, tokens)` pairs, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] for an unknown rule, a malformed parameter,
    /// an invalid path or a path declared twice.
    pub fn create<K, I>(rules: impl IntoIterator<Item = (K, I)>) -> Result<Self, CompileError>
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let fields = rules
            .into_iter()
            .map(|(path, tokens)| {
                let declared = tokens
                    .into_iter()
                    .map(|t| Declared::Token(t.into()))
                    .collect();
                (path.into(), declared)
            })
            .collect();
        crate::compile::compile(fields)
    }

    /// Compile a [`RuleMap`].
    ///
    /// # Errors
    ///
    /// Same as [`create()`](Self::create).
    pub fn from_rule_map(map: RuleMap) -> Result<Self, CompileError> {
        Self::create(map.into_entries())
    }

    /// Parse DSL text into a rule map and compile it.
    ///
    /// This is a convenience method combining [`parse`](crate::parse::parse)
    /// and [`from_rule_map()`](Self::from_rule_map).
    ///
    /// # Errors
    ///
    /// Returns [`RulevalError`](crate::RulevalError) on parse or compile failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::RulevalError> {
        let map = crate::parse::parse(input)?;
        let validator = Self::from_rule_map(map)?;
        Ok(validator)
    }

    /// Read a DSL file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`RulevalError`](crate::RulevalError) on I/O, parse, or compile failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RulevalError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    /// Validate `data` against every declared field.
    ///
    /// All fields are evaluated; the error carries every failure. On success
    /// the input is handed back untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any rule failed.
    pub fn validate<'a, N: Node>(&self, data: &'a N) -> Result<&'a N, ValidationError> {
        let (errors, _) = crate::evaluate::evaluate(&self.fields, data);
        if errors.is_empty() {
            Ok(data)
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Validate with diagnostics: the error map, the concrete paths that
    /// were checked and timing information.
    pub fn check<N: Node>(&self, data: &N) -> ValidationReport {
        crate::evaluate::evaluate_detailed(&self.fields, data)
    }

    /// Validate a JSON document and deserialize it into `T` on success.
    ///
    /// # Errors
    ///
    /// Returns [`RulevalError::Validation`](crate::RulevalError::Validation)
    /// if any rule failed, or
    /// [`RulevalError::Deserialize`](crate::RulevalError::Deserialize) if the
    /// valid document does not fit `T`.
    #[cfg(feature = "json")]
    pub fn validate_into<T>(&self, data: serde_json::Value) -> Result<T, crate::RulevalError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.validate(&data)?;
        Ok(serde_json::from_value(data)?)
    }

    /// Declared field paths, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// The compiled rules for a declared path, or `None` if it was not declared.
    #[must_use]
    pub fn rules_for(&self, path: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.key == path).map(|f| &f.rules)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validator({} fields, {} wildcard)",
            self.fields.len(),
            self.fields.iter().filter(|f| f.path.is_wildcard()).count(),
        )
    }
}
