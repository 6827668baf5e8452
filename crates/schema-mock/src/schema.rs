//! Typed schema nodes parsed from loosely-typed JSON.
//!
//! Schemas arrive as arbitrary JSON. This module interprets the keyword
//! subset the generator understands (`type`, `enum`, `anyOf`, `$ref`,
//! `properties`, `required`, `items`, `minItems`/`maxItems`, `uniqueItems`,
//! `minLength`/`maxLength`, `minimum`/`maximum` and `pattern`) and folds
//! everything else into [`SchemaNode::Null`]. Parsing never fails; a schema
//! the generator cannot make sense of simply produces `null`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Largest integer a JSON number can represent without precision loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single node of a parsed schema.
///
/// The variant encodes which keyword is authoritative for the node. When a
/// node carries several keywords, `anyOf` wins over `$ref`, which wins over
/// `enum`, which wins over `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Pick one of the member schemas uniformly at random.
    AnyOf(Vec<SchemaNode>),
    /// Resolve a named definition.
    Ref {
        /// Definition name with the leading `#` removed.
        name: String,
        /// The same node without `anyOf`/`$ref`, used when the name is unknown.
        fallback: Box<SchemaNode>,
    },
    /// Pick one literal uniformly at random and return it verbatim.
    Enum(Vec<Value>),
    /// `type: "integer"`.
    Integer(NumberSchema),
    /// `type: "number"`.
    Number(NumberSchema),
    /// `type: "string"`.
    String(StringSchema),
    /// `type: "boolean"`.
    Boolean,
    /// `type: "array"`.
    Array(ArraySchema),
    /// `type: "object"`.
    Object(ObjectSchema),
    /// `type: "null"`, or any unrecognised or missing type.
    Null,
}

impl SchemaNode {
    /// Parses a schema node from JSON.
    ///
    /// Values that are not JSON objects parse as [`SchemaNode::Null`].
    ///
    /// # Example
    ///
    /// ```
    /// use schema_mock::SchemaNode;
    /// use serde_json::json;
    ///
    /// let node = SchemaNode::from_value(&json!({"enum": ["a", "b"], "type": "string"}));
    /// assert!(matches!(node, SchemaNode::Enum(_)));
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map_or(Self::Null, Self::from_map)
    }

    /// Short name of the node's variant, used in log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AnyOf(_) => "anyOf",
            Self::Ref { .. } => "$ref",
            Self::Enum(_) => "enum",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Null => "null",
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        if let Some(members) = map
            .get("anyOf")
            .and_then(Value::as_array)
            .filter(|members| !members.is_empty())
        {
            return Self::AnyOf(members.iter().map(Self::from_value).collect());
        }

        if let Some(reference) = map.get("$ref").and_then(Value::as_str) {
            let name = reference.strip_prefix('#').unwrap_or(reference);
            return Self::Ref {
                name: name.to_owned(),
                fallback: Box::new(Self::from_literal_or_type(map)),
            };
        }

        Self::from_literal_or_type(map)
    }

    fn from_literal_or_type(map: &Map<String, Value>) -> Self {
        if let Some(literals) = map.get("enum").and_then(Value::as_array) {
            return Self::Enum(literals.clone());
        }

        match map.get("type").and_then(Value::as_str) {
            Some("integer") => Self::Integer(NumberSchema::from_map(map)),
            Some("number") => Self::Number(NumberSchema::from_map(map)),
            Some("string") => Self::String(StringSchema::from_map(map)),
            Some("boolean") => Self::Boolean,
            Some("array") => Self::Array(ArraySchema::from_map(map)),
            Some("object") => Self::Object(ObjectSchema::from_map(map)),
            _ => Self::Null,
        }
    }
}

/// An inclusive numeric bound as declared by a schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bound {
    /// The keyword is absent (or `null`); the caller's default applies.
    #[default]
    Unset,
    /// An integer bound.
    Inclusive(i64),
    /// The keyword is present but not a usable number.
    Malformed,
}

impl Bound {
    /// Resolves the bound against a default, or `None` when malformed.
    #[must_use]
    pub const fn or_default(self, default: i64) -> Option<i64> {
        match self {
            Self::Unset => Some(default),
            Self::Inclusive(value) => Some(value),
            Self::Malformed => None,
        }
    }

    fn lower(value: Option<&Value>) -> Self {
        Self::parse(value, f64::ceil)
    }

    fn upper(value: Option<&Value>) -> Self {
        Self::parse(value, f64::floor)
    }

    /// Fractional bounds are tightened towards the inside of the range.
    fn parse(value: Option<&Value>, round: fn(f64) -> f64) -> Self {
        match value {
            None | Some(Value::Null) => Self::Unset,
            Some(Value::Number(number)) => number.as_i64().map_or_else(
                || number.as_f64().map_or(Self::Malformed, |float| from_float(round(float))),
                Self::Inclusive,
            ),
            Some(_) => Self::Malformed,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is integral and within the safe integer range"
)]
fn from_float(rounded: f64) -> Bound {
    if rounded.is_finite() && rounded.abs() <= MAX_SAFE_INTEGER {
        Bound::Inclusive(rounded as i64)
    } else {
        Bound::Malformed
    }
}

/// Bounds for `integer` and `number` nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberSchema {
    /// The `minimum` keyword.
    pub minimum: Bound,
    /// The `maximum` keyword.
    pub maximum: Bound,
}

impl NumberSchema {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            minimum: Bound::lower(map.get("minimum")),
            maximum: Bound::upper(map.get("maximum")),
        }
    }
}

/// Length bounds and pattern flag for `string` nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringSchema {
    /// The `minLength` keyword.
    pub min_length: Option<usize>,
    /// The `maxLength` keyword.
    pub max_length: Option<usize>,
    /// Whether a non-empty `pattern` keyword is present.
    ///
    /// The pattern's content is never interpreted.
    pub pattern: bool,
}

impl StringSchema {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            min_length: count(map.get("minLength")),
            max_length: count(map.get("maxLength")),
            pattern: map.get("pattern").is_some_and(is_truthy),
        }
    }
}

/// Item schema, length bounds and uniqueness flag for `array` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    /// The `items` keyword; absent items resolve to `null`.
    pub items: Box<SchemaNode>,
    /// The `minItems` keyword.
    pub min_items: Option<usize>,
    /// The `maxItems` keyword.
    pub max_items: Option<usize>,
    /// The `uniqueItems` keyword.
    pub unique_items: bool,
}

impl ArraySchema {
    fn from_map(map: &Map<String, Value>) -> Self {
        let items = map
            .get("items")
            .map_or(SchemaNode::Null, SchemaNode::from_value);
        Self {
            items: Box::new(items),
            min_items: count(map.get("minItems")),
            max_items: count(map.get("maxItems")),
            unique_items: map.get("uniqueItems").is_some_and(is_truthy),
        }
    }
}

/// Properties and required names for `object` nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Property schemas in declaration order.
    pub properties: Vec<(String, SchemaNode)>,
    /// Names listed under `required`.
    ///
    /// Required and optional properties are generated identically; the list
    /// is kept for callers that validate output.
    pub required: Vec<String>,
}

impl ObjectSchema {
    fn from_map(map: &Map<String, Value>) -> Self {
        let properties = map
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                    .collect()
            })
            .unwrap_or_default();
        let required = map
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            properties,
            required,
        }
    }
}

/// Named schemas referenced through `$ref`.
///
/// Built once per generation request and never mutated.
///
/// # Example
///
/// ```
/// use schema_mock::Definitions;
/// use serde_json::json;
///
/// let root = json!({
///     "definitions": {"attendees": {"type": "object"}},
///     "type": "object"
/// });
/// let definitions = Definitions::from_root(&root);
///
/// assert!(definitions.get("attendees").is_some());
/// assert!(definitions.get("/definitions/attendees").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    entries: BTreeMap<String, SchemaNode>,
}

impl Definitions {
    /// Parses definitions from a JSON object of named schemas.
    ///
    /// Anything other than an object yields an empty map.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let entries = value
            .as_object()
            .map(|named| {
                named
                    .iter()
                    .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                    .collect()
            })
            .unwrap_or_default();
        Self { entries }
    }

    /// Parses the `definitions` keyword of a root schema.
    #[must_use]
    pub fn from_root(schema: &Value) -> Self {
        schema
            .get("definitions")
            .map_or_else(Self::default, Self::from_value)
    }

    /// Looks up a definition by reference name.
    ///
    /// Accepts both bare names (`attendees`) and JSON-pointer style names
    /// (`/definitions/attendees`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.entries.get(name).or_else(|| {
            name.strip_prefix("/definitions/")
                .and_then(|short| self.entries.get(short))
        })
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no definitions are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loose truthiness used by flag-like keywords and field overrides.
///
/// `false`, `null`, `0`, `NaN` and the empty string are falsy; everything
/// else, including empty arrays and objects, is truthy.
#[must_use]
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn count(value: Option<&Value>) -> Option<usize> {
    value
        .and_then(Value::as_u64)
        .and_then(|raw| usize::try_from(raw).ok())
}
