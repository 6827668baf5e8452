//! Top-level generation entry points.
//!
//! [`MockGenerator`] validates the root schema, builds the definitions map
//! once and drives a [`Resolver`] for the request. The free function
//! [`generate`] covers the common case of an unseeded run against the system
//! clock.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::debug;

use crate::error::GenerationError;
use crate::resolver::{GenerationOptions, Resolver};
use crate::schema::{Definitions, SchemaNode};

/// Generates mock values from JSON schemas.
///
/// # Example
///
/// ```
/// use schema_mock::MockGenerator;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {"title": {"type": "string"}, "done": {"type": "boolean"}}
/// });
/// let user_object = json!({"title": "  Ship it "});
///
/// let value = MockGenerator::default()
///     .generate_seeded(42, &schema, Some(&user_object))
///     .expect("schema is generatable");
///
/// assert_eq!(value["title"], json!("Ship it"));
/// assert!(value["done"].is_boolean());
/// ```
#[derive(Clone)]
pub struct MockGenerator {
    clock: Arc<dyn Clock>,
    options: GenerationOptions,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock), GenerationOptions::default())
    }
}

impl MockGenerator {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<dyn Clock>, options: GenerationOptions) -> Self {
        Self { clock, options }
    }

    /// Returns the limits applied to each request.
    #[must_use]
    pub const fn options(&self) -> GenerationOptions {
        self.options
    }

    /// Generates a value using the schema's own `definitions`.
    ///
    /// Returns `Ok(Value::Null)` when `schema` is not a JSON object or has no
    /// keys. A `user_object` that is not a JSON object is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when a uniqueness constraint cannot be
    /// satisfied or the schema nests beyond the configured depth.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        schema: &Value,
        user_object: Option<&Value>,
    ) -> Result<Value, GenerationError> {
        let definitions = Definitions::from_root(schema);
        self.generate_with_definitions(rng, schema, &definitions, user_object)
    }

    /// Generates a value resolving `$ref` against an explicit definitions map.
    ///
    /// The root schema's own `definitions` keyword is ignored.
    ///
    /// # Errors
    ///
    /// See [`MockGenerator::generate`].
    pub fn generate_with_definitions<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        schema: &Value,
        definitions: &Definitions,
        user_object: Option<&Value>,
    ) -> Result<Value, GenerationError> {
        if !schema.as_object().is_some_and(|root| !root.is_empty()) {
            debug!(schema = %schema, "schema is not a non-empty object; returning null");
            return Ok(Value::Null);
        }

        let node = SchemaNode::from_value(schema);
        let fields = user_object.and_then(Value::as_object);
        Resolver::new(rng, self.clock.as_ref(), definitions, self.options).resolve(&node, fields)
    }

    /// Generates a value from a deterministic ChaCha8 stream seeded by `seed`.
    ///
    /// The same seed, schema, user object and clock reading always produce
    /// the same value.
    ///
    /// # Errors
    ///
    /// See [`MockGenerator::generate`].
    pub fn generate_seeded(
        &self,
        seed: u64,
        schema: &Value,
        user_object: Option<&Value>,
    ) -> Result<Value, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng, schema, user_object)
    }
}

/// Generates a value with the thread-local RNG, system clock and default limits.
///
/// # Errors
///
/// See [`MockGenerator::generate`].
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let value = schema_mock::generate(&json!({"type": "integer", "minimum": 1, "maximum": 3}), None)
///     .expect("integer schema");
/// assert!((1..=3).contains(&value.as_i64().expect("integer")));
///
/// assert!(schema_mock::generate(&json!({}), None).expect("empty schema").is_null());
/// ```
pub fn generate(schema: &Value, user_object: Option<&Value>) -> Result<Value, GenerationError> {
    MockGenerator::default().generate(&mut rand::rng(), schema, user_object)
}
