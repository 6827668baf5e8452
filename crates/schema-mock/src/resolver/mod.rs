//! Recursive resolution of schema nodes into JSON values.
//!
//! A [`Resolver`] lives for a single generation request. It owns nothing:
//! the random source, clock and definitions are borrowed from the caller, so
//! the same request can be replayed exactly by reusing a seeded RNG and a
//! fixed clock.

mod array;
mod object;

use mockable::Clock;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::error::GenerationError;
use crate::primitives::{
    Charset, INTEGER_RANGE, NUMBER_RANGE, generate_boolean, generate_number,
    generate_pattern_string, generate_string,
};
use crate::schema::{Definitions, SchemaNode};

/// Default item-count bounds for arrays reached through type dispatch.
const ARRAY_ITEMS_RANGE: (usize, usize) = (1, 10);

/// Default number of draws allowed for each unique array item.
pub const DEFAULT_MAX_UNIQUE_ATTEMPTS: usize = 100;

/// Default limit on nesting levels and on chained `$ref`/`anyOf` hops.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Limits applied while resolving a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Draws allowed per item before a `uniqueItems` array gives up.
    pub max_unique_attempts: usize,
    /// Maximum number of nested object and array levels before failing.
    ///
    /// The same limit caps consecutive `$ref`/`anyOf` hops that add no
    /// nesting, which is how a definition referring only to itself ends.
    pub max_depth: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_unique_attempts: DEFAULT_MAX_UNIQUE_ATTEMPTS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Request-scoped schema interpreter.
///
/// # Example
///
/// ```
/// use mockable::DefaultClock;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use schema_mock::{Definitions, GenerationOptions, Resolver, SchemaNode};
/// use serde_json::json;
///
/// let node = SchemaNode::from_value(&json!({"enum": ["red", "green"]}));
/// let definitions = Definitions::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let mut resolver = Resolver::new(
///     &mut rng,
///     &DefaultClock,
///     &definitions,
///     GenerationOptions::default(),
/// );
///
/// let value = resolver.resolve(&node, None).expect("enum resolves");
/// assert!(value == json!("red") || value == json!("green"));
/// ```
pub struct Resolver<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    clock: &'a dyn Clock,
    definitions: &'a Definitions,
    options: GenerationOptions,
    depth: usize,
    hops: usize,
}

impl<'a, R: Rng + ?Sized> Resolver<'a, R> {
    /// Creates a resolver over borrowed request state.
    pub const fn new(
        rng: &'a mut R,
        clock: &'a dyn Clock,
        definitions: &'a Definitions,
        options: GenerationOptions,
    ) -> Self {
        Self {
            rng,
            clock,
            definitions,
            options,
            depth: 0,
            hops: 0,
        }
    }

    /// Resolves a schema node into a value.
    ///
    /// `user_object` supplies overrides for recognised fields of an object
    /// node; it follows `anyOf` and `$ref` indirection but is not passed to
    /// nested properties or array items.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DepthExceeded`] when nesting or a chain of
    /// `$ref`/`anyOf` hops exceeds [`GenerationOptions::max_depth`], and
    /// [`GenerationError::UniqueItemsExhausted`] when a `uniqueItems` array
    /// cannot be filled.
    pub fn resolve(
        &mut self,
        node: &SchemaNode,
        user_object: Option<&Map<String, Value>>,
    ) -> Result<Value, GenerationError> {
        if self.depth >= self.options.max_depth {
            let limit = self.options.max_depth;
            warn!(limit, kind = node.kind(), "schema nesting too deep");
            return Err(GenerationError::DepthExceeded { limit });
        }

        self.depth += 1;
        let hops = std::mem::take(&mut self.hops);
        let resolved = self.dispatch(node, user_object);
        self.hops = hops;
        self.depth -= 1;
        resolved
    }

    /// Follows a `$ref` or `anyOf` hop without entering a new nesting level.
    fn follow(
        &mut self,
        node: &SchemaNode,
        user_object: Option<&Map<String, Value>>,
    ) -> Result<Value, GenerationError> {
        if self.hops >= self.options.max_depth {
            let limit = self.options.max_depth;
            warn!(limit, kind = node.kind(), "schema indirection does not terminate");
            return Err(GenerationError::DepthExceeded { limit });
        }

        self.hops += 1;
        let resolved = self.dispatch(node, user_object);
        self.hops -= 1;
        resolved
    }

    fn dispatch(
        &mut self,
        node: &SchemaNode,
        user_object: Option<&Map<String, Value>>,
    ) -> Result<Value, GenerationError> {
        trace!(depth = self.depth, hops = self.hops, kind = node.kind(), "resolving schema node");
        match node {
            SchemaNode::AnyOf(members) => members
                .choose(&mut *self.rng)
                .map_or(Ok(Value::Null), |member| self.follow(member, user_object)),
            SchemaNode::Ref { name, fallback } => {
                let definitions = self.definitions;
                let Some(target) = definitions.get(name) else {
                    debug!(reference = %name, "unresolved $ref; using the node itself");
                    return self.dispatch(fallback, user_object);
                };
                self.follow(target, user_object)
            }
            SchemaNode::Enum(literals) => Ok(literals
                .choose(&mut *self.rng)
                .cloned()
                .unwrap_or(Value::Null)),
            SchemaNode::Integer(schema) => Ok(generate_number(
                &mut *self.rng,
                schema,
                INTEGER_RANGE.0,
                INTEGER_RANGE.1,
                None,
            )),
            SchemaNode::Number(schema) => Ok(generate_number(
                &mut *self.rng,
                schema,
                NUMBER_RANGE.0,
                NUMBER_RANGE.1,
                None,
            )),
            SchemaNode::String(schema) => {
                let text = if schema.pattern {
                    generate_pattern_string(&mut *self.rng, schema)
                } else {
                    generate_string(&mut *self.rng, schema, Charset::Alphanumeric)
                };
                Ok(Value::String(text))
            }
            SchemaNode::Boolean => Ok(Value::Bool(generate_boolean(&mut *self.rng, None))),
            SchemaNode::Array(schema) => self
                .generate_array(
                    schema,
                    Some(ARRAY_ITEMS_RANGE.0),
                    Some(ARRAY_ITEMS_RANGE.1),
                )
                .map(Value::Array),
            SchemaNode::Object(schema) => self
                .generate_object(schema, user_object)
                .map(Value::Object),
            SchemaNode::Null => Ok(Value::Null),
        }
    }
}
