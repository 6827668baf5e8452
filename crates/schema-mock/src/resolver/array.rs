//! Array generation with length bounds and optional uniqueness.

use rand::Rng;
use serde_json::Value;
use tracing::warn;

use super::Resolver;
use crate::error::GenerationError;
use crate::schema::{ArraySchema, SchemaNode};

/// Width of the random fallback used when no default bound is supplied.
const FALLBACK_SPAN: usize = 5;

impl<R: Rng + ?Sized> Resolver<'_, R> {
    /// Generates the items of an array node.
    ///
    /// `minItems`/`maxItems` from the schema take precedence over
    /// `default_min`/`default_max`. A missing default is replaced by a random
    /// fallback `f` in `[0, 5)`, used as the minimum and as `f + 5` for the
    /// maximum. A maximum below the minimum yields exactly the minimum number
    /// of items. Items never receive the caller's user object.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UniqueItemsExhausted`] when `uniqueItems` is
    /// set and an item cannot be made distinct within
    /// [`GenerationOptions::max_unique_attempts`](super::GenerationOptions)
    /// draws, and propagates errors from resolving the item schema.
    pub fn generate_array(
        &mut self,
        schema: &ArraySchema,
        default_min: Option<usize>,
        default_max: Option<usize>,
    ) -> Result<Vec<Value>, GenerationError> {
        let (min_items, max_items) = match (
            schema.min_items.or(default_min),
            schema.max_items.or(default_max),
        ) {
            (Some(min), Some(max)) => (min, max),
            (min, max) => {
                let fallback = self.rng.random_range(0..FALLBACK_SPAN);
                (
                    min.unwrap_or(fallback),
                    max.unwrap_or(fallback + FALLBACK_SPAN),
                )
            }
        };
        let count = self.rng.random_range(min_items..=max_items.max(min_items));

        let mut items = Vec::new();
        while items.len() < count {
            let item = if schema.unique_items {
                self.unique_item(&schema.items, &items, count)?
            } else {
                self.resolve(&schema.items, None)?
            };
            items.push(item);
        }
        Ok(items)
    }

    fn unique_item(
        &mut self,
        node: &SchemaNode,
        existing: &[Value],
        requested: usize,
    ) -> Result<Value, GenerationError> {
        let attempts = self.options.max_unique_attempts;
        for _ in 0..attempts {
            let candidate = self.resolve(node, None)?;
            if !existing.contains(&candidate) {
                return Ok(candidate);
            }
        }

        warn!(
            produced = existing.len(),
            requested, attempts, "unable to generate another unique array item"
        );
        Err(GenerationError::UniqueItemsExhausted {
            produced: existing.len(),
            requested,
            attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::error::GenerationError;
    use crate::resolver::{GenerationOptions, Resolver};
    use crate::schema::{ArraySchema, Definitions, SchemaNode};
    use crate::test_support::{FixtureClock, seeded_rng};

    fn array_schema(schema: &Value) -> ArraySchema {
        match SchemaNode::from_value(schema) {
            SchemaNode::Array(array) => array,
            other => panic!("expected an array node, got {other:?}"),
        }
    }

    fn generate(
        schema: &Value,
        defaults: (Option<usize>, Option<usize>),
        seed: u64,
        options: GenerationOptions,
    ) -> Result<Vec<Value>, GenerationError> {
        let array = array_schema(schema);
        let definitions = Definitions::default();
        let clock = FixtureClock::default();
        let mut rng = seeded_rng(seed);
        Resolver::new(&mut rng, &clock, &definitions, options).generate_array(
            &array,
            defaults.0,
            defaults.1,
        )
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 5)]
    #[case(2, 2)]
    fn lengths_respect_schema_bounds(#[case] min: usize, #[case] max: usize) {
        let schema = json!({
            "type": "array",
            "minItems": min,
            "maxItems": max,
            "items": {"type": "string"}
        });
        for seed in 0..25 {
            let items = generate(&schema, (None, None), seed, GenerationOptions::default())
                .expect("array generates");
            assert!((min..=max).contains(&items.len()), "length {}", items.len());
            assert!(items.iter().all(Value::is_string));
        }
    }

    #[test]
    fn schema_bounds_override_defaults() {
        let schema = json!({"type": "array", "minItems": 4, "maxItems": 4});
        let items = generate(&schema, (Some(1), Some(10)), 7, GenerationOptions::default())
            .expect("array generates");
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn missing_items_schema_produces_nulls() {
        let schema = json!({"type": "array", "minItems": 2, "maxItems": 2});
        let items =
            generate(&schema, (None, None), 1, GenerationOptions::default()).expect("array generates");
        assert_eq!(items, vec![Value::Null, Value::Null]);
    }

    #[test]
    fn missing_defaults_use_the_random_fallback() {
        let schema = json!({"type": "array", "items": {"type": "boolean"}});
        for seed in 0..25 {
            let items = generate(&schema, (None, None), seed, GenerationOptions::default())
                .expect("array generates");
            assert!(items.len() < 10, "length {}", items.len());
        }
    }

    #[test]
    fn inverted_bounds_clamp_to_the_minimum() {
        let schema = json!({"type": "array", "minItems": 5, "maxItems": 2, "items": {"type": "integer"}});
        let items = generate(&schema, (None, None), 3, GenerationOptions::default())
            .expect("array generates");
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn unique_items_are_distinct() {
        let schema = json!({
            "type": "array",
            "minItems": 8,
            "maxItems": 8,
            "uniqueItems": true,
            "items": {"type": "integer", "minimum": 0, "maximum": 9}
        });
        for seed in 0..10 {
            let items = generate(&schema, (None, None), seed, GenerationOptions::default())
                .expect("array generates");
            let distinct: HashSet<String> = items.iter().map(Value::to_string).collect();
            assert_eq!(distinct.len(), items.len());
        }
    }

    #[test]
    fn exhausted_domains_fail_instead_of_looping() {
        let schema = json!({
            "type": "array",
            "minItems": 3,
            "maxItems": 3,
            "uniqueItems": true,
            "items": {"type": "boolean"}
        });
        let options = GenerationOptions {
            max_unique_attempts: 20,
            ..GenerationOptions::default()
        };
        assert_eq!(
            generate(&schema, (None, None), 11, options),
            Err(GenerationError::UniqueItemsExhausted {
                produced: 2,
                requested: 3,
                attempts: 20,
            })
        );
    }
}
