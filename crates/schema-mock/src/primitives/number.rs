//! Integer generation within schema bounds.

use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::schema::NumberSchema;

/// Default inclusive range for `type: "integer"` nodes.
pub const INTEGER_RANGE: (i64, i64) = (0, 1_000_000);

/// Default inclusive range for `type: "number"` nodes and numeric overrides.
pub const NUMBER_RANGE: (i64, i64) = (0, 100);

/// Generates a uniformly random integer, or returns a supplied number.
///
/// A supplied value that is a JSON number (including `0`) is returned
/// verbatim; any other non-null supplied value yields `null`. Without a
/// supplied value the schema's `minimum`/`maximum` take precedence over
/// `default_min`/`default_max`. Malformed bounds, or a minimum above the
/// maximum, yield `null`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use schema_mock::{NumberSchema, generate_number};
/// use serde_json::json;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let value = generate_number(&mut rng, &NumberSchema::default(), 10, 10, None);
/// assert_eq!(value, json!(10));
///
/// let supplied = json!(0);
/// let value = generate_number(&mut rng, &NumberSchema::default(), 0, 100, Some(&supplied));
/// assert_eq!(value, json!(0));
/// ```
pub fn generate_number<R: Rng + ?Sized>(
    rng: &mut R,
    schema: &NumberSchema,
    default_min: i64,
    default_max: i64,
    supplied: Option<&Value>,
) -> Value {
    match supplied {
        None | Some(Value::Null) => {}
        Some(number @ Value::Number(_)) => return number.clone(),
        Some(other) => {
            debug!(supplied = %other, "supplied number is not numeric; returning null");
            return Value::Null;
        }
    }

    let (Some(min), Some(max)) = (
        schema.minimum.or_default(default_min),
        schema.maximum.or_default(default_max),
    ) else {
        debug!(?schema, "malformed numeric bounds; returning null");
        return Value::Null;
    };

    if min > max {
        debug!(min, max, "numeric range is empty; returning null");
        return Value::Null;
    }

    Value::from(rng.random_range(min..=max))
}
