//! Boolean generation with caller overrides.

use rand::Rng;
use serde_json::Value;

/// Returns the supplied boolean, `false` for an explicit `null`, or a fair coin flip.
///
/// Values of any other type are ignored and a random boolean is produced.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use schema_mock::generate_boolean;
/// use serde_json::Value;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// assert!(!generate_boolean(&mut rng, Some(&Value::Null)));
/// assert!(generate_boolean(&mut rng, Some(&Value::Bool(true))));
/// ```
pub fn generate_boolean<R: Rng + ?Sized>(rng: &mut R, supplied: Option<&Value>) -> bool {
    match supplied {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Null) => false,
        _ => rng.random_bool(0.5),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(null), false)]
    fn supplied_values_decide_the_result(#[case] supplied: Value, #[case] expected: bool) {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(generate_boolean(&mut rng, Some(&supplied)), expected);
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(json!("true")))]
    #[case(Some(json!(1)))]
    fn absent_or_invalid_values_produce_both_outcomes(#[case] supplied: Option<Value>) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let draws: Vec<bool> = (0..64)
            .map(|_| generate_boolean(&mut rng, supplied.as_ref()))
            .collect();

        assert!(draws.contains(&true), "expected at least one true");
        assert!(draws.contains(&false), "expected at least one false");
    }
}
