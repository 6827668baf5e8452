//! Generators for object fields with dedicated override rules.
//!
//! The object generator replaces the generic value of `tags`, `title` and
//! `description` properties with the output of these functions, passing the
//! caller's user-object entry (if any) as `supplied`.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde_json::Value;

use crate::vocabulary::{TAGS, TITLES, lorem_words};

/// Fewest tags produced when none are supplied.
pub const DEFAULT_MIN_TAGS: usize = 1;

/// Most tags produced when none are supplied.
pub const DEFAULT_MAX_TAGS: usize = 10;

/// Returns supplied tags, or a random selection of distinct vocabulary tags.
///
/// A supplied non-empty array is returned verbatim. Otherwise between
/// `min_count` and `max_count` tags are drawn without replacement from
/// [`TAGS`]; both bounds are clamped to the vocabulary size.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use schema_mock::generate_tags;
/// use serde_json::json;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(5);
/// let supplied = json!(["urgent"]);
/// assert_eq!(generate_tags(&mut rng, Some(&supplied), 1, 10), supplied);
///
/// let tags = generate_tags(&mut rng, None, 2, 2);
/// assert_eq!(tags.as_array().map(Vec::len), Some(2));
/// ```
pub fn generate_tags<R: Rng + ?Sized>(
    rng: &mut R,
    supplied: Option<&Value>,
    min_count: usize,
    max_count: usize,
) -> Value {
    if let Some(tags @ Value::Array(items)) = supplied
        && !items.is_empty()
    {
        return tags.clone();
    }

    let clamped_min = min_count.min(TAGS.len());
    let clamped_max = max_count.min(TAGS.len()).max(clamped_min);
    let count = rng.random_range(clamped_min..=clamped_max);

    let mut shuffled = TAGS.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    Value::from(shuffled)
}

/// Returns the supplied title trimmed, or a trimmed vocabulary title.
///
/// Supplied values that are not strings are ignored.
pub fn random_title<R: Rng + ?Sized>(rng: &mut R, supplied: Option<&Value>) -> String {
    if let Some(title) = supplied.and_then(Value::as_str) {
        return title.trim().to_owned();
    }
    TITLES
        .choose(rng)
        .map_or_else(String::new, |title| title.trim().to_owned())
}

/// Returns the supplied description trimmed, or a prefix of the lorem word list.
///
/// The generated text is the first `n` words of [`lorem_words`] joined by
/// spaces, where `n` is uniform over `[0, len)`. It may therefore be empty,
/// and two generated descriptions are always prefixes of one another.
pub fn generate_description<R: Rng + ?Sized>(rng: &mut R, supplied: Option<&Value>) -> String {
    if let Some(description) = supplied.and_then(Value::as_str) {
        return description.trim().to_owned();
    }

    let words = lorem_words();
    if words.is_empty() {
        return String::new();
    }
    let count = rng.random_range(0..words.len());
    words
        .iter()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_owned()
}
