//! Random strings over fixed character sets.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::schema::StringSchema;

/// Length used when a schema has no `minLength`.
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Length used when a schema has no `maxLength`.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Longest string generated, whatever `minLength` asks for.
pub const MAX_STRING_LENGTH: usize = 65_536;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Character set a generated string is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// ASCII `a`-`z`.
    Lowercase,
    /// ASCII digits `0`-`9`.
    Numbers,
    /// ASCII letters of both cases and digits.
    #[default]
    Alphanumeric,
}

impl Charset {
    /// Maps a view name onto a character set.
    ///
    /// `"lowercase"` and `"numbers"` select the narrow sets; any other name
    /// selects [`Charset::Alphanumeric`].
    #[must_use]
    pub fn from_view(view: &str) -> Self {
        match view {
            "lowercase" => Self::Lowercase,
            "numbers" => Self::Numbers,
            _ => Self::Alphanumeric,
        }
    }

    const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Numbers => NUMBERS,
            Self::Alphanumeric => ALPHANUMERIC,
        }
    }
}

/// Generates a random string whose length respects the schema bounds.
///
/// The length is uniform over `[minLength, maxLength]`, defaulting to
/// `[5, 20]`. A `maxLength` below the minimum produces exactly the minimum.
/// Both bounds are capped at [`MAX_STRING_LENGTH`]. Characters are sampled
/// independently with replacement.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use schema_mock::{Charset, StringSchema, generate_string};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let schema = StringSchema { min_length: Some(4), max_length: Some(4), pattern: false };
/// let text = generate_string(&mut rng, &schema, Charset::Numbers);
///
/// assert_eq!(text.len(), 4);
/// assert!(text.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate_string<R: Rng + ?Sized>(
    rng: &mut R,
    schema: &StringSchema,
    charset: Charset,
) -> String {
    let min_length = schema
        .min_length
        .unwrap_or(DEFAULT_MIN_LENGTH)
        .min(MAX_STRING_LENGTH);
    let max_length = schema
        .max_length
        .unwrap_or(DEFAULT_MAX_LENGTH)
        .clamp(min_length, MAX_STRING_LENGTH);
    let length = rng.random_range(min_length..=max_length);
    let alphabet = charset.alphabet();

    (0..length)
        .filter_map(|_| alphabet.choose(rng).map(|&byte| char::from(byte)))
        .collect()
}

/// Generates a public process URL in place of a pattern-constrained string.
///
/// The pattern's content is not interpreted. The result always has the shape
/// `https://{lowercase}.corezoid/api/json/public/{digits}/{alphanumeric}`,
/// each segment honouring the schema's length bounds.
pub fn generate_pattern_string<R: Rng + ?Sized>(rng: &mut R, schema: &StringSchema) -> String {
    let host = generate_string(rng, schema, Charset::Lowercase);
    let process = generate_string(rng, schema, Charset::Numbers);
    let key = generate_string(rng, schema, Charset::Alphanumeric);
    format!("https://{host}.corezoid/api/json/public/{process}/{key}")
}
