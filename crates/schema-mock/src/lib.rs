//! Mock JSON value generation driven by JSON-Schema-like descriptions.
//!
//! This crate produces realistic example payloads for tests and
//! documentation. A schema is interpreted for a small keyword subset (`type`,
//! `enum`, `anyOf`, `$ref`, `properties`, `items` and the usual length and
//! range bounds) and turned into a random value that satisfies it. A caller
//! may supply a user object whose entries replace the generated values of a
//! few recognised object fields.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Parsing schemas into a typed [`SchemaNode`] tree
//! - Seeded, reproducible generation through [`MockGenerator`]
//! - Field overrides for `startDate`, `endDate`, `tags`, `title`,
//!   `description`, `priorProbability` and `readOnly`
//! - Bounded uniqueness and nesting limits via [`GenerationOptions`]
//! - A `schema-mock` command-line tool (see [`cli`])
//!
//! Invalid input generally degrades to JSON `null` rather than an error.
//!
//! # Example
//!
//! ```
//! use schema_mock::MockGenerator;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "definitions": {
//!         "attendee": {
//!             "type": "object",
//!             "required": ["name"],
//!             "properties": {"name": {"type": "string", "minLength": 3, "maxLength": 8}}
//!         }
//!     },
//!     "type": "array",
//!     "minItems": 2,
//!     "maxItems": 4,
//!     "items": {"$ref": "#attendee"}
//! });
//!
//! let generator = MockGenerator::default();
//! let first = generator.generate_seeded(7, &schema, None).expect("generation succeeds");
//! let second = generator.generate_seeded(7, &schema, None).expect("generation succeeds");
//!
//! assert_eq!(first, second);
//! let attendees = first.as_array().expect("array output");
//! assert!((2..=4).contains(&attendees.len()));
//! ```

pub mod cli;
mod error;
mod fields;
mod generator;
mod primitives;
mod resolver;
mod schema;
mod settings;
#[cfg(test)]
mod test_support;
mod vocabulary;

pub use error::{GenerationError, ParseDateMarkError};
pub use fields::{
    DEFAULT_MAX_TAGS, DEFAULT_MIN_TAGS, generate_description, generate_tags, random_title,
};
pub use generator::{MockGenerator, generate};
pub use primitives::{
    Charset, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DateMark, END_DATE_OFFSET_SECS,
    INTEGER_RANGE, MAX_STRING_LENGTH, MAX_TIMESTAMP, NUMBER_RANGE, generate_boolean,
    generate_date, generate_number, generate_pattern_string, generate_string,
};
pub use resolver::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_UNIQUE_ATTEMPTS, GenerationOptions, Resolver};
pub use schema::{
    ArraySchema, Bound, Definitions, NumberSchema, ObjectSchema, SchemaNode, StringSchema,
};
pub use settings::GeneratorSettings;
pub use vocabulary::{TAGS, TITLES, lorem_words};
