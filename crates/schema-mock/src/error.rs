//! Error types for the schema-mock crate.
//!
//! Most generation failures are reported in-band as JSON `null`, mirroring
//! the loose contract of the schemas being interpreted. The variants here
//! cover the conditions that cannot be expressed that way: constraints that
//! the generator gives up on rather than looping forever.

use thiserror::Error;

/// Errors that can occur while resolving a schema into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A `uniqueItems` array could not be filled with distinct values.
    ///
    /// Raised when the item schema's value domain is smaller than the
    /// requested item count, for example boolean items with `minItems: 3`.
    #[error(
        "cannot satisfy uniqueness constraint: produced {produced} of {requested} unique items \
         before exhausting {attempts} attempts"
    )]
    UniqueItemsExhausted {
        /// Number of distinct items generated before giving up.
        produced: usize,
        /// Number of items the array was meant to hold.
        requested: usize,
        /// Attempts allowed for a single item.
        attempts: usize,
    },

    /// Schema resolution nested deeper than the configured limit.
    ///
    /// Usually caused by a definition that references itself.
    #[error("schema nesting exceeded the maximum depth of {limit}")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },
}

/// Error returned when a date mark name is neither `start` nor `end`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date mark '{mark}': expected 'start' or 'end'")]
pub struct ParseDateMarkError {
    /// The rejected mark name.
    pub mark: String,
}
