//! Leaf generators for scalar schema nodes.
//!
//! None of these recurse. Each takes only its own schema fragment, the
//! request's random source (or clock) and an optional caller-supplied value.

mod boolean;
mod date;
mod number;
mod string;

pub use boolean::generate_boolean;
pub use date::{DateMark, END_DATE_OFFSET_SECS, MAX_TIMESTAMP, generate_date};
pub use number::{INTEGER_RANGE, NUMBER_RANGE, generate_number};
pub use string::{
    Charset, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_STRING_LENGTH, generate_pattern_string,
    generate_string,
};
