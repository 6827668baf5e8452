//! Unix timestamps for `startDate`/`endDate` style fields.

use std::fmt;
use std::str::FromStr;

use mockable::Clock;
use serde_json::Value;
use tracing::debug;

use crate::error::ParseDateMarkError;

/// Largest accepted timestamp (`2038-01-19T03:14:07Z`).
pub const MAX_TIMESTAMP: i64 = 2_147_483_647;

/// Offset of a generated end date from the current time, in seconds (about 11.6 days).
pub const END_DATE_OFFSET_SECS: i64 = 1_000_000;

/// Which end of a time window a generated date represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateMark {
    /// The current time.
    Start,
    /// The current time plus [`END_DATE_OFFSET_SECS`].
    End,
}

impl FromStr for DateMark {
    type Err = ParseDateMarkError;

    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(ParseDateMarkError {
                mark: mark.to_owned(),
            }),
        }
    }
}

impl fmt::Display for DateMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Returns a supplied timestamp or one derived from the clock.
///
/// A supplied value must be a whole number in `[0, MAX_TIMESTAMP]` and is
/// then returned as an integer, so `1734379887.0` is accepted as
/// `1734379887`; anything else yields `null`. An absent or `null`
/// supplied value produces the clock's current Unix time for
/// [`DateMark::Start`], or that time plus [`END_DATE_OFFSET_SECS`] for
/// [`DateMark::End`].
///
/// # Example
///
/// ```
/// use mockable::DefaultClock;
/// use schema_mock::{DateMark, generate_date};
/// use serde_json::json;
///
/// let supplied = json!(1_734_379_887);
/// assert_eq!(generate_date(&DefaultClock, DateMark::Start, Some(&supplied)), supplied);
///
/// let too_late = json!(2_147_483_648_i64);
/// assert!(generate_date(&DefaultClock, DateMark::Start, Some(&too_late)).is_null());
/// ```
#[must_use]
pub fn generate_date(clock: &dyn Clock, mark: DateMark, supplied: Option<&Value>) -> Value {
    match supplied {
        None | Some(Value::Null) => {}
        Some(value) => {
            return whole_seconds(value)
                .filter(|timestamp| (0..=MAX_TIMESTAMP).contains(timestamp))
                .map_or_else(
                    || {
                        debug!(%mark, supplied = %value, "supplied date out of range; returning null");
                        Value::Null
                    },
                    Value::from,
                );
        }
    }

    let now = clock.utc().timestamp();
    match mark {
        DateMark::Start => Value::from(now),
        DateMark::End => Value::from(now.saturating_add(END_DATE_OFFSET_SECS)),
    }
}

/// Reads a whole number of seconds, accepting floats without a fractional part.
fn whole_seconds(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(|float| float.to_string().parse().ok()))
}
