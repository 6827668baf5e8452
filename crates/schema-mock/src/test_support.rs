//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Unix time reported by [`FixtureClock`] (`2026-02-24T10:30:00Z`).
pub(crate) const FIXTURE_TIMESTAMP: i64 = 1_771_929_000;

/// Clock frozen at [`FIXTURE_TIMESTAMP`].
pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Default for FixtureClock {
    fn default() -> Self {
        let utc_now = Utc
            .timestamp_opt(FIXTURE_TIMESTAMP, 0)
            .single()
            .expect("valid fixture timestamp");
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Deterministic RNG for a test seed.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
