//! Monotonic time-based id source for fallback mode.
//!
//! The remote row-store assigns its own ids; in fallback mode ids come from
//! the millisecond clock, bumped past the last issued value so that ids are
//! strictly increasing and never reused within a store instance even when
//! several records are created in the same millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Strictly increasing id generator seeded from an existing high-water mark.
#[derive(Debug)]
pub struct MonotonicId {
    last: AtomicI64,
}

impl MonotonicId {
    /// Create a generator that will never issue an id at or below `floor`.
    #[must_use]
    pub const fn starting_at(floor: i64) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }

    /// Issue the next id: the clock value, or last + 1 if the clock has not
    /// advanced past it.
    pub fn next(&self) -> i64 {
        let now = now_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map_or(now, |last| now.max(last + 1))
    }
}
