use std::time::{Duration, Instant};

/// Event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A single reading of both clocks.
///
/// `instant` drives deadlines (notices, exit confirmation); `millis` is the
/// wall-clock epoch time stamped onto tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now {
    pub instant: Instant,
    pub millis: i64,
}

impl Now {
    pub fn current() -> Self {
        Self {
            instant: Instant::now(),
            millis: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Same reading moved forward by `by`
    pub fn later(&self, by: Duration) -> Self {
        Self {
            instant: self.instant + by,
            millis: self.millis + by.as_millis() as i64,
        }
    }
}
