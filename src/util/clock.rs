//! Wall-clock helpers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis()
}

/// Milliseconds elapsed between `since_ms` and now, saturating at zero.
#[must_use]
pub fn elapsed_ms(since_ms: u128) -> u128 {
    now_ms().saturating_sub(since_ms)
}
