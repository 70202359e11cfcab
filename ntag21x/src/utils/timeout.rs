//! Timeout defaults for discovery and transceive.

use std::time::Duration;

/// Transceive timeout in milliseconds when the session config leaves the
/// default in place.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Length of one discovery poll window in milliseconds.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 150;

/// Extra poll windows tried after the first one comes back empty.
pub const DEFAULT_POLL_RETRIES: u8 = 2;

pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Worst-case time `discover` spends polling with `timeout_ms`/`retries`.
pub fn poll_budget(timeout_ms: u64, retries: u8) -> Duration {
    ms(timeout_ms) * (u32::from(retries) + 1)
}
