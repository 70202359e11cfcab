// ntag21x/src/config.rs
//! Session configuration.

use std::time::Duration;

use crate::utils::{
    DEFAULT_POLL_RETRIES, DEFAULT_POLL_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS, ms, poll_budget,
};

/// Discovery polling: one window of `timeout_ms`, repeated `retries` times
/// when nothing answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollConfig {
    /// Length of one poll attempt
    pub timeout_ms: u64,
    /// Extra attempts after the first empty poll
    pub retries: u8,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            retries: DEFAULT_POLL_RETRIES,
        }
    }
}

impl PollConfig {
    pub fn timeout(&self) -> Duration {
        ms(self.timeout_ms)
    }

    /// Upper bound on the time spent in one `discover`.
    pub fn budget(&self) -> Duration {
        poll_budget(self.timeout_ms, self.retries)
    }
}

/// Frame used for page writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteMode {
    /// 18-byte COMPATIBILITY_WRITE (0xA0); accepted by every reader that
    /// speaks MIFARE Ultralight.
    #[default]
    Compatibility,
    /// 6-byte native WRITE (0xA2).
    Native,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub poll: PollConfig,
    pub transceive_timeout_ms: u64,
    pub write_mode: WriteMode,
    /// Read every written page back and compare. Off by default: a write
    /// is not idempotent, so whether to check is the caller's call.
    pub verify_writes: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll: PollConfig::default(),
            transceive_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            write_mode: WriteMode::default(),
            verify_writes: false,
        }
    }
}

impl SessionConfig {
    pub fn with_poll(mut self, timeout_ms: u64, retries: u8) -> Self {
        self.poll = PollConfig {
            timeout_ms,
            retries,
        };
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_verify_writes(mut self, verify: bool) -> Self {
        self.verify_writes = verify;
        self
    }

    pub fn with_transceive_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.transceive_timeout_ms = timeout_ms;
        self
    }
}
