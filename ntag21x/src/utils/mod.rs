//! Small helpers shared across the crate: hex formatting for frame traces
//! and timeout defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
