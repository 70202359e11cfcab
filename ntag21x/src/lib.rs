// ntag21x/src/lib.rs

//! ntag21x
//!
//! Host-side driver for NXP NTAG 213/215/216 tags reached through a
//! passive-target reader. The reader chip stays behind the
//! [`Transceiver`](transceiver::Transceiver) trait; this crate owns command
//! framing, tag geometry, configuration page codecs and the password
//! authentication state.
#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod protocol;
pub mod registers;
pub mod session;
pub mod test_support;
pub mod transceiver;
pub mod types;
pub mod utils;

// Error, Result and the tag newtypes live at the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
