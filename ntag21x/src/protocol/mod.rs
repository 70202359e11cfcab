// ntag21x/src/protocol/mod.rs
//! Command framing for NTAG 21x tags.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use responses::*;
