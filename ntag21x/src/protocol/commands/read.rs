// ntag21x/src/protocol/commands/read.rs

use crate::constants::{OPCODE_FAST_READ, OPCODE_READ};

/// Encode READ (0x30): the tag answers with the addressed page and the
/// three that follow it.
pub fn encode_read(page: u8) -> Vec<u8> {
    vec![OPCODE_READ, page]
}

/// Encode FAST_READ (0x3A) for the inclusive page range `start..=end`.
pub fn encode_fast_read(start: u8, end: u8) -> Vec<u8> {
    vec![OPCODE_FAST_READ, start, end]
}
