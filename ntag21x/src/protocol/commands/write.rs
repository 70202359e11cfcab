// ntag21x/src/protocol/commands/write.rs

use crate::constants::{
    COMPATIBILITY_WRITE_FRAME_LEN, OPCODE_COMPATIBILITY_WRITE, OPCODE_WRITE, PAGE_SIZE,
    WRITE_FRAME_LEN,
};
use crate::types::PageData;
use crate::Result;

/// Encode a page write as the fixed 18-byte COMPATIBILITY_WRITE frame.
/// Layout: opcode(1) + page(1) + data(4) + zero padding(12)
///
/// `data` longer than one page is rejected before anything is encoded.
pub fn encode_write(page: u8, data: &[u8]) -> Result<Vec<u8>> {
    let data = PageData::padded(page, data)?;
    Ok(encode_compatibility_frame(page, data))
}

pub(crate) fn encode_compatibility_frame(page: u8, data: PageData) -> Vec<u8> {
    let mut buf = vec![0u8; COMPATIBILITY_WRITE_FRAME_LEN];
    buf[0] = OPCODE_COMPATIBILITY_WRITE;
    buf[1] = page;
    buf[2..2 + PAGE_SIZE].copy_from_slice(data.as_bytes());
    buf
}

/// Encode the native WRITE (0xA2) frame.
/// Layout: opcode(1) + page(1) + data(4)
pub fn encode_native_write(page: u8, data: PageData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(WRITE_FRAME_LEN);
    buf.push(OPCODE_WRITE);
    buf.push(page);
    buf.extend_from_slice(data.as_bytes());
    buf
}
