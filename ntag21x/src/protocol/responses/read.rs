// ntag21x/src/protocol/responses/read.rs

use crate::constants::{PAGE_SIZE, READ_RESPONSE_LEN};
use crate::protocol::{parser, CommandCode};
use crate::types::PageData;
use crate::{Error, Result};

/// Decode a READ response. The tag returns 16 bytes (four pages) for
/// alignment; only the first page is the one addressed.
pub fn decode_read(data: &[u8]) -> Result<PageData> {
    parser::ensure_response_len(CommandCode::Read, data, READ_RESPONSE_LEN)?;
    let page: [u8; PAGE_SIZE] = parser::array_at(data, 0)?;
    Ok(PageData::from_bytes(page))
}

/// Decode a FAST_READ response covering `start..=end`.
pub fn decode_fast_read(data: &[u8], start: u8, end: u8) -> Result<Vec<u8>> {
    if start > end {
        return Err(Error::InvalidPageRange { start, end });
    }
    let len = (end - start) as usize * PAGE_SIZE + PAGE_SIZE;
    parser::ensure_response_len(CommandCode::FastRead, data, len)?;
    Ok(data[..len].to_vec())
}
