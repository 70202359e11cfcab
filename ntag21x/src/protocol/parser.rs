// ntag21x/src/protocol/parser.rs

use crate::protocol::CommandCode;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure a response to `command` carries at least `min` bytes, reporting
/// the opcode on failure.
pub fn ensure_response_len(command: CommandCode, data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::ShortResponse {
            command,
            expected: min,
            actual: data.len(),
            received: data.to_vec(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy `N` bytes starting at `idx` into a fixed array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a little-endian 24-bit value at `idx`.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let b: [u8; 3] = array_at(data, idx)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], 0]))
}
