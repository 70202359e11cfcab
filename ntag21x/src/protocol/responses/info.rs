// ntag21x/src/protocol/responses/info.rs

use crate::constants::{COUNTER_RESPONSE_LEN, SIGNATURE_LEN, VERSION_RESPONSE_LEN};
use crate::protocol::{parser, CommandCode};
use crate::types::{Signature, VersionInfo};
use crate::Result;

/// Decode GET_VERSION (8 bytes)
pub fn decode_version(data: &[u8]) -> Result<VersionInfo> {
    parser::ensure_response_len(CommandCode::GetVersion, data, VERSION_RESPONSE_LEN)?;
    Ok(VersionInfo::from_bytes(parser::array_at(data, 0)?))
}

/// Decode READ_CNT: 24-bit little-endian counter value
pub fn decode_counter(data: &[u8]) -> Result<u32> {
    parser::ensure_response_len(CommandCode::ReadCnt, data, COUNTER_RESPONSE_LEN)?;
    parser::le_u24_at(data, 0)
}

/// Decode READ_SIG (32 bytes)
pub fn decode_signature(data: &[u8]) -> Result<Signature> {
    parser::ensure_response_len(CommandCode::ReadSig, data, SIGNATURE_LEN)?;
    Ok(Signature::from_bytes(parser::array_at(data, 0)?))
}
