// ntag21x/src/protocol/responses/auth.rs

use crate::constants::PACK_LEN;
use crate::protocol::{parser, CommandCode};
use crate::types::Pack;
use crate::Result;

/// Extract the PACK returned by a successful PWD_AUTH. A NAK nibble or any
/// other short reply fails with `ShortResponse`.
pub fn decode_pwd_auth(data: &[u8]) -> Result<Pack> {
    parser::ensure_response_len(CommandCode::PwdAuth, data, PACK_LEN)?;
    Ok(Pack::from_bytes(parser::array_at(data, 0)?))
}
