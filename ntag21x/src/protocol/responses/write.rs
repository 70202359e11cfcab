// ntag21x/src/protocol/responses/write.rs

use crate::constants::ACK;
use crate::protocol::CommandCode;
use crate::{Error, Result};

/// Check the acknowledgement of a write.
///
/// Readers running with easy framing usually swallow the 4-bit ACK and
/// return nothing, so an empty response counts as success. A single byte
/// is a 4-bit ACK/NAK nibble. Anything longer is not a write reply at all.
pub fn decode_write_ack(command: CommandCode, page: u8, data: &[u8]) -> Result<()> {
    match data {
        [] => Ok(()),
        [code] if code & 0x0F == ACK => Ok(()),
        [code] => Err(Error::Nak {
            command,
            page,
            code: code & 0x0F,
        }),
        _ => Err(Error::UnexpectedResponse {
            command,
            page,
            received: data.to_vec(),
        }),
    }
}
