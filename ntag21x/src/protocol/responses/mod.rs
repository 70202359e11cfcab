// ntag21x/src/protocol/responses/mod.rs

pub mod auth;
pub mod info;
pub mod read;
pub mod write;

pub use auth::decode_pwd_auth;
pub use info::{decode_counter, decode_signature, decode_version};
pub use read::{decode_fast_read, decode_read};
pub use write::decode_write_ack;

use crate::protocol::{Command, CommandCode};
use crate::types::{PageData, Pack, Signature, VersionInfo};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Version(VersionInfo),
    Page(PageData),
    Pages(Vec<u8>),
    WriteAck,
    Counter(u32),
    PwdAck(Pack),
    Signature(Signature),
}

impl Response {
    /// Decode the raw response to `cmd`.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetVersion => decode_version(data).map(Self::Version),
            Command::Read { .. } => decode_read(data).map(Self::Page),
            Command::FastRead { start, end } => decode_fast_read(data, *start, *end).map(Self::Pages),
            Command::Write { page, .. } => {
                decode_write_ack(CommandCode::Write, *page, data).map(|_| Self::WriteAck)
            }
            Command::CompatibilityWrite { page, .. } => {
                decode_write_ack(CommandCode::CompatibilityWrite, *page, data)
                    .map(|_| Self::WriteAck)
            }
            Command::ReadCnt { .. } => decode_counter(data).map(Self::Counter),
            Command::PwdAuth { .. } => decode_pwd_auth(data).map(Self::PwdAck),
            Command::ReadSig => decode_signature(data).map(Self::Signature),
        }
    }
}
