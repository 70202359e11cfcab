// ntag21x/src/protocol/commands/mod.rs

pub mod auth;
pub mod info;
pub mod read;
pub mod write;

pub use auth::encode_pwd_auth;
pub use info::{encode_get_version, encode_read_cnt, encode_read_sig};
pub use read::{encode_fast_read, encode_read};
pub use write::{encode_native_write, encode_write};

use derive_more::Display;

use crate::constants::*;
use crate::types::{PageData, Password};

/// NTAG 21x command opcodes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CommandCode {
    #[display(fmt = "GET_VERSION")]
    GetVersion = OPCODE_GET_VERSION,
    #[display(fmt = "READ")]
    Read = OPCODE_READ,
    #[display(fmt = "FAST_READ")]
    FastRead = OPCODE_FAST_READ,
    #[display(fmt = "WRITE")]
    Write = OPCODE_WRITE,
    #[display(fmt = "COMPATIBILITY_WRITE")]
    CompatibilityWrite = OPCODE_COMPATIBILITY_WRITE,
    #[display(fmt = "READ_CNT")]
    ReadCnt = OPCODE_READ_CNT,
    #[display(fmt = "PWD_AUTH")]
    PwdAuth = OPCODE_PWD_AUTH,
    #[display(fmt = "READ_SIG")]
    ReadSig = OPCODE_READ_SIG,
}

impl CommandCode {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OPCODE_GET_VERSION => Some(Self::GetVersion),
            OPCODE_READ => Some(Self::Read),
            OPCODE_FAST_READ => Some(Self::FastRead),
            OPCODE_WRITE => Some(Self::Write),
            OPCODE_COMPATIBILITY_WRITE => Some(Self::CompatibilityWrite),
            OPCODE_READ_CNT => Some(Self::ReadCnt),
            OPCODE_PWD_AUTH => Some(Self::PwdAuth),
            OPCODE_READ_SIG => Some(Self::ReadSig),
            _ => None,
        }
    }

    pub fn opcode(&self) -> u8 {
        *self as u8
    }

    /// PWD_AUTH has to go out with the reader's easy framing disabled; every
    /// other command needs it enabled.
    pub fn requires_easy_framing(&self) -> bool {
        !matches!(self, Self::PwdAuth)
    }
}

/// High-level Command enum. New commands should be added here and
/// their encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetVersion,
    Read {
        page: u8,
    },
    FastRead {
        start: u8,
        end: u8,
    },
    /// Native 4-byte write
    Write {
        page: u8,
        data: PageData,
    },
    /// MIFARE Ultralight compatible 16-byte write; only the first page lands
    CompatibilityWrite {
        page: u8,
        data: PageData,
    },
    ReadCnt {
        counter: u8,
    },
    PwdAuth {
        password: Password,
    },
    ReadSig,
}

impl Command {
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::GetVersion => CommandCode::GetVersion,
            Self::Read { .. } => CommandCode::Read,
            Self::FastRead { .. } => CommandCode::FastRead,
            Self::Write { .. } => CommandCode::Write,
            Self::CompatibilityWrite { .. } => CommandCode::CompatibilityWrite,
            Self::ReadCnt { .. } => CommandCode::ReadCnt,
            Self::PwdAuth { .. } => CommandCode::PwdAuth,
            Self::ReadSig => CommandCode::ReadSig,
        }
    }

    /// Page (or address byte) the command targets, for error reports.
    pub fn page(&self) -> u8 {
        match self {
            Self::Read { page }
            | Self::Write { page, .. }
            | Self::CompatibilityWrite { page, .. } => *page,
            Self::FastRead { start, .. } => *start,
            Self::ReadCnt { counter } => *counter,
            Self::GetVersion | Self::PwdAuth { .. } | Self::ReadSig => 0,
        }
    }

    /// Encode the command into the frame handed to the transceiver.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetVersion => encode_get_version(),
            Self::Read { page } => encode_read(*page),
            Self::FastRead { start, end } => encode_fast_read(*start, *end),
            Self::Write { page, data } => encode_native_write(*page, *data),
            Self::CompatibilityWrite { page, data } => write::encode_compatibility_frame(*page, *data),
            Self::ReadCnt { counter } => encode_read_cnt(*counter),
            Self::PwdAuth { password } => encode_pwd_auth(password),
            Self::ReadSig => encode_read_sig(),
        }
    }

    /// Minimum response length the decoder for this command requires.
    pub fn expected_response_len(&self) -> usize {
        match self {
            Self::GetVersion => VERSION_RESPONSE_LEN,
            Self::Read { .. } => READ_RESPONSE_LEN,
            Self::FastRead { start, end } => {
                (end.saturating_sub(*start) as usize + 1) * PAGE_SIZE
            }
            Self::Write { .. } | Self::CompatibilityWrite { .. } => 0,
            Self::ReadCnt { .. } => COUNTER_RESPONSE_LEN,
            Self::PwdAuth { .. } => PACK_LEN,
            Self::ReadSig => SIGNATURE_LEN,
        }
    }

    /// Receive buffer offered to the transceiver.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::Write { .. } | Self::CompatibilityWrite { .. } => WRITE_RESPONSE_CAPACITY,
            other => other.expected_response_len(),
        }
    }
}
