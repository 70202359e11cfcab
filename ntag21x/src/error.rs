// ntag21x/src/error.rs

use thiserror::Error;

use crate::protocol::CommandCode;
use crate::transceiver::Property;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("no target responded within {attempts} poll attempt(s)")]
    NoTarget { attempts: u8 },

    #[error("unknown tag type: capability byte {capability:#04x}")]
    UnknownTagType { capability: u8 },

    #[error("page {page}: {len} bytes do not fit a 4-byte page")]
    PageDataTooLong { page: u8, len: usize },

    #[error(
        "user memory capacity exceeded: {required_pages} pages required, {available_pages} available"
    )]
    CapacityExceeded {
        required_pages: usize,
        available_pages: usize,
    },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid page range {start}..={end}")]
    InvalidPageRange { start: u8, end: u8 },

    #[error("auth attempt limit {0} does not fit the 3-bit AUTHLIM field")]
    InvalidAuthAttempts(u8),

    #[error("mirror byte offset {0} out of range 0..=3")]
    InvalidMirrorByte(u8),

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{command} failed at page {page}: {source}")]
    CommandFailed {
        command: CommandCode,
        page: u8,
        #[source]
        source: Box<Error>,
    },

    #[error("{command}: short response, expected at least {expected} bytes, got {actual}: {received:02x?}")]
    ShortResponse {
        command: CommandCode,
        expected: usize,
        actual: usize,
        received: Vec<u8>,
    },

    #[error("{command} at page {page}: unexpected response {received:02x?}")]
    UnexpectedResponse {
        command: CommandCode,
        page: u8,
        received: Vec<u8>,
    },

    #[error("{command} at page {page} rejected: NAK {code:#03x}")]
    Nak {
        command: CommandCode,
        page: u8,
        code: u8,
    },

    #[error("page {page} verify mismatch: wrote {expected:02x?}, read back {actual:02x?}")]
    VerifyMismatch {
        page: u8,
        expected: [u8; 4],
        actual: [u8; 4],
    },

    #[error("reader rejected property {property}={enabled}")]
    PropertyRejected { property: Property, enabled: bool },

    #[error("not connected")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the failure came from the reader or the RF link rather
    /// than from argument validation. Such a failure during a write leaves
    /// the page in an unknown state.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Timeout | Error::Transport(_) => true,
            Error::CommandFailed { source, .. } => source.is_transport(),
            _ => false,
        }
    }
}
