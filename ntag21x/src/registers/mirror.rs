// ntag21x/src/registers/mirror.rs
//! cfg0 codec: UID mirror configuration plus the AUTH0 byte.
//!
//! Byte layout of cfg0:
//!
//! | byte | bits | meaning |
//! |------|------|---------|
//! | 0 | 7-6 | MIRROR_CONF (`01` = ASCII UID mirror) |
//! | 0 | 5-4 | MIRROR_BYTE, offset inside the mirror page |
//! | 1 | - | reserved |
//! | 2 | - | MIRROR_PAGE |
//! | 3 | - | AUTH0, first page requiring authentication |

use crate::types::PageData;
use crate::{Error, Result};

const MIRROR_UID_MODE: u8 = 0b0100_0000;
const MIRROR_ENABLED_BIT: u8 = 0b0100_0000;
const MIRROR_BYTE_SHIFT: u8 = 4;
const MIRROR_BYTE_MASK: u8 = 0b0011_0000;

/// Decoded UID mirror settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MirrorConfig {
    pub enabled: bool,
    pub mirror_page: u8,
    pub byte_in_page: u8,
}

pub fn decode_mirror(cfg0: &PageData) -> MirrorConfig {
    let b = cfg0.as_bytes();
    MirrorConfig {
        enabled: b[0] & MIRROR_ENABLED_BIT != 0,
        mirror_page: b[2],
        byte_in_page: (b[0] & MIRROR_BYTE_MASK) >> MIRROR_BYTE_SHIFT,
    }
}

/// Encode an enabled ASCII UID mirror at `page`/`byte_in_page`.
///
/// `existing_auth0` must come from the current cfg0 so the protection
/// boundary survives the rewrite.
pub fn encode_mirror(page: u8, byte_in_page: u8, existing_auth0: u8) -> Result<PageData> {
    if byte_in_page > 3 {
        return Err(Error::InvalidMirrorByte(byte_in_page));
    }
    Ok(PageData::from_bytes([
        MIRROR_UID_MODE | (byte_in_page << MIRROR_BYTE_SHIFT),
        0x00,
        page,
        existing_auth0,
    ]))
}

/// cfg0 with mirroring switched off and AUTH0 kept.
pub fn encode_mirror_disabled(existing_auth0: u8) -> PageData {
    PageData::from_bytes([0x00, 0x00, 0x00, existing_auth0])
}

pub fn auth0(cfg0: &PageData) -> u8 {
    cfg0.as_bytes()[3]
}

/// Replace AUTH0 leaving the mirror bytes untouched.
pub fn with_auth0(cfg0: &PageData, auth0: u8) -> PageData {
    let mut b = *cfg0.as_bytes();
    b[3] = auth0;
    PageData::from_bytes(b)
}
