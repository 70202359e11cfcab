// ntag21x/src/registers/access.rs
//! cfg1 codec. Only byte 0 (ACCESS) is meaningful, the rest is reserved
//! and written as zero.

use crate::constants::MAX_AUTH_ATTEMPTS;
use crate::types::PageData;
use crate::{Error, Result};

const PROT: u8 = 1 << 7;
const CFGLCK: u8 = 1 << 6;
const NFC_CNT_EN: u8 = 1 << 4;
const NFC_CNT_PWD_PROT: u8 = 1 << 3;
const AUTHLIM_MASK: u8 = 0b0000_0111;

/// Decoded ACCESS byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessConfig {
    /// Password needed for reads as well as writes (PROT)
    pub protect_read_and_write: bool,
    /// Permanently lock the configuration pages (CFGLCK)
    pub lock_config: bool,
    /// NFC counter increments on the first READ/FAST_READ (NFC_CNT_EN)
    pub counter_enabled: bool,
    /// READ_CNT needs authentication (NFC_CNT_PWD_PROT)
    pub counter_protected: bool,
    /// Failed attempts before the password is locked; 0 means unlimited
    pub auth_attempts_limit: u8,
}

impl AccessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.auth_attempts_limit > MAX_AUTH_ATTEMPTS {
            return Err(Error::InvalidAuthAttempts(self.auth_attempts_limit));
        }
        Ok(())
    }

    /// cfg1 page image: ACCESS byte followed by reserved zeros.
    pub fn to_page(&self) -> Result<PageData> {
        Ok(PageData::from_bytes([encode_access(self)?, 0, 0, 0]))
    }

    pub fn from_page(cfg1: &PageData) -> Self {
        decode_access(cfg1.as_bytes()[0])
    }
}

pub fn decode_access(access: u8) -> AccessConfig {
    AccessConfig {
        protect_read_and_write: access & PROT != 0,
        lock_config: access & CFGLCK != 0,
        counter_enabled: access & NFC_CNT_EN != 0,
        counter_protected: access & NFC_CNT_PWD_PROT != 0,
        auth_attempts_limit: access & AUTHLIM_MASK,
    }
}

pub fn encode_access(config: &AccessConfig) -> Result<u8> {
    config.validate()?;
    let mut b = config.auth_attempts_limit;
    if config.protect_read_and_write {
        b |= PROT;
    }
    if config.lock_config {
        b |= CFGLCK;
    }
    if config.counter_enabled {
        b |= NFC_CNT_EN;
    }
    if config.counter_protected {
        b |= NFC_CNT_PWD_PROT;
    }
    Ok(b)
}
