// ntag21x/src/types.rs

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::constants::{PACK_LEN, PAGE_SIZE, PASSWORD_LEN, SIGNATURE_LEN, UID_LEN};
use crate::memory::TagGeometry;
use crate::Error;

/// UID - Newtype Pattern (7 bytes, ISO14443A double size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl FromStr for Uid {
    type Err = Error;

    /// Parse `"04a1b2c3d4e5f6"` or `"04 a1 b2 c3 d4 e5 f6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidLength {
            expected: UID_LEN,
            actual: 0,
        })?;
        Self::try_from(&bytes[..])
    }
}

/// PageData (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PageData([u8; PAGE_SIZE]);

impl PageData {
    pub const ZERO: Self = Self([0; PAGE_SIZE]);

    pub const fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a page from at most 4 bytes, zero padding the tail. `page` is
    /// only used for the error report.
    pub fn padded(page: u8, data: &[u8]) -> crate::Result<Self> {
        if data.len() > PAGE_SIZE {
            return Err(Error::PageDataTooLong {
                page,
                len: data.len(),
            });
        }
        let mut arr = [0u8; PAGE_SIZE];
        arr[..data.len()].copy_from_slice(data);
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl From<[u8; PAGE_SIZE]> for PageData {
    fn from(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }
}

/// 32-bit password compared by PWD_AUTH
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Password([u8; PASSWORD_LEN]);

impl Password {
    pub const fn from_bytes(bytes: [u8; PASSWORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PASSWORD_LEN] {
        &self.0
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// 16-bit password acknowledge returned on a successful PWD_AUTH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack([u8; PACK_LEN]);

impl Pack {
    pub const fn from_bytes(bytes: [u8; PACK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PACK_LEN] {
        &self.0
    }
}

/// 32-byte ECC originality signature returned by READ_SIG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// TagType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TagType {
    #[display(fmt = "NTAG213")]
    Ntag213,
    #[display(fmt = "NTAG215")]
    Ntag215,
    #[display(fmt = "NTAG216")]
    Ntag216,
}

impl TagType {
    pub const ALL: [TagType; 3] = [TagType::Ntag213, TagType::Ntag215, TagType::Ntag216];

    /// Resolve from byte 2 of the capability container (page 3).
    pub fn from_capability(capability: u8) -> Option<Self> {
        match capability {
            0x12 => Some(Self::Ntag213),
            0x3E => Some(Self::Ntag215),
            0x6D => Some(Self::Ntag216),
            _ => None,
        }
    }

    pub fn capability(&self) -> u8 {
        match self {
            Self::Ntag213 => 0x12,
            Self::Ntag215 => 0x3E,
            Self::Ntag216 => 0x6D,
        }
    }

    /// Resolve from the storage size byte of a GET_VERSION response.
    pub fn from_storage_size(size: u8) -> Option<Self> {
        match size {
            0x0F => Some(Self::Ntag213),
            0x11 => Some(Self::Ntag215),
            0x13 => Some(Self::Ntag216),
            _ => None,
        }
    }

    pub fn storage_size(&self) -> u8 {
        match self {
            Self::Ntag213 => 0x0F,
            Self::Ntag215 => 0x11,
            Self::Ntag216 => 0x13,
        }
    }

    pub fn geometry(&self) -> TagGeometry {
        match self {
            Self::Ntag213 => TagGeometry::NTAG213,
            Self::Ntag215 => TagGeometry::NTAG215,
            Self::Ntag216 => TagGeometry::NTAG216,
        }
    }

    /// Total number of addressable pages, configuration pages included.
    pub fn total_pages(&self) -> usize {
        self.geometry().pack() as usize + 1
    }
}

/// Decoded GET_VERSION response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub vendor_id: u8,
    pub product_type: u8,
    pub product_subtype: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub storage_size: u8,
    pub protocol_type: u8,
}

impl VersionInfo {
    /// NXP Semiconductors
    pub const VENDOR_NXP: u8 = 0x04;
    /// NTAG product family
    pub const PRODUCT_TYPE_NTAG: u8 = 0x04;

    /// Byte 0 is a fixed header (0x00) and is skipped.
    pub fn from_bytes(bytes: [u8; crate::constants::VERSION_RESPONSE_LEN]) -> Self {
        Self {
            vendor_id: bytes[1],
            product_type: bytes[2],
            product_subtype: bytes[3],
            major_version: bytes[4],
            minor_version: bytes[5],
            storage_size: bytes[6],
            protocol_type: bytes[7],
        }
    }

    pub fn to_bytes(&self) -> [u8; crate::constants::VERSION_RESPONSE_LEN] {
        [
            0x00,
            self.vendor_id,
            self.product_type,
            self.product_subtype,
            self.major_version,
            self.minor_version,
            self.storage_size,
            self.protocol_type,
        ]
    }

    /// Tag type implied by the storage size, if this is an NXP NTAG.
    pub fn tag_type(&self) -> Option<TagType> {
        if self.vendor_id != Self::VENDOR_NXP || self.product_type != Self::PRODUCT_TYPE_NTAG {
            return None;
        }
        TagType::from_storage_size(self.storage_size)
    }
}
