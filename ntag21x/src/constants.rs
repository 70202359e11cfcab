// ntag21x/src/constants.rs
//! Protocol constants for NTAG 213/215/216 tags.

/// Size of a single tag page in bytes
pub const PAGE_SIZE: usize = 4;

/// Length of a 7-byte (double size) ISO14443A UID
pub const UID_LEN: usize = 7;

/// GET_VERSION: product and storage size
pub const OPCODE_GET_VERSION: u8 = 0x60;
/// READ: four pages from the given address
pub const OPCODE_READ: u8 = 0x30;
/// FAST_READ: an inclusive page range
pub const OPCODE_FAST_READ: u8 = 0x3A;
/// WRITE: one page, native frame
pub const OPCODE_WRITE: u8 = 0xA2;
/// COMPATIBILITY_WRITE: one page in a MIFARE Classic sized frame
pub const OPCODE_COMPATIBILITY_WRITE: u8 = 0xA0;
/// READ_CNT: 24-bit NFC counter
pub const OPCODE_READ_CNT: u8 = 0x39;
/// PWD_AUTH: 32-bit password, answered with PACK
pub const OPCODE_PWD_AUTH: u8 = 0x1B;
/// READ_SIG: originality signature
pub const OPCODE_READ_SIG: u8 = 0x3C;

/// READ always answers with four consecutive pages (16 bytes); only the
/// first page is the one that was addressed.
pub const READ_RESPONSE_LEN: usize = 16;

/// Data area of a COMPATIBILITY_WRITE frame. Only the first page is stored.
pub const COMPATIBILITY_WRITE_DATA_LEN: usize = 16;

/// opcode(1) + page(1) + data(16)
pub const COMPATIBILITY_WRITE_FRAME_LEN: usize = 2 + COMPATIBILITY_WRITE_DATA_LEN;

/// opcode(1) + page(1) + data(4)
pub const WRITE_FRAME_LEN: usize = 2 + PAGE_SIZE;

/// Buffer size offered to the reader for write acknowledgements
pub const WRITE_RESPONSE_CAPACITY: usize = 250;

/// GET_VERSION response length
pub const VERSION_RESPONSE_LEN: usize = 8;
/// READ_CNT response length (little-endian 24-bit)
pub const COUNTER_RESPONSE_LEN: usize = 3;
/// ECC originality signature length
pub const SIGNATURE_LEN: usize = 32;
/// PWD length
pub const PASSWORD_LEN: usize = 4;
/// PACK length
pub const PACK_LEN: usize = 2;

/// 4-bit ACK returned by the tag after a successful write
pub const ACK: u8 = 0x0A;

/// Page holding the capability container
pub const CAPABILITY_CONTAINER_PAGE: u8 = 3;

/// Byte within the capability container that encodes the data area size
pub const CAPABILITY_SIZE_INDEX: usize = 2;

/// First page of user memory on every NTAG 21x variant
pub const USER_MEMORY_START: u8 = 4;

/// AUTH0 value that disables password protection entirely
pub const AUTH0_DISABLED: u8 = 0xFF;

/// Address of the NFC one-way counter for READ_CNT
pub const NFC_COUNTER_ADDRESS: u8 = 0x02;

/// Address argument of READ_SIG (the only valid one)
pub const SIGNATURE_ADDRESS: u8 = 0x00;

/// AUTHLIM is a 3-bit field
pub const MAX_AUTH_ATTEMPTS: u8 = 0b111;

/// Highest user_memory_end that still leaves room for cfg0/cfg1/pwd/pack
/// inside an 8-bit page address.
pub const MAX_USER_MEMORY_END: u8 = 0xFF - 5;
