// ntag21x/src/registers/mod.rs
//! Bit-level codecs for the NTAG 21x configuration pages.

pub mod access;
pub mod mirror;

pub use access::{AccessConfig, decode_access, encode_access};
pub use mirror::{
    MirrorConfig, auth0, decode_mirror, encode_mirror, encode_mirror_disabled, with_auth0,
};
