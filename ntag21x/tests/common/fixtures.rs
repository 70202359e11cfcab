// fixtures.rs: commonly used UIDs, credentials and raw frames

use ntag21x::auth::Credentials;
use ntag21x::test_support::TEST_UID;
use ntag21x::types::Uid;

pub use ntag21x::test_support::read_response;

pub fn sample_uid() -> Uid {
    Uid::from_bytes(TEST_UID)
}

pub fn sample_credentials() -> Credentials {
    Credentials::new(hex_array("12 34 56 78"), hex_array("ab cd"))
}

/// GET_VERSION response of an NTAG 215.
pub fn ntag215_version() -> Vec<u8> {
    hex::decode("0004040201001103").unwrap()
}

pub fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s.replace(' ', "")).unwrap();
    bytes.try_into().unwrap()
}
