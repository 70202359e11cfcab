use ntag21x::registers::{
    AccessConfig, MirrorConfig, decode_access, decode_mirror, encode_access, encode_mirror,
};
use ntag21x::types::PageData;
use proptest::prelude::*;

#[test]
fn mirror_scenario_page_200_byte_2() {
    let cfg0 = encode_mirror(200, 2, 0xFF).unwrap();
    assert_eq!(cfg0.as_bytes(), &[0b0110_0000, 0x00, 200, 0xFF]);
    assert_eq!(
        decode_mirror(&cfg0),
        MirrorConfig {
            enabled: true,
            mirror_page: 200,
            byte_in_page: 2,
        }
    );
}

#[test]
fn mirror_disabled_when_bit6_clear() {
    let cfg0 = PageData::from_bytes([0b0011_0000, 0x00, 0x10, 0x04]);
    assert!(!decode_mirror(&cfg0).enabled);
}

#[test]
fn access_fields_map_to_bits() {
    let cfg = AccessConfig {
        protect_read_and_write: true,
        lock_config: false,
        counter_enabled: true,
        counter_protected: false,
        auth_attempts_limit: 5,
    };
    assert_eq!(encode_access(&cfg).unwrap(), 0b1001_0101);
}

proptest! {
    #[test]
    fn mirror_round_trip(page in any::<u8>(), byte in 0u8..4, auth0 in any::<u8>()) {
        let cfg0 = encode_mirror(page, byte, auth0).unwrap();
        prop_assert_eq!(cfg0.as_bytes()[3], auth0);
        let m = decode_mirror(&cfg0);
        prop_assert!(m.enabled);
        prop_assert_eq!(m.mirror_page, page);
        prop_assert_eq!(m.byte_in_page, byte);
    }

    // bit 5 is reserved and never produced
    #[test]
    fn access_round_trip(b in any::<u8>().prop_map(|b| b & !0b0010_0000)) {
        prop_assert_eq!(encode_access(&decode_access(b)).unwrap(), b);
    }
}
