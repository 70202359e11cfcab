#[path = "../common/mod.rs"]
mod common;

use ntag21x::memory::TagGeometry;
use ntag21x::registers::AccessConfig;
use ntag21x::protocol::CommandCode;
use ntag21x::types::TagType;
use ntag21x::Error;

#[test]
fn version_matches_capability_container() {
    for tag_type in TagType::ALL {
        let mut session = common::helpers::simulated_session(tag_type);
        let (_, from_cc, _) = session.determine_tag_geometry().unwrap();
        let version = session.get_version().unwrap();
        assert_eq!(version.tag_type(), Some(from_cc));
    }
}

#[test]
fn version_over_scripted_reader() {
    let mut session = common::helpers::mock_session(vec![common::fixtures::ntag215_version()]);
    let version = session.get_version().unwrap();
    assert_eq!(version.storage_size, 0x11);
    assert_eq!(session.transceiver().sent.last().unwrap(), &vec![0x60]);
}

#[test]
fn counter_reads_24_bits() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    session.transceiver_mut().set_counter(0x00AB_CDEF);
    assert_eq!(session.read_counter().unwrap(), 0xAB_CDEF);
}

#[test]
fn protected_counter_needs_password() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let access = AccessConfig {
        counter_enabled: true,
        counter_protected: true,
        ..AccessConfig::default()
    };
    session.set_access_config(&TagGeometry::NTAG213, &access).unwrap();
    assert!(matches!(
        session.read_counter(),
        Err(Error::Nak {
            command: CommandCode::ReadCnt,
            page: 0x02,
            ..
        })
    ));

    let creds = ntag21x::auth::Credentials::factory_default();
    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    assert_eq!(session.read_counter().unwrap(), 0);
}

#[test]
fn signature_is_32_bytes() {
    let mut session = common::helpers::simulated_session(TagType::Ntag216);
    let mut sig = [0u8; 32];
    sig.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
    session.transceiver_mut().set_signature(sig);
    let read = session.read_signature().unwrap();
    assert_eq!(read.as_bytes(), &sig);
    assert!(read.to_hex().starts_with("000102"));
}
