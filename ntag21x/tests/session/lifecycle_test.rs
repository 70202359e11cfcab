#[path = "../common/mod.rs"]
mod common;

use ntag21x::config::SessionConfig;
use ntag21x::session::{SessionBuilder, TagSession};
use ntag21x::transceiver::Property;
use ntag21x::types::TagType;
use ntag21x::Error;

#[test]
fn discover_returns_uid() {
    let session = common::helpers::simulated_session(TagType::Ntag213);
    assert_eq!(session.uid(), Some(common::fixtures::sample_uid()));
    assert!(session.transceiver().is_selected());
}

#[test]
fn operations_before_discover_are_not_connected() {
    let tag = common::helpers::simulated_tag(TagType::Ntag213);
    let mut session = SessionBuilder::new().with_transceiver(tag).build().unwrap();
    assert!(matches!(session.read_page(4), Err(Error::NotConnected)));
    assert!(matches!(session.write_page(4, &[1]), Err(Error::NotConnected)));
    assert!(matches!(session.determine_tag_geometry(), Err(Error::NotConnected)));
    assert_eq!(session.transceiver().transceive_count(), 0);
}

#[test]
fn close_invalidates_selection() {
    let mut session = common::helpers::simulated_session(TagType::Ntag215);
    session.read_page(4).unwrap();
    session.close().unwrap();

    assert!(!session.is_open());
    assert!(session.target().is_none());
    assert!(matches!(session.read_page(4), Err(Error::NotConnected)));
    assert!(matches!(session.discover(), Err(Error::NotConnected)));

    session.open().unwrap();
    // open alone does not select a target
    assert!(matches!(session.read_page(4), Err(Error::NotConnected)));
    session.discover().unwrap();
    session.read_page(4).unwrap();
}

#[test]
fn discover_reports_attempts_when_tag_absent() {
    let mut tag = common::helpers::simulated_tag(TagType::Ntag213);
    tag.set_present(false);
    let config = SessionConfig::default().with_poll(150, 4);
    let mut session = TagSession::new(tag, config);
    session.open().unwrap();
    match session.discover() {
        Err(e @ Error::NoTarget { attempts: 5 }) => {
            assert!(e.to_string().contains("5 poll attempt"))
        }
        other => panic!("expected NoTarget, got {:?}", other),
    }
}

#[test]
fn geometry_from_capability_container() -> anyhow::Result<()> {
    let mut session = common::helpers::simulated_session(TagType::Ntag216);
    let (geometry, tag_type, uid) = session.determine_tag_geometry()?;
    assert_eq!(tag_type, TagType::Ntag216);
    assert_eq!(geometry.user_memory_page_range(), 4..=225);
    assert_eq!(uid, common::fixtures::sample_uid());
    assert_eq!(session.geometry(), Some(geometry));
    Ok(())
}

#[test]
fn geometry_reset_by_rediscover() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    session.determine_tag_geometry().unwrap();
    session.discover().unwrap();
    assert!(session.geometry().is_none());
}

#[test]
fn framing_switches_around_pwd_auth() {
    let mut session = common::helpers::mock_session(vec![
        common::fixtures::read_response([0; 4]),
        vec![0x00, 0x00],
        common::fixtures::read_response([0; 4]),
    ]);
    let creds = ntag21x::auth::Credentials::factory_default();
    session.read_page(4).unwrap();
    session.authenticate(&creds.password, &creds.ack).unwrap();
    session.read_page(4).unwrap();

    let framing: Vec<bool> = session
        .transceiver()
        .properties
        .iter()
        .filter(|(p, _)| *p == Property::EasyFraming)
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(framing, vec![true, false, true]);
}

#[test]
fn transport_failure_is_not_retried() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let before = session.transceiver().transceive_count();
    session.transceiver_mut().fail_next_transceive(Error::Timeout);
    let err = session.write_page(4, &[1, 2, 3, 4]).unwrap_err();
    assert!(err.is_transport());
    assert_eq!(session.transceiver().transceive_count(), before + 1);
}

#[test]
fn dump_pages_reads_from_zero() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let pages = session.dump_pages(5).unwrap();
    assert_eq!(pages.len(), 5);
    assert_eq!(pages[0].as_bytes()[0], ntag21x::test_support::TEST_UID[0]);
    assert_eq!(pages[3].as_bytes(), &[0xE1, 0x10, 0x12, 0x00]);
}

#[test]
fn unknown_capability_byte_is_surfaced() {
    let tag = ntag21x::transceiver::SimulatedTag::with_capability(
        TagType::Ntag213,
        common::fixtures::sample_uid(),
        0x3F,
    );
    let mut session = common::helpers::simulated_session_with(tag, SessionConfig::default());
    match session.determine_tag_geometry() {
        Err(e @ Error::UnknownTagType { capability: 0x3F }) => {
            assert!(e.to_string().contains("0x3f"))
        }
        other => panic!("expected UnknownTagType, got {:?}", other),
    }
}
