#[path = "../common/mod.rs"]
mod common;

use ntag21x::auth::{AuthOutcome, AuthState, Credentials, ProtectionSettings};
use ntag21x::memory::TagGeometry;
use ntag21x::protocol::CommandCode;
use ntag21x::registers::AccessConfig;
use ntag21x::session::TagSession;
use ntag21x::transceiver::SimulatedTag;
use ntag21x::types::{Pack, TagType};
use ntag21x::Error;

fn protect_from(
    session: &mut TagSession<SimulatedTag>,
    auth0: u8,
    access: AccessConfig,
) -> Credentials {
    let creds = common::fixtures::sample_credentials();
    let settings = ProtectionSettings::new(creds, auth0, access);
    session.set_password(&TagGeometry::NTAG213, &settings).unwrap();
    creds
}

#[test]
fn factory_password_authenticates_until_close() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    assert_eq!(session.auth_state(), AuthState::Unauthenticated);

    let creds = Credentials::factory_default();
    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    assert_eq!(session.auth_state(), AuthState::Authenticated);
    assert!(session.transceiver().is_authenticated());

    session.close().unwrap();
    assert_eq!(session.auth_state(), AuthState::Unauthenticated);
    assert!(!session.transceiver().is_authenticated());
}

#[test]
fn wrong_password_is_false_not_error() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let creds = common::fixtures::sample_credentials();
    assert!(!session.authenticate(&creds.password, &creds.ack).unwrap());
    assert!(!session.is_authenticated());

    match session.try_authenticate(&creds.password, &creds.ack).unwrap() {
        AuthOutcome::AckMismatch { received } => assert_eq!(received, vec![0x00]),
        other => panic!("expected AckMismatch, got {:?}", other),
    }
}

#[test]
fn unexpected_pack_is_a_mismatch() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let password = Credentials::factory_default().password;
    let wrong_ack = Pack::from_bytes([0x00, 0x01]);
    assert!(!session.authenticate(&password, &wrong_ack).unwrap());
    assert_eq!(session.auth_state(), AuthState::Unauthenticated);
}

#[test]
fn transport_failure_is_separated_by_try_authenticate() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let creds = Credentials::factory_default();

    session.transceiver_mut().fail_next_transceive(Error::Timeout);
    assert!(!session.authenticate(&creds.password, &creds.ack).unwrap());

    session
        .transceiver_mut()
        .fail_next_transceive(Error::Transport("rf field lost".into()));
    match session.try_authenticate(&creds.password, &creds.ack).unwrap() {
        AuthOutcome::NoResponse(e) => assert!(e.is_transport()),
        other => panic!("expected NoResponse, got {:?}", other),
    }
}

#[test]
fn authenticate_without_target_is_an_error() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    session.close().unwrap();
    let creds = Credentials::factory_default();
    assert!(matches!(
        session.authenticate(&creds.password, &creds.ack),
        Err(Error::NotConnected)
    ));
}

#[test]
fn set_password_write_order_and_layout() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    session.enable_uid_mirror(&TagGeometry::NTAG213, 0x08, 3).unwrap();
    session.transceiver_mut().writes.clear();

    protect_from(&mut session, 0x10, AccessConfig::default());

    let tag = session.transceiver();
    assert_eq!(tag.writes, vec![44, 43, 42, 41]);
    assert_eq!(tag.page(43), [0x12, 0x34, 0x56, 0x78]);
    assert_eq!(tag.page(44), [0xAB, 0xCD, 0x00, 0x00]);
    assert_eq!(tag.page(42), [0x00; 4]);
    // mirror bits survive, AUTH0 replaced
    assert_eq!(tag.page(41), [0b0111_0000, 0x00, 0x08, 0x10]);
}

#[test]
fn protected_write_needs_fresh_authentication() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let creds = protect_from(&mut session, 0x10, AccessConfig::default());

    // below AUTH0 stays writable
    session.write_page(0x0F, &[1]).unwrap();
    assert!(matches!(
        session.write_page(0x10, &[1]),
        Err(Error::Nak { page: 0x10, .. })
    ));

    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    session.write_page(0x10, &[1]).unwrap();

    // a reconnect forgets the authentication on both sides
    session.close().unwrap();
    session.open().unwrap();
    session.discover().unwrap();
    assert!(!session.is_authenticated());
    assert!(session.write_page(0x10, &[2]).is_err());
    assert_eq!(session.transceiver().page(0x10), [1, 0, 0, 0]);
}

#[test]
fn locked_protection_is_fully_applied() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let g = TagGeometry::NTAG213;
    let access = AccessConfig {
        lock_config: true,
        ..AccessConfig::default()
    };
    let creds = protect_from(&mut session, 0x10, access);
    assert_eq!(session.transceiver().writes, vec![44, 43, 42, 41]);
    assert_eq!(session.transceiver().page(41)[3], 0x10);
    assert_eq!(session.transceiver().page(42)[0], 0x40);

    session.close().unwrap();
    session.open().unwrap();
    session.discover().unwrap();
    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    assert!(matches!(
        session.set_access_config(&g, &AccessConfig::default()),
        Err(Error::Nak { page: 42, .. })
    ));
    assert!(matches!(
        session.disable_uid_mirror(&g),
        Err(Error::Nak { page: 41, .. })
    ));
    // user pages behind AUTH0 still accept authenticated writes
    session.write_page(0x10, &[7]).unwrap();
}

#[test]
fn prot_bit_gates_reads() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let access = AccessConfig {
        protect_read_and_write: true,
        ..AccessConfig::default()
    };
    let creds = protect_from(&mut session, 0x20, access);

    assert!(session.read_page(0x1F).is_ok());
    let err = session.read_page(0x20).unwrap_err();
    assert!(matches!(
        err,
        Error::Nak {
            command: CommandCode::Read,
            page: 0x20,
            code: 0x00,
        }
    ));
    assert!(err.to_string().contains("READ at page 32"));
    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    assert!(session.read_page(0x20).is_ok());
}

#[test]
fn auth_limit_out_of_range_writes_nothing() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let before = session.transceiver().transceive_count();
    let access = AccessConfig {
        auth_attempts_limit: 8,
        ..AccessConfig::default()
    };
    let settings = ProtectionSettings::new(common::fixtures::sample_credentials(), 0x04, access);
    assert!(matches!(
        session.set_password(&TagGeometry::NTAG213, &settings),
        Err(Error::InvalidAuthAttempts(8))
    ));
    assert_eq!(session.transceiver().transceive_count(), before);
}

#[test]
fn auth_limit_locks_the_password() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let access = AccessConfig {
        auth_attempts_limit: 2,
        ..AccessConfig::default()
    };
    let creds = protect_from(&mut session, 0x04, access);
    let wrong = Credentials::factory_default();
    for _ in 0..2 {
        assert!(!session.authenticate(&wrong.password, &creds.ack).unwrap());
    }
    assert!(!session.authenticate(&creds.password, &creds.ack).unwrap());
}

#[test]
fn clear_password_lifts_protection() {
    let mut session = common::helpers::simulated_session(TagType::Ntag213);
    let creds = protect_from(&mut session, 0x04, AccessConfig::default());
    assert!(session.authenticate(&creds.password, &creds.ack).unwrap());
    session.clear_password(&TagGeometry::NTAG213, creds).unwrap();
    assert_eq!(session.transceiver().page(41)[3], 0xFF);

    session.discover().unwrap();
    session.write_page(0x04, b"free").unwrap();
    assert_eq!(session.transceiver().page(4), *b"free");
}
