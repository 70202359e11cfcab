//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize session setup over `SimulatedTag` and
//! `MockTransceiver` so tests across the crate and the tests/ directory
//! share the same fixtures.

use crate::config::SessionConfig;
use crate::session::TagSession;
use crate::transceiver::{MockTransceiver, SimulatedTag};
use crate::types::{TagType, Uid};
use crate::Result;

/// UID used by the fixtures below.
#[doc(hidden)]
pub const TEST_UID: [u8; 7] = [0x04, 0x5A, 0x1C, 0x22, 0x6B, 0x3F, 0x80];

/// Open session over a factory-fresh simulated tag, target already
/// discovered.
#[doc(hidden)]
pub fn simulated_session(
    tag_type: TagType,
    config: SessionConfig,
) -> Result<TagSession<SimulatedTag>> {
    let tag = SimulatedTag::new(tag_type, Uid::from_bytes(TEST_UID));
    discovered(tag, config)
}

/// Open and discover over any simulated tag the caller prepared.
#[doc(hidden)]
pub fn discovered(tag: SimulatedTag, config: SessionConfig) -> Result<TagSession<SimulatedTag>> {
    let mut session = TagSession::new(tag, config);
    session.open()?;
    session.discover()?;
    Ok(session)
}

/// Open session over a MockTransceiver with one target queued and the
/// given raw responses seeded, target already discovered.
#[doc(hidden)]
pub fn mock_session(responses: Vec<Vec<u8>>) -> Result<TagSession<MockTransceiver>> {
    let mut mock = MockTransceiver::with_target(Uid::from_bytes(TEST_UID));
    for resp in responses {
        mock.push_response(resp);
    }
    let mut session = TagSession::new(mock, SessionConfig::default());
    session.open()?;
    session.discover()?;
    Ok(session)
}

/// 16-byte READ response whose first page is `page`; the remaining pages
/// are filler.
#[doc(hidden)]
pub fn read_response(page: [u8; 4]) -> Vec<u8> {
    let mut resp = page.to_vec();
    resp.extend_from_slice(&[0u8; 12]);
    resp
}
