// ntag21x/src/session/info.rs

use log::{debug, warn};

use crate::constants::NFC_COUNTER_ADDRESS;
use crate::protocol::{Command, decode_counter, decode_signature, decode_version};
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::{Signature, VersionInfo};
use crate::Result;

impl<T: Transceiver> TagSession<T> {
    /// GET_VERSION. The storage size byte is checked against the capability
    /// container when the geometry is already known; a disagreement is
    /// logged, not fatal.
    pub fn get_version(&mut self) -> Result<VersionInfo> {
        let version = self.request(&Command::GetVersion, decode_version)?;
        match (version.tag_type(), self.geometry) {
            (Some(tag_type), Some(geometry)) if tag_type.geometry() != geometry => {
                warn!("GET_VERSION reports {} but capability container disagrees", tag_type)
            }
            (tag_type, _) => debug!("version {:?} ({:?})", version, tag_type),
        }
        Ok(version)
    }

    /// 24-bit NFC counter.
    pub fn read_counter(&mut self) -> Result<u32> {
        self.request(
            &Command::ReadCnt {
                counter: NFC_COUNTER_ADDRESS,
            },
            decode_counter,
        )
    }

    /// 32-byte originality signature over the UID.
    pub fn read_signature(&mut self) -> Result<Signature> {
        self.request(&Command::ReadSig, decode_signature)
    }
}
