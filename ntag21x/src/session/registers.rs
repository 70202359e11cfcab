// ntag21x/src/session/registers.rs

use log::debug;

use crate::memory::TagGeometry;
use crate::registers::{
    AccessConfig, MirrorConfig, auth0, decode_mirror, encode_mirror, encode_mirror_disabled,
};
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::{Error, Result};

impl<T: Transceiver> TagSession<T> {
    pub fn read_mirror_config(&mut self, geometry: &TagGeometry) -> Result<MirrorConfig> {
        let cfg0 = self.read_page(geometry.cfg0())?;
        Ok(decode_mirror(&cfg0))
    }

    /// True when the ASCII UID mirror is switched on.
    pub fn check_uid_mirror(&mut self, geometry: &TagGeometry) -> Result<bool> {
        let mirror = self.read_mirror_config(geometry)?;
        debug!("uid mirror: {:?}", mirror);
        Ok(mirror.enabled)
    }

    /// Mirror the UID as ASCII hex starting at `page`/`byte_in_page`.
    /// Read-modify-write of cfg0; AUTH0 is preserved.
    pub fn enable_uid_mirror(
        &mut self,
        geometry: &TagGeometry,
        page: u8,
        byte_in_page: u8,
    ) -> Result<()> {
        if byte_in_page > 3 {
            return Err(Error::InvalidMirrorByte(byte_in_page));
        }
        let cfg0_page = geometry.cfg0();
        let current = self.read_page(cfg0_page)?;
        let updated = encode_mirror(page, byte_in_page, auth0(&current))?;
        self.write_page(cfg0_page, updated.as_bytes())?;
        debug!("uid mirror enabled at page {} byte {}", page, byte_in_page);
        Ok(())
    }

    pub fn disable_uid_mirror(&mut self, geometry: &TagGeometry) -> Result<()> {
        let cfg0_page = geometry.cfg0();
        let current = self.read_page(cfg0_page)?;
        let updated = encode_mirror_disabled(auth0(&current));
        self.write_page(cfg0_page, updated.as_bytes())
    }

    pub fn read_access_config(&mut self, geometry: &TagGeometry) -> Result<AccessConfig> {
        let cfg1 = self.read_page(geometry.cfg1())?;
        Ok(AccessConfig::from_page(&cfg1))
    }

    /// Write cfg1. An out-of-range AUTHLIM is rejected before any I/O.
    pub fn set_access_config(&mut self, geometry: &TagGeometry, access: &AccessConfig) -> Result<()> {
        let page = access.to_page()?;
        self.write_page(geometry.cfg1(), page.as_bytes())
    }
}
