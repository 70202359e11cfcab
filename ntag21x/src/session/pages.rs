// ntag21x/src/session/pages.rs

use log::{debug, warn};

use crate::config::WriteMode;
use crate::constants::{CAPABILITY_CONTAINER_PAGE, CAPABILITY_SIZE_INDEX};
use crate::memory::{TagGeometry, chunk_pages, ensure_capacity, geometry_for};
use crate::protocol::{Command, CommandCode, decode_fast_read, decode_read, decode_write_ack};
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::{PageData, TagType, Uid};
use crate::{Error, Result};

impl<T: Transceiver> TagSession<T> {
    /// Read one page. Every call goes to the tag; nothing is cached.
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        self.request(&Command::Read { page }, decode_read)
    }

    /// Write up to 4 bytes to `page`, zero padding the rest. Longer data is
    /// rejected before anything is sent.
    pub fn write_page(&mut self, page: u8, data: &[u8]) -> Result<()> {
        let data = PageData::padded(page, data)?;
        let verify = self.config.verify_writes && !self.is_credential_page(page);
        self.write_page_data(page, data, verify)
    }

    /// Read the whole user area of `geometry`, ascending.
    pub fn read_user_memory(&mut self, geometry: &TagGeometry) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(geometry.user_memory_len());
        for page in geometry.user_memory_page_range() {
            out.extend_from_slice(self.read_page(page)?.as_bytes());
        }
        Ok(out)
    }

    /// Write `data` page by page from the first user page. The capacity
    /// check happens before the first write; a transport failure midway
    /// leaves the earlier pages written.
    pub fn write_user_memory(&mut self, data: &[u8], geometry: &TagGeometry) -> Result<()> {
        let pages = ensure_capacity(data.len(), geometry)?;
        self.ensure_selected()?;
        debug!(
            "writing {} bytes ({} pages) from page {}",
            data.len(),
            pages,
            geometry.user_memory_start()
        );
        let verify = self.config.verify_writes;
        for (page, chunk) in geometry.user_memory_page_range().zip(chunk_pages(data)) {
            self.write_page_data(page, chunk, verify)?;
        }
        Ok(())
    }

    /// FAST_READ of pages `start..=end` in one exchange.
    pub fn fast_read(&mut self, start: u8, end: u8) -> Result<Vec<u8>> {
        if start > end {
            return Err(Error::InvalidPageRange { start, end });
        }
        self.request(&Command::FastRead { start, end }, |raw| {
            decode_fast_read(raw, start, end)
        })
    }

    /// Read pages `0..count` one by one, for diagnostics.
    pub fn dump_pages(&mut self, count: u8) -> Result<Vec<PageData>> {
        (0..count).map(|page| self.read_page(page)).collect()
    }

    /// Resolve the selected tag's type from byte 2 of the capability
    /// container (page 3).
    pub fn determine_tag_geometry(&mut self) -> Result<(TagGeometry, TagType, Uid)> {
        let uid = self.ensure_selected()?.uid;
        let cc = self.read_page(CAPABILITY_CONTAINER_PAGE)?;
        let capability = cc.as_bytes()[CAPABILITY_SIZE_INDEX];
        let geometry = geometry_for(capability)?;
        let tag_type = TagType::from_capability(capability)
            .ok_or(Error::UnknownTagType { capability })?;
        debug!(
            "{} (capability {:#04x}): user pages {}..={}",
            tag_type,
            capability,
            geometry.user_memory_start(),
            geometry.user_memory_end()
        );
        self.geometry = Some(geometry);
        Ok((geometry, tag_type, uid))
    }

    /// PWD and PACK always read back as zeros, so they are never verified.
    fn is_credential_page(&self, page: u8) -> bool {
        self.geometry
            .is_some_and(|g| page == g.pwd() || page == g.pack())
    }

    pub(crate) fn write_page_data(&mut self, page: u8, data: PageData, verify: bool) -> Result<()> {
        let (cmd, code) = match self.config.write_mode {
            WriteMode::Compatibility => (
                Command::CompatibilityWrite { page, data },
                CommandCode::CompatibilityWrite,
            ),
            WriteMode::Native => (Command::Write { page, data }, CommandCode::Write),
        };
        let raw = self.exchange(&cmd)?;
        if let Err(e) = decode_write_ack(code, page, &raw) {
            warn!("{}", e);
            return Err(e);
        }

        if verify {
            let actual = self.read_page(page)?;
            if actual != data {
                return Err(Error::VerifyMismatch {
                    page,
                    expected: *data.as_bytes(),
                    actual: *actual.as_bytes(),
                });
            }
        }
        Ok(())
    }
}
