// ntag21x/src/transceiver/simulated.rs
//! A stateful NTAG 21x living behind a fake reader.
//!
//! Unlike [`MockTransceiver`](crate::transceiver::MockTransceiver), which
//! replays scripted bytes, `SimulatedTag` keeps a page image and answers
//! commands the way the tag does: READ returns four pages with rollover,
//! writes are ACKed or NAKed, AUTH0/PROT gate access, PWD/PACK read back as
//! zeros, and authentication is lost when the field drops. CFGLCK, like on
//! the real tag, only takes hold at the next selection.

use crate::constants::*;
use crate::memory::TagGeometry;
use crate::transceiver::traits::{Property, TargetInfo, Transceiver};
use crate::types::{TagType, Uid, VersionInfo};
use crate::{Error, Result};

const NAK: u8 = 0x00;
const CFGLCK: u8 = 1 << 6;
const PROT: u8 = 1 << 7;
const NFC_CNT_PWD_PROT: u8 = 1 << 3;
const AUTHLIM_MASK: u8 = 0b111;

#[derive(Debug)]
pub struct SimulatedTag {
    tag_type: TagType,
    uid: Uid,
    pages: Vec<[u8; PAGE_SIZE]>,
    counter: u32,
    signature: [u8; SIGNATURE_LEN],
    open: bool,
    present: bool,
    selected: bool,
    authenticated: bool,
    easy_framing: bool,
    failed_auth_attempts: u8,
    /// CFGLCK as latched at the last selection
    config_locked: bool,
    pending_failure: Option<Error>,
    /// Every frame received, in order
    pub sent: Vec<Vec<u8>>,
    /// Page addresses that were actually written, in order
    pub writes: Vec<u8>,
}

impl SimulatedTag {
    /// Factory-fresh tag: empty user memory, mirror off, AUTH0 = 0xFF,
    /// password FF FF FF FF, PACK 00 00.
    pub fn new(tag_type: TagType, uid: Uid) -> Self {
        let geometry = tag_type.geometry();
        let u = uid.as_bytes();
        let mut pages = vec![[0u8; PAGE_SIZE]; tag_type.total_pages()];

        let bcc0 = 0x88 ^ u[0] ^ u[1] ^ u[2];
        let bcc1 = u[3] ^ u[4] ^ u[5] ^ u[6];
        pages[0] = [u[0], u[1], u[2], bcc0];
        pages[1] = [u[3], u[4], u[5], u[6]];
        pages[2] = [bcc1, 0x48, 0x00, 0x00];
        pages[CAPABILITY_CONTAINER_PAGE as usize] = [0xE1, 0x10, tag_type.capability(), 0x00];
        pages[geometry.cfg0() as usize] = [0x04, 0x00, 0x00, AUTH0_DISABLED];
        pages[geometry.cfg1() as usize] = [0x00; PAGE_SIZE];
        pages[geometry.pwd() as usize] = [0xFF; PAGE_SIZE];
        pages[geometry.pack() as usize] = [0x00; PAGE_SIZE];

        Self {
            tag_type,
            uid,
            pages,
            counter: 0,
            signature: [0x5A; SIGNATURE_LEN],
            open: true,
            present: true,
            selected: false,
            authenticated: false,
            easy_framing: false,
            failed_auth_attempts: 0,
            config_locked: false,
            pending_failure: None,
            sent: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// Tag with an arbitrary capability byte in its capability container.
    pub fn with_capability(tag_type: TagType, uid: Uid, capability: u8) -> Self {
        let mut tag = Self::new(tag_type, uid);
        tag.pages[CAPABILITY_CONTAINER_PAGE as usize][CAPABILITY_SIZE_INDEX] = capability;
        tag
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn geometry(&self) -> TagGeometry {
        self.tag_type.geometry()
    }

    /// Raw page image, PWD/PACK included.
    pub fn page(&self, page: u8) -> [u8; PAGE_SIZE] {
        self.pages[page as usize]
    }

    /// Seed a page directly, bypassing every access check.
    pub fn set_page(&mut self, page: u8, data: [u8; PAGE_SIZE]) {
        self.pages[page as usize] = data;
    }

    /// Take the tag out of (or put it back into) the field.
    pub fn set_present(&mut self, present: bool) {
        self.present = present;
        if !present {
            self.deselect();
        }
    }

    pub fn set_counter(&mut self, value: u32) {
        self.counter = value & 0x00FF_FFFF;
    }

    pub fn set_signature(&mut self, signature: [u8; SIGNATURE_LEN]) {
        self.signature = signature;
    }

    /// The next transceive fails with `err` before reaching the tag.
    pub fn fail_next_transceive(&mut self, err: Error) {
        self.pending_failure = Some(err);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// True once a selection has latched the CFGLCK bit.
    pub fn is_config_locked(&self) -> bool {
        self.config_locked
    }

    pub fn easy_framing(&self) -> bool {
        self.easy_framing
    }

    pub fn transceive_count(&self) -> usize {
        self.sent.len()
    }

    pub fn version(&self) -> VersionInfo {
        VersionInfo {
            vendor_id: VersionInfo::VENDOR_NXP,
            product_type: VersionInfo::PRODUCT_TYPE_NTAG,
            product_subtype: 0x02,
            major_version: 0x01,
            minor_version: 0x00,
            storage_size: self.tag_type.storage_size(),
            protocol_type: 0x03,
        }
    }

    fn deselect(&mut self) {
        self.selected = false;
        self.authenticated = false;
    }

    fn total_pages(&self) -> usize {
        self.pages.len()
    }

    fn auth0(&self) -> u8 {
        self.pages[self.geometry().cfg0() as usize][3]
    }

    fn access(&self) -> u8 {
        self.pages[self.geometry().cfg1() as usize][0]
    }

    fn write_protected(&self, page: u8) -> bool {
        page >= self.auth0() && !self.authenticated
    }

    fn read_protected(&self, page: u8) -> bool {
        self.write_protected(page) && self.access() & PROT != 0
    }

    /// Page content as the tag reports it on READ.
    fn read_image(&self, page: u8) -> [u8; PAGE_SIZE] {
        let g = self.geometry();
        if page == g.pwd() || page == g.pack() || self.read_protected(page) {
            [0u8; PAGE_SIZE]
        } else {
            self.pages[page as usize]
        }
    }

    fn read(&self, page: u8) -> Vec<u8> {
        if page as usize >= self.total_pages() || self.read_protected(page) {
            return vec![NAK];
        }
        let mut out = Vec::with_capacity(READ_RESPONSE_LEN);
        for i in 0..READ_RESPONSE_LEN / PAGE_SIZE {
            let p = (page as usize + i) % self.total_pages();
            out.extend_from_slice(&self.read_image(p as u8));
        }
        out
    }

    fn fast_read(&self, start: u8, end: u8) -> Vec<u8> {
        if start > end || end as usize >= self.total_pages() {
            return vec![NAK];
        }
        if (start..=end).any(|p| self.read_protected(p)) {
            return vec![NAK];
        }
        (start..=end).flat_map(|p| self.read_image(p)).collect()
    }

    fn write(&mut self, page: u8, data: &[u8]) -> Vec<u8> {
        let g = self.geometry();
        if page < CAPABILITY_CONTAINER_PAGE || page as usize >= self.total_pages() {
            return vec![NAK];
        }
        if self.write_protected(page) {
            return vec![NAK];
        }
        if self.config_locked && (page == g.cfg0() || page == g.cfg1()) {
            return vec![NAK];
        }

        let mut incoming = [0u8; PAGE_SIZE];
        incoming.copy_from_slice(&data[..PAGE_SIZE]);
        let slot = &mut self.pages[page as usize];
        if page == CAPABILITY_CONTAINER_PAGE {
            // one-time programmable: bits can only be set
            for (dst, src) in slot.iter_mut().zip(incoming) {
                *dst |= src;
            }
        } else {
            *slot = incoming;
        }
        self.writes.push(page);
        vec![ACK]
    }

    fn pwd_auth(&mut self, password: &[u8]) -> Vec<u8> {
        let g = self.geometry();
        let limit = self.access() & AUTHLIM_MASK;
        if limit != 0 && self.failed_auth_attempts >= limit {
            return vec![NAK];
        }
        if password == self.pages[g.pwd() as usize] {
            self.authenticated = true;
            self.failed_auth_attempts = 0;
            self.pages[g.pack() as usize][..PACK_LEN].to_vec()
        } else {
            self.authenticated = false;
            self.failed_auth_attempts = self.failed_auth_attempts.saturating_add(1);
            vec![NAK]
        }
    }

    fn read_cnt(&self, address: u8) -> Vec<u8> {
        if address != NFC_COUNTER_ADDRESS {
            return vec![NAK];
        }
        if self.access() & NFC_CNT_PWD_PROT != 0 && !self.authenticated {
            return vec![NAK];
        }
        self.counter.to_le_bytes()[..COUNTER_RESPONSE_LEN].to_vec()
    }

    fn dispatch(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        let Some(&opcode) = request.first() else {
            return Ok(vec![NAK]);
        };

        if opcode == OPCODE_PWD_AUTH {
            if self.easy_framing {
                return Err(Error::Transport("PWD_AUTH sent with easy framing".into()));
            }
            return Ok(match request.get(1..1 + PASSWORD_LEN) {
                Some(pwd) if request.len() == 1 + PASSWORD_LEN => self.pwd_auth(pwd),
                _ => vec![NAK],
            });
        }

        if !self.easy_framing {
            return Err(Error::Transport(format!(
                "{:#04x} sent without easy framing",
                opcode
            )));
        }

        let resp = match (opcode, request.len()) {
            (OPCODE_READ, 2) => self.read(request[1]),
            (OPCODE_FAST_READ, 3) => self.fast_read(request[1], request[2]),
            (OPCODE_WRITE, WRITE_FRAME_LEN) => self.write(request[1], &request[2..]),
            (OPCODE_COMPATIBILITY_WRITE, COMPATIBILITY_WRITE_FRAME_LEN) => {
                self.write(request[1], &request[2..])
            }
            (OPCODE_GET_VERSION, 1) => self.version().to_bytes().to_vec(),
            (OPCODE_READ_CNT, 2) => self.read_cnt(request[1]),
            (OPCODE_READ_SIG, 2) if request[1] == SIGNATURE_ADDRESS => self.signature.to_vec(),
            _ => vec![NAK],
        };
        Ok(resp)
    }
}

impl Transceiver for SimulatedTag {
    fn open(&mut self) -> Result<()> {
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.open = false;
        self.easy_framing = false;
        self.deselect();
        Ok(())
    }

    fn poll(&mut self, _timeout_ms: u64) -> Result<Option<TargetInfo>> {
        if !self.open {
            return Err(Error::Transport("reader closed".into()));
        }
        if !self.present {
            return Ok(None);
        }
        // REQA/SELECT puts the tag back into a fresh, unauthenticated state
        self.selected = true;
        self.authenticated = false;
        self.config_locked |= self.access() & CFGLCK != 0;
        Ok(Some(TargetInfo::ntag(self.uid)))
    }

    fn transceive(
        &mut self,
        request: &[u8],
        max_response_len: usize,
        _timeout_ms: u64,
    ) -> Result<Vec<u8>> {
        if !self.open {
            return Err(Error::Transport("reader closed".into()));
        }
        self.sent.push(request.to_vec());
        if let Some(err) = self.pending_failure.take() {
            return Err(err);
        }
        if !self.selected {
            return Err(Error::Timeout);
        }
        let mut resp = self.dispatch(request)?;
        resp.truncate(max_response_len);
        Ok(resp)
    }

    fn set_property(&mut self, property: Property, enabled: bool) -> Result<()> {
        if !self.open {
            return Err(Error::Transport("reader closed".into()));
        }
        if property == Property::EasyFraming {
            self.easy_framing = enabled;
        }
        Ok(())
    }
}
