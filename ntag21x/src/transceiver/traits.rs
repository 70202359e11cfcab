// ntag21x/src/transceiver/traits.rs

use derive_more::Display;

use crate::types::Uid;
use crate::Result;

/// Reader properties the driver toggles. Values are passed to the reader
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Property {
    #[display(fmt = "EASY_FRAMING")]
    EasyFraming,
    #[display(fmt = "HANDLE_PARITY")]
    HandleParity,
    #[display(fmt = "ACTIVATE_CRYPTO1")]
    ActivateCrypto1,
    #[display(fmt = "INFINITE_SELECT")]
    InfiniteSelect,
    #[display(fmt = "AUTO_ISO14443_4")]
    AutoIso14443_4,
}

/// Target reported by a successful poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub uid: Uid,
    pub atqa: [u8; 2],
    pub sak: u8,
}

impl TargetInfo {
    /// ATQA/SAK every NTAG 21x answers with.
    pub fn ntag(uid: Uid) -> Self {
        Self {
            uid,
            atqa: [0x00, 0x44],
            sak: 0x00,
        }
    }
}

/// Transceiver abstracts the reader chip away from the tag protocol.
pub trait Transceiver {
    /// Acquire the underlying reader.
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release the underlying reader. The RF field drops, so any selected
    /// target and its authentication are gone.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Poll once for an ISO14443A target. `Ok(None)` means nothing
    /// answered within `timeout_ms`. Retrying is up to the caller.
    fn poll(&mut self, timeout_ms: u64) -> Result<Option<TargetInfo>>;

    /// Send one command frame and return the tag's response, at most
    /// `max_response_len` bytes.
    fn transceive(
        &mut self,
        request: &[u8],
        max_response_len: usize,
        timeout_ms: u64,
    ) -> Result<Vec<u8>>;

    /// Set a boolean reader property.
    fn set_property(&mut self, property: Property, enabled: bool) -> Result<()>;
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn poll(&mut self, timeout_ms: u64) -> Result<Option<TargetInfo>> {
        (**self).poll(timeout_ms)
    }

    fn transceive(
        &mut self,
        request: &[u8],
        max_response_len: usize,
        timeout_ms: u64,
    ) -> Result<Vec<u8>> {
        (**self).transceive(request, max_response_len, timeout_ms)
    }

    fn set_property(&mut self, property: Property, enabled: bool) -> Result<()> {
        (**self).set_property(property, enabled)
    }
}
