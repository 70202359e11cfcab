// ntag21x/src/session/builder.rs

use crate::config::SessionConfig;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::{Error, Result};

/// Helper to construct a TagSession with optional configuration.
pub struct SessionBuilder<T: Transceiver> {
    transceiver: Option<T>,
    config: SessionConfig,
}

impl<T: Transceiver> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transceiver> SessionBuilder<T> {
    pub fn new() -> Self {
        Self {
            transceiver: None,
            config: SessionConfig::default(),
        }
    }

    pub fn with_transceiver(mut self, transceiver: T) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Build and open the session. Fails with `NotConnected` when no
    /// transceiver was supplied.
    pub fn build(self) -> Result<TagSession<T>> {
        let mut session = self.build_closed()?;
        session.open()?;
        Ok(session)
    }

    /// Build without opening the reader.
    pub fn build_closed(self) -> Result<TagSession<T>> {
        match self.transceiver {
            Some(t) => Ok(TagSession::new(t, self.config)),
            None => Err(Error::NotConnected),
        }
    }
}
