// ntag21x/src/session/mod.rs
//! Tag session: one reader, at most one selected NTAG 21x.
//!
//! A session is `Closed` until [`TagSession::open`], `Open` once the reader
//! is acquired, and `Selected` after a successful [`TagSession::discover`].
//! Page operations need a selected target; anything else fails with
//! [`Error::NotConnected`]. Closing drops the selection and the
//! authentication state, mirroring what the tag does when the field goes
//! away.

mod builder;
mod info;
mod pages;
mod registers;
mod security;

pub use builder::SessionBuilder;

use log::{debug, trace, warn};

use crate::auth::{AuthProtocol, AuthState};
use crate::config::SessionConfig;
use crate::constants::ACK;
use crate::memory::TagGeometry;
use crate::protocol::{Command, Response};
use crate::transceiver::{Property, TargetInfo, Transceiver};
use crate::types::Uid;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Properties applied once a target answers a poll.
const TARGET_SETUP: [(Property, bool); 4] = [
    (Property::ActivateCrypto1, true),
    (Property::InfiniteSelect, false),
    (Property::AutoIso14443_4, false),
    (Property::HandleParity, true),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connection {
    Closed,
    Open,
    Selected(TargetInfo),
}

/// Session over a [`Transceiver`].
#[derive(Debug)]
pub struct TagSession<T: Transceiver> {
    transceiver: T,
    config: SessionConfig,
    connection: Connection,
    auth: AuthProtocol,
    /// Last easy-framing value pushed to the reader, `None` when unknown
    easy_framing: Option<bool>,
    /// Geometry resolved for the selected target
    geometry: Option<TagGeometry>,
}

impl<T: Transceiver> TagSession<T> {
    /// Wrap a transceiver. The session starts closed.
    pub fn new(transceiver: T, config: SessionConfig) -> Self {
        Self {
            transceiver,
            config,
            connection: Connection::Closed,
            auth: AuthProtocol::new(),
            easy_framing: None,
            geometry: None,
        }
    }

    /// Acquire the reader. Opening an open session is a no-op.
    pub fn open(&mut self) -> Result<()> {
        if self.connection != Connection::Closed {
            return Ok(());
        }
        self.transceiver.open()?;
        self.connection = Connection::Open;
        debug!("session opened");
        Ok(())
    }

    /// Release the reader. Target selection and authentication are dropped
    /// even if the reader fails to close cleanly.
    pub fn close(&mut self) -> Result<()> {
        if self.connection == Connection::Closed {
            return Ok(());
        }
        self.forget_target();
        self.connection = Connection::Closed;
        debug!("session closed");
        self.transceiver.close()
    }

    /// Poll for a target and select it.
    ///
    /// Polls once, then up to `config.poll.retries` more times, each with
    /// `config.poll.timeout_ms`. Any
    /// previous selection and authentication is discarded first, because
    /// the tag itself starts over on re-selection.
    pub fn discover(&mut self) -> Result<Uid> {
        if self.connection == Connection::Closed {
            return Err(Error::NotConnected);
        }
        self.forget_target();
        self.connection = Connection::Open;

        let attempts = self.config.poll.retries.saturating_add(1);
        for attempt in 1..=attempts {
            trace!("poll attempt {}/{}", attempt, attempts);
            if let Some(target) = self.transceiver.poll(self.config.poll.timeout_ms)? {
                self.setup_target()?;
                self.connection = Connection::Selected(target);
                debug!("selected target uid={}", target.uid);
                return Ok(target.uid);
            }
        }
        debug!(
            "no target after {} poll(s), up to {:?}",
            attempts,
            self.config.poll.budget()
        );
        Err(Error::NoTarget { attempts })
    }

    /// Send a command and decode its response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        self.request(cmd, |raw| Response::decode(cmd, raw))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.connection != Connection::Closed
    }

    /// Target selected by the last successful `discover`.
    pub fn target(&self) -> Option<&TargetInfo> {
        match &self.connection {
            Connection::Selected(target) => Some(target),
            _ => None,
        }
    }

    pub fn uid(&self) -> Option<Uid> {
        self.target().map(|t| t.uid)
    }

    /// Geometry resolved by `determine_tag_geometry` for the current target.
    pub fn geometry(&self) -> Option<TagGeometry> {
        self.geometry
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth.state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn transceiver(&self) -> &T {
        &self.transceiver
    }

    pub fn transceiver_mut(&mut self) -> &mut T {
        &mut self.transceiver
    }

    /// Give the transceiver back without closing it.
    pub fn into_inner(self) -> T {
        self.transceiver
    }

    fn forget_target(&mut self) {
        self.auth.reset();
        self.easy_framing = None;
        self.geometry = None;
        if let Connection::Selected(_) = self.connection {
            self.connection = Connection::Open;
        }
    }

    fn setup_target(&mut self) -> Result<()> {
        for (property, enabled) in TARGET_SETUP {
            self.apply_property(property, enabled)?;
        }
        Ok(())
    }

    fn apply_property(&mut self, property: Property, enabled: bool) -> Result<()> {
        self.transceiver
            .set_property(property, enabled)
            .map_err(|e| {
                warn!("reader rejected {}={}: {}", property, enabled, e);
                Error::PropertyRejected { property, enabled }
            })
    }

    fn set_easy_framing(&mut self, enabled: bool) -> Result<()> {
        if self.easy_framing == Some(enabled) {
            return Ok(());
        }
        // the cached value is stale until the reader confirms
        self.easy_framing = None;
        self.apply_property(Property::EasyFraming, enabled)?;
        self.easy_framing = Some(enabled);
        Ok(())
    }

    pub(crate) fn ensure_selected(&self) -> Result<&TargetInfo> {
        self.target().ok_or(Error::NotConnected)
    }

    /// Frame `cmd`, switch framing as the opcode needs and run one
    /// transceive. Transceiver failures come back wrapped with the opcode
    /// and page.
    pub(crate) fn exchange(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.ensure_selected()?;
        let code = cmd.command_code();
        self.set_easy_framing(code.requires_easy_framing())?;

        let frame = cmd.encode();
        trace!("> {} {}", code, bytes_to_hex_spaced(&frame));
        let resp = self
            .transceiver
            .transceive(
                &frame,
                cmd.response_capacity(),
                self.config.transceive_timeout_ms,
            )
            .map_err(|e| Error::CommandFailed {
                command: code,
                page: cmd.page(),
                source: Box::new(e),
            })?;
        trace!("< {} {}", code, bytes_to_hex_spaced(&resp));
        Ok(resp)
    }

    /// [`exchange`](Self::exchange) followed by `decode`. A lone NAK nibble
    /// in place of a data response becomes [`Error::Nak`]; other decode
    /// failures are wrapped with the opcode and page.
    pub(crate) fn request<R>(
        &mut self,
        cmd: &Command,
        decode: impl FnOnce(&[u8]) -> Result<R>,
    ) -> Result<R> {
        let raw = self.exchange(cmd)?;
        let command = cmd.command_code();
        let page = cmd.page();
        if let &[code] = raw.as_slice() {
            if cmd.expected_response_len() > 1 && code & 0x0F != ACK {
                warn!("{} at page {} answered NAK {:#03x}", command, page, code);
                return Err(Error::Nak {
                    command,
                    page,
                    code: code & 0x0F,
                });
            }
        }
        decode(&raw).map_err(|e| match e {
            Error::Nak { .. } | Error::UnexpectedResponse { .. } => e,
            other => Error::CommandFailed {
                command,
                page,
                source: Box::new(other),
            },
        })
    }
}
