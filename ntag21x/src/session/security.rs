// ntag21x/src/session/security.rs

use log::{debug, warn};

use crate::auth::{AuthOutcome, Credentials, ProtectionSettings};
use crate::memory::TagGeometry;
use crate::protocol::Command;
use crate::registers::with_auth0;
use crate::session::TagSession;
use crate::transceiver::Transceiver;
use crate::types::{Pack, PageData, Password};
use crate::Result;

impl<T: Transceiver> TagSession<T> {
    /// PWD_AUTH with `password`; `Ok(true)` iff the tag answers with exactly
    /// `expected_ack`.
    ///
    /// A wrong password and a failed exchange both give `Ok(false)`; use
    /// [`try_authenticate`](Self::try_authenticate) to tell them apart. Only
    /// a missing target is an error.
    pub fn authenticate(&mut self, password: &Password, expected_ack: &Pack) -> Result<bool> {
        let outcome = self.try_authenticate(password, expected_ack)?;
        Ok(outcome.is_accepted())
    }

    pub fn try_authenticate(
        &mut self,
        password: &Password,
        expected_ack: &Pack,
    ) -> Result<AuthOutcome> {
        self.ensure_selected()?;
        let response = self.exchange(&Command::PwdAuth {
            password: *password,
        });
        let outcome = self.auth.complete(expected_ack, response);
        match &outcome {
            AuthOutcome::Accepted => debug!("authenticated"),
            AuthOutcome::AckMismatch { received } => {
                warn!("PWD_AUTH: unexpected ack {:02x?}", received)
            }
            AuthOutcome::NoResponse(e) => warn!("PWD_AUTH: {}", e),
        }
        Ok(outcome)
    }

    /// Store credentials and protection settings.
    ///
    /// Pages go out in the order PACK, PWD, cfg1, cfg0 so that AUTH0 only
    /// gates pages once a password is in place. cfg0 is read first and
    /// only its AUTH0 byte is replaced, keeping the mirror settings. The
    /// access byte is validated before anything is written.
    pub fn set_password(
        &mut self,
        geometry: &TagGeometry,
        settings: &ProtectionSettings,
    ) -> Result<()> {
        let access_page = settings.access.to_page()?;
        self.ensure_selected()?;

        let ack = settings.credentials.ack.as_bytes();
        let pack_page = PageData::from_bytes([ack[0], ack[1], 0x00, 0x00]);
        let pwd_page = PageData::from_bytes(*settings.credentials.password.as_bytes());
        let verify = self.config.verify_writes;

        self.write_page_data(geometry.pack(), pack_page, false)?;
        self.write_page_data(geometry.pwd(), pwd_page, false)?;
        self.write_page_data(geometry.cfg1(), access_page, verify)?;

        let cfg0 = self.read_page(geometry.cfg0())?;
        let cfg0 = with_auth0(&cfg0, settings.auth_from_page);
        self.write_page_data(geometry.cfg0(), cfg0, verify)?;

        debug!(
            "protection set: auth0={:#04x} access={:?}",
            settings.auth_from_page, settings.access
        );
        Ok(())
    }

    /// Rewrite the credentials with AUTH0 = 0xFF and a default access byte.
    /// The session must already be authenticated if the tag is protected.
    pub fn clear_password(&mut self, geometry: &TagGeometry, credentials: Credentials) -> Result<()> {
        self.set_password(geometry, &ProtectionSettings::disabled(credentials))
    }
}
