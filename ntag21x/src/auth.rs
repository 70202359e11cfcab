// ntag21x/src/auth.rs
//! Password authentication state.
//!
//! The tag drops its authenticated state whenever the RF session ends, so
//! the host side mirrors it: any close or re-selection resets to
//! `Unauthenticated` and protected writes need a fresh `PWD_AUTH`.

use crate::constants::AUTH0_DISABLED;
use crate::registers::AccessConfig;
use crate::types::{Pack, Password};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Result of a PWD_AUTH exchange.
#[derive(Debug)]
pub enum AuthOutcome {
    /// The tag returned the expected PACK.
    Accepted,
    /// The tag answered, but not with the expected PACK (or with a NAK).
    AckMismatch { received: Vec<u8> },
    /// The exchange itself failed; a wrong password often shows up this way
    /// because the tag stays silent.
    NoResponse(Error),
}

impl AuthOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Host-side model of the tag's authentication state.
#[derive(Debug, Default)]
pub struct AuthProtocol {
    state: AuthState,
}

impl AuthProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Feed the result of a PWD_AUTH transceive and move to the next state.
    /// Only a byte-exact PACK match authenticates.
    pub fn complete(
        &mut self,
        expected: &Pack,
        response: crate::Result<Vec<u8>>,
    ) -> AuthOutcome {
        let outcome = match response {
            Ok(bytes) if bytes.as_slice() == expected.as_bytes() => AuthOutcome::Accepted,
            Ok(bytes) => AuthOutcome::AckMismatch { received: bytes },
            Err(e) => AuthOutcome::NoResponse(e),
        };
        self.state = if outcome.is_accepted() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        outcome
    }

    /// Connection closed or target re-selected.
    pub fn reset(&mut self) {
        self.state = AuthState::Unauthenticated;
    }
}

/// Password and the acknowledge the tag returns when it accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub password: Password,
    pub ack: Pack,
}

impl Credentials {
    pub fn new(password: [u8; 4], ack: [u8; 2]) -> Self {
        Self {
            password: Password::from_bytes(password),
            ack: Pack::from_bytes(ack),
        }
    }

    /// Factory default of every NTAG 21x: password FF FF FF FF, PACK 00 00.
    pub fn factory_default() -> Self {
        Self::new([0xFF; 4], [0x00; 2])
    }
}

/// Everything `set_password` writes to the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectionSettings {
    pub credentials: Credentials,
    /// AUTH0: first protected page. `0xFF` disables protection.
    pub auth_from_page: u8,
    pub access: AccessConfig,
}

impl ProtectionSettings {
    pub fn new(credentials: Credentials, auth_from_page: u8, access: AccessConfig) -> Self {
        Self {
            credentials,
            auth_from_page,
            access,
        }
    }

    /// Settings that leave every page unprotected.
    pub fn disabled(credentials: Credentials) -> Self {
        Self::new(credentials, AUTH0_DISABLED, AccessConfig::default())
    }

    pub fn is_protection_enabled(&self) -> bool {
        self.auth_from_page != AUTH0_DISABLED
    }
}
