// ntag21x/src/prelude.rs

pub use crate::auth::{AuthOutcome, AuthState, Credentials, ProtectionSettings};
pub use crate::config::{PollConfig, SessionConfig, WriteMode};
pub use crate::memory::{TagGeometry, geometry_for};
pub use crate::protocol::{Command, CommandCode, Response};
pub use crate::registers::{AccessConfig, MirrorConfig};
pub use crate::session::{SessionBuilder, TagSession};
pub use crate::transceiver::{MockTransceiver, Property, SimulatedTag, TargetInfo, Transceiver};
pub use crate::{Error, Pack, PageData, Password, Result, Signature, TagType, Uid, VersionInfo};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
