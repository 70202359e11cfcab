// ntag21x/src/protocol/commands/auth.rs

use crate::constants::{OPCODE_PWD_AUTH, PASSWORD_LEN};
use crate::types::Password;

/// Encode PWD_AUTH (0x1B). Layout: opcode(1) + password(4)
pub fn encode_pwd_auth(password: &Password) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + PASSWORD_LEN);
    buf.push(OPCODE_PWD_AUTH);
    buf.extend_from_slice(password.as_bytes());
    buf
}
