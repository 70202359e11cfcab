// ntag21x/src/protocol/commands/info.rs

use crate::constants::{OPCODE_GET_VERSION, OPCODE_READ_CNT, OPCODE_READ_SIG, SIGNATURE_ADDRESS};

pub fn encode_get_version() -> Vec<u8> {
    vec![OPCODE_GET_VERSION]
}

pub fn encode_read_cnt(counter: u8) -> Vec<u8> {
    vec![OPCODE_READ_CNT, counter]
}

pub fn encode_read_sig() -> Vec<u8> {
    vec![OPCODE_READ_SIG, SIGNATURE_ADDRESS]
}
