#[path = "../common/mod.rs"]
mod common;

use ntag21x::protocol::{Command, CommandCode, encode_pwd_auth, encode_read, encode_write};
use ntag21x::types::{PageData, Password};
use ntag21x::Error;

#[test]
fn read_frame_is_two_bytes() {
    assert_eq!(encode_read(0x27), vec![0x30, 0x27]);
}

#[test]
fn write_frame_is_eighteen_bytes_zero_padded() {
    let frame = encode_write(4, &[0xAA, 0xBB, 0xCC]).unwrap();
    assert_eq!(frame.len(), 18);
    assert_eq!(&frame[..6], &[0xA0, 0x04, 0xAA, 0xBB, 0xCC, 0x00]);
    assert!(frame[6..].iter().all(|&b| b == 0));
}

#[test]
fn write_rejects_five_bytes() {
    assert!(matches!(
        encode_write(4, &[0; 5]),
        Err(Error::PageDataTooLong { page: 4, len: 5 })
    ));
}

#[test]
fn pwd_auth_frame() {
    let creds = common::fixtures::sample_credentials();
    assert_eq!(
        encode_pwd_auth(&creds.password),
        vec![0x1B, 0x12, 0x34, 0x56, 0x78]
    );
    let cmd = Command::PwdAuth {
        password: Password::from_bytes([0xFF; 4]),
    };
    assert_eq!(cmd.command_code(), CommandCode::PwdAuth);
    assert!(!cmd.command_code().requires_easy_framing());
    assert_eq!(cmd.response_capacity(), 2);
}

#[test]
fn native_write_and_info_frames() {
    let data = PageData::from_bytes([1, 2, 3, 4]);
    assert_eq!(
        Command::Write { page: 5, data }.encode(),
        vec![0xA2, 0x05, 1, 2, 3, 4]
    );
    assert_eq!(Command::GetVersion.encode(), vec![0x60]);
    assert_eq!(Command::ReadCnt { counter: 2 }.encode(), vec![0x39, 0x02]);
    assert_eq!(Command::ReadSig.encode(), vec![0x3C, 0x00]);
    assert_eq!(
        Command::FastRead { start: 4, end: 0x27 }.encode(),
        vec![0x3A, 0x04, 0x27]
    );
}
