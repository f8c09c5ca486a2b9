// Tag responses and UIDs shared by the integration tests

use pn5180::test_support::{MockDevice, mock_reader};
use pn5180::{Iso15693, Uid};

/// UID as printed on the tag label (most significant byte first).
pub const SAMPLE_UID_LABEL: &str = "e0 04 01 50 21 6a 3b 8e";

pub fn sample_uid() -> Uid {
    let mut msb_first = [0u8; 8];
    msb_first.copy_from_slice(&bytes(SAMPLE_UID_LABEL));
    Uid::from_msb_first(msb_first)
}

/// Decode a spaced hex string such as `"00 01 02"`.
pub fn bytes(spaced: &str) -> Vec<u8> {
    hex::decode(spaced.replace(' ', "")).unwrap()
}

/// Inventory response: flags, DSFID, UID (LSB first).
pub fn inventory_response(dsfid: u8, uid: &Uid) -> Vec<u8> {
    let mut resp = vec![0x00, dsfid];
    resp.extend_from_slice(uid.as_bytes());
    resp
}

/// Get System Information response carrying DSFID, AFI and memory size
/// (8 blocks of 4 bytes).
pub fn system_info_response(uid: &Uid) -> Vec<u8> {
    let mut resp = vec![0x00, 0x07];
    resp.extend_from_slice(uid.as_bytes());
    resp.extend_from_slice(&bytes("01 00 07 03"));
    resp
}

pub fn error_response(code: u8) -> Vec<u8> {
    vec![0x01, code]
}

pub fn ok_response() -> Vec<u8> {
    vec![0x00]
}

pub fn reader(responses: Vec<Vec<u8>>) -> Iso15693<MockDevice> {
    super::init_logger();
    mock_reader(responses).unwrap()
}
