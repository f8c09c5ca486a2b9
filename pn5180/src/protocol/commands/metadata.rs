// pn5180-rs/pn5180/src/protocol/commands/metadata.rs

use crate::constants::*;
use crate::protocol::commands::{addressed, count_field};
use crate::types::Uid;

/// Encode GetSystemInformation (0x2B)
pub fn encode_get_system_info(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_GET_SYSTEM_INFO, uid, 0)
}

/// Encode WriteAFI (0x27)
pub fn encode_write_afi(uid: &Uid, afi: u8) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_WRITE_AFI, uid, 1);
    buf.push(afi);
    buf
}

/// Encode LockAFI (0x28)
pub fn encode_lock_afi(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_LOCK_AFI, uid, 0)
}

/// Encode WriteDSFID (0x29)
pub fn encode_write_dsfid(uid: &Uid, dsfid: u8) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_WRITE_DSFID, uid, 1);
    buf.push(dsfid);
    buf
}

/// Encode LockDSFID (0x2A)
pub fn encode_lock_dsfid(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_LOCK_DSFID, uid, 0)
}

/// Encode GetMultipleBlockSecurityStatus (0x2C) for `count` blocks.
pub fn encode_get_multiple_block_security_status(uid: &Uid, first: u8, count: u16) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_GET_MULTIPLE_BLOCK_SECURITY_STATUS, uid, 2);
    buf.push(first);
    buf.push(count_field(count as usize));
    buf
}
