// pn5180-rs/pn5180/src/protocol/commands/state.rs

use crate::constants::*;
use crate::protocol::commands::addressed;
use crate::types::Uid;

/// Encode StayQuiet (0x02). The tag never answers this request.
pub fn encode_stay_quiet(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_STAY_QUIET, uid, 0)
}

/// Encode Select (0x25)
pub fn encode_select(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_SELECT, uid, 0)
}

/// Encode ResetToReady (0x26)
pub fn encode_reset_to_ready(uid: &Uid) -> Vec<u8> {
    addressed(ISO15693_CMD_RESET_TO_READY, uid, 0)
}
