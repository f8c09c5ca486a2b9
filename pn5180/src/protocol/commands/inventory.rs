// pn5180-rs/pn5180/src/protocol/commands/inventory.rs

use crate::constants::ISO15693_CMD_INVENTORY;
use crate::protocol::flags::RequestFlags;

/// Encode a single-slot Inventory request with an empty mask.
///
/// When `afi` is given the AFI flag is set and only tags of that
/// application family answer.
pub fn encode_inventory(afi: Option<u8>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4);
    match afi {
        Some(afi) => {
            buf.push(RequestFlags::inventory().with(RequestFlags::AFI).bits());
            buf.push(ISO15693_CMD_INVENTORY);
            buf.push(afi);
        }
        None => {
            buf.push(RequestFlags::inventory().bits());
            buf.push(ISO15693_CMD_INVENTORY);
        }
    }
    buf.push(0x00); // mask length
    buf
}
