// pn5180-rs/pn5180/src/protocol/responses/inventory.rs

use crate::card::InventoryTag;
use crate::protocol::parser;
use crate::Result;

/// Decode an Inventory response payload (after the flags byte)
/// Layout: dsfid(1) + uid(8, LSB first)
pub fn decode_inventory(payload: &[u8]) -> Result<InventoryTag> {
    parser::ensure_len(payload, 1 + 8)?;
    let dsfid = parser::byte_at(payload, 0)?;
    let uid = parser::uid_at(payload, 1)?;
    Ok(InventoryTag { dsfid, uid })
}
