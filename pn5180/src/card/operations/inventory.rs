// pn5180-rs/pn5180/src/card/operations/inventory.rs

use log::debug;

use crate::card::{InventoryTag, Iso15693};
use crate::device::Frontend;
use crate::protocol::{responses, Command};
use crate::{Error, Result};

/// Single-slot inventory: returns the DSFID and UID of the tag in the field.
pub fn inventory<F: Frontend>(reader: &mut Iso15693<F>) -> Result<InventoryTag> {
    let payload = reader.issue(&Command::Inventory { afi: None })?;
    let tag = responses::decode_inventory(&payload)?;
    debug!("inventory: dsfid={:#04x} uid={}", tag.dsfid, tag.uid);
    Ok(tag)
}

/// Inventory that reports an empty field as `None`.
pub fn detect<F: Frontend>(reader: &mut Iso15693<F>) -> Result<Option<InventoryTag>> {
    match inventory(reader) {
        Ok(tag) => Ok(Some(tag)),
        Err(Error::NoCardDetected) => Ok(None),
        Err(e) => Err(e),
    }
}
