// pn5180-rs/pn5180/src/protocol/responses/mod.rs

pub mod block;
pub mod inventory;
pub mod system;

pub use block::{decode_block, decode_blocks, decode_security_status};
pub use inventory::decode_inventory;
pub use system::decode_system_info;

use log::debug;

use crate::constants::{ISO15693_RESP_ERROR, ISO15693_RESP_EXTENSION};
use crate::error::TagError;
use crate::protocol::parser;
use crate::Result;

/// Check the response flags byte and return the payload that follows it.
///
/// A set error flag turns the next byte into a [`TagError`].
pub fn decode_status(frame: &[u8]) -> Result<&[u8]> {
    let flags = parser::byte_at(frame, 0)?;
    if flags & ISO15693_RESP_ERROR != 0 {
        let code = parser::byte_at(frame, 1)?;
        let err = TagError::from_code(code);
        debug!("tag error {:#04x}: {}", code, err);
        return Err(err.into());
    }
    if flags & ISO15693_RESP_EXTENSION != 0 {
        debug!("response extension flag set");
    }
    Ok(&frame[1..])
}
