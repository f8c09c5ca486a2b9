// pn5180-rs/pn5180/src/card/operations/read.rs

use crate::card::Iso15693;
use crate::device::Frontend;
use crate::protocol::{responses, Command};
use crate::types::{BlockData, Uid};
use crate::Result;

/// Read one block of `block_size` bytes.
pub fn read_single_block<F: Frontend>(
    reader: &mut Iso15693<F>,
    uid: &Uid,
    block: u8,
    block_size: usize,
) -> Result<BlockData> {
    let payload = reader.issue(&Command::ReadSingleBlock { uid: *uid, block })?;
    responses::decode_block(&payload, block_size)
}

/// Read `count` consecutive blocks starting at `first`.
pub fn read_multiple_blocks<F: Frontend>(
    reader: &mut Iso15693<F>,
    uid: &Uid,
    first: u8,
    count: u16,
    block_size: usize,
) -> Result<Vec<BlockData>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let payload = reader.issue(&Command::ReadMultipleBlocks {
        uid: *uid,
        first,
        count,
    })?;
    responses::decode_blocks(&payload, block_size, count as usize)
}

/// Lock status of `count` blocks starting at `first`, one byte per block
/// (bit 0 set = locked).
pub fn get_multiple_block_security_status<F: Frontend>(
    reader: &mut Iso15693<F>,
    uid: &Uid,
    first: u8,
    count: u16,
) -> Result<Vec<u8>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let payload = reader.issue(&Command::GetMultipleBlockSecurityStatus {
        uid: *uid,
        first,
        count,
    })?;
    responses::decode_security_status(&payload, count as usize)
}
