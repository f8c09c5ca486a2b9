// pn5180-rs/pn5180/src/protocol/responses/block.rs

use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

/// Decode a ReadSingleBlock payload: exactly `block_size` bytes are kept,
/// trailing bytes are ignored.
pub fn decode_block(payload: &[u8], block_size: usize) -> Result<BlockData> {
    let data = parser::slice_at(payload, 0, block_size)?;
    Ok(BlockData::from_bytes(data))
}

/// Decode a ReadMultipleBlocks payload into `count` blocks of `block_size`.
pub fn decode_blocks(payload: &[u8], block_size: usize, count: usize) -> Result<Vec<BlockData>> {
    let needed = block_size.checked_mul(count).ok_or(Error::InvalidLength {
        expected: usize::MAX,
        actual: payload.len(),
    })?;
    parser::ensure_len(payload, needed)?;

    if block_size == 0 {
        return Ok(vec![BlockData::default(); count]);
    }
    Ok(payload[..needed]
        .chunks_exact(block_size)
        .map(BlockData::from_bytes)
        .collect())
}

/// Decode a GetMultipleBlockSecurityStatus payload: one status byte per block.
pub fn decode_security_status(payload: &[u8], count: usize) -> Result<Vec<u8>> {
    Ok(parser::slice_at(payload, 0, count)?.to_vec())
}
