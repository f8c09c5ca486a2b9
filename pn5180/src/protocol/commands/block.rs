// pn5180-rs/pn5180/src/protocol/commands/block.rs

use crate::constants::*;
use crate::protocol::commands::{addressed, count_field};
use crate::types::{BlockData, Uid};

/// Encode ReadSingleBlock (0x20)
pub fn encode_read_single_block(uid: &Uid, block: u8) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_READ_SINGLE_BLOCK, uid, 1);
    buf.push(block);
    buf
}

/// Encode WriteSingleBlock (0x21). `data` must be exactly one block long.
pub fn encode_write_single_block(uid: &Uid, block: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_WRITE_SINGLE_BLOCK, uid, 1 + data.len());
    buf.push(block);
    buf.extend_from_slice(data);
    buf
}

/// Encode LockBlock (0x22)
pub fn encode_lock_block(uid: &Uid, block: u8) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_LOCK_BLOCK, uid, 1);
    buf.push(block);
    buf
}

/// Encode ReadMultipleBlocks (0x23). `count` blocks starting at `first`.
pub fn encode_read_multiple_blocks(uid: &Uid, first: u8, count: u16) -> Vec<u8> {
    let mut buf = addressed(ISO15693_CMD_READ_MULTIPLE_BLOCKS, uid, 2);
    buf.push(first);
    buf.push(count_field(count as usize));
    buf
}

/// Encode WriteMultipleBlocks (0x24). Blocks are concatenated in order.
pub fn encode_write_multiple_blocks(uid: &Uid, first: u8, blocks: &[BlockData]) -> Vec<u8> {
    let data_len: usize = blocks.iter().map(BlockData::len).sum();
    let mut buf = addressed(ISO15693_CMD_WRITE_MULTIPLE_BLOCKS, uid, 2 + data_len);
    buf.push(first);
    buf.push(count_field(blocks.len()));
    for block in blocks {
        buf.extend_from_slice(block.as_bytes());
    }
    buf
}
