// pn5180-rs/pn5180/src/protocol/commands/mod.rs

pub mod block;
pub mod inventory;
pub mod metadata;
pub mod state;

pub use block::{
    encode_lock_block, encode_read_multiple_blocks, encode_read_single_block,
    encode_write_multiple_blocks, encode_write_single_block,
};
pub use inventory::encode_inventory;
pub use metadata::{
    encode_get_multiple_block_security_status, encode_get_system_info, encode_lock_afi,
    encode_lock_dsfid, encode_write_afi, encode_write_dsfid,
};
pub use state::{encode_reset_to_ready, encode_select, encode_stay_quiet};

use crate::constants::*;
use crate::protocol::flags::RequestFlags;
use crate::types::{BlockData, Uid};
use crate::{Error, Result};

/// Start an addressed request: flags (0x22), command code, UID in wire order.
pub(crate) fn addressed(code: u8, uid: &Uid, extra: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + ISO15693_UID_LEN + extra);
    buf.push(RequestFlags::addressed().bits());
    buf.push(code);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Wire encoding of a block count: the field carries `count - 1`.
/// Callers validate the range first; out of range counts are clamped.
pub(crate) fn count_field(count: usize) -> u8 {
    (count.clamp(1, ISO15693_MAX_BLOCKS) - 1) as u8
}

/// High-level Command enum. New commands should be added here and
/// their encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Inventory {
        afi: Option<u8>,
    },
    StayQuiet {
        uid: Uid,
    },
    ReadSingleBlock {
        uid: Uid,
        block: u8,
    },
    WriteSingleBlock {
        uid: Uid,
        block: u8,
        data: BlockData,
    },
    LockBlock {
        uid: Uid,
        block: u8,
    },
    /// `count` is the number of blocks, 1..=256; the wire field carries
    /// `count - 1`.
    ReadMultipleBlocks {
        uid: Uid,
        first: u8,
        count: u16,
    },
    WriteMultipleBlocks {
        uid: Uid,
        first: u8,
        blocks: Vec<BlockData>,
    },
    Select {
        uid: Uid,
    },
    ResetToReady {
        uid: Uid,
    },
    WriteAfi {
        uid: Uid,
        afi: u8,
    },
    LockAfi {
        uid: Uid,
    },
    WriteDsfid {
        uid: Uid,
        dsfid: u8,
    },
    LockDsfid {
        uid: Uid,
    },
    GetSystemInfo {
        uid: Uid,
    },
    GetMultipleBlockSecurityStatus {
        uid: Uid,
        first: u8,
        count: u16,
    },
}

impl Command {
    /// Return the command code as defined by ISO 15693-3.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Inventory { .. } => ISO15693_CMD_INVENTORY,
            Self::StayQuiet { .. } => ISO15693_CMD_STAY_QUIET,
            Self::ReadSingleBlock { .. } => ISO15693_CMD_READ_SINGLE_BLOCK,
            Self::WriteSingleBlock { .. } => ISO15693_CMD_WRITE_SINGLE_BLOCK,
            Self::LockBlock { .. } => ISO15693_CMD_LOCK_BLOCK,
            Self::ReadMultipleBlocks { .. } => ISO15693_CMD_READ_MULTIPLE_BLOCKS,
            Self::WriteMultipleBlocks { .. } => ISO15693_CMD_WRITE_MULTIPLE_BLOCKS,
            Self::Select { .. } => ISO15693_CMD_SELECT,
            Self::ResetToReady { .. } => ISO15693_CMD_RESET_TO_READY,
            Self::WriteAfi { .. } => ISO15693_CMD_WRITE_AFI,
            Self::LockAfi { .. } => ISO15693_CMD_LOCK_AFI,
            Self::WriteDsfid { .. } => ISO15693_CMD_WRITE_DSFID,
            Self::LockDsfid { .. } => ISO15693_CMD_LOCK_DSFID,
            Self::GetSystemInfo { .. } => ISO15693_CMD_GET_SYSTEM_INFO,
            Self::GetMultipleBlockSecurityStatus { .. } => {
                ISO15693_CMD_GET_MULTIPLE_BLOCK_SECURITY_STATUS
            }
        }
    }

    /// Reject block counts the count field cannot carry.
    pub fn validate(&self) -> Result<()> {
        let count = match self {
            Self::ReadMultipleBlocks { count, .. }
            | Self::GetMultipleBlockSecurityStatus { count, .. } => *count as usize,
            Self::WriteMultipleBlocks { blocks, .. } => blocks.len(),
            _ => return Ok(()),
        };
        if count == 0 || count > ISO15693_MAX_BLOCKS {
            return Err(Error::InvalidBlockCount {
                count,
                max: ISO15693_MAX_BLOCKS,
            });
        }
        Ok(())
    }

    /// Encode the request frame (flags + command code + parameters).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Inventory { afi } => encode_inventory(*afi),
            Self::StayQuiet { uid } => encode_stay_quiet(uid),
            Self::ReadSingleBlock { uid, block } => encode_read_single_block(uid, *block),
            Self::WriteSingleBlock { uid, block, data } => {
                encode_write_single_block(uid, *block, data.as_bytes())
            }
            Self::LockBlock { uid, block } => encode_lock_block(uid, *block),
            Self::ReadMultipleBlocks { uid, first, count } => {
                encode_read_multiple_blocks(uid, *first, *count)
            }
            Self::WriteMultipleBlocks { uid, first, blocks } => {
                encode_write_multiple_blocks(uid, *first, &blocks[..])
            }
            Self::Select { uid } => encode_select(uid),
            Self::ResetToReady { uid } => encode_reset_to_ready(uid),
            Self::WriteAfi { uid, afi } => encode_write_afi(uid, *afi),
            Self::LockAfi { uid } => encode_lock_afi(uid),
            Self::WriteDsfid { uid, dsfid } => encode_write_dsfid(uid, *dsfid),
            Self::LockDsfid { uid } => encode_lock_dsfid(uid),
            Self::GetSystemInfo { uid } => encode_get_system_info(uid),
            Self::GetMultipleBlockSecurityStatus { uid, first, count } => {
                encode_get_multiple_block_security_status(uid, *first, *count)
            }
        }
    }
}
