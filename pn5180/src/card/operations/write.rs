// pn5180-rs/pn5180/src/card/operations/write.rs

use log::debug;

use crate::card::Iso15693;
use crate::device::Frontend;
use crate::protocol::Command;
use crate::types::{BlockData, Uid};
use crate::Result;

/// Write one block. The tag answers with flags only; any error flag is
/// reported as a tag error.
pub fn write_single_block<F: Frontend>(
    reader: &mut Iso15693<F>,
    uid: &Uid,
    block: u8,
    data: &BlockData,
) -> Result<()> {
    debug!("write block {} ({} bytes)", block, data.len());
    reader.issue(&Command::WriteSingleBlock {
        uid: *uid,
        block,
        data: data.clone(),
    })?;
    Ok(())
}

/// Write consecutive blocks starting at `first` in one request.
pub fn write_multiple_blocks<F: Frontend>(
    reader: &mut Iso15693<F>,
    uid: &Uid,
    first: u8,
    blocks: &[BlockData],
) -> Result<()> {
    if blocks.is_empty() {
        return Ok(());
    }
    debug!("write {} blocks from {}", blocks.len(), first);
    reader.issue(&Command::WriteMultipleBlocks {
        uid: *uid,
        first,
        blocks: blocks.to_vec(),
    })?;
    Ok(())
}

/// Permanently lock one block.
pub fn lock_block<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid, block: u8) -> Result<()> {
    debug!("lock block {}", block);
    reader.issue(&Command::LockBlock { uid: *uid, block })?;
    Ok(())
}
