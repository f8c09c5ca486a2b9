// pn5180-rs/pn5180/src/protocol/parser.rs

use crate::constants::ISO15693_UID_LEN;
use crate::types::Uid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a wire-order UID (8 bytes) at `start` index with bounds checking.
pub fn uid_at(data: &[u8], start: usize) -> Result<Uid> {
    let s = slice_at(data, start, ISO15693_UID_LEN)?;
    Uid::try_from(s)
}

/// Byte at `*pos` if `present`, advancing the cursor.
pub fn optional_byte(data: &[u8], pos: &mut usize, present: bool) -> Result<Option<u8>> {
    if !present {
        return Ok(None);
    }
    let b = byte_at(data, *pos)?;
    *pos += 1;
    Ok(Some(b))
}
