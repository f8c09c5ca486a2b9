// pn5180-rs/pn5180/src/protocol/responses/system.rs

use crate::card::{MemorySize, SystemInfo};
use crate::constants::*;
use crate::protocol::parser;
use crate::Result;

/// Decode a GetSystemInformation payload (after the flags byte)
/// Layout: info_flags(1) + uid(8) + dsfid(0|1) + afi(0|1) + memory(0|2) + ic_ref(0|1)
pub fn decode_system_info(payload: &[u8]) -> Result<SystemInfo> {
    const MIN_LEN: usize = 1 + 8;
    parser::ensure_len(payload, MIN_LEN)?;

    let info_flags = parser::byte_at(payload, 0)?;
    let uid = parser::uid_at(payload, 1)?;

    let mut pos = MIN_LEN;
    let dsfid = parser::optional_byte(payload, &mut pos, info_flags & ISO15693_INFO_DSFID != 0)?;
    let afi = parser::optional_byte(payload, &mut pos, info_flags & ISO15693_INFO_AFI != 0)?;
    let memory = if info_flags & ISO15693_INFO_MEMORY_SIZE != 0 {
        let raw = parser::slice_at(payload, pos, 2)?;
        pos += 2;
        Some(MemorySize::from_raw(raw[0], raw[1]))
    } else {
        None
    };
    let ic_reference =
        parser::optional_byte(payload, &mut pos, info_flags & ISO15693_INFO_IC_REFERENCE != 0)?;

    Ok(SystemInfo {
        uid,
        info_flags,
        dsfid,
        afi,
        memory,
        ic_reference,
    })
}
