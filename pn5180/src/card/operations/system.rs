// pn5180-rs/pn5180/src/card/operations/system.rs

use log::debug;

use crate::card::{Iso15693, SystemInfo};
use crate::device::Frontend;
use crate::protocol::{responses, Command};
use crate::types::{RfConfig, Uid};
use crate::Result;

/// Load the ISO 15693 ASK100 profile, switch the field on and put the
/// transceiver into Transceive.
pub fn setup_rf<F: Frontend>(reader: &mut Iso15693<F>) -> Result<()> {
    debug!("setup rf for iso15693");
    let frontend = reader.frontend_mut();
    frontend.load_rf_config(RfConfig::ISO15693_ASK100_26)?;
    frontend.rf_on()?;
    frontend.arm_transceive()
}

pub fn get_system_info<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<SystemInfo> {
    let payload = reader.issue(&Command::GetSystemInfo { uid: *uid })?;
    let info = responses::decode_system_info(&payload)?;
    if let Some(memory) = info.memory {
        debug!(
            "system info: {} blocks of {} bytes ({} bytes)",
            memory.block_count,
            memory.block_size,
            memory.total_bytes()
        );
    }
    if let Some(family) = info.afi_family() {
        debug!("system info: afi family {}", family);
    }
    Ok(info)
}

pub fn write_afi<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid, afi: u8) -> Result<()> {
    reader.issue(&Command::WriteAfi { uid: *uid, afi })?;
    Ok(())
}

pub fn lock_afi<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<()> {
    reader.issue(&Command::LockAfi { uid: *uid })?;
    Ok(())
}

pub fn write_dsfid<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid, dsfid: u8) -> Result<()> {
    reader.issue(&Command::WriteDsfid { uid: *uid, dsfid })?;
    Ok(())
}

pub fn lock_dsfid<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<()> {
    reader.issue(&Command::LockDsfid { uid: *uid })?;
    Ok(())
}
