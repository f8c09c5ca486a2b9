// pn5180-rs/pn5180/src/card/operations/state.rs

use crate::card::Iso15693;
use crate::device::Frontend;
use crate::protocol::Command;
use crate::types::Uid;
use crate::{Error, Result};

/// Stay Quiet has no response: silence is the expected outcome.
pub fn stay_quiet<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<()> {
    match reader.issue(&Command::StayQuiet { uid: *uid }) {
        Ok(_) | Err(Error::NoCardDetected) => Ok(()),
        Err(e) => Err(e),
    }
}

pub fn select<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<()> {
    reader.issue(&Command::Select { uid: *uid })?;
    Ok(())
}

pub fn reset_to_ready<F: Frontend>(reader: &mut Iso15693<F>, uid: &Uid) -> Result<()> {
    reader.issue(&Command::ResetToReady { uid: *uid })?;
    Ok(())
}
