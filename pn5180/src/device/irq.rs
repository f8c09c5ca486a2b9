// pn5180-rs/pn5180/src/device/irq.rs
//! IRQ status, transceive state and the reset sequence

use std::time::Duration;

use log::{debug, warn};

use crate::constants::*;
use crate::device::handle::{Initialized, Pn5180};
use crate::transport::{Bus, Clock};
use crate::types::{IrqStatus, TransceiveState};
use crate::utils::Deadline;
use crate::{Error, Result};

impl<B: Bus, C: Clock, State> Pn5180<B, C, State> {
    /// Hard reset, wait for IDLE, clear all flags.
    pub(super) fn reset_sequence(&mut self) -> Result<()> {
        debug!("pn5180: hard reset");
        self.host.hard_reset()?;
        let timeout = self.host.config().irq_timeout;
        self.poll_irq(IRQ_IDLE, timeout)?;
        self.raw_write_register(CMD_WRITE_REGISTER, REG_IRQ_CLEAR, IRQ_ALL)?;
        debug!("pn5180: idle");
        Ok(())
    }

    pub(super) fn poll_irq(&mut self, mask: u32, timeout: Duration) -> Result<IrqStatus> {
        let deadline = Deadline::after(self.host.clock(), timeout);
        let poll = self.host.config().poll_interval;
        loop {
            let status = IrqStatus::new(self.raw_read_register(REG_IRQ_STATUS)?);
            if status.intersects(mask) {
                return Ok(status);
            }
            if deadline.is_expired(self.host.clock()) {
                warn!("irq timeout waiting for {:#010x}, status {:?}", mask, status);
                return Err(Error::IrqTimeout { mask, timeout });
            }
            self.host.delay(poll);
        }
    }
}

impl<B: Bus, C: Clock> Pn5180<B, C, Initialized> {
    pub fn irq_status(&mut self) -> Result<IrqStatus> {
        self.read_register(REG_IRQ_STATUS).map(IrqStatus::new)
    }

    /// Clear the IRQ flags set in `mask`; other flags are left untouched.
    pub fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        self.write_register(REG_IRQ_CLEAR, mask)
    }

    pub fn transceive_state(&mut self) -> Result<TransceiveState> {
        self.read_register(REG_RF_STATUS)
            .map(TransceiveState::from_rf_status)
    }

    /// Poll until any bit of `mask` is set or `timeout` elapses.
    pub fn wait_for_irq(&mut self, mask: u32, timeout: Duration) -> Result<IrqStatus> {
        self.poll_irq(mask, timeout)
    }
}
