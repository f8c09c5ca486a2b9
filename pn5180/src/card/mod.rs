// pn5180-rs/pn5180/src/card/mod.rs
//! ISO 15693 reader on top of a [`Frontend`]

use std::time::Duration;

use log::{debug, trace};

use crate::constants::*;
use crate::device::Frontend;
use crate::protocol::{responses, Command};
use crate::types::{BlockData, Uid};
use crate::{Error, Result};

mod info;
pub use info::{AfiFamily, InventoryTag, MemorySize, SystemInfo};

pub mod operations;

/// Settle time between starting a transmission and checking for a reply.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(10);

/// ISO 15693 reader. Owns a frontend, or borrows one when built from
/// `&mut F`.
pub struct Iso15693<F> {
    frontend: F,
    response_delay: Duration,
}

impl<F: Frontend> Iso15693<F> {
    pub fn new(frontend: F) -> Self {
        Self {
            frontend,
            response_delay: DEFAULT_RESPONSE_DELAY,
        }
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn into_inner(self) -> F {
        self.frontend
    }

    /// Transmit `command`, wait for the tag and return the response payload
    /// (the bytes after the flags byte).
    ///
    /// Commands with a block count outside 1..=256 are rejected before
    /// anything is sent. `NoCardDetected` is returned when no start of frame was seen, either
    /// before or after reading the receive buffer.
    pub fn issue(&mut self, command: &Command) -> Result<Vec<u8>> {
        command.validate()?;
        let frame = command.encode();
        debug!("issue command {:#04x}", command.command_code());

        self.frontend.send_data(&frame, 0)?;
        self.frontend.delay(self.response_delay);

        if !self.frontend.irq_status()?.contains(IRQ_RX_SOF_DET) {
            return Err(Error::NoCardDetected);
        }

        let rx_status = self.frontend.read_register(REG_RX_STATUS)?;
        let len = (rx_status & RX_STATUS_LEN_MASK) as usize;
        trace!("rx status {:#010x}, len={}", rx_status, len);
        if len > MAX_READ_DATA_LEN {
            return Err(Error::ResponseTooLong {
                len,
                max: MAX_READ_DATA_LEN,
            });
        }
        let response = self.frontend.read_data(len)?;

        #[cfg(feature = "diagnostics")]
        trace!("rf << {}", crate::utils::bytes_to_hex_spaced(&response));

        if !self.frontend.irq_status()?.contains(IRQ_RX_SOF_DET) {
            self.frontend.clear_irq_status(IRQ_TX | IRQ_IDLE)?;
            return Err(Error::NoCardDetected);
        }

        let payload = responses::decode_status(&response)?.to_vec();
        self.frontend
            .clear_irq_status(IRQ_RX_SOF_DET | IRQ_IDLE | IRQ_TX | IRQ_RX)?;
        Ok(payload)
    }

    /// Load the ISO 15693 RF profile, switch the field on and arm the
    /// transceiver.
    pub fn setup_rf(&mut self) -> Result<()> {
        operations::setup_rf(self)
    }

    /// Switch the RF field off.
    pub fn rf_off(&mut self) -> Result<()> {
        self.frontend.rf_off()
    }

    pub fn inventory(&mut self) -> Result<InventoryTag> {
        operations::inventory(self)
    }

    /// Like [`inventory`](Self::inventory) but an empty field is `Ok(None)`.
    pub fn detect(&mut self) -> Result<Option<InventoryTag>> {
        operations::detect(self)
    }

    pub fn read_single_block(&mut self, uid: &Uid, block: u8, block_size: usize) -> Result<BlockData> {
        operations::read_single_block(self, uid, block, block_size)
    }

    pub fn read_multiple_blocks(
        &mut self,
        uid: &Uid,
        first: u8,
        count: u16,
        block_size: usize,
    ) -> Result<Vec<BlockData>> {
        operations::read_multiple_blocks(self, uid, first, count, block_size)
    }

    pub fn write_single_block(&mut self, uid: &Uid, block: u8, data: &BlockData) -> Result<()> {
        operations::write_single_block(self, uid, block, data)
    }

    pub fn write_multiple_blocks(&mut self, uid: &Uid, first: u8, blocks: &[BlockData]) -> Result<()> {
        operations::write_multiple_blocks(self, uid, first, blocks)
    }

    pub fn lock_block(&mut self, uid: &Uid, block: u8) -> Result<()> {
        operations::lock_block(self, uid, block)
    }

    pub fn get_system_info(&mut self, uid: &Uid) -> Result<SystemInfo> {
        operations::get_system_info(self, uid)
    }

    pub fn get_multiple_block_security_status(
        &mut self,
        uid: &Uid,
        first: u8,
        count: u16,
    ) -> Result<Vec<u8>> {
        operations::get_multiple_block_security_status(self, uid, first, count)
    }

    pub fn write_afi(&mut self, uid: &Uid, afi: u8) -> Result<()> {
        operations::write_afi(self, uid, afi)
    }

    pub fn lock_afi(&mut self, uid: &Uid) -> Result<()> {
        operations::lock_afi(self, uid)
    }

    pub fn write_dsfid(&mut self, uid: &Uid, dsfid: u8) -> Result<()> {
        operations::write_dsfid(self, uid, dsfid)
    }

    pub fn lock_dsfid(&mut self, uid: &Uid) -> Result<()> {
        operations::lock_dsfid(self, uid)
    }

    /// Send the tag to the quiet state. The tag never answers, so a
    /// missing reply counts as success.
    pub fn stay_quiet(&mut self, uid: &Uid) -> Result<()> {
        operations::stay_quiet(self, uid)
    }

    pub fn select(&mut self, uid: &Uid) -> Result<()> {
        operations::select(self, uid)
    }

    pub fn reset_to_ready(&mut self, uid: &Uid) -> Result<()> {
        operations::reset_to_ready(self, uid)
    }
}
