// pn5180-rs/pn5180/src/device/rf.rs
//! Transmit / receive buffers and RF field control

use log::{debug, warn};

use crate::constants::*;
use crate::device::handle::{Initialized, Pn5180};
use crate::device::Frontend;
use crate::transport::{Bus, Clock};
use crate::types::{RfConfig, TransceiveState};
use crate::{Error, Result};

impl<B: Bus, C: Clock> Pn5180<B, C, Initialized> {
    /// Write `data` to the transmit buffer and start the transmission.
    ///
    /// `valid_bits` is the number of valid bits in the last byte (0 means
    /// all 8). Nothing is sent unless the transceiver reaches WaitTransmit.
    pub fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        if data.len() > MAX_SEND_DATA_LEN {
            return Err(Error::PayloadTooLarge {
                len: data.len(),
                max: MAX_SEND_DATA_LEN,
            });
        }
        if valid_bits > 7 {
            return Err(Error::InvalidValidBits(valid_bits));
        }

        self.arm_transceive()?;
        let state = self.transceive_state()?;
        if state != TransceiveState::WaitTransmit {
            warn!("send_data: transceiver not ready ({:?})", state);
            return Err(Error::NotReady(state));
        }

        let mut frame = Vec::with_capacity(2 + data.len());
        frame.push(CMD_SEND_DATA);
        frame.push(valid_bits);
        frame.extend_from_slice(data);
        self.host.transceive(&frame, 0)?;
        Ok(())
    }

    /// Read `len` bytes from the receive buffer.
    pub fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        if len > MAX_READ_DATA_LEN {
            return Err(Error::ReceiveBufferOverflow {
                len,
                max: MAX_READ_DATA_LEN,
            });
        }
        self.host.transceive(&[CMD_READ_DATA, 0x00], len)
    }

    pub fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        debug!("load rf config tx={:#04x} rx={:#04x}", config.tx, config.rx);
        self.host
            .transceive(&[CMD_LOAD_RF_CONFIG, config.tx, config.rx], 0)?;
        Ok(())
    }

    /// Switch the RF field on and wait until the chip reports it.
    pub fn rf_on(&mut self) -> Result<()> {
        debug!("rf on");
        self.rf_command(CMD_RF_ON, IRQ_TX_RFON)
    }

    /// Switch the RF field off and wait until the chip reports it.
    pub fn rf_off(&mut self) -> Result<()> {
        debug!("rf off");
        self.rf_command(CMD_RF_OFF, IRQ_TX_RFOFF)
    }

    fn rf_command(&mut self, opcode: u8, irq: u32) -> Result<()> {
        self.host.transceive(&[opcode, 0x00], 0)?;
        let timeout = self.config().irq_timeout;
        self.wait_for_irq(irq, timeout)?;
        self.clear_irq_status(irq)
    }
}
