// pn5180-rs/pn5180/src/device/traits.rs

use std::time::Duration;

use crate::constants::*;
use crate::device::handle::{Initialized, Pn5180};
use crate::transport::{Bus, Clock};
use crate::types::{IrqStatus, RfConfig, TransceiveState};
use crate::Result;

/// Frontend trait abstracts the reader chip away from the card protocol
/// layer: register access, transmit/receive buffers, RF field and IRQ state.
///
/// [`Pn5180`] implements it once initialized. Tests and alternative front
/// ends can provide their own implementation.
pub trait Frontend {
    fn write_register(&mut self, reg: u8, value: u32) -> Result<()>;
    fn write_register_or_mask(&mut self, reg: u8, mask: u32) -> Result<()>;
    fn write_register_and_mask(&mut self, reg: u8, mask: u32) -> Result<()>;
    fn read_register(&mut self, reg: u8) -> Result<u32>;

    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()>;
    fn read_data(&mut self, len: usize) -> Result<Vec<u8>>;

    fn load_rf_config(&mut self, config: RfConfig) -> Result<()>;
    fn rf_on(&mut self) -> Result<()>;
    fn rf_off(&mut self) -> Result<()>;

    fn irq_status(&mut self) -> Result<IrqStatus>;
    fn clear_irq_status(&mut self, mask: u32) -> Result<()>;
    fn transceive_state(&mut self) -> Result<TransceiveState>;

    /// Block for `duration`.
    fn delay(&mut self, duration: Duration);

    /// Select the Transceive command in SYSTEM_CONFIG.
    fn arm_transceive(&mut self) -> Result<()> {
        self.write_register_and_mask(REG_SYSTEM_CONFIG, SYSTEM_CONFIG_CLEAR_COMMAND_MASK)?;
        self.write_register_or_mask(REG_SYSTEM_CONFIG, SYSTEM_CONFIG_TRANSCEIVE)
    }
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn write_register(&mut self, reg: u8, value: u32) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn write_register_or_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        (**self).write_register_or_mask(reg, mask)
    }

    fn write_register_and_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        (**self).write_register_and_mask(reg, mask)
    }

    fn read_register(&mut self, reg: u8) -> Result<u32> {
        (**self).read_register(reg)
    }

    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        (**self).send_data(data, valid_bits)
    }

    fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        (**self).read_data(len)
    }

    fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        (**self).load_rf_config(config)
    }

    fn rf_on(&mut self) -> Result<()> {
        (**self).rf_on()
    }

    fn rf_off(&mut self) -> Result<()> {
        (**self).rf_off()
    }

    fn irq_status(&mut self) -> Result<IrqStatus> {
        (**self).irq_status()
    }

    fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        (**self).clear_irq_status(mask)
    }

    fn transceive_state(&mut self) -> Result<TransceiveState> {
        (**self).transceive_state()
    }

    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }

    fn arm_transceive(&mut self) -> Result<()> {
        (**self).arm_transceive()
    }
}

impl<B: Bus, C: Clock> Frontend for Pn5180<B, C, Initialized> {
    fn write_register(&mut self, reg: u8, value: u32) -> Result<()> {
        Pn5180::write_register(self, reg, value)
    }

    fn write_register_or_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        Pn5180::write_register_or_mask(self, reg, mask)
    }

    fn write_register_and_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        Pn5180::write_register_and_mask(self, reg, mask)
    }

    fn read_register(&mut self, reg: u8) -> Result<u32> {
        Pn5180::read_register(self, reg)
    }

    fn send_data(&mut self, data: &[u8], valid_bits: u8) -> Result<()> {
        Pn5180::send_data(self, data, valid_bits)
    }

    fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        Pn5180::read_data(self, len)
    }

    fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        Pn5180::load_rf_config(self, config)
    }

    fn rf_on(&mut self) -> Result<()> {
        Pn5180::rf_on(self)
    }

    fn rf_off(&mut self) -> Result<()> {
        Pn5180::rf_off(self)
    }

    fn irq_status(&mut self) -> Result<IrqStatus> {
        Pn5180::irq_status(self)
    }

    fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        Pn5180::clear_irq_status(self, mask)
    }

    fn transceive_state(&mut self) -> Result<TransceiveState> {
        Pn5180::transceive_state(self)
    }

    fn delay(&mut self, duration: Duration) {
        Pn5180::delay(self, duration)
    }
}
