// pn5180-rs/pn5180/src/device/registers.rs
//! Register, EEPROM and chip information access

use log::trace;

use crate::constants::*;
use crate::device::handle::{Initialized, Pn5180};
use crate::transport::{Bus, Clock};
use crate::types::Version;
use crate::{Error, Result};

fn register_frame(opcode: u8, reg: u8, value: u32) -> [u8; 6] {
    let v = value.to_le_bytes();
    [opcode, reg, v[0], v[1], v[2], v[3]]
}

// Register primitives are available in every state: the reset sequence
// needs them before the handle is initialized.
impl<B: Bus, C: Clock, State> Pn5180<B, C, State> {
    pub(super) fn raw_write_register(&mut self, opcode: u8, reg: u8, value: u32) -> Result<()> {
        trace!("register {:#04x} <- {:#010x} (op {:#04x})", reg, value, opcode);
        self.host.transceive(&register_frame(opcode, reg, value), 0)?;
        Ok(())
    }

    pub(super) fn raw_read_register(&mut self, reg: u8) -> Result<u32> {
        let resp = self.host.transceive(&[CMD_READ_REGISTER, reg], 4)?;
        let bytes: [u8; 4] = resp.as_slice().try_into().map_err(|_| Error::InvalidLength {
            expected: 4,
            actual: resp.len(),
        })?;
        let value = u32::from_le_bytes(bytes);
        trace!("register {:#04x} -> {:#010x}", reg, value);
        Ok(value)
    }
}

impl<B: Bus, C: Clock> Pn5180<B, C, Initialized> {
    pub fn write_register(&mut self, reg: u8, value: u32) -> Result<()> {
        self.raw_write_register(CMD_WRITE_REGISTER, reg, value)
    }

    /// Logical OR of `mask` into the register content.
    pub fn write_register_or_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        self.raw_write_register(CMD_WRITE_REGISTER_OR_MASK, reg, mask)
    }

    /// Logical AND of `mask` with the register content.
    pub fn write_register_and_mask(&mut self, reg: u8, mask: u32) -> Result<()> {
        self.raw_write_register(CMD_WRITE_REGISTER_AND_MASK, reg, mask)
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u32> {
        self.raw_read_register(reg)
    }

    /// Read `len` bytes of EEPROM starting at `address`.
    ///
    /// The request is rejected before touching the bus when `address > 254`
    /// or `address + len > 254`.
    pub fn read_eeprom(&mut self, address: u8, len: u8) -> Result<Vec<u8>> {
        let max = EEPROM_MAX_ADDRESS as u16;
        if address as u16 > max || address as u16 + len as u16 > max {
            return Err(Error::EepromOutOfRange { address, len });
        }
        self.host
            .transceive(&[CMD_READ_EEPROM, address, len], len as usize)
    }

    /// 128-bit die identifier.
    pub fn die_identifier(&mut self) -> Result<[u8; DIE_IDENTIFIER_LEN]> {
        let raw = self.read_eeprom(EEPROM_DIE_IDENTIFIER, DIE_IDENTIFIER_LEN as u8)?;
        raw.as_slice().try_into().map_err(|_| Error::InvalidLength {
            expected: DIE_IDENTIFIER_LEN,
            actual: raw.len(),
        })
    }

    pub fn product_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_PRODUCT_VERSION)
    }

    pub fn firmware_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_FIRMWARE_VERSION)
    }

    pub fn eeprom_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_EEPROM_VERSION)
    }

    fn read_version(&mut self, address: u8) -> Result<Version> {
        let raw = self.read_eeprom(address, 2)?;
        match raw.as_slice() {
            [minor, major] => Ok(Version::from_eeprom([*minor, *major])),
            _ => Err(Error::InvalidLength {
                expected: 2,
                actual: raw.len(),
            }),
        }
    }
}
