// pn5180-rs/pn5180/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use crate::Error;
use crate::constants::*;

/// ISO 15693 UID - Newtype Pattern (8 バイト, wire order = LSB first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 8]);

impl Uid {
    /// Build from bytes in wire order (least significant byte first).
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Build from bytes as printed on a label (most significant byte first).
    pub fn from_msb_first(bytes: [u8; 8]) -> Self {
        let mut wire = bytes;
        wire.reverse();
        Self(wire)
    }

    /// Bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_msb_first(&self) -> [u8; 8] {
        let mut out = self.0;
        out.reverse();
        out
    }

    /// Hex string, most significant byte first (e.g. `e004...`).
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.to_msb_first())
    }

    /// IC manufacturer code (second most significant byte).
    pub fn manufacturer_code(&self) -> u8 {
        self.0[6]
    }

    /// ISO 15693 UIDs always start with 0xE0.
    pub fn is_iso15693(&self) -> bool {
        self.0[7] == 0xE0
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ISO15693_UID_LEN {
            return Err(Error::InvalidLength {
                expected: ISO15693_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.to_msb_first().iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Contents of one (or several concatenated) tag memory blocks
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::From, derive_more::Into)]
pub struct BlockData(Vec<u8>);

impl BlockData {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

/// RF_STATUS.TRANSCEIVE_STATE
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransceiveState {
    Idle = 0,
    WaitTransmit = 1,
    Transmitting = 2,
    WaitReceive = 3,
    WaitForData = 4,
    Receiving = 5,
    LoopBack = 6,
    Reserved = 7,
}

impl TransceiveState {
    /// Decode the state held in bits [24:26] of an RF_STATUS value.
    pub fn from_rf_status(rf_status: u32) -> Self {
        let code = (rf_status >> RF_STATUS_TRANSCEIVE_STATE_SHIFT) & RF_STATUS_TRANSCEIVE_STATE_MASK;
        Self::from_code(code as u8)
    }

    /// Only the low three bits of `code` are considered.
    pub fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => Self::Idle,
            1 => Self::WaitTransmit,
            2 => Self::Transmitting,
            3 => Self::WaitReceive,
            4 => Self::WaitForData,
            5 => Self::Receiving,
            6 => Self::LoopBack,
            _ => Self::Reserved,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// IRQ_STATUS register value
#[derive(Clone, Copy, PartialEq, Eq, Default, derive_more::From, derive_more::Into)]
pub struct IrqStatus(u32);

impl IrqStatus {
    const NAMES: [(u32, &'static str); 8] = [
        (IRQ_RX, "RX"),
        (IRQ_TX, "TX"),
        (IRQ_IDLE, "IDLE"),
        (IRQ_RFOFF_DET, "RFOFF_DET"),
        (IRQ_RFON_DET, "RFON_DET"),
        (IRQ_TX_RFOFF, "TX_RFOFF"),
        (IRQ_TX_RFON, "TX_RFON"),
        (IRQ_RX_SOF_DET, "RX_SOF_DET"),
    ];

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// `true` when every bit of `mask` is set.
    pub fn contains(&self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    /// `true` when at least one bit of `mask` is set.
    pub fn intersects(&self, mask: u32) -> bool {
        self.0 & mask != 0
    }

    /// Names of the set bits the driver knows about.
    pub fn flag_names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Debug for IrqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IrqStatus({:#010x} {:?})", self.0, self.flag_names())
    }
}

/// Transmitter / receiver protocol profile pair for LOAD_RF_CONFIG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfConfig {
    pub tx: u8,
    pub rx: u8,
}

impl RfConfig {
    pub const ISO14443A_106: Self = Self::new(0x00, 0x80);
    pub const ISO15693_ASK100_26: Self = Self::new(0x0D, 0x8D);
    pub const ISO15693_ASK10_26: Self = Self::new(0x0E, 0x8E);

    pub const fn new(tx: u8, rx: u8) -> Self {
        Self { tx, rx }
    }
}

/// Two-byte version field stored in EEPROM (minor byte first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub fn from_eeprom(bytes: [u8; 2]) -> Self {
        Self {
            major: bytes[1],
            minor: bytes[0],
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
