// pn5180-rs/pn5180/src/protocol/flags.rs

use std::fmt;

/// ISO 15693 request flags byte.
///
/// Bits 0..=3 always have the same meaning. Bits 4..=6 depend on whether
/// the inventory flag is set, so both sets of names map to the same bits.
#[derive(Clone, Copy, PartialEq, Eq, Default, derive_more::From, derive_more::Into)]
pub struct RequestFlags(u8);

impl RequestFlags {
    pub const TWO_SUBCARRIERS: u8 = 1 << 0;
    pub const HIGH_DATA_RATE: u8 = 1 << 1;
    pub const INVENTORY: u8 = 1 << 2;
    pub const PROTOCOL_EXTENSION: u8 = 1 << 3;

    // inventory flag set
    pub const AFI: u8 = 1 << 4;
    pub const ONE_SLOT: u8 = 1 << 5;

    // inventory flag clear
    pub const SELECT: u8 = 1 << 4;
    pub const ADDRESS: u8 = 1 << 5;

    pub const OPTION: u8 = 1 << 6;

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Single-slot inventory at high data rate (0x26).
    pub const fn inventory() -> Self {
        Self(Self::HIGH_DATA_RATE | Self::INVENTORY | Self::ONE_SLOT)
    }

    /// Addressed request at high data rate (0x22).
    pub const fn addressed() -> Self {
        Self(Self::HIGH_DATA_RATE | Self::ADDRESS)
    }

    pub const fn with(self, bits: u8) -> Self {
        Self(self.0 | bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_inventory(&self) -> bool {
        self.0 & Self::INVENTORY != 0
    }

    /// Only meaningful outside inventory requests.
    pub fn is_addressed(&self) -> bool {
        !self.is_inventory() && self.0 & Self::ADDRESS != 0
    }
}

impl fmt::Debug for RequestFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestFlags({:#04x})", self.0)
    }
}
