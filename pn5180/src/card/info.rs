// pn5180-rs/pn5180/src/card/info.rs

use std::fmt;

use crate::types::Uid;

/// Tag found by an Inventory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryTag {
    pub dsfid: u8,
    pub uid: Uid,
}

/// VICC memory organisation reported by Get System Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySize {
    /// Bytes per block (1..=32)
    pub block_size: u16,
    /// Number of blocks (1..=256)
    pub block_count: u16,
}

impl MemorySize {
    /// Decode the two raw bytes as sent by the tag (count first).
    pub fn from_raw(count: u8, size: u8) -> Self {
        Self {
            block_size: (size & 0x1F) as u16 + 1,
            block_count: count as u16 + 1,
        }
    }

    pub fn total_bytes(&self) -> u32 {
        self.block_size as u32 * self.block_count as u32
    }
}

/// Application family, the upper nibble of an AFI byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AfiFamily {
    All,
    Transport,
    Financial,
    Identification,
    Telecommunication,
    Medical,
    Multimedia,
    Gaming,
    DataStorage,
    ItemManagement,
    ExpressParcels,
    PostalServices,
    AirlineBags,
    Unknown(u8),
}

impl AfiFamily {
    pub fn from_afi(afi: u8) -> Self {
        match afi >> 4 {
            0 => Self::All,
            1 => Self::Transport,
            2 => Self::Financial,
            3 => Self::Identification,
            4 => Self::Telecommunication,
            5 => Self::Medical,
            6 => Self::Multimedia,
            7 => Self::Gaming,
            8 => Self::DataStorage,
            9 => Self::ItemManagement,
            10 => Self::ExpressParcels,
            11 => Self::PostalServices,
            12 => Self::AirlineBags,
            other => Self::Unknown(other),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All families",
            Self::Transport => "Transport",
            Self::Financial => "Financial",
            Self::Identification => "Identification",
            Self::Telecommunication => "Telecommunication",
            Self::Medical => "Medical",
            Self::Multimedia => "Multimedia",
            Self::Gaming => "Gaming",
            Self::DataStorage => "Data storage",
            Self::ItemManagement => "Item management",
            Self::ExpressParcels => "Express parcels",
            Self::PostalServices => "Postal services",
            Self::AirlineBags => "Airline bags",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for AfiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get System Information result. Optional fields are present only when
/// the matching bit of `info_flags` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInfo {
    pub uid: Uid,
    pub info_flags: u8,
    pub dsfid: Option<u8>,
    pub afi: Option<u8>,
    pub memory: Option<MemorySize>,
    pub ic_reference: Option<u8>,
}

impl SystemInfo {
    pub fn afi_family(&self) -> Option<AfiFamily> {
        self.afi.map(AfiFamily::from_afi)
    }

    pub fn block_size(&self) -> Option<u16> {
        self.memory.map(|m| m.block_size)
    }

    pub fn block_count(&self) -> Option<u16> {
        self.memory.map(|m| m.block_count)
    }
}
