// pn5180-rs/pn5180/src/prelude.rs

pub use crate::card::{AfiFamily, InventoryTag, Iso15693, MemorySize, SystemInfo};
pub use crate::config::Config;
pub use crate::device::{Frontend, Initialized, Pn5180, Pn5180Builder, Uninitialized};
pub use crate::protocol::{Command, RequestFlags};
pub use crate::transport::{Bus, Clock, StdClock};
#[cfg(feature = "hal")]
pub use crate::transport::SpiInterface;
pub use crate::{
    BlockData, Error, ErrorKind, IrqStatus, Result, RfConfig, TagError, TransceiveState, Uid,
    Version,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, us};
