// pn5180-rs/pn5180/src/lib.rs

//! pn5180
//!
//! Driver for the NXP PN5180 NFC frontend and an ISO 15693 reader on top
//! of it.
//!
//! Layers, bottom up:
//!
//! * [`transport`]: the [`Bus`] and [`Clock`] seams, the BUSY handshake
//!   ([`transport::HostInterface`]) and the `embedded-hal` adapter.
//! * [`device`]: [`Pn5180`] with register, EEPROM, RF and IRQ access. The
//!   handle starts `Uninitialized` and only a successful reset yields an
//!   `Initialized` one.
//! * [`protocol`]: ISO 15693 request encoders and response decoders.
//! * [`card`]: [`Iso15693`], generic over any [`Frontend`].
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error and data types live at the crate root as well as in the prelude.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
