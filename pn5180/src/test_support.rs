//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockBus setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::card::Iso15693;
use crate::config::Config;
use crate::constants::*;
use crate::device::{Initialized, Pn5180};
use crate::transport::mock::{MockBus, MockClock};
use crate::types::Uid;
use crate::Result;

/// Initialized device over the simulated chip.
pub type MockDevice = Pn5180<MockBus, MockClock, Initialized>;

/// UID used by fixtures: NXP ICODE SLIX style, wire order.
#[doc(hidden)]
pub fn sample_uid() -> Uid {
    Uid::from_bytes([0x8E, 0x3B, 0x6A, 0x21, 0x50, 0x01, 0x04, 0xE0])
}

/// MockBus with plausible chip identification in EEPROM and the given
/// tag responses (flags byte first) queued.
#[doc(hidden)]
pub fn seeded_bus(tag_responses: Vec<Vec<u8>>) -> MockBus {
    let mut bus = MockBus::new();
    bus.write_eeprom(EEPROM_PRODUCT_VERSION, &[0x00, 0x04]);
    bus.write_eeprom(EEPROM_FIRMWARE_VERSION, &[0x00, 0x04]);
    bus.write_eeprom(EEPROM_EEPROM_VERSION, &[0x00, 0x99]);
    for resp in tag_responses {
        bus.push_tag_response(resp);
    }
    bus
}

/// Convenience: create and reset a device backed by a MockBus and a
/// virtual clock.
#[doc(hidden)]
pub fn initialized_mock_device() -> Result<MockDevice> {
    Pn5180::new(seeded_bus(Vec::new()), MockClock::new(), Config::default()).reset()
}

/// ISO 15693 reader over an initialized mock device whose simulated tag
/// answers with `tag_responses`, in order.
#[doc(hidden)]
pub fn mock_reader(tag_responses: Vec<Vec<u8>>) -> Result<Iso15693<MockDevice>> {
    let device =
        Pn5180::new(seeded_bus(tag_responses), MockClock::new(), Config::default()).reset()?;
    Ok(Iso15693::new(device))
}
