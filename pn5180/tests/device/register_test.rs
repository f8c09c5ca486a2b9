use pn5180::constants::*;
use pn5180::test_support::initialized_mock_device;
use pn5180::{Error, ErrorKind, TransceiveState};
use proptest::prelude::*;

proptest! {
    #[test]
    fn register_write_then_read_round_trips(reg in 0u8..0x30, value in any::<u32>()) {
        // IRQ_CLEAR is write-only and RF_STATUS is derived by the chip
        prop_assume!(reg != REG_IRQ_CLEAR && reg != REG_RF_STATUS);
        let mut dev = initialized_mock_device().unwrap();
        dev.write_register(reg, value).unwrap();
        prop_assert_eq!(dev.read_register(reg).unwrap(), value);
    }
}

#[test]
fn masked_writes_touch_only_selected_bits() {
    let mut dev = initialized_mock_device().unwrap();
    dev.write_register(REG_TRANSCEIVE_CONTROL, 0x00F0_0F00).unwrap();
    dev.write_register_or_mask(REG_TRANSCEIVE_CONTROL, 0x0000_00F1)
        .unwrap();
    assert_eq!(dev.read_register(REG_TRANSCEIVE_CONTROL).unwrap(), 0x00F0_0FF1);
    dev.write_register_and_mask(REG_TRANSCEIVE_CONTROL, 0xFFFF_F0FF)
        .unwrap();
    assert_eq!(dev.read_register(REG_TRANSCEIVE_CONTROL).unwrap(), 0x00F0_00F1);
}

#[test]
fn eeprom_out_of_range_never_reaches_the_bus() {
    let mut dev = initialized_mock_device().unwrap();
    let before = dev.bus().transactions;

    for (address, len) in [(250u8, 5u8), (255, 0), (0, 255), (200, 100)] {
        let err = dev.read_eeprom(address, len).unwrap_err();
        assert!(
            matches!(err, Error::EepromOutOfRange { address: a, len: l } if a == address && l == len)
        );
        assert_eq!(err.kind(), ErrorKind::Rejected);
    }
    assert_eq!(dev.bus().transactions, before);

    assert_eq!(dev.read_eeprom(250, 4).unwrap().len(), 4);
    assert_eq!(dev.read_eeprom(EEPROM_PRODUCT_VERSION, 2).unwrap(), vec![0x00, 0x04]);
}

#[test]
fn die_identifier_is_sixteen_bytes() {
    let mut dev = initialized_mock_device().unwrap();
    let id: Vec<u8> = (1..=16).collect();
    dev.bus_mut().write_eeprom(EEPROM_DIE_IDENTIFIER, &id);
    assert_eq!(dev.die_identifier().unwrap().to_vec(), id);
}

#[test]
fn transceive_state_decodes_rf_status_bits() {
    let mut dev = initialized_mock_device().unwrap();
    let cases = [
        (0x0000_0000, TransceiveState::Idle),
        (0x0100_0000, TransceiveState::WaitTransmit),
        (0x0200_0000, TransceiveState::Transmitting),
        (0x03FF_FFFF, TransceiveState::WaitReceive),
        (0xFD00_0000, TransceiveState::Receiving),
        (0x0700_0000, TransceiveState::Reserved),
    ];
    for (raw, expected) in cases {
        dev.bus_mut().rf_status_override = Some(raw);
        assert_eq!(dev.transceive_state().unwrap(), expected, "{:#010x}", raw);
    }
}

#[test]
fn clear_irq_status_is_selective() {
    let mut dev = initialized_mock_device().unwrap();
    dev.bus_mut().raise_irq(IRQ_RX | IRQ_TX | IRQ_IDLE | IRQ_RX_SOF_DET);

    dev.clear_irq_status(IRQ_TX | IRQ_RX_SOF_DET).unwrap();
    let status = dev.irq_status().unwrap();
    assert!(status.contains(IRQ_RX | IRQ_IDLE));
    assert!(!status.intersects(IRQ_TX | IRQ_RX_SOF_DET));
    assert_eq!(status.flag_names(), vec!["RX", "IDLE"]);
}
