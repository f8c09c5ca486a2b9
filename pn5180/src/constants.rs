// pn5180-rs/pn5180/src/constants.rs
//! Wire-level constants of the PN5180 host interface and the ISO 15693 protocol

// Host interface direct commands (one opcode byte each)
pub const CMD_WRITE_REGISTER: u8 = 0x00;
pub const CMD_WRITE_REGISTER_OR_MASK: u8 = 0x01;
pub const CMD_WRITE_REGISTER_AND_MASK: u8 = 0x02;
pub const CMD_READ_REGISTER: u8 = 0x04;
pub const CMD_READ_EEPROM: u8 = 0x07;
pub const CMD_SEND_DATA: u8 = 0x09;
pub const CMD_READ_DATA: u8 = 0x0A;
pub const CMD_LOAD_RF_CONFIG: u8 = 0x11;
pub const CMD_RF_ON: u8 = 0x16;
pub const CMD_RF_OFF: u8 = 0x17;

// Configuration registers
pub const REG_SYSTEM_CONFIG: u8 = 0x00;
pub const REG_IRQ_ENABLE: u8 = 0x01;
pub const REG_IRQ_STATUS: u8 = 0x02;
pub const REG_IRQ_CLEAR: u8 = 0x03;
pub const REG_TRANSCEIVE_CONTROL: u8 = 0x04;
pub const REG_TIMER1_RELOAD: u8 = 0x0C;
pub const REG_TIMER1_CONFIG: u8 = 0x0F;
pub const REG_RX_WAIT_CONFIG: u8 = 0x11;
pub const REG_CRC_RX_CONFIG: u8 = 0x12;
pub const REG_RX_STATUS: u8 = 0x13;
pub const REG_RF_STATUS: u8 = 0x1D;
pub const REG_SYSTEM_STATUS: u8 = 0x24;
pub const REG_TEMP_CONTROL: u8 = 0x25;

// EEPROM fields
pub const EEPROM_DIE_IDENTIFIER: u8 = 0x00;
pub const EEPROM_PRODUCT_VERSION: u8 = 0x10;
pub const EEPROM_FIRMWARE_VERSION: u8 = 0x12;
pub const EEPROM_EEPROM_VERSION: u8 = 0x14;
pub const EEPROM_IRQ_PIN_CONFIG: u8 = 0x1A;

/// Length of the die identifier stored at [`EEPROM_DIE_IDENTIFIER`]
pub const DIE_IDENTIFIER_LEN: usize = 16;

// IRQ_STATUS bits
pub const IRQ_RX: u32 = 1 << 0;
pub const IRQ_TX: u32 = 1 << 1;
pub const IRQ_IDLE: u32 = 1 << 2;
pub const IRQ_RFOFF_DET: u32 = 1 << 6;
pub const IRQ_RFON_DET: u32 = 1 << 7;
pub const IRQ_TX_RFOFF: u32 = 1 << 8;
pub const IRQ_TX_RFON: u32 = 1 << 9;
pub const IRQ_RX_SOF_DET: u32 = 1 << 14;
pub const IRQ_ALL: u32 = 0xFFFF_FFFF;

/// SYSTEM_CONFIG AND-mask that resets the COMMAND field to Idle/StopCom
pub const SYSTEM_CONFIG_CLEAR_COMMAND_MASK: u32 = 0xFFFF_FFF8;
/// SYSTEM_CONFIG OR-mask selecting the Transceive command
pub const SYSTEM_CONFIG_TRANSCEIVE: u32 = 0x0000_0003;

/// RF_STATUS.TRANSCEIVE_STATE position and width
pub const RF_STATUS_TRANSCEIVE_STATE_SHIFT: u32 = 24;
pub const RF_STATUS_TRANSCEIVE_STATE_MASK: u32 = 0x07;

/// RX_STATUS.RX_NUM_BYTES_RECEIVED
pub const RX_STATUS_LEN_MASK: u32 = 0x0000_01FF;

// Hard limits of the host interface
pub const EEPROM_MAX_ADDRESS: u8 = 254;
pub const MAX_SEND_DATA_LEN: usize = 260;
pub const MAX_READ_DATA_LEN: usize = 508;
/// Opcode plus the longest parameter list (SEND_DATA: valid bits + 260 bytes)
pub const MAX_FRAME_LEN: usize = 262;

/// Filler byte clocked out while reading a response
pub const SPI_FILLER: u8 = 0xFF;

// ISO 15693 command codes
pub const ISO15693_CMD_INVENTORY: u8 = 0x01;
pub const ISO15693_CMD_STAY_QUIET: u8 = 0x02;
pub const ISO15693_CMD_READ_SINGLE_BLOCK: u8 = 0x20;
pub const ISO15693_CMD_WRITE_SINGLE_BLOCK: u8 = 0x21;
pub const ISO15693_CMD_LOCK_BLOCK: u8 = 0x22;
pub const ISO15693_CMD_READ_MULTIPLE_BLOCKS: u8 = 0x23;
pub const ISO15693_CMD_WRITE_MULTIPLE_BLOCKS: u8 = 0x24;
pub const ISO15693_CMD_SELECT: u8 = 0x25;
pub const ISO15693_CMD_RESET_TO_READY: u8 = 0x26;
pub const ISO15693_CMD_WRITE_AFI: u8 = 0x27;
pub const ISO15693_CMD_LOCK_AFI: u8 = 0x28;
pub const ISO15693_CMD_WRITE_DSFID: u8 = 0x29;
pub const ISO15693_CMD_LOCK_DSFID: u8 = 0x2A;
pub const ISO15693_CMD_GET_SYSTEM_INFO: u8 = 0x2B;
pub const ISO15693_CMD_GET_MULTIPLE_BLOCK_SECURITY_STATUS: u8 = 0x2C;

// ISO 15693 response flags
pub const ISO15693_RESP_ERROR: u8 = 1 << 0;
pub const ISO15693_RESP_EXTENSION: u8 = 1 << 3;

// ISO 15693 system info flags
pub const ISO15693_INFO_DSFID: u8 = 1 << 0;
pub const ISO15693_INFO_AFI: u8 = 1 << 1;
pub const ISO15693_INFO_MEMORY_SIZE: u8 = 1 << 2;
pub const ISO15693_INFO_IC_REFERENCE: u8 = 1 << 3;

/// ISO 15693 UID length in bytes
pub const ISO15693_UID_LEN: usize = 8;
/// Largest block count a multiple-block request can address.
pub const ISO15693_MAX_BLOCKS: usize = 256;
