// pn5180-rs/pn5180/src/error.rs

use std::time::Duration;

use thiserror::Error;

use crate::types::TransceiveState;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("busy line did not reach busy={expected_busy} within {timeout:?}")]
    BusyTimeout {
        expected_busy: bool,
        timeout: Duration,
    },

    #[error("irq {mask:#010x} not raised within {timeout:?}")]
    IrqTimeout { mask: u32, timeout: Duration },

    #[error("bus error: {0}")]
    Bus(String),

    #[error("invalid command frame length: {len}")]
    InvalidFrame { len: usize },

    #[error("eeprom read out of range: address={address:#04x}, len={len}")]
    EepromOutOfRange { address: u8, len: u8 },

    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("valid bits in last byte must be 0..=7, got {0}")]
    InvalidValidBits(u8),

    #[error("block count {count} outside 1..={max}")]
    InvalidBlockCount { count: usize, max: usize },

    #[error("read length {len} exceeds receive buffer ({max} bytes)")]
    ReceiveBufferOverflow { len: usize, max: usize },

    #[error("transceiver not ready: state={0:?}")]
    NotReady(TransceiveState),

    #[error("no card detected")]
    NoCardDetected,

    #[error("iso15693 error: {0}")]
    Tag(#[from] TagError),

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("response length {len} exceeds receive buffer ({max} bytes)")]
    ResponseTooLong { len: usize, max: usize },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The chip or the bus misbehaved (timeouts, pin/SPI failures).
    Hardware,
    /// The call was rejected before touching the bus.
    Rejected,
    /// The caller asked for something the hardware can never do.
    Fatal,
    /// The transceiver was not in the state required to transmit.
    NotReady,
    /// No tag answered, or the tag answered with an error code.
    Tag,
    /// A response did not have the expected shape.
    Protocol,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BusyTimeout { .. } | Error::IrqTimeout { .. } | Error::Bus(_) => {
                ErrorKind::Hardware
            }
            Error::InvalidFrame { .. }
            | Error::EepromOutOfRange { .. }
            | Error::PayloadTooLarge { .. }
            | Error::InvalidValidBits(_)
            | Error::InvalidBlockCount { .. } => ErrorKind::Rejected,
            Error::ReceiveBufferOverflow { .. } => ErrorKind::Fatal,
            Error::NotReady(_) => ErrorKind::NotReady,
            Error::NoCardDetected | Error::Tag(_) => ErrorKind::Tag,
            Error::InvalidLength { .. } | Error::ResponseTooLong { .. } => ErrorKind::Protocol,
        }
    }

    /// `false` only for caller bugs that retrying can never fix.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Fatal
    }

    pub fn is_tag_error(&self) -> bool {
        self.kind() == ErrorKind::Tag
    }
}

/// Error codes reported by an ISO 15693 tag in a response with the error flag set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagError {
    #[error("command is not supported")]
    NotSupported,
    #[error("command is not recognized")]
    NotRecognized,
    #[error("option is not supported")]
    OptionNotSupported,
    #[error("unknown error")]
    Unknown,
    #[error("specified block is not available")]
    BlockNotAvailable,
    #[error("specified block is already locked")]
    BlockAlreadyLocked,
    #[error("specified block is locked and cannot be changed")]
    BlockIsLocked,
    #[error("specified block was not successfully programmed")]
    BlockNotProgrammed,
    #[error("specified block was not successfully locked")]
    BlockNotLocked,
    #[error("custom command error {0:#04x}")]
    CustomCommand(u8),
    #[error("undefined error code {0:#04x}")]
    Undefined(u8),
}

impl TagError {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => TagError::NotSupported,
            0x02 => TagError::NotRecognized,
            0x03 => TagError::OptionNotSupported,
            0x0F => TagError::Unknown,
            0x10 => TagError::BlockNotAvailable,
            0x11 => TagError::BlockAlreadyLocked,
            0x12 => TagError::BlockIsLocked,
            0x13 => TagError::BlockNotProgrammed,
            0x14 => TagError::BlockNotLocked,
            c if c >= 0xA0 => TagError::CustomCommand(c),
            c => TagError::Undefined(c),
        }
    }

    /// The raw error byte as it appeared on the wire.
    pub fn code(&self) -> u8 {
        match self {
            TagError::NotSupported => 0x01,
            TagError::NotRecognized => 0x02,
            TagError::OptionNotSupported => 0x03,
            TagError::Unknown => 0x0F,
            TagError::BlockNotAvailable => 0x10,
            TagError::BlockAlreadyLocked => 0x11,
            TagError::BlockIsLocked => 0x12,
            TagError::BlockNotProgrammed => 0x13,
            TagError::BlockNotLocked => 0x14,
            TagError::CustomCommand(c) | TagError::Undefined(c) => *c,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
