// pn5180-rs/pn5180/src/transport/mock.rs

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::constants::*;
use crate::transport::clock::Clock;
use crate::transport::traits::Bus;
use crate::types::RfConfig;
use crate::{Error, Result};

/// Mock bus for unit tests. It simulates the PN5180 host interface closely
/// enough to drive the real handshake: BUSY rises once a frame has been
/// clocked in and falls when NSS is released, registers and EEPROM are
/// backed by memory, and SEND_DATA answers with queued tag responses.
#[derive(Debug)]
pub struct MockBus {
    /// Every command frame clocked in during a write window, in order.
    pub frames: Vec<Vec<u8>>,
    /// ISO 15693 frames handed to SEND_DATA (opcode and valid-bits byte stripped).
    pub rf_frames: Vec<Vec<u8>>,
    /// RF profiles loaded through LOAD_RF_CONFIG.
    pub rf_configs: Vec<RfConfig>,
    /// Number of NSS select windows opened.
    pub transactions: usize,
    /// Testing hook: force the BUSY line to a fixed level.
    pub stuck_busy: Option<bool>,
    /// Testing hook: value returned for RF_STATUS instead of the simulated one.
    pub rf_status_override: Option<u32>,
    /// Testing hook: IRQ bits the simulated chip never raises.
    pub suppressed_irqs: u32,
    /// Testing hook: drop RX_SOF_DET as soon as the receive buffer is read.
    pub drop_sof_after_read: bool,
    /// Testing hook: every SPI transfer fails.
    pub fail_transfers: bool,
    registers: HashMap<u8, u32>,
    eeprom: [u8; 255],
    tag_responses: VecDeque<Vec<u8>>,
    rx_buffer: Vec<u8>,
    selected: bool,
    busy: bool,
    in_reset: bool,
    window: Vec<u8>,
    pending: Option<Vec<u8>>,
    read_pos: usize,
    reading: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            rf_frames: Vec::new(),
            rf_configs: Vec::new(),
            transactions: 0,
            stuck_busy: None,
            rf_status_override: None,
            suppressed_irqs: 0,
            drop_sof_after_read: false,
            fail_transfers: false,
            registers: HashMap::new(),
            eeprom: [0u8; 255],
            tag_responses: VecDeque::new(),
            rx_buffer: Vec::new(),
            selected: false,
            busy: false,
            in_reset: false,
            window: Vec::new(),
            pending: None,
            read_pos: 0,
            reading: false,
        }
    }

    /// Queue the raw response (flags byte first) the next SEND_DATA receives.
    pub fn push_tag_response(&mut self, resp: Vec<u8>) {
        self.tag_responses.push_back(resp);
    }

    pub fn pending_tag_responses(&self) -> usize {
        self.tag_responses.len()
    }

    /// Current register value as the chip would report it.
    pub fn register(&self, reg: u8) -> u32 {
        match reg {
            REG_RF_STATUS => self.rf_status_override.unwrap_or_else(|| {
                let command = self.stored(REG_SYSTEM_CONFIG) & 0x07;
                if command == SYSTEM_CONFIG_TRANSCEIVE {
                    (crate::types::TransceiveState::WaitTransmit.code() as u32)
                        << RF_STATUS_TRANSCEIVE_STATE_SHIFT
                } else {
                    0
                }
            }),
            _ => self.stored(reg),
        }
    }

    pub fn set_register(&mut self, reg: u8, value: u32) {
        self.registers.insert(reg, value);
    }

    pub fn irq_status(&self) -> u32 {
        self.stored(REG_IRQ_STATUS)
    }

    /// Raise IRQ bits as the chip would (suppressed bits stay low).
    pub fn raise_irq(&mut self, bits: u32) {
        let value = self.irq_status() | (bits & !self.suppressed_irqs);
        self.registers.insert(REG_IRQ_STATUS, value);
    }

    pub fn write_eeprom(&mut self, addr: u8, data: &[u8]) {
        let start = addr as usize;
        let end = (start + data.len()).min(self.eeprom.len());
        self.eeprom[start..end].copy_from_slice(&data[..end - start]);
    }

    pub fn in_reset(&self) -> bool {
        self.in_reset
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Command frames whose opcode equals `opcode`.
    pub fn frames_with_opcode(&self, opcode: u8) -> Vec<&Vec<u8>> {
        self.frames.iter().filter(|f| f.first() == Some(&opcode)).collect()
    }

    fn stored(&self, reg: u8) -> u32 {
        self.registers.get(&reg).copied().unwrap_or(0)
    }

    fn write_reg(&mut self, reg: u8, value: u32) {
        if reg == REG_IRQ_CLEAR {
            let remaining = self.irq_status() & !value;
            self.registers.insert(REG_IRQ_STATUS, remaining);
        } else {
            self.registers.insert(reg, value);
        }
    }

    fn execute(&mut self, frame: &[u8]) {
        let le_u32 = |f: &[u8]| u32::from_le_bytes([f[2], f[3], f[4], f[5]]);
        match (frame[0], frame.len()) {
            (CMD_WRITE_REGISTER, 6) => self.write_reg(frame[1], le_u32(frame)),
            (CMD_WRITE_REGISTER_OR_MASK, 6) => {
                let value = self.stored(frame[1]) | le_u32(frame);
                self.write_reg(frame[1], value);
            }
            (CMD_WRITE_REGISTER_AND_MASK, 6) => {
                let value = self.stored(frame[1]) & le_u32(frame);
                self.write_reg(frame[1], value);
            }
            (CMD_READ_REGISTER, 2) => {
                self.pending = Some(self.register(frame[1]).to_le_bytes().to_vec());
            }
            (CMD_READ_EEPROM, 3) => {
                let start = (frame[1] as usize).min(self.eeprom.len());
                let end = (start + frame[2] as usize).min(self.eeprom.len());
                self.pending = Some(self.eeprom[start..end].to_vec());
            }
            (CMD_SEND_DATA, n) if n >= 2 => {
                self.rf_frames.push(frame[2..].to_vec());
                // a new transceive cycle restarts reception
                let remaining = self.irq_status() & !(IRQ_RX | IRQ_RX_SOF_DET);
                self.registers.insert(REG_IRQ_STATUS, remaining);
                match self.tag_responses.pop_front() {
                    Some(resp) => {
                        self.registers.insert(REG_RX_STATUS, resp.len() as u32);
                        self.rx_buffer = resp;
                        self.raise_irq(IRQ_TX | IRQ_RX | IRQ_RX_SOF_DET);
                    }
                    None => {
                        self.registers.insert(REG_RX_STATUS, 0);
                        self.rx_buffer.clear();
                        self.raise_irq(IRQ_TX);
                    }
                }
            }
            (CMD_READ_DATA, 2) => {
                self.pending = Some(self.rx_buffer.clone());
                if self.drop_sof_after_read {
                    let remaining = self.irq_status() & !IRQ_RX_SOF_DET;
                    self.registers.insert(REG_IRQ_STATUS, remaining);
                }
            }
            (CMD_LOAD_RF_CONFIG, 3) => self.rf_configs.push(RfConfig::new(frame[1], frame[2])),
            (CMD_RF_ON, 2) => self.raise_irq(IRQ_TX_RFON),
            (CMD_RF_OFF, 2) => self.raise_irq(IRQ_TX_RFOFF),
            _ => {
                // Unknown or malformed command: the real chip raises a
                // general error IRQ which this mock does not model.
            }
        }
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MockBus {
    fn set_nss(&mut self, selected: bool) -> Result<()> {
        if selected && !self.selected {
            self.selected = true;
            self.transactions += 1;
            self.window.clear();
            self.read_pos = 0;
            self.reading = self.pending.is_some();
        } else if !selected && self.selected {
            self.selected = false;
            if self.reading {
                self.pending = None;
                self.reading = false;
            } else if !self.window.is_empty() {
                let frame = std::mem::take(&mut self.window);
                self.execute(&frame);
                self.frames.push(frame);
            }
            self.busy = false;
        }
        Ok(())
    }

    fn set_reset(&mut self, asserted: bool) -> Result<()> {
        if asserted {
            self.in_reset = true;
            self.registers.clear();
            self.pending = None;
            self.rx_buffer.clear();
        } else if self.in_reset {
            self.in_reset = false;
            self.raise_irq(IRQ_IDLE);
        }
        Ok(())
    }

    fn is_busy(&mut self) -> Result<bool> {
        Ok(self.stuck_busy.unwrap_or(self.busy))
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<()> {
        if self.fail_transfers {
            return Err(Error::Bus("simulated spi failure".into()));
        }
        if !self.selected {
            return Err(Error::Bus("transfer while NSS released".into()));
        }
        if self.reading {
            let pending = self.pending.as_deref().unwrap_or(&[]);
            for w in words.iter_mut() {
                *w = pending.get(self.read_pos).copied().unwrap_or(SPI_FILLER);
                self.read_pos += 1;
            }
        } else {
            self.window.extend_from_slice(words);
            words.fill(0x00);
        }
        self.busy = true;
        Ok(())
    }
}

/// Virtual clock for tests: `delay` advances time instantly.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Duration,
    /// Number of `delay` calls observed.
    pub delays: usize,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn delay(&mut self, duration: Duration) {
        self.delays += 1;
        self.now += duration;
    }
}
