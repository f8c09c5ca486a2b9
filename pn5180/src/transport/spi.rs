// pn5180-rs/pn5180/src/transport/spi.rs

use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::transport::Bus;
use crate::{Error, Result};

/// [`Bus`] over embedded-hal 1.0 peripherals.
///
/// NSS is driven manually as a GPIO because the PN5180 needs the select
/// line held across the BUSY handshake, which `SpiDevice` cannot express.
/// NSS and RESET are active low.
pub struct SpiInterface<SPI, NSS, RST, BUSY> {
    spi: SPI,
    nss: NSS,
    reset: RST,
    busy: BUSY,
}

impl<SPI, NSS, RST, BUSY> SpiInterface<SPI, NSS, RST, BUSY>
where
    SPI: SpiBus<u8>,
    NSS: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    pub fn new(spi: SPI, nss: NSS, reset: RST, busy: BUSY) -> Self {
        Self {
            spi,
            nss,
            reset,
            busy,
        }
    }

    pub fn release(self) -> (SPI, NSS, RST, BUSY) {
        (self.spi, self.nss, self.reset, self.busy)
    }
}

fn pin_error<E: digital::Error>(line: &str, e: E) -> Error {
    Error::Bus(format!("{} pin: {:?}", line, e.kind()))
}

fn spi_error<E: spi::Error>(e: E) -> Error {
    Error::Bus(format!("spi: {:?}", e.kind()))
}

impl<SPI, NSS, RST, BUSY> Bus for SpiInterface<SPI, NSS, RST, BUSY>
where
    SPI: SpiBus<u8>,
    NSS: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    fn set_nss(&mut self, selected: bool) -> Result<()> {
        let r = if selected {
            self.nss.set_low()
        } else {
            self.nss.set_high()
        };
        r.map_err(|e| pin_error("nss", e))
    }

    fn set_reset(&mut self, asserted: bool) -> Result<()> {
        let r = if asserted {
            self.reset.set_low()
        } else {
            self.reset.set_high()
        };
        r.map_err(|e| pin_error("reset", e))
    }

    fn is_busy(&mut self) -> Result<bool> {
        self.busy.is_high().map_err(|e| pin_error("busy", e))
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<()> {
        self.spi.transfer_in_place(words).map_err(spi_error)?;
        self.spi.flush().map_err(spi_error)
    }
}
