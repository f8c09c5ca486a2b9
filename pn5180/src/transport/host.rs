// pn5180-rs/pn5180/src/transport/host.rs

use std::time::Duration;

use log::warn;

use crate::config::Config;
use crate::constants::{MAX_FRAME_LEN, SPI_FILLER};
use crate::transport::{Bus, Clock};
use crate::utils::Deadline;
use crate::{Error, Result};

/// PN5180 host interface: one direct command per call, synchronised with
/// the chip through the BUSY line.
///
/// A command is one or two SPI frames. Each frame follows the sequence the
/// datasheet recommends:
///
/// 1. assert NSS
/// 2. exchange data
/// 3. wait until BUSY is high
/// 4. deassert NSS
/// 5. wait until BUSY is low
pub struct HostInterface<B, C> {
    bus: B,
    clock: C,
    config: Config,
}

impl<B: Bus, C: Clock> HostInterface<B, C> {
    pub fn new(bus: B, clock: C, config: Config) -> Self {
        Self { bus, clock, config }
    }

    /// Send `frame` and, when `recv_len > 0`, read back `recv_len` bytes in a
    /// second SPI frame. Write-only commands return an empty vector.
    pub fn transceive(&mut self, frame: &[u8], recv_len: usize) -> Result<Vec<u8>> {
        if frame.is_empty() || frame.len() > MAX_FRAME_LEN {
            return Err(Error::InvalidFrame { len: frame.len() });
        }

        #[cfg(feature = "diagnostics")]
        log::trace!("spi >> {}", crate::utils::bytes_to_hex_spaced(frame));

        self.wait_for_busy(false)?;

        let mut out = frame.to_vec();
        self.exchange(&mut out)?;

        if recv_len == 0 {
            return Ok(Vec::new());
        }

        let mut resp = vec![SPI_FILLER; recv_len];
        self.exchange(&mut resp)?;

        #[cfg(feature = "diagnostics")]
        log::trace!("spi << {}", crate::utils::bytes_to_hex_spaced(&resp));

        Ok(resp)
    }

    /// Toggle the RESET line: hold the chip in reset, release it and give it
    /// time to boot. Waiting for the IDLE interrupt is left to the caller.
    pub fn hard_reset(&mut self) -> Result<()> {
        self.bus.set_nss(false)?;
        self.bus.set_reset(true)?;
        self.clock.delay(self.config.reset_hold);
        self.bus.set_reset(false)?;
        self.clock.delay(self.config.startup_delay);
        Ok(())
    }

    pub fn delay(&mut self, duration: Duration) {
        self.clock.delay(duration);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give back the bus and clock.
    pub fn release(self) -> (B, C) {
        (self.bus, self.clock)
    }

    /// One SPI frame: NSS stays selected for the whole exchange of `words`.
    fn exchange(&mut self, words: &mut [u8]) -> Result<()> {
        self.bus.set_nss(true)?;
        self.clock.delay(self.config.nss_setup_delay);

        let selected = self
            .bus
            .transfer_in_place(words)
            .and_then(|()| self.wait_for_busy(true));
        if let Err(e) = selected {
            // Never leave the chip selected after a failed frame.
            let _ = self.bus.set_nss(false);
            return Err(e);
        }

        self.bus.set_nss(false)?;
        self.clock.delay(self.config.nss_release_delay);
        self.wait_for_busy(false)
    }

    fn wait_for_busy(&mut self, busy: bool) -> Result<()> {
        let deadline = Deadline::after(&self.clock, self.config.busy_timeout);
        loop {
            if self.bus.is_busy()? == busy {
                return Ok(());
            }
            if deadline.is_expired(&self.clock) {
                warn!("busy line timeout waiting for busy={}", busy);
                return Err(Error::BusyTimeout {
                    expected_busy: busy,
                    timeout: deadline.timeout(),
                });
            }
            self.clock.delay(self.config.poll_interval);
        }
    }
}
