// pn5180-rs/pn5180/src/config.rs
//! Host interface timing

use std::time::Duration;

use crate::utils::{ms, us};

/// Timing used by the BUSY handshake, reset sequence and IRQ waits.
///
/// Defaults follow the PN5180 datasheet recommendations: BUSY settles within
/// 100 ms, NSS needs a short setup time, RESET must be held for at least
/// 10 µs and the chip needs ~2 ms to boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Upper bound for every BUSY level wait.
    pub busy_timeout: Duration,
    /// Sleep between two polls of the BUSY line or IRQ status.
    pub poll_interval: Duration,
    /// Delay between asserting NSS and clocking the first byte.
    pub nss_setup_delay: Duration,
    /// Delay after releasing NSS before waiting for BUSY low.
    pub nss_release_delay: Duration,
    /// How long RESET is held low.
    pub reset_hold: Duration,
    /// Delay after releasing RESET before polling for IDLE.
    pub startup_delay: Duration,
    /// Upper bound for IRQ waits (RF on/off, IDLE after reset).
    pub irq_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            busy_timeout: ms(100),
            poll_interval: us(50),
            nss_setup_delay: ms(2),
            nss_release_delay: ms(1),
            reset_hold: ms(10),
            startup_delay: ms(10),
            irq_timeout: ms(500),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_nss_delays(mut self, setup: Duration, release: Duration) -> Self {
        self.nss_setup_delay = setup;
        self.nss_release_delay = release;
        self
    }

    pub fn with_reset_timing(mut self, hold: Duration, startup: Duration) -> Self {
        self.reset_hold = hold;
        self.startup_delay = startup;
        self
    }

    pub fn with_irq_timeout(mut self, timeout: Duration) -> Self {
        self.irq_timeout = timeout;
        self
    }
}
