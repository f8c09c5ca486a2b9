// pn5180-rs/pn5180/src/device/builder.rs

use crate::config::Config;
use crate::device::handle::{Initialized, Pn5180, Uninitialized};
use crate::transport::{Bus, Clock, StdClock};
use crate::Result;

/// Helper to construct a [`Pn5180`] with optional configuration.
pub struct Pn5180Builder<B, C = StdClock> {
    bus: B,
    clock: C,
    config: Config,
}

impl<B: Bus> Pn5180Builder<B, StdClock> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            clock: StdClock::new(),
            config: Config::default(),
        }
    }
}

impl<B: Bus, C: Clock> Pn5180Builder<B, C> {
    /// Replace the clock (e.g. a virtual clock in tests).
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Pn5180Builder<B, C2> {
        Pn5180Builder {
            bus: self.bus,
            clock,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized handle.
    pub fn build_uninitialized(self) -> Pn5180<B, C, Uninitialized> {
        Pn5180::new(self.bus, self.clock, self.config)
    }

    /// Build and run the reset sequence.
    pub fn initialize(self) -> Result<Pn5180<B, C, Initialized>> {
        self.build_uninitialized().reset()
    }
}
