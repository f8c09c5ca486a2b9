// pn5180-rs/pn5180/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use crate::config::Config;
use crate::transport::{Bus, Clock, HostInterface};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// PN5180 handle that enforces the cold-start reset at compile time.
///
/// A freshly built handle only offers [`reset`](Pn5180::reset). Register,
/// buffer and RF commands become available on the `Initialized` handle it
/// returns.
pub struct Pn5180<B, C, State = Uninitialized> {
    pub(super) host: HostInterface<B, C>,
    _state: PhantomData<State>,
}

impl<B: Bus, C: Clock> Pn5180<B, C, Uninitialized> {
    pub fn new(bus: B, clock: C, config: Config) -> Self {
        Self {
            host: HostInterface::new(bus, clock, config),
            _state: PhantomData,
        }
    }

    /// Hard reset the chip, wait for IDLE and clear every IRQ flag.
    /// Returns an initialized handle on success.
    pub fn reset(self) -> Result<Pn5180<B, C, Initialized>> {
        let mut this = self;
        this.reset_sequence()?;
        Ok(Pn5180 {
            host: this.host,
            _state: PhantomData,
        })
    }
}

impl<B: Bus, C: Clock> Pn5180<B, C, Initialized> {
    /// Run the reset sequence again on an already initialized chip.
    pub fn reset(&mut self) -> Result<()> {
        self.reset_sequence()
    }
}

impl<B: Bus, C: Clock, State> Pn5180<B, C, State> {
    pub fn config(&self) -> &Config {
        self.host.config()
    }

    pub fn clock(&self) -> &C {
        self.host.clock()
    }

    pub fn bus(&self) -> &B {
        self.host.bus()
    }

    pub fn bus_mut(&mut self) -> &mut B {
        self.host.bus_mut()
    }

    /// Block on the handle's clock.
    pub fn delay(&mut self, duration: Duration) {
        self.host.delay(duration);
    }

    /// Give back the bus and clock.
    pub fn release(self) -> (B, C) {
        self.host.release()
    }
}
