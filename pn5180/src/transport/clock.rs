// pn5180-rs/pn5180/src/transport/clock.rs

use std::time::{Duration, Instant};

/// Monotonic time source and blocking delay used by every wait in the driver.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed epoch.
    fn now(&self) -> Duration;

    /// Block for at least `duration`.
    fn delay(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }
}

/// [`Clock`] backed by `std::time::Instant` and `thread::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
