//! Deadline helpers for the bounded polling loops.
//!
//! Every wait in the driver is expressed as a wall-clock deadline measured on
//! the injected [`Clock`], so the timeout does not depend on how long one
//! poll interval actually sleeps.

use std::time::Duration;

use crate::transport::Clock;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convert microseconds to Duration.
pub fn us(us: u64) -> Duration {
    Duration::from_micros(us)
}

/// A point in time on a [`Clock`] after which a wait has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Duration,
    timeout: Duration,
}

impl Deadline {
    /// Deadline `timeout` from the clock's current time.
    pub fn after<C: Clock + ?Sized>(clock: &C, timeout: Duration) -> Self {
        Self {
            expires_at: clock.now().saturating_add(timeout),
            timeout,
        }
    }

    pub fn is_expired<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        clock.now() >= self.expires_at
    }

    /// The timeout this deadline was created with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
