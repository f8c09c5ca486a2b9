// pn5180-rs/pn5180/src/transport/mod.rs

pub mod clock;
pub mod host;
pub mod mock;
#[cfg(feature = "hal")]
pub mod spi;
pub mod traits;

pub use clock::{Clock, StdClock};
pub use host::HostInterface;
pub use mock::{MockBus, MockClock};
#[cfg(feature = "hal")]
pub use spi::SpiInterface;
pub use traits::Bus;
