// pn5180-rs/pn5180/src/transport/traits.rs

use crate::Result;

/// Bus trait abstracts the SPI peripheral and the three control lines away
/// from the host interface protocol.
///
/// Implementations carry no protocol knowledge: they move bytes and toggle
/// lines. The handshake ordering lives in [`HostInterface`](super::HostInterface).
pub trait Bus {
    /// Drive NSS. `true` selects the chip (line low).
    fn set_nss(&mut self, selected: bool) -> Result<()>;

    /// Drive RESET. `true` holds the chip in reset (line low).
    fn set_reset(&mut self, asserted: bool) -> Result<()>;

    /// Sample the BUSY line.
    fn is_busy(&mut self) -> Result<bool>;

    /// Full-duplex exchange: clock out `words` and replace them with the
    /// bytes clocked in.
    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<()>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn set_nss(&mut self, selected: bool) -> Result<()> {
        (**self).set_nss(selected)
    }

    fn set_reset(&mut self, asserted: bool) -> Result<()> {
        (**self).set_reset(asserted)
    }

    fn is_busy(&mut self) -> Result<bool> {
        (**self).is_busy()
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<()> {
        (**self).transfer_in_place(words)
    }
}
