// pn5180-rs/pn5180/src/device/mod.rs

pub mod builder;
pub mod handle;
mod irq;
mod registers;
mod rf;
pub mod traits;

pub use builder::Pn5180Builder;
pub use handle::{Initialized, Pn5180, Uninitialized};
pub use traits::Frontend;
