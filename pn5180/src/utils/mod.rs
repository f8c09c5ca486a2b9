//! Utilities for pn5180: small, reusable helpers used across the crate.
//!
//! Hex rendering for diagnostics and deadline arithmetic for the bounded
//! polling loops.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
