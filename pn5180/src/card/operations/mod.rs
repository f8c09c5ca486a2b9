// pn5180-rs/pn5180/src/card/operations/mod.rs

pub mod inventory;
pub mod read;
pub mod state;
pub mod system;
pub mod write;

// Re-export the per-command helpers at the operations root so callers can
// use `crate::card::operations::read_single_block(...)`.
pub use inventory::{detect, inventory};
pub use read::{get_multiple_block_security_status, read_multiple_blocks, read_single_block};
pub use state::{reset_to_ready, select, stay_quiet};
pub use system::{get_system_info, lock_afi, lock_dsfid, setup_rf, write_afi, write_dsfid};
pub use write::{lock_block, write_multiple_blocks, write_single_block};
