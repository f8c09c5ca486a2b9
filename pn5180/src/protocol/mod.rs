// pn5180-rs/pn5180/src/protocol/mod.rs

pub mod commands;
pub mod flags;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use flags::RequestFlags;
pub use responses::*;
