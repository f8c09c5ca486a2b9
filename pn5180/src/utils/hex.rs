// pn5180-rs/pn5180/src/utils/hex.rs
//! Hex rendering for log lines and `Display` impls.

use std::fmt::Write;

/// Lowercase hex, no separators: `[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    join_hex(bytes, "")
}

/// Lowercase hex, one space between bytes: `[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, " ")
}

fn join_hex(bytes: &[u8], sep: &str) -> String {
    let mut out = String::with_capacity(bytes.len() * (2 + sep.len()));
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{:02x}", b);
    }
    out
}
