//! # Entry-Point Selectors
//!
//! Entry points are 32-bit method selectors: the first four bytes of the
//! SHA-256 digest of the method name, read big-endian. Hosts and modules
//! must derive them identically or routing breaks.

use crate::entities::EntryPoint;
use sha2::{Digest, Sha256};

/// Derive the entry-point id for a method name.
pub fn entry_point_id(method: &str) -> EntryPoint {
    let digest = Sha256::digest(method.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
