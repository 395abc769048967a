//! # Threshold Tally
//!
//! The decision rule applied once, after every presented signature has been
//! checked against the signer oracle.

/// Apply threshold semantics to a finished tally.
///
/// * `threshold == 0` is the unanimity sentinel: every presented signature
///   must have validated (`valid == presented`). Zero presented signatures
///   are vacuously unanimous.
/// * `threshold > 0` is a quorum: at least `threshold` signatures must have
///   validated. Extra invalid signatures are tolerated.
pub fn meets_threshold(valid: usize, presented: usize, threshold: u32) -> bool {
    if threshold == 0 {
        valid == presented
    } else {
        valid >= threshold as usize
    }
}
