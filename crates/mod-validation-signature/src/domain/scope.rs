//! # Entry-Point Scope Filter
//!
//! Decides whether the threshold check applies to a call at all. Pure and
//! total: no storage, no host round-trips.

use account_protocol::EntryPoint;

/// True if the threshold check applies to `candidate`.
///
/// An empty allow-list means the check guards every entry point (fail-safe
/// default). A non-empty list restricts the check to the listed entry
/// points; everything else bypasses the module entirely — the host's own
/// module-scoping already limits what gets routed here.
///
/// Order- and duplicate-independent.
pub fn applies(only_entry_points: &[EntryPoint], candidate: EntryPoint) -> bool {
    only_entry_points.is_empty() || only_entry_points.contains(&candidate)
}
