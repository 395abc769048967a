//! # Domain Entities
//!
//! Configuration records held by one installed module instance.

use account_protocol::EntryPoint;
use serde::{Deserialize, Serialize};

/// Threshold applied when an instance is installed without an explicit policy.
pub const DEFAULT_THRESHOLD: u32 = 1;

/// Entry point the module declares under the `contract_call` scope in its
/// manifest. The host routes only this entry point to the module within
/// that class.
pub const CONTRACT_CALL_SCOPE_ENTRY_POINT: EntryPoint = 1_090_552_691;

/// Install-time policy for a module instance.
///
/// A deployment may pre-populate the allow-list so the threshold check only
/// guards selected entry points from the start; the default (empty list)
/// applies the check to every entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefaults {
    /// Signature threshold written at install time.
    pub threshold: u32,
    /// Allow-list written at install time. Duplicates are collapsed on
    /// install, preserving first occurrence order.
    pub only_entry_points: Vec<EntryPoint>,
}

impl Default for ModuleDefaults {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            only_entry_points: Vec::new(),
        }
    }
}

impl ModuleDefaults {
    /// The allow-list with duplicates removed, first occurrence kept.
    pub fn deduplicated_entry_points(&self) -> Vec<EntryPoint> {
        let mut out: Vec<EntryPoint> = Vec::with_capacity(self.only_entry_points.len());
        for &ep in &self.only_entry_points {
            if !out.contains(&ep) {
                out.push(ep);
            }
        }
        out
    }
}
