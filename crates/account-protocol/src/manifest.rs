//! # Module Manifests
//!
//! Static self-description a module returns for host discovery. Reading a
//! manifest touches no storage; it is constant metadata.

use crate::entities::EntryPoint;
use serde::{Deserialize, Serialize};

/// Module type id the host uses to slot validation modules.
pub const MODULE_VALIDATION_TYPE_ID: u32 = 1;

/// One scope a module declares itself relevant for.
///
/// A scope names an authorization class and, optionally, a single entry
/// point the module wants routed to it within that class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleScope {
    /// Authorization class name (`contract_call`, `transaction_application`,
    /// `contract_upload`).
    pub class: String,
    /// Entry point restriction within the class, if any.
    pub entry_point: Option<EntryPoint>,
}

impl ModuleScope {
    /// Scope over a whole authorization class.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            entry_point: None,
        }
    }

    /// Scope over a single entry point within a class.
    pub fn entry_point(class: impl Into<String>, entry_point: EntryPoint) -> Self {
        Self {
            class: class.into(),
            entry_point: Some(entry_point),
        }
    }
}

/// Module self-description returned by `manifest()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Human-readable module name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Module type id (validation modules use [`MODULE_VALIDATION_TYPE_ID`]).
    pub type_id: u32,
    /// Module version string.
    pub version: String,
    /// Scopes the module declares.
    pub scopes: Vec<ModuleScope>,
}
