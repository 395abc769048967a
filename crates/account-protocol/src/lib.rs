//! # Account Protocol Crate
//!
//! Shared contract between a smart-account host and its pluggable modules.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses the host/module
//!   boundary is defined here, never duplicated inside a module crate.
//! - **Explicit Context**: modules receive the caller identity as a
//!   [`CallContext`] parameter on every operation. There is no ambient
//!   "current caller" state to reach for.
//! - **Opaque Identity**: account identifiers and transaction ids are opaque
//!   byte strings; the host owns their format.

pub mod entities;
pub mod manifest;
pub mod selector;

pub use entities::{AccountId, AuthorityClass, CallContext, EntryPoint, Operation};
pub use manifest::{Manifest, ModuleScope, MODULE_VALIDATION_TYPE_ID};
pub use selector::entry_point_id;
