//! # Inbound Port (Driving Port / API)
//!
//! The module's full externally callable surface, one method per operation.
//! The host resolves which method a wire call maps to through its own
//! routing; this trait is the fixed, strongly typed operation set behind
//! that routing.

use crate::domain::errors::ValidationError;
use account_protocol::{AccountId, CallContext, EntryPoint, Manifest, Operation};

/// Public API of the signature-threshold validation module.
///
/// Every call runs to completion as one atomic step; the host serializes
/// calls into a module instance, so implementations need no internal
/// locking discipline beyond what their storage adapter requires.
pub trait ValidationModuleApi {
    /// Install-time initialization, invoked exactly once by the host.
    ///
    /// Captures `ctx.caller` as the account binding and writes the default
    /// threshold and allow-list. The host guarantees at-most-once delivery;
    /// the module does not defend against repeats.
    fn on_install(&self, ctx: &CallContext) -> Result<(), ValidationError>;

    /// Static self-description for host discovery. No storage access.
    fn manifest(&self) -> Manifest;

    /// Decide whether `operation` is authorized.
    ///
    /// A deny is reported as `Ok(false)`, never as an error: the host
    /// chooses what to do with a false result. Errors are reserved for
    /// broken installation invariants and storage failures.
    fn is_valid_operation(
        &self,
        ctx: &CallContext,
        operation: &Operation,
    ) -> Result<bool, ValidationError>;

    /// Current signature threshold.
    fn get_threshold(&self) -> Result<u32, ValidationError>;

    /// Replace the signature threshold. Admin-gated.
    fn set_threshold(&self, ctx: &CallContext, value: u32) -> Result<(), ValidationError>;

    /// Current entry-point allow-list, in insertion order.
    fn get_only_entry_points(&self) -> Result<Vec<EntryPoint>, ValidationError>;

    /// Add an entry point to the allow-list. Admin-gated; idempotent.
    fn add_only_entry_point(
        &self,
        ctx: &CallContext,
        entry_point: EntryPoint,
    ) -> Result<(), ValidationError>;

    /// Remove an entry point from the allow-list. Admin-gated; removing an
    /// absent id is a no-op.
    fn remove_only_entry_point(
        &self,
        ctx: &CallContext,
        entry_point: EntryPoint,
    ) -> Result<(), ValidationError>;

    /// The account this instance protects.
    fn get_account_binding(&self) -> Result<AccountId, ValidationError>;
}
