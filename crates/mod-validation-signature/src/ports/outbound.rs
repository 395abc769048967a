//! # Outbound Ports (Driven Ports)
//!
//! Host capabilities this module consumes. Each is a single synchronous
//! round-trip: the host's transaction-execution envelope owns timeouts and
//! metering, so no timeout surfaces here.

use crate::domain::errors::StoreError;
use account_protocol::{AccountId, AuthorityClass, CallContext};

/// The external signer module that validates one signature against one
/// message for one account.
///
/// The result is authoritative and final for that signature; the module
/// never retries a query.
pub trait SignerOracle {
    /// True if `signature` is a valid signature by `account` over the
    /// message identified by `message_id`.
    fn is_valid_signature(&self, account: &AccountId, signature: &[u8], message_id: &[u8])
        -> bool;
}

/// The host's authority checker, consulted by the administrative gate.
pub trait AuthorityGateway {
    /// True if the current call (described by `ctx`) is authorized to act
    /// as `account` under the given authorization class.
    fn check_authority(&self, account: &AccountId, class: AuthorityClass, ctx: &CallContext)
        -> bool;
}

/// Accessor for the transaction the host is currently executing.
///
/// Signatures are returned in the exact order the transaction presents
/// them; the tally is order-independent but evaluation order is observable
/// through tracing.
pub trait TransactionContext {
    /// Opaque identifier of the pending transaction, supplied by the host.
    /// The module binds signature validity to it but attaches no meaning.
    fn transaction_id(&self) -> Vec<u8>;

    /// The raw presented-signature set, order preserved, duplicates kept.
    fn signatures(&self) -> Vec<Vec<u8>>;
}

/// The durable key-value partition the host assigns to this module
/// instance.
///
/// Writes are synchronous and durable before the call returns. The host
/// serializes calls into the instance, so adapters need interior mutability
/// but no cross-call coordination. Partition deletion (uninstall) is a host
/// concern the module never sees.
pub trait ModuleStore {
    /// Read the last value written under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
