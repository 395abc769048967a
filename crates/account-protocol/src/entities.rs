//! # Protocol Entities
//!
//! Core data structures shared by the host and its modules.

use serde::{Deserialize, Serialize};

/// Numeric identifier of an operation entry point (a 32-bit method selector).
pub type EntryPoint = u32;

/// An opaque account identifier.
///
/// In practice this is a 20–25 byte address, but the module system treats it
/// as an uninterpreted byte string; only the host knows the address format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Vec<u8>);

impl AccountId {
    /// Create an account id from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True if the identifier carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for AccountId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for AccountId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A pending operation the host asks a validation module to authorize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// The contract the operation targets.
    pub contract_id: AccountId,
    /// The entry point being invoked on that contract.
    pub entry_point: EntryPoint,
    /// Raw call arguments, already encoded by the caller.
    pub args: Vec<u8>,
}

/// Execution context for one call into a module.
///
/// The host constructs one per dispatch and threads it into every module
/// operation, so module logic stays a pure function of its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The account on whose behalf the current call was made.
    pub caller: AccountId,
}

impl CallContext {
    /// Build a context for a call made by `caller`.
    pub fn new(caller: AccountId) -> Self {
        Self { caller }
    }
}

/// Authorization classes understood by the host's authority checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorityClass {
    /// Authority to call into a contract as the account.
    ContractCall,
    /// Authority to apply a transaction as the account.
    TransactionApplication,
    /// Authority to upload contract code as the account.
    ContractUpload,
}

impl AuthorityClass {
    /// Canonical scope name used in module manifests.
    pub fn scope_name(self) -> &'static str {
        match self {
            AuthorityClass::ContractCall => "contract_call",
            AuthorityClass::TransactionApplication => "transaction_application",
            AuthorityClass::ContractUpload => "contract_upload",
        }
    }
}
