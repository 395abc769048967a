//! # Wire Payloads
//!
//! Fixed-schema binary messages for each module operation, plus the codec
//! shared with the configuration store. Encoding is bincode with its
//! variable-length integer representation, so small thresholds and short
//! allow-lists stay compact on the wire.
//!
//! Mechanical glue: the interesting decisions live in `domain` and
//! `service`.

use crate::domain::errors::CodecError;
use account_protocol::{EntryPoint, Manifest, Operation};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Encode a payload with the module's canonical binary options.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::options()
        .serialize(value)
        .map_err(|e| CodecError::new(e.to_string()))
}

/// Decode a payload with the module's canonical binary options.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    bincode::options()
        .deserialize(bytes)
        .map_err(|e| CodecError::new(e.to_string()))
}

/// `is_valid_operation` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsValidOperationArgs {
    /// The pending operation the host wants authorized.
    pub operation: Operation,
}

/// `is_valid_operation` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsValidOperationResult {
    /// The authorization decision; false is a deny, not a failure.
    pub value: bool,
}

/// `set_threshold` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetThresholdArgs {
    /// New threshold; 0 is the unanimity sentinel.
    pub value: u32,
}

/// `get_threshold` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetThresholdResult {
    /// Current threshold.
    pub value: u32,
}

/// `add_only_entry_point` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnlyEntryPointArgs {
    /// Entry point to add to the allow-list.
    pub entry_point: EntryPoint,
}

/// `remove_only_entry_point` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOnlyEntryPointArgs {
    /// Entry point to remove from the allow-list.
    pub entry_point: EntryPoint,
}

/// `get_only_entry_points` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOnlyEntryPointsResult {
    /// Allow-list contents in insertion order.
    pub value: Vec<EntryPoint>,
}

/// `get_account_binding` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountBindingResult {
    /// Raw bytes of the bound account identifier.
    pub value: Vec<u8>,
}

/// `manifest` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestResult {
    /// Static module self-description.
    pub value: Manifest,
}
