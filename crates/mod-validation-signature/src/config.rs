//! # Configuration Store
//!
//! Typed access to the module's three configuration records over the raw
//! key-value partition: the account binding (written once at install), the
//! signature threshold, and the entry-point allow-list.
//!
//! One canonical storage layout: each record under its own key. Reads of a
//! record that installation never wrote fail with
//! [`ValidationError::NotConfigured`] instead of dereferencing a missing
//! value.

use crate::domain::errors::ValidationError;
use crate::ports::outbound::ModuleStore;
use crate::wire;
use account_protocol::{AccountId, EntryPoint};

const KEY_ACCOUNT: &[u8] = b"account";
const KEY_THRESHOLD: &[u8] = b"threshold";
const KEY_ONLY_ENTRY_POINTS: &[u8] = b"only_entry_points";

/// Typed configuration store over a [`ModuleStore`] partition.
#[derive(Debug)]
pub struct ConfigStore<K: ModuleStore> {
    partition: K,
}

impl<K: ModuleStore> ConfigStore<K> {
    /// Wrap a storage partition.
    pub fn new(partition: K) -> Self {
        Self { partition }
    }

    /// Borrow the underlying partition.
    pub fn partition(&self) -> &K {
        &self.partition
    }

    fn read<T: serde::de::DeserializeOwned>(
        &self,
        key: &'static [u8],
        record: &'static str,
    ) -> Result<T, ValidationError> {
        let bytes = self
            .partition
            .get(key)?
            .ok_or(ValidationError::NotConfigured(record))?;
        Ok(wire::decode(&bytes)?)
    }

    fn write<T: serde::Serialize>(&self, key: &[u8], value: &T) -> Result<(), ValidationError> {
        let bytes = wire::encode(value)?;
        self.partition.put(key, &bytes)?;
        Ok(())
    }

    /// The bound account identifier.
    pub fn account_binding(&self) -> Result<AccountId, ValidationError> {
        self.read(KEY_ACCOUNT, "account")
    }

    /// Write the account binding. Called once, at install; the binding is
    /// immutable afterwards because nothing else writes this key.
    pub fn set_account_binding(&self, account: &AccountId) -> Result<(), ValidationError> {
        self.write(KEY_ACCOUNT, account)
    }

    /// The current signature threshold.
    pub fn threshold(&self) -> Result<u32, ValidationError> {
        self.read(KEY_THRESHOLD, "threshold")
    }

    /// Replace the signature threshold. Any unsigned value is legal; an
    /// unreachable threshold is a valid always-deny configuration.
    pub fn set_threshold(&self, value: u32) -> Result<(), ValidationError> {
        self.write(KEY_THRESHOLD, &value)
    }

    /// The entry-point allow-list, in insertion order.
    pub fn only_entry_points(&self) -> Result<Vec<EntryPoint>, ValidationError> {
        self.read(KEY_ONLY_ENTRY_POINTS, "only_entry_points")
    }

    /// Replace the allow-list wholesale. Install uses this for defaults.
    pub fn set_only_entry_points(
        &self,
        entry_points: &[EntryPoint],
    ) -> Result<(), ValidationError> {
        self.write(KEY_ONLY_ENTRY_POINTS, &entry_points.to_vec())
    }

    /// Add an entry point to the allow-list. Adding a present id is a
    /// no-op, so the list never holds duplicates.
    pub fn add_entry_point(&self, entry_point: EntryPoint) -> Result<(), ValidationError> {
        let mut list = self.only_entry_points()?;
        if !list.contains(&entry_point) {
            list.push(entry_point);
            self.set_only_entry_points(&list)?;
        }
        Ok(())
    }

    /// Remove an entry point from the allow-list. Removing an absent id is
    /// a no-op.
    pub fn remove_entry_point(&self, entry_point: EntryPoint) -> Result<(), ValidationError> {
        let mut list = self.only_entry_points()?;
        let before = list.len();
        list.retain(|&ep| ep != entry_point);
        if list.len() != before {
            self.set_only_entry_points(&list)?;
        }
        Ok(())
    }
}
