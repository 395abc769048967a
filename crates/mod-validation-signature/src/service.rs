//! # Validation Signature Service
//!
//! Application service wiring the domain rules to the host's capabilities.
//! Implements the inbound [`ValidationModuleApi`] and consumes the four
//! outbound ports: signer oracle, authority gateway, transaction context,
//! and the storage partition (behind the typed [`ConfigStore`]).
//!
//! Every decision point emits a trace line so an auditor can reconstruct
//! which branch was taken (skipped / succeeded / failed) without the log
//! output ever changing the returned value.

use crate::config::ConfigStore;
use crate::domain::entities::{ModuleDefaults, CONTRACT_CALL_SCOPE_ENTRY_POINT};
use crate::domain::errors::ValidationError;
use crate::domain::{scope, tally};
use crate::ports::inbound::ValidationModuleApi;
use crate::ports::outbound::{AuthorityGateway, ModuleStore, SignerOracle, TransactionContext};
use account_protocol::{
    AccountId, AuthorityClass, CallContext, EntryPoint, Manifest, ModuleScope, Operation,
    MODULE_VALIDATION_TYPE_ID,
};
use tracing::{info, warn};

const MODULE_NAME: &str = "Validation Signature";
const MODULE_DESCRIPTION: &str = "Validate a transaction with a signature";
const MODULE_VERSION: &str = "2.0.0";

/// Signature-threshold validation module.
///
/// One instance protects exactly one account; the host serializes every
/// call into the instance, so each operation runs as a single atomic step.
pub struct ValidationSignatureService<S, A, T, K>
where
    S: SignerOracle,
    A: AuthorityGateway,
    T: TransactionContext,
    K: ModuleStore,
{
    signer: S,
    authority: A,
    transaction: T,
    config: ConfigStore<K>,
    defaults: ModuleDefaults,
}

impl<S, A, T, K> ValidationSignatureService<S, A, T, K>
where
    S: SignerOracle,
    A: AuthorityGateway,
    T: TransactionContext,
    K: ModuleStore,
{
    /// Wire the service to its host capabilities with default install policy.
    pub fn new(signer: S, authority: A, transaction: T, partition: K) -> Self {
        Self::with_defaults(signer, authority, transaction, partition, ModuleDefaults::default())
    }

    /// Wire the service with an explicit install policy (pre-populated
    /// allow-list or non-default threshold).
    pub fn with_defaults(
        signer: S,
        authority: A,
        transaction: T,
        partition: K,
        defaults: ModuleDefaults,
    ) -> Self {
        Self {
            signer,
            authority,
            transaction,
            config: ConfigStore::new(partition),
            defaults,
        }
    }

    /// Borrow the typed configuration store (read-side test access).
    pub fn config(&self) -> &ConfigStore<K> {
        &self.config
    }

    /// Administrative gate: every configuration mutation passes through
    /// here before touching storage, so a rejected call mutates nothing.
    fn require_admin(&self, ctx: &CallContext) -> Result<(), ValidationError> {
        let binding = self.config.account_binding()?;
        if self
            .authority
            .check_authority(&binding, AuthorityClass::ContractCall, ctx)
        {
            Ok(())
        } else {
            warn!("[mod-validation-signature] admin call rejected: not authorized by the account");
            Err(ValidationError::Unauthorized)
        }
    }

    /// Count valid signatures for the pending transaction and apply the
    /// threshold once. Signatures are checked in presented order, one
    /// oracle round-trip each, never retried, never deduplicated.
    fn tally_signatures(&self, binding: &AccountId, threshold: u32) -> bool {
        let message_id = self.transaction.transaction_id();
        let signatures = self.transaction.signatures();

        let mut valid = 0usize;
        for signature in &signatures {
            if self
                .signer
                .is_valid_signature(binding, signature, &message_id)
            {
                valid += 1;
            }
        }

        tally::meets_threshold(valid, signatures.len(), threshold)
    }
}

impl<S, A, T, K> ValidationModuleApi for ValidationSignatureService<S, A, T, K>
where
    S: SignerOracle,
    A: AuthorityGateway,
    T: TransactionContext,
    K: ModuleStore,
{
    fn on_install(&self, ctx: &CallContext) -> Result<(), ValidationError> {
        self.config.set_account_binding(&ctx.caller)?;
        self.config.set_threshold(self.defaults.threshold)?;
        self.config
            .set_only_entry_points(&self.defaults.deduplicated_entry_points())?;

        info!("[mod-validation-signature] called on_install");
        Ok(())
    }

    fn manifest(&self) -> Manifest {
        Manifest {
            name: MODULE_NAME.to_string(),
            description: MODULE_DESCRIPTION.to_string(),
            type_id: MODULE_VALIDATION_TYPE_ID,
            version: MODULE_VERSION.to_string(),
            scopes: vec![
                ModuleScope::class(AuthorityClass::ContractUpload.scope_name()),
                ModuleScope::class(AuthorityClass::TransactionApplication.scope_name()),
                ModuleScope::entry_point(
                    AuthorityClass::ContractCall.scope_name(),
                    CONTRACT_CALL_SCOPE_ENTRY_POINT,
                ),
            ],
        }
    }

    fn is_valid_operation(
        &self,
        _ctx: &CallContext,
        operation: &Operation,
    ) -> Result<bool, ValidationError> {
        info!("[mod-validation-signature] is_valid_operation called");

        let only_entry_points = self.config.only_entry_points()?;
        if !scope::applies(&only_entry_points, operation.entry_point) {
            // Out of scope: full bypass, the signer oracle is not consulted.
            info!(
                entry_point = operation.entry_point,
                "[mod-validation-signature] check signature skipped"
            );
            return Ok(true);
        }

        let binding = self.config.account_binding()?;
        let threshold = self.config.threshold()?;
        let authorized = self.tally_signatures(&binding, threshold);

        if authorized {
            info!("[mod-validation-signature] check signature succeeded");
        } else {
            info!("[mod-validation-signature] check signature failed");
        }
        Ok(authorized)
    }

    fn get_threshold(&self) -> Result<u32, ValidationError> {
        self.config.threshold()
    }

    fn set_threshold(&self, ctx: &CallContext, value: u32) -> Result<(), ValidationError> {
        self.require_admin(ctx)?;
        self.config.set_threshold(value)
    }

    fn get_only_entry_points(&self) -> Result<Vec<EntryPoint>, ValidationError> {
        self.config.only_entry_points()
    }

    fn add_only_entry_point(
        &self,
        ctx: &CallContext,
        entry_point: EntryPoint,
    ) -> Result<(), ValidationError> {
        self.require_admin(ctx)?;
        self.config.add_entry_point(entry_point)
    }

    fn remove_only_entry_point(
        &self,
        ctx: &CallContext,
        entry_point: EntryPoint,
    ) -> Result<(), ValidationError> {
        self.require_admin(ctx)?;
        self.config.remove_entry_point(entry_point)
    }

    fn get_account_binding(&self) -> Result<AccountId, ValidationError> {
        self.config.account_binding()
    }
}

// =============================================================================
// TESTS
// =============================================================================
