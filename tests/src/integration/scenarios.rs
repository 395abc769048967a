//! # End-to-End Scenarios
//!
//! Host-level flows: install, configure through the admin gate, authorize
//! pending operations.

use super::harness::{
    admin_ctx, bound_account, install, install_with_defaults, HostTransactionContext,
    ScriptedSignerOracle,
};
use account_protocol::{entry_point_id, AccountId, CallContext, Operation};
use mod_validation_signature::{
    ModuleDefaults, ValidationError, ValidationModuleApi, DEFAULT_THRESHOLD,
};

fn operation(entry_point: u32) -> Operation {
    Operation {
        contract_id: AccountId::new([0x01; 25]),
        entry_point,
        args: Vec::new(),
    }
}

/// Install with defaults, then authorize one valid signature at the
/// default threshold of 1.
#[test]
fn fresh_install_authorizes_one_valid_signature() {
    let service = install(
        ScriptedSignerOracle::accepting(&[b"sig-owner".as_slice()]),
        HostTransactionContext::new(b"tx-1", &[b"sig-owner".as_slice()]),
    );

    assert_eq!(service.get_threshold().unwrap(), DEFAULT_THRESHOLD);
    assert_eq!(service.get_account_binding().unwrap(), bound_account());
    assert!(service.get_only_entry_points().unwrap().is_empty());

    let ok = service
        .is_valid_operation(&admin_ctx(), &operation(0x0000_0001))
        .unwrap();
    assert!(ok);
}

/// Threshold 2 with exactly one oracle-valid signature out of two: denied.
#[test]
fn quorum_of_two_denies_single_valid_signature() {
    let service = install(
        ScriptedSignerOracle::accepting(&[b"sig-a".as_slice()]),
        HostTransactionContext::new(b"tx-2", &[b"sig-a".as_slice(), b"sig-b".as_slice()]),
    );
    service.set_threshold(&admin_ctx(), 2).unwrap();

    let ok = service
        .is_valid_operation(&admin_ctx(), &operation(0x0000_0001))
        .unwrap();
    assert!(!ok);
}

/// Add one entry point to the allow-list, then authorize a different entry
/// point with zero signatures: the check is skipped and the signer module
/// is never consulted.
#[test]
fn out_of_scope_operation_skips_signer_entirely() {
    let oracle = ScriptedSignerOracle::accepting(&[]);
    let handle = oracle.handle();
    let service = install(oracle, HostTransactionContext::new(b"tx-3", &[]));

    service
        .add_only_entry_point(&admin_ctx(), 0x410C_1733)
        .unwrap();

    let ok = service
        .is_valid_operation(&admin_ctx(), &operation(0x0BAD_F00D))
        .unwrap();
    assert!(ok);
    assert_eq!(handle.query_count(), 0);

    // The listed entry point itself is still checked, and zero signatures
    // against threshold 1 deny.
    let ok = service
        .is_valid_operation(&admin_ctx(), &operation(0x410C_1733))
        .unwrap();
    assert!(!ok);
}

/// Threshold 0 means unanimity: all three valid passes, then revoking one
/// signature flips the decision.
#[test]
fn unanimous_threshold_tracks_oracle_validity() {
    let oracle = ScriptedSignerOracle::accepting(&[b"s1".as_slice(), b"s2".as_slice(), b"s3".as_slice()]);
    let handle = oracle.handle();
    let service = install(
        oracle,
        HostTransactionContext::new(b"tx-4", &[b"s1".as_slice(), b"s2".as_slice(), b"s3".as_slice()]),
    );
    service.set_threshold(&admin_ctx(), 0).unwrap();

    assert!(service
        .is_valid_operation(&admin_ctx(), &operation(1))
        .unwrap());

    handle.revoke(b"s2");
    assert!(!service
        .is_valid_operation(&admin_ctx(), &operation(1))
        .unwrap());
}

/// Unauthorized callers cannot mutate configuration, and a rejected call
/// leaves the partition byte-for-byte unchanged.
#[test]
fn intruder_cannot_reconfigure_module() {
    let service = install(
        ScriptedSignerOracle::accepting(&[]),
        HostTransactionContext::new(b"tx-5", &[]),
    );
    let intruder = CallContext::new(AccountId::new([0x66; 25]));
    let before = service.config().partition().snapshot();

    assert_eq!(
        service.set_threshold(&intruder, 0),
        Err(ValidationError::Unauthorized)
    );
    assert_eq!(
        service.add_only_entry_point(&intruder, 1),
        Err(ValidationError::Unauthorized)
    );
    assert_eq!(
        service.remove_only_entry_point(&intruder, 1),
        Err(ValidationError::Unauthorized)
    );

    assert_eq!(service.config().partition().snapshot(), before);
    assert_eq!(service.get_threshold().unwrap(), DEFAULT_THRESHOLD);
}

/// Allow-list add/remove form an inverse pair and adding twice keeps the
/// list duplicate-free.
#[test]
fn allow_list_add_remove_round_trip() {
    let service = install(
        ScriptedSignerOracle::accepting(&[]),
        HostTransactionContext::new(b"tx-6", &[]),
    );
    let ctx = admin_ctx();

    service.add_only_entry_point(&ctx, 0x11).unwrap();
    service.add_only_entry_point(&ctx, 0x22).unwrap();
    service.add_only_entry_point(&ctx, 0x11).unwrap();
    assert_eq!(service.get_only_entry_points().unwrap(), vec![0x11, 0x22]);

    service.remove_only_entry_point(&ctx, 0x22).unwrap();
    assert_eq!(service.get_only_entry_points().unwrap(), vec![0x11]);

    service.remove_only_entry_point(&ctx, 0x22).unwrap();
    assert_eq!(service.get_only_entry_points().unwrap(), vec![0x11]);
}

/// Scoping a named method: the host derives the selector for its `test`
/// method, lists it, and only that entry point gets checked.
#[test]
fn named_method_selector_scopes_the_check() {
    let service = install(
        ScriptedSignerOracle::accepting(&[]),
        HostTransactionContext::new(b"tx-9", &[]),
    );
    let test_ep = entry_point_id("test");

    service.add_only_entry_point(&admin_ctx(), test_ep).unwrap();
    assert_eq!(service.get_only_entry_points().unwrap(), vec![test_ep]);

    // Zero signatures: the listed method is denied, any other is bypassed.
    assert!(!service
        .is_valid_operation(&admin_ctx(), &operation(test_ep))
        .unwrap());
    assert!(service
        .is_valid_operation(&admin_ctx(), &operation(entry_point_id("transfer")))
        .unwrap());
}

/// A deployment may pre-populate the allow-list at install; duplicates in
/// the policy collapse.
#[test]
fn install_policy_prepopulates_scope() {
    let service = install_with_defaults(
        ScriptedSignerOracle::accepting(&[]),
        HostTransactionContext::new(b"tx-7", &[]),
        ModuleDefaults {
            threshold: 1,
            only_entry_points: vec![0x410C_1733, 0x410C_1733],
        },
    );

    assert_eq!(
        service.get_only_entry_points().unwrap(),
        vec![0x410C_1733]
    );
}

/// Signatures are evaluated independently: a presented duplicate of one
/// valid signature counts twice toward a quorum.
#[test]
fn presented_duplicates_are_not_deduplicated() {
    let tx = HostTransactionContext::new(b"tx-8", &[b"sig-a".as_slice(), b"sig-a".as_slice()]);
    let service = install(ScriptedSignerOracle::accepting(&[b"sig-a".as_slice()]), tx);
    service.set_threshold(&admin_ctx(), 2).unwrap();

    assert!(service
        .is_valid_operation(&admin_ctx(), &operation(1))
        .unwrap());
}
