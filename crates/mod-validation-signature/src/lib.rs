//! # Signature-Threshold Validation Module
//!
//! A pluggable authorization module for a smart-account host: it decides
//! whether a pending operation is authorized by counting signatures the
//! signer module validates for the bound account and comparing the count
//! against a configurable threshold, optionally restricted to an allow-list
//! of entry points.
//!
//! ## Architecture
//!
//! Hexagonal layout:
//! - **Domain Layer** (`domain/`): pure decision rules, no I/O
//! - **Ports Layer** (`ports/`): the inbound operation set and the four
//!   outbound host capabilities (signer oracle, authority gateway,
//!   transaction context, storage partition)
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//! - **Adapters** (`adapters/`): in-memory storage for tests
//!
//! ## Decision Semantics
//!
//! - Threshold `0` requires unanimity: every presented signature must
//!   validate. Any positive threshold is a quorum.
//! - An empty allow-list applies the check to every entry point; a
//!   non-empty list bypasses unlisted entry points entirely, without
//!   consulting the signer module.
//! - A deny is a typed `false` result, never an abort.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod wire;

// Re-export public API
pub use adapters::InMemoryModuleStore;
pub use config::ConfigStore;
pub use domain::entities::{
    ModuleDefaults, CONTRACT_CALL_SCOPE_ENTRY_POINT, DEFAULT_THRESHOLD,
};
pub use domain::errors::{CodecError, StoreError, ValidationError};
pub use domain::scope::applies;
pub use domain::tally::meets_threshold;
pub use ports::inbound::ValidationModuleApi;
pub use ports::outbound::{AuthorityGateway, ModuleStore, SignerOracle, TransactionContext};
pub use service::ValidationSignatureService;
