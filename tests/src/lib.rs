//! # Validation Module Test Suite
//!
//! End-to-end scenarios driving `mod-validation-signature` the way a host
//! would: install, configure through the admin gate, then authorize pending
//! operations against mock host capabilities.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── harness.rs     # Mock host capabilities shared by scenarios
//!     ├── scenarios.rs   # Install / threshold / scope flows
//!     └── dispatch.rs    # Wire-level round trips through the typed API
//! ```
//!
//! Run with `cargo test -p validation-tests`.

#[cfg(test)]
pub mod integration;
