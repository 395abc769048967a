//! # Ports Layer
//!
//! Trait seams between the module and its host: `inbound` is the typed
//! operation set the host dispatches into, `outbound` is every capability
//! the module consumes from the host.

pub mod inbound;
pub mod outbound;
