//! # Adapters Layer
//!
//! Concrete implementations of outbound ports. Production deployments get
//! their storage partition from the host; the in-memory store here backs
//! tests and local harnesses.

pub mod memory_store;

pub use memory_store::InMemoryModuleStore;
