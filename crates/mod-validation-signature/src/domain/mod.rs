//! # Domain Layer
//!
//! Pure validation logic, no I/O: the entry-point scope filter, the
//! threshold tally, install-time defaults, and the error taxonomy.

pub mod entities;
pub mod errors;
pub mod scope;
pub mod tally;
