//! # Integration Tests
//!
//! Cross-layer flows: host-style dispatch into the module through its
//! typed API and wire payloads, against mock host capabilities.


mod scenarios;
