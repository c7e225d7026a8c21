// src/export/mod.rs
//! Export utilities for credential-vault
//!
//! Admin-facing dumps of the record store. Password hashes are included.

pub use json::{export_to_json, records_to_json};

pub mod json;
