// src/store/mod.rs
//! Credential record store
//!
//! One text file, one user per line. Every operation loads the whole file,
//! mutates the records in memory and writes them back through an atomic
//! temp-file + rename.

pub mod file;
pub mod record;

pub use file::{find, RecordStore};
pub use record::UserRecord;
