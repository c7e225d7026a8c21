// src/config/mod.rs
//! Configuration system for credential-vault
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, users_db_path, Config, Features, Paths};

mod app;
mod defaults;
