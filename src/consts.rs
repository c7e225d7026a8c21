// src/consts.rs
//! Shared constants: storage layout and record format

/// Default location of the credential store
pub const DEFAULT_USERS_DB: &str = "data/users.db";

/// Suffix of the companion file written during an atomic save
pub const TEMP_SUFFIX: &str = ".tmp";

/// Stored in place of `last_login` for accounts that never logged in
pub const NEVER_LOGGED_IN: &str = "-";

/// Longest username the line format accepts, in bytes
pub const MAX_USERNAME_LEN: usize = 63;

/// Length of a hex-encoded SHA-256 digest
pub const HASH_HEX_LEN: usize = 64;

/// `last_login` timestamp layout (`YYYY-MM-DDTHH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "CV_CONFIG";

/// Environment variable overriding the store path (test isolation)
pub const USERS_DB_ENV: &str = "CV_USERS_DB";

/// Config file read when `CV_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "credential-vault.toml";
