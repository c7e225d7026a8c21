// src/lib.rs
//! credential-vault: the credential subsystem of a learning CLI
//!
//! Features:
//! - From-scratch SHA-256 digest engine
//! - Text record store with atomic temp-file + rename saves
//! - Signup / login / usage statistics workflow
//! - Passwords held in `Zeroizing` wrappers (wiped on drop)

pub mod aliases;
pub mod auth;
pub mod clock;
pub mod config;
pub mod consts;
pub mod digest;
pub mod export;
pub mod prompt;
pub mod store;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::Password;
pub use auth::{Authenticator, Identity, Session};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::load as load_config;
pub use digest::{digest_hex, hex_of, DigestState};
pub use error::CoreError;
pub use export::export_to_json;
pub use prompt::{LineSource, ReaderSource, StdinSource};
pub use store::{find, RecordStore, UserRecord};

pub type CoreResult<T> = std::result::Result<T, CoreError>;
