// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

/// Message shown to users for every kind of rejected login
pub const LOGIN_REJECTED: &str = "Invalid username or password.";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("No users registered")]
    NoUsers,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Failed to save records to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// True for the three ways a login can be refused
    pub fn is_login_rejection(&self) -> bool {
        matches!(
            self,
            CoreError::NoUsers | CoreError::UserNotFound(_) | CoreError::AuthenticationFailed
        )
    }

    /// Text safe to show at the prompt.
    ///
    /// Login rejections collapse into one message so the screen never reveals
    /// whether the username exists; `Display` keeps the detail for logs.
    pub fn public_message(&self) -> String {
        if self.is_login_rejection() {
            LOGIN_REJECTED.to_string()
        } else {
            self.to_string()
        }
    }
}
