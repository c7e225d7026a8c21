// src/aliases.rs
//! Secret wrapper types
//!
//! Plaintext passwords only ever live inside these and are zeroized on drop.

use zeroize::Zeroizing;

/// Password typed at signup/login; only the digest engine sees the bytes
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(secret: String) -> Self {
        Self(Zeroizing::new(secret))
    }

    pub fn expose_secret(&self) -> &String {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
