// src/auth.rs
//! Signup, login and usage statistics
//!
//! Each operation is a full load → mutate → save cycle against the store;
//! nothing is cached between calls.

use tracing::{info, warn};

use crate::aliases::Password;
use crate::clock::{Clock, SystemClock};
use crate::consts::{HASH_HEX_LEN, MAX_USERNAME_LEN};
use crate::digest::digest_hex;
use crate::error::CoreError;
use crate::store::{find, RecordStore, UserRecord};
use crate::CoreResult as Result;

/// Proof of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
}

impl Identity {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Per-session login state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn establish(&mut self, identity: Identity) {
        *self = Session::Authenticated(identity);
    }

    /// Back to `Anonymous`, handing back whoever was logged in
    pub fn logout(&mut self) -> Option<Identity> {
        match std::mem::take(self) {
            Session::Authenticated(identity) => Some(identity),
            Session::Anonymous => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated(identity) => Some(identity.username()),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Username rules the line format depends on
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(CoreError::EmptyUsername);
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(CoreError::InvalidUsername("longer than 63 bytes"));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidUsername("contains whitespace"));
    }
    Ok(())
}

#[inline]
fn hash_password(password: &Password) -> String {
    let hash = digest_hex(password.expose_secret().as_bytes());
    debug_assert_eq!(hash.len(), HASH_HEX_LEN);
    hash
}

pub struct Authenticator<C: Clock = SystemClock> {
    store: RecordStore,
    clock: C,
}

impl Authenticator<SystemClock> {
    /// Store and clock both taken from the loaded config
    pub fn from_config() -> Self {
        Self::new(RecordStore::from_config(), SystemClock::from_config())
    }
}

impl<C: Clock> Authenticator<C> {
    pub fn new(store: RecordStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Register a new account. Does not log it in.
    pub fn signup(&self, username: &str, password: &Password) -> Result<()> {
        validate_username(username)?;
        if password.expose_secret().is_empty() {
            return Err(CoreError::EmptyPassword);
        }

        let mut records = self.store.load()?;
        if find(&records, username).is_some() {
            return Err(CoreError::AlreadyExists(username.to_owned()));
        }

        records.push(UserRecord::new(username, hash_password(password)));
        self.store.save(&records)?;

        info!(username, "user signed up");
        Ok(())
    }

    /// Check credentials and stamp `last_login`.
    ///
    /// The error variants tell the three rejection causes apart; show users
    /// `CoreError::public_message` instead of the variant.
    pub fn login(&self, username: &str, password: &Password) -> Result<Identity> {
        let mut records = self.store.load()?;
        if records.is_empty() {
            warn!(username, reason = "no users", "login rejected");
            return Err(CoreError::NoUsers);
        }

        let Some(idx) = find(&records, username) else {
            warn!(username, reason = "unknown user", "login rejected");
            return Err(CoreError::UserNotFound(username.to_owned()));
        };

        if records[idx].password_hash != hash_password(password) {
            warn!(username, reason = "wrong password", "login rejected");
            return Err(CoreError::AuthenticationFailed);
        }

        records[idx].last_login = Some(self.clock.now());
        self.store.save(&records)?;

        info!(username, "login successful");
        Ok(Identity {
            username: username.to_owned(),
        })
    }

    /// Count a finished game. `Ok(false)` when the user does not exist.
    pub fn record_game_result(&self, username: &str, won: bool) -> Result<bool> {
        self.update_stats(username, |record| {
            record.games_played = record.games_played.saturating_add(1);
            if won {
                record.games_won = record.games_won.saturating_add(1);
            }
        })
    }

    /// Count a passed quiz. `Ok(false)` when the user does not exist.
    pub fn record_quiz_pass(&self, username: &str) -> Result<bool> {
        self.update_stats(username, |record| {
            record.quizzes_passed = record.quizzes_passed.saturating_add(1);
        })
    }

    fn update_stats<F>(&self, username: &str, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut UserRecord),
    {
        let mut records = self.store.load()?;
        let Some(idx) = find(&records, username) else {
            return Ok(false);
        };

        apply(&mut records[idx]);
        self.store.save(&records)?;
        Ok(true)
    }

    /// Every stored record, in file order
    pub fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.store.load()
    }

    pub fn profile(&self, username: &str) -> Result<Option<UserRecord>> {
        let mut records = self.store.load()?;
        Ok(find(&records, username).map(|idx| records.swap_remove(idx)))
    }
}
