// src/store/record.rs
//! `UserRecord` and its single-line text form
//!
//! `username hash games_played games_won quizzes_passed last_login`

use serde::Serialize;

use crate::consts::NEVER_LOGGED_IN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub games_played: u32,
    pub games_won: u32,
    pub quizzes_passed: u32,
    /// `None` until the first successful login
    pub last_login: Option<String>,
}

impl UserRecord {
    /// Fresh account: zero counters, never logged in
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            games_played: 0,
            games_won: 0,
            quizzes_passed: 0,
            last_login: None,
        }
    }

    /// `last_login` as shown to users and written to disk; `-` when unset or empty
    pub fn last_login_display(&self) -> &str {
        self.last_login
            .as_deref()
            .filter(|stamp| !stamp.is_empty())
            .unwrap_or(NEVER_LOGGED_IN)
    }

    /// Parse one stored line.
    ///
    /// Returns `None` when the line has fewer than two fields. Counters are
    /// read left to right; the first missing or non-numeric one, and every
    /// field after it, falls back to its default.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let username = fields.next()?;
        let password_hash = fields.next()?;

        let mut counters = [0u32; 3];
        let mut complete = true;
        for slot in &mut counters {
            match fields.next().and_then(|f| f.parse::<u32>().ok()) {
                Some(value) => *slot = value,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        let [games_played, games_won, quizzes_passed] = counters;

        let last_login = if complete {
            fields
                .next()
                .filter(|stamp| *stamp != NEVER_LOGGED_IN)
                .map(str::to_owned)
        } else {
            None
        };

        Some(Self {
            username: username.to_owned(),
            password_hash: password_hash.to_owned(),
            games_played,
            games_won,
            quizzes_passed,
            last_login,
        })
    }

    /// Serialize to one line, without the trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.username,
            self.password_hash,
            self.games_played,
            self.games_won,
            self.quizzes_passed,
            self.last_login_display()
        )
    }
}
