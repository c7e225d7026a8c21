// src/clock.rs
//! Wall-clock source for `last_login` stamps

use chrono::{Local, Utc};

use crate::consts::TIMESTAMP_FORMAT;

/// Produces `YYYY-MM-DDTHH:MM:SS` timestamps
pub trait Clock {
    fn now(&self) -> String;
}

/// Real system time, local by default
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub utc: bool,
}

impl SystemClock {
    /// Honours `features.utc_timestamps` from the loaded config
    pub fn from_config() -> Self {
        Self {
            utc: crate::config::load().features.utc_timestamps,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        if self.utc {
            Utc::now().format(TIMESTAMP_FORMAT).to_string()
        } else {
            Local::now().format(TIMESTAMP_FORMAT).to_string()
        }
    }
}

/// Always returns the same stamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> String {
        (**self).now()
    }
}
