// src/config/defaults.rs
use crate::config::app::{Features, Paths};
use crate::consts::DEFAULT_USERS_DB;

pub fn default_paths() -> Paths {
    Paths {
        users_db: DEFAULT_USERS_DB.into(),
    }
}

pub fn default_features() -> Features {
    Features {
        utc_timestamps: false,
    }
}
