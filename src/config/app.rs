// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_FILE, USERS_DB_ENV};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_features")]
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub users_db: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    /// Stamp `last_login` in UTC instead of local time
    #[serde(default)]
    pub utc_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            features: default_features(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        load_from(config_path)
    })
}

/// Read one TOML file. Missing, unreadable or malformed files yield defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "invalid TOML config, using built-in defaults");
            Config::default()
        }),
        Err(err) => {
            warn!(path = %path.display(), %err, "unreadable config, using built-in defaults");
            Config::default()
        }
    }
}

/// Store location: `CV_USERS_DB` wins over the config file
pub fn users_db_path() -> PathBuf {
    std::env::var(USERS_DB_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(&load().paths.users_db))
}
