// tests/support.rs
//! Test fixture: an isolated users file inside a temp dir

use credential_vault::{Authenticator, FixedClock, Password, RecordStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Timestamp every fixture clock reports
#[allow(dead_code)]
pub const STAMP: &str = "2025-11-30T08:15:00";

#[allow(dead_code)] // not every test binary uses every helper
pub struct TestStore {
    pub dir: TempDir,
    pub store: RecordStore,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = RecordStore::open(dir.path().join("data").join("users.db"));
        Self { dir, store }
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    pub fn auth(&self) -> Authenticator<FixedClock> {
        Authenticator::new(self.store.clone(), FixedClock::new(STAMP))
    }

    pub fn write_raw(&self, contents: &str) {
        fs::create_dir_all(self.path().parent().unwrap()).unwrap();
        fs::write(self.path(), contents).unwrap();
    }

    pub fn read_raw(&self) -> String {
        fs::read_to_string(self.path()).unwrap()
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
pub fn pw(s: &str) -> Password {
    Password::new(s.to_owned())
}
