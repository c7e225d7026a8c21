// src/store/file.rs
//! Load / save / find over the users file

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::TEMP_SUFFIX;
use crate::error::CoreError;
use crate::store::record::UserRecord;
use crate::CoreResult as Result;

/// Handle on the persisted users file. Holds no records itself.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at `CV_USERS_DB`, or the configured `paths.users_db`
    pub fn from_config() -> Self {
        Self::open(crate::config::users_db_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file written during `save`: same path plus `.tmp`
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Read every record. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<UserRecord>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(CoreError::Io(err)),
        };

        let text = String::from_utf8_lossy(&raw);
        let mut records = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            match UserRecord::parse_line(line) {
                Some(record) => records.push(record),
                None if line.trim().is_empty() => {}
                None => debug!(
                    line = lineno + 1,
                    path = %self.path.display(),
                    "skipping malformed record"
                ),
            }
        }
        Ok(records)
    }

    /// Replace the file with `records`.
    ///
    /// Writes `<path>.tmp` in full, syncs it, then renames it over `<path>`.
    /// If the temp write fails the previous file is left as it was.
    pub fn save(&self, records: &[UserRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.persistence(source))?;
        }

        let temp = self.temp_path();
        if let Err(source) = write_records(&temp, records) {
            // Best effort; the temp path may not even be a file
            let _ = fs::remove_file(&temp);
            return Err(self.persistence(source));
        }

        fs::rename(&temp, &self.path).map_err(|source| self.persistence(source))?;

        debug!(count = records.len(), path = %self.path.display(), "saved user records");
        Ok(())
    }

    fn persistence(&self, source: io::Error) -> CoreError {
        CoreError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_records(path: &Path, records: &[UserRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(out, "{}", record.to_line())?;
    }
    let file = out.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()
}

/// Index of the first record named exactly `username`
pub fn find(records: &[UserRecord], username: &str) -> Option<usize> {
    records.iter().position(|r| r.username == username)
}
