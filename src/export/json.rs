// src/export/json.rs
use std::path::Path;

use chrono::Utc;
use serde_json::{json, Value};

use crate::store::{RecordStore, UserRecord};
use crate::CoreResult as Result;

/// Build the export document for `records`
pub fn records_to_json(records: &[UserRecord]) -> Result<Value> {
    Ok(json!({
        "export_format": "credential-vault-v1",
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_users": records.len(),
        "warning": "Contains unsalted password hashes. Do not share.",
        "users": serde_json::to_value(records)?,
    }))
}

/// Write every record in `store` to `path` as pretty JSON.
/// Returns how many users were exported.
pub fn export_to_json<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<usize> {
    let records = store.load()?;
    let export = records_to_json(&records)?;

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    tracing::info!(
        count = records.len(),
        path = %path.as_ref().display(),
        "exported user records"
    );

    Ok(records.len())
}
