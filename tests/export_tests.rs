// tests/export_tests.rs
mod support;
use support::{pw, TestStore};

use credential_vault::export::records_to_json;
use credential_vault::{digest_hex, export_to_json};
use serde_json::Value;
use std::fs;

#[test]
fn test_export_contains_every_user_with_stats() {
    let t = TestStore::new();
    let auth = t.auth();
    auth.signup("alice", &pw("secret1")).unwrap();
    auth.signup("bob", &pw("hunter2")).unwrap();
    auth.record_game_result("alice", true).unwrap();

    let export_path = t.dir.path().join("export.json");
    let count = export_to_json(&t.store, &export_path).unwrap();
    assert_eq!(count, 2);

    let json: Value = serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(json["export_format"], "credential-vault-v1");
    assert_eq!(json["total_users"], 2);

    let alice = &json["users"][0];
    assert_eq!(alice["username"], "alice");
    assert_eq!(alice["password_hash"], digest_hex(b"secret1"));
    assert_eq!(alice["games_played"], 1);
    assert_eq!(alice["games_won"], 1);
    assert_eq!(alice["last_login"], Value::Null);
}

#[test]
fn test_export_of_empty_store() {
    let t = TestStore::new();
    let doc = records_to_json(&t.store.load().unwrap()).unwrap();
    assert_eq!(doc["total_users"], 0);
    assert_eq!(doc["users"], Value::Array(vec![]));
}
