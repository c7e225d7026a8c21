// tests/store_tests.rs
mod support;
use support::TestStore;

use credential_vault::store::{find, RecordStore, UserRecord};
use credential_vault::{digest_hex, CoreError};
use std::fs;

fn sample_records() -> Vec<UserRecord> {
    let mut alice = UserRecord::new("alice", digest_hex(b"secret1"));
    alice.games_played = 4;
    alice.games_won = 2;
    alice.quizzes_passed = 1;
    alice.last_login = Some("2025-11-30T08:15:00".into());

    let bob = UserRecord::new("Bob", digest_hex(b"hunter2"));
    vec![alice, bob]
}

#[test]
fn test_load_missing_file_is_empty() {
    let t = TestStore::new();
    assert!(!t.path().exists());
    assert!(t.store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_reproduces_records() {
    let t = TestStore::new();
    let records = sample_records();

    t.store.save(&records).unwrap();
    assert_eq!(t.store.load().unwrap(), records);
}

#[test]
fn test_save_writes_documented_line_format() {
    let t = TestStore::new();
    t.store.save(&sample_records()).unwrap();

    let expected = format!(
        "alice {} 4 2 1 2025-11-30T08:15:00\nBob {} 0 0 0 -\n",
        digest_hex(b"secret1"),
        digest_hex(b"hunter2")
    );
    assert_eq!(t.read_raw(), expected);
}

#[test]
fn test_save_creates_parent_dir_and_leaves_no_temp_file() {
    let t = TestStore::new();
    assert!(!t.path().parent().unwrap().exists());

    t.store.save(&sample_records()).unwrap();

    assert!(t.path().exists());
    assert!(!t.store.temp_path().exists());
}

#[test]
fn test_temp_path_is_sibling_with_tmp_suffix() {
    let store = RecordStore::open("data/users.db");
    assert_eq!(store.temp_path(), std::path::PathBuf::from("data/users.db.tmp"));
}

#[test]
fn test_save_replaces_previous_contents_entirely() {
    let t = TestStore::new();
    t.store.save(&sample_records()).unwrap();

    let only = vec![UserRecord::new("carol", digest_hex(b"pw"))];
    t.store.save(&only).unwrap();

    assert_eq!(t.store.load().unwrap(), only);
}

#[test]
fn test_failed_temp_write_keeps_previous_file() {
    let t = TestStore::new();
    let before = sample_records();
    t.store.save(&before).unwrap();
    let raw_before = t.read_raw();

    // A directory squatting on the temp path makes the temp write fail
    fs::create_dir(t.store.temp_path()).unwrap();

    let result = t.store.save(&[UserRecord::new("mallory", digest_hex(b"x"))]);
    assert!(matches!(result, Err(CoreError::Persistence { .. })));

    assert_eq!(t.read_raw(), raw_before);
    assert_eq!(t.store.load().unwrap(), before);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let t = TestStore::new();
    let hash = digest_hex(b"secret1");
    t.write_raw(&format!(
        "\n   \nlonely\nalice {hash} 1 1 0 2025-01-01T00:00:00\n\t\n"
    ));

    let records = t.store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "alice");
    assert_eq!(records[0].games_played, 1);
}

#[test]
fn test_missing_trailing_fields_take_defaults() {
    let t = TestStore::new();
    t.write_raw("dave abc\nerin def 7\nfrank 123 3 2 1\n");

    let records = t.store.load().unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0], UserRecord::new("dave", "abc"));

    assert_eq!(records[1].games_played, 7);
    assert_eq!(records[1].games_won, 0);
    assert_eq!(records[1].last_login, None);

    assert_eq!(records[2].quizzes_passed, 1);
    assert_eq!(records[2].last_login, None);
}

#[test]
fn test_non_numeric_counter_stops_parsing() {
    let record = UserRecord::parse_line("gina hash 5 lots 2 2025-01-01T00:00:00").unwrap();
    assert_eq!(record.games_played, 5);
    assert_eq!(record.games_won, 0);
    assert_eq!(record.quizzes_passed, 0);
    assert_eq!(record.last_login, None);
}

#[test]
fn test_dash_last_login_means_never() {
    let record = UserRecord::parse_line("hank hash 0 0 0 -").unwrap();
    assert_eq!(record.last_login, None);
    assert_eq!(record.last_login_display(), "-");
    assert_eq!(record.to_line(), "hank hash 0 0 0 -");
}

#[test]
fn test_find_is_exact_case_sensitive_first_match() {
    let mut records = sample_records();
    records.push(UserRecord::new("alice", "shadowed"));

    assert_eq!(find(&records, "alice"), Some(0));
    assert_eq!(find(&records, "Bob"), Some(1));
    assert_eq!(find(&records, "bob"), None);
    assert_eq!(find(&records, "ali"), None);
    assert_eq!(find(&[], "alice"), None);
}

#[test]
fn test_duplicates_survive_load_in_file_order() {
    let t = TestStore::new();
    t.write_raw("ivy first 1 0 0 -\nivy second 2 0 0 -\n");

    let records = t.store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[find(&records, "ivy").unwrap()].password_hash, "first");
}

#[test]
fn test_empty_last_login_is_written_as_dash() {
    let t = TestStore::new();
    let mut amy = UserRecord::new("amy", "h");
    amy.last_login = Some(String::new());

    assert_eq!(amy.last_login_display(), "-");
    t.store.save(&[amy]).unwrap();

    assert_eq!(t.read_raw(), "amy h 0 0 0 -\n");
    assert_eq!(t.store.load().unwrap()[0].last_login, None);
}
