//! Round-trip tests for the contacts file.

use contact_book::{AddressBook, ContactName, ContactStore, Record, StorageError};
use std::fs;
use tempfile::tempdir;

fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut rec = Record::new(ContactName::new(name).unwrap());
    for phone in phones {
        rec.add_phone(phone).unwrap();
    }
    if let Some(date) = birthday {
        rec.set_birthday(date).unwrap();
    }
    rec
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", &["1234567890", "0987654321"], Some("2000-01-01")));
    book.add_record(record("Bob", &[], None));
    book.add_record(record("Carol", &["5555555555"], Some("1996-02-29")));
    book
}

#[test]
fn test_roundtrip_preserves_structure() {
    let dir = tempdir().unwrap();
    let store = ContactStore::new(dir.path().join("contacts.json"));

    let book = sample_book();
    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
}

#[test]
fn test_roundtrip_preserves_insertion_order() {
    let dir = tempdir().unwrap();
    let store = ContactStore::new(dir.path().join("contacts.json"));

    store.save(&sample_book()).unwrap();
    let loaded = store.load().unwrap();

    let names: Vec<String> = loaded.iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_missing_file_loads_empty_book() {
    let dir = tempdir().unwrap();
    let store = ContactStore::new(dir.path().join("does-not-exist.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    fs::write(&path, "{{{ definitely not json").unwrap();

    let store = ContactStore::new(&path);
    assert!(matches!(
        store.load().unwrap_err(),
        StorageError::Parse { .. }
    ));
}

#[test]
fn test_tampered_file_cannot_smuggle_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    // Structurally valid JSON, domain-invalid values.
    for payload in [
        r#"[{"name":"","phones":["1234567890"]}]"#,
        r#"[{"name":"Alice","phones":["123"]}]"#,
        r#"[{"name":"Alice","birthday":"2023-02-30"}]"#,
    ] {
        fs::write(&path, payload).unwrap();
        let store = ContactStore::new(&path);
        assert!(
            matches!(store.load().unwrap_err(), StorageError::Parse { .. }),
            "payload should be rejected: {}",
            payload
        );
    }
}

#[test]
fn test_save_is_whole_state_overwrite() {
    let dir = tempdir().unwrap();
    let store = ContactStore::new(dir.path().join("contacts.json"));

    store.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(record("Dave", &["1112223333"], None));
    store.save(&smaller).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("Dave").is_some());
    assert!(loaded.find("Alice").is_none());
}

#[test]
fn test_stored_file_is_json_array_of_records() {
    let dir = tempdir().unwrap();
    let store = ContactStore::new(dir.path().join("contacts.json"));
    store.save(&sample_book()).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().expect("top level is an array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "Alice");
    assert_eq!(records[0]["phones"][0], "1234567890");
    assert_eq!(records[0]["birthday"], "2000-01-01");
}
