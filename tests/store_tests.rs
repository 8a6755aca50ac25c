//! Tests for Store
//!
//! These tests verify:
//! - Directory and database creation on open
//! - Exact reads, prefix scans and writes
//! - Lock contention on concurrent opens
//! - Persistence across reopen

use kvpath::{Config, KvPathError, Store};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let store = Store::open(&config).unwrap();
    (temp_dir, store)
}

// =============================================================================
// Open / Lifecycle Tests
// =============================================================================

#[test]
fn test_open_creates_directory_and_database() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("mydb");

    let config = Config::builder().data_dir(&data_dir).build();
    let _store = Store::open(&config).unwrap();

    assert!(data_dir.exists());
    assert!(data_dir.join("data.redb").exists());
}

#[test]
fn test_concurrent_open_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();

    let _first = Store::open(&config).unwrap();
    let second = Store::open(&config);

    assert!(matches!(second, Err(KvPathError::Storage(_))));
}

#[test]
fn test_reopen_after_release() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();

    {
        let store = Store::open(&config).unwrap();
        store.put(b"/k", b"1").unwrap();
    }

    // Handle released by drop, second open must succeed and see the data
    let store = Store::open(&config).unwrap();
    assert_eq!(store.get_exact(b"/k").unwrap(), b"1".to_vec());
}

// =============================================================================
// Read / Write Tests
// =============================================================================

#[test]
fn test_put_get_exact() {
    let (_temp, store) = setup_temp_store();

    store.put(b"/a/b", b"{\"x\":1}").unwrap();

    assert_eq!(store.get_exact(b"/a/b").unwrap(), b"{\"x\":1}".to_vec());
}

#[test]
fn test_get_exact_missing_key() {
    let (_temp, store) = setup_temp_store();

    let result = store.get_exact(b"/missing");

    assert!(matches!(result, Err(KvPathError::KeyNotFound)));
}

#[test]
fn test_get_exact_on_empty_database() {
    // No table exists yet: reads behave as not found, not as an error
    let (_temp, store) = setup_temp_store();

    assert!(store.get_exact(b"/anything").unwrap_err().is_not_found());
}

#[test]
fn test_put_overwrite() {
    let (_temp, store) = setup_temp_store();

    store.put(b"/k", b"1").unwrap();
    store.put(b"/k", b"2").unwrap();

    assert_eq!(store.get_exact(b"/k").unwrap(), b"2".to_vec());
}

// =============================================================================
// Prefix Scan Tests
// =============================================================================

#[test]
fn test_scan_prefix_collects_in_key_order() {
    let (_temp, store) = setup_temp_store();

    store.put(b"/a/c", b"3").unwrap();
    store.put(b"/a/b", b"2").unwrap();
    store.put(b"/b/a", b"9").unwrap();

    let values = store.scan_prefix(b"/a").unwrap();

    assert_eq!(values, vec![b"2".to_vec(), b"3".to_vec()]);
}

#[test]
fn test_scan_prefix_stops_at_prefix_boundary() {
    let (_temp, store) = setup_temp_store();

    store.put(b"/a/x", b"1").unwrap();
    store.put(b"/ab", b"2").unwrap();
    store.put(b"/b", b"3").unwrap();

    // "/a/x" sorts after "/a" and before "/ab"; both carry prefix "/a"
    let values = store.scan_prefix(b"/a").unwrap();
    assert_eq!(values, vec![b"1".to_vec(), b"2".to_vec()]);

    let values = store.scan_prefix(b"/a/").unwrap();
    assert_eq!(values, vec![b"1".to_vec()]);
}

#[test]
fn test_scan_prefix_no_matches_is_empty() {
    let (_temp, store) = setup_temp_store();

    store.put(b"/a", b"1").unwrap();

    assert!(store.scan_prefix(b"/zzz").unwrap().is_empty());
}

#[test]
fn test_scan_prefix_on_empty_database() {
    let (_temp, store) = setup_temp_store();

    assert!(store.scan_prefix(b"/a").unwrap().is_empty());
}
