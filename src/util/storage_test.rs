#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_finds_nothing_outside_browser() {
    assert_eq!(BrowserStorage.read("theme"), None);
}

#[test]
fn writes_report_unavailable() {
    let mut storage = BrowserStorage;
    assert_eq!(storage.write("theme", "dark"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("theme"), Err(StorageError::Unavailable));
}
