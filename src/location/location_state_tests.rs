//! Tests for location state

use super::*;

#[test]
fn test_new_location_has_no_hash() {
    let location = LocationState::new("page.json");
    assert_eq!(location.hash(), None);
    assert_eq!(location.display(), "page.json");
}

#[test]
fn test_set_hash_updates_display() {
    let mut location = LocationState::new("page.json");
    location.set_hash("#summary");
    assert_eq!(location.hash(), Some("#summary"));
    assert_eq!(location.display(), "page.json#summary");
}

#[test]
fn test_last_hash_write_wins() {
    let mut location = LocationState::new("page.json");
    location.set_hash("#first");
    location.set_hash("#second");
    assert_eq!(location.display(), "page.json#second");
}
