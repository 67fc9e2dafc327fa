//! Tests for `JsonStore` against in-memory and on-disk backings.

use reclaim_core::{
  identity::{Identity, Role},
  vault::SessionVault,
};
use uuid::Uuid;

use crate::JsonStore;

fn identity(email: &str) -> Identity {
  Identity {
    id:                Uuid::new_v4(),
    email:             email.to_owned(),
    name:              "Test Student".to_owned(),
    enrollment_number: "MIT2022001".to_owned(),
    is_verified:       false,
    role:              Role::Student,
  }
}

// ─── Empty store ─────────────────────────────────────────────────────────────

#[test]
fn missing_entries_read_as_absent() {
  let store = JsonStore::open_in_memory();
  assert!(store.load_registered().unwrap().is_empty());
  assert!(store.load_current().unwrap().is_none());
}

#[test]
fn clear_current_on_empty_store_is_a_noop() {
  let store = JsonStore::open_in_memory();
  store.clear_current().unwrap();
  store.clear_current().unwrap();
  assert!(store.load_current().unwrap().is_none());
}

// ─── Round trips ─────────────────────────────────────────────────────────────

#[test]
fn registered_collection_round_trips() {
  let store = JsonStore::open_in_memory();
  let identities = vec![identity("a@mit.edu"), identity("b@mit.edu")];

  store.store_registered(&identities).unwrap();
  assert_eq!(store.load_registered().unwrap(), identities);
}

#[test]
fn current_identity_round_trips() {
  let store = JsonStore::open_in_memory();
  let me = identity("me@mit.edu");

  store.store_current(&me).unwrap();
  assert_eq!(store.load_current().unwrap(), Some(me));
}

#[test]
fn store_registered_replaces_wholesale() {
  let store = JsonStore::open_in_memory();
  store
    .store_registered(&[identity("a@mit.edu"), identity("b@mit.edu")])
    .unwrap();
  let replacement = vec![identity("c@mit.edu")];
  store.store_registered(&replacement).unwrap();
  assert_eq!(store.load_registered().unwrap(), replacement);
}

#[test]
fn clear_current_removes_the_entry() {
  let store = JsonStore::open_in_memory();
  store.store_current(&identity("me@mit.edu")).unwrap();
  store.clear_current().unwrap();
  assert!(store.load_current().unwrap().is_none());
}

// ─── On-disk backing ─────────────────────────────────────────────────────────

#[test]
fn entries_survive_reopening_the_directory() {
  let dir = tempfile::tempdir().unwrap();
  let me = identity("me@mit.edu");

  {
    let store = JsonStore::open(dir.path()).unwrap();
    store.store_registered(std::slice::from_ref(&me)).unwrap();
    store.store_current(&me).unwrap();
  }

  let reopened = JsonStore::open(dir.path()).unwrap();
  assert_eq!(reopened.load_registered().unwrap(), vec![me.clone()]);
  assert_eq!(reopened.load_current().unwrap(), Some(me));
}

#[test]
fn open_creates_the_directory() {
  let dir = tempfile::tempdir().unwrap();
  let nested = dir.path().join("deep").join("vault");
  JsonStore::open(&nested).unwrap();
  assert!(nested.is_dir());
}

// ─── Corruption fails open ───────────────────────────────────────────────────

#[test]
fn corrupt_current_entry_reads_as_signed_out() {
  let dir = tempfile::tempdir().unwrap();
  let store = JsonStore::open(dir.path()).unwrap();
  store.store_current(&identity("me@mit.edu")).unwrap();

  std::fs::write(dir.path().join("current_identity.json"), "{not json").unwrap();
  assert!(store.load_current().unwrap().is_none());
}

#[test]
fn corrupt_registered_entry_reads_as_empty() {
  let dir = tempfile::tempdir().unwrap();
  let store = JsonStore::open(dir.path()).unwrap();
  store.store_registered(&[identity("a@mit.edu")]).unwrap();

  std::fs::write(dir.path().join("registered_identities.json"), "[truncated").unwrap();
  assert!(store.load_registered().unwrap().is_empty());
}

#[test]
fn wrong_shape_is_corruption_too() {
  let dir = tempfile::tempdir().unwrap();
  let store = JsonStore::open(dir.path()).unwrap();

  // Valid JSON, wrong structure.
  std::fs::write(dir.path().join("current_identity.json"), "[1, 2, 3]").unwrap();
  assert!(store.load_current().unwrap().is_none());
}
