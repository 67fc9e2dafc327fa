//! [`JsonStore`] — the JSON-file implementation of [`SessionVault`].

use std::{
  collections::HashMap,
  fs, io,
  path::{Path, PathBuf},
  sync::{Mutex, PoisonError},
};

use reclaim_core::{identity::Identity, vault::SessionVault};

use crate::Result;

const REGISTERED_ENTRY: &str = "registered_identities.json";
const CURRENT_ENTRY: &str = "current_identity.json";

enum Backing {
  /// One file per named entry inside this directory.
  Directory(PathBuf),
  /// In-process map keyed by entry name; dies with the store.
  Memory(Mutex<HashMap<&'static str, String>>),
}

/// A session vault backed by a directory of JSON blobs.
///
/// Every read goes back to the backing entry and every write replaces it
/// wholesale, so a write is visible to any subsequent reader immediately.
/// There is no cross-process locking; concurrent writers race with
/// last-write-wins.
pub struct JsonStore {
  backing: Backing,
}

impl JsonStore {
  /// Open (or create) a store directory at `dir`.
  pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
    fs::create_dir_all(dir.as_ref())?;
    Ok(Self { backing: Backing::Directory(dir.as_ref().to_path_buf()) })
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Self {
    Self { backing: Backing::Memory(Mutex::new(HashMap::new())) }
  }

  // ── Entry access ──────────────────────────────────────────────────────────

  fn read_entry(&self, name: &'static str) -> Result<Option<String>> {
    match &self.backing {
      Backing::Directory(dir) => match fs::read_to_string(dir.join(name)) {
        Ok(blob) => Ok(Some(blob)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
      },
      Backing::Memory(entries) => Ok(
        entries
          .lock()
          .unwrap_or_else(PoisonError::into_inner)
          .get(name)
          .cloned(),
      ),
    }
  }

  fn write_entry(&self, name: &'static str, blob: String) -> Result<()> {
    match &self.backing {
      Backing::Directory(dir) => {
        fs::write(dir.join(name), blob)?;
      }
      Backing::Memory(entries) => {
        entries
          .lock()
          .unwrap_or_else(PoisonError::into_inner)
          .insert(name, blob);
      }
    }
    Ok(())
  }

  fn remove_entry(&self, name: &'static str) -> Result<()> {
    match &self.backing {
      Backing::Directory(dir) => match fs::remove_file(dir.join(name)) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
      },
      Backing::Memory(entries) => {
        entries
          .lock()
          .unwrap_or_else(PoisonError::into_inner)
          .remove(name);
        Ok(())
      }
    }
  }
}

// ─── SessionVault impl ───────────────────────────────────────────────────────

impl SessionVault for JsonStore {
  type Error = crate::Error;

  fn load_registered(&self) -> Result<Vec<Identity>> {
    match self.read_entry(REGISTERED_ENTRY)? {
      Some(blob) => match serde_json::from_str(&blob) {
        Ok(identities) => Ok(identities),
        Err(err) => {
          tracing::warn!(%err, "registered-identities entry is unreadable; treating as empty");
          Ok(Vec::new())
        }
      },
      None => Ok(Vec::new()),
    }
  }

  fn store_registered(&self, identities: &[Identity]) -> Result<()> {
    self.write_entry(REGISTERED_ENTRY, serde_json::to_string_pretty(identities)?)
  }

  fn load_current(&self) -> Result<Option<Identity>> {
    match self.read_entry(CURRENT_ENTRY)? {
      Some(blob) => match serde_json::from_str(&blob) {
        Ok(identity) => Ok(Some(identity)),
        Err(err) => {
          tracing::warn!(%err, "current-identity entry is unreadable; treating as signed out");
          Ok(None)
        }
      },
      None => Ok(None),
    }
  }

  fn store_current(&self, identity: &Identity) -> Result<()> {
    self.write_entry(CURRENT_ENTRY, serde_json::to_string_pretty(identity)?)
  }

  fn clear_current(&self) -> Result<()> {
    self.remove_entry(CURRENT_ENTRY)
  }
}
