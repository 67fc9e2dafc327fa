//! The `SessionVault` trait — typed access to the durable session entries.
//!
//! The trait is implemented by storage backends (e.g. `reclaim-store-json`).
//! The session layer depends on this abstraction, not on any concrete
//! backend, so tests can run against an in-memory vault.
//!
//! A vault holds exactly two named entries:
//!
//! | entry | payload |
//! |-------|---------|
//! | registered identities | the full collection of accounts created by signup |
//! | current identity      | the identity signed in right now, absent when signed out |
//!
//! All methods are synchronous: a write is complete and visible to any
//! subsequent reader in this process by the time it returns. There is one
//! logical writer; if two processes share a backing store, the last write
//! wins with no conflict detection.

use crate::identity::Identity;

pub trait SessionVault: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the registered-identities collection. A missing entry is an empty
  /// collection, not an error.
  fn load_registered(&self) -> Result<Vec<Identity>, Self::Error>;

  /// Replace the registered-identities collection wholesale.
  fn store_registered(&self, identities: &[Identity]) -> Result<(), Self::Error>;

  /// Read the persisted current identity, if any. An unreadable entry is
  /// reported as absent, never as an error: a corrupt vault must fail open
  /// to the signed-out state.
  fn load_current(&self) -> Result<Option<Identity>, Self::Error>;

  /// Persist `identity` as the current one.
  fn store_current(&self, identity: &Identity) -> Result<(), Self::Error>;

  /// Remove the current-identity entry. Removing an absent entry is a no-op.
  fn clear_current(&self) -> Result<(), Self::Error>;
}
