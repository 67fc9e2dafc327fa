//! Identity — the authenticated user record.
//!
//! An identity is owned exclusively by the session store; views only ever see
//! clones of it. It is replaced wholesale on login/signup and cleared on
//! logout; no field is mutated in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The privilege level of a signed-in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Student,
  Admin,
}

/// An authenticated user record.
///
/// Serialised as-is into the durable vault; the JSON form must round-trip
/// exactly, which the derived impls guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub id:                Uuid,
  pub email:             String,
  pub name:              String,
  pub enrollment_number: String,
  pub is_verified:       bool,
  pub role:              Role,
}

impl Identity {
  pub fn is_admin(&self) -> bool { self.role == Role::Admin }
}
