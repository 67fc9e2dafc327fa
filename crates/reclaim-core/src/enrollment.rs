//! Enrollment — a pre-registered student credential gating signup.
//!
//! The roster is fixed read-only input supplied at startup. Signup consults
//! the `is_used` flag but nothing in the workspace ever writes the roster
//! back, so a roster entry can register any number of accounts. That quirk is
//! deliberate and documented in DESIGN.md; do not fix it here without also
//! introducing a writable roster store.

use serde::{Deserialize, Serialize};

/// One roster entry. `id` is assigned by the registrar system that owns the
/// roster and is opaque to us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
  pub id:                String,
  pub enrollment_number: String,
  pub student_name:      String,
  pub department:        String,
  pub year:              u16,
  pub is_used:           bool,
}
