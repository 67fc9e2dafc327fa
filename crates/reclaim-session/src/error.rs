//! Error type for `reclaim-session`.
//!
//! Every variant is recoverable: a failed operation leaves the session state
//! untouched and can simply be retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No registered identity matched and the reserved admin pair did not
  /// apply.
  #[error("invalid email or password")]
  InvalidCredentials,

  /// The enrollment number is unknown, or its roster entry is already used.
  #[error("enrollment number is not eligible for signup")]
  IneligibleEnrollment,

  #[error("email already registered: {0}")]
  DuplicateEmail(String),

  #[error("session storage error: {0}")]
  Vault(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error from any vault implementation.
  pub(crate) fn vault(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Vault(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
