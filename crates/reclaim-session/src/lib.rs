//! The session store — single source of truth for the signed-in identity.
//!
//! Backed by any [`reclaim_core::vault::SessionVault`]; publishes state
//! changes over a [`tokio::sync::watch`] channel so views react to identity
//! changes without polling. Operations that would hit a network in a real
//! deployment pause through the [`pacer::Pacer`] seam, so tests run with zero
//! latency.

mod store;

pub mod error;
pub mod pacer;

pub use error::{Error, Result};
pub use store::{ADMIN_EMAIL, SessionState, SessionStore};

#[cfg(test)]
mod tests;
