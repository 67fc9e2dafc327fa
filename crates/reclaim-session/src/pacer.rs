//! The latency seam for session operations.
//!
//! Login, signup, and the enrollment check suspend once before resolving to
//! emulate request latency. Routing that suspension through a trait keeps
//! timers out of the session logic entirely: production wiring installs
//! [`NetworkPacer`], tests install [`InstantPacer`] and never wait.

use std::{future::Future, time::Duration};

/// An injectable delay applied inside suspending session operations.
pub trait Pacer: Send + Sync {
  fn pause(&self) -> impl Future<Output = ()> + Send + '_;
}

/// Sleeps for a fixed duration, one second by default.
#[derive(Debug, Clone)]
pub struct NetworkPacer {
  delay: Duration,
}

impl NetworkPacer {
  pub fn new(delay: Duration) -> Self { Self { delay } }
}

impl Default for NetworkPacer {
  fn default() -> Self { Self { delay: Duration::from_secs(1) } }
}

impl Pacer for NetworkPacer {
  async fn pause(&self) { tokio::time::sleep(self.delay).await }
}

/// Resolves immediately. For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
  async fn pause(&self) {}
}
