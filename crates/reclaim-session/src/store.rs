//! [`SessionStore`] — owns the current identity and its persistence.

use reclaim_core::{
  enrollment::Enrollment,
  identity::{Identity, Role},
  vault::SessionVault,
};
use tokio::sync::watch;
use uuid::Uuid;

use crate::{Error, Result, pacer::Pacer};

/// Reserved email that always signs in as the built-in admin.
///
/// A deliberate demo backdoor: the password is only checked for presence,
/// never for value. There are no real credentials anywhere in the system.
pub const ADMIN_EMAIL: &str = "admin@mit.edu";

/// Fixed id for the synthesized admin identity, so repeated admin logins
/// persist the same record.
const ADMIN_ID: Uuid = Uuid::from_u128(0xad317);

// ─── Observable state ────────────────────────────────────────────────────────

/// What views observe: the active identity plus a coarse busy flag that the
/// UI is expected to honor by disabling competing actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
  pub identity: Option<Identity>,
  pub loading:  bool,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The session store. One per process; lives for the process lifetime.
///
/// Construct with [`new`](Self::new), then call
/// [`initialize`](Self::initialize) once at startup to adopt any persisted
/// identity. Until then the published state reports `loading`.
pub struct SessionStore<V, P> {
  vault:  V,
  roster: Vec<Enrollment>,
  pacer:  P,
  state:  watch::Sender<SessionState>,
}

impl<V: SessionVault, P: Pacer> SessionStore<V, P> {
  pub fn new(vault: V, roster: Vec<Enrollment>, pacer: P) -> Self {
    let (state, _) = watch::channel(SessionState { identity: None, loading: true });
    Self { vault, roster, pacer, state }
  }

  // ── Observation ───────────────────────────────────────────────────────────

  /// Snapshot of the current observable state.
  pub fn state(&self) -> SessionState { self.state.borrow().clone() }

  /// The active identity, if someone is signed in.
  pub fn current(&self) -> Option<Identity> { self.state.borrow().identity.clone() }

  pub fn is_loading(&self) -> bool { self.state.borrow().loading }

  /// Watch receiver that yields a new [`SessionState`] on every change.
  pub fn subscribe(&self) -> watch::Receiver<SessionState> { self.state.subscribe() }

  // ── Lifecycle ─────────────────────────────────────────────────────────────

  /// Adopt the persisted current identity, if any, and land in the ready
  /// state. An unreadable vault fails open to signed-out; this never leaves
  /// the store stuck in `loading`.
  pub fn initialize(&self) -> Option<Identity> {
    let identity = match self.vault.load_current() {
      Ok(identity) => identity,
      Err(err) => {
        tracing::warn!(%err, "could not read the persisted identity; starting signed out");
        None
      }
    };
    self
      .state
      .send_replace(SessionState { identity: identity.clone(), loading: false });
    identity
  }

  // ── Operations ────────────────────────────────────────────────────────────

  /// Sign in with an email and password.
  ///
  /// Resolution order: a registered identity with exactly this email wins;
  /// otherwise the reserved admin pair applies; otherwise the credentials
  /// are invalid and nothing changes.
  pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
    self.set_loading(true);
    let outcome = self.login_inner(email, password).await;
    self.settle(&outcome);
    outcome
  }

  async fn login_inner(&self, email: &str, password: &str) -> Result<Identity> {
    self.pacer.pause().await;

    let registered = self.vault.load_registered().map_err(Error::vault)?;
    if let Some(identity) = registered.into_iter().find(|i| i.email == email) {
      self.vault.store_current(&identity).map_err(Error::vault)?;
      tracing::info!(email, "signed in");
      return Ok(identity);
    }

    if email == ADMIN_EMAIL && !password.is_empty() {
      let admin = admin_identity();
      self.vault.store_current(&admin).map_err(Error::vault)?;
      tracing::info!("signed in as the built-in admin");
      return Ok(admin);
    }

    Err(Error::InvalidCredentials)
  }

  /// Create a student account gated on the enrollment roster.
  ///
  /// The password is accepted but neither stored nor checked; there are no
  /// real credentials. The matched roster entry is left untouched, so the
  /// same enrollment number can register again; see DESIGN.md before
  /// changing that.
  pub async fn signup(
    &self,
    name: &str,
    email: &str,
    enrollment_number: &str,
    password: &str,
  ) -> Result<Identity> {
    self.set_loading(true);
    let outcome = self.signup_inner(name, email, enrollment_number, password).await;
    self.settle(&outcome);
    outcome
  }

  async fn signup_inner(
    &self,
    name: &str,
    email: &str,
    enrollment_number: &str,
    _password: &str,
  ) -> Result<Identity> {
    if !self.check_enrollment(enrollment_number).await {
      return Err(Error::IneligibleEnrollment);
    }

    let mut registered = self.vault.load_registered().map_err(Error::vault)?;
    if registered.iter().any(|i| i.email == email) {
      return Err(Error::DuplicateEmail(email.to_owned()));
    }

    let identity = Identity {
      id:                Uuid::new_v4(),
      email:             email.to_owned(),
      name:              name.to_owned(),
      enrollment_number: enrollment_number.to_owned(),
      is_verified:       false,
      role:              Role::Student,
    };

    registered.push(identity.clone());
    self.vault.store_registered(&registered).map_err(Error::vault)?;
    self.vault.store_current(&identity).map_err(Error::vault)?;
    tracing::info!(email, "account created");

    Ok(identity)
  }

  /// Sign out. Synchronous, with no pause, and never fails: a vault error
  /// here is logged and the in-process state clears regardless.
  pub fn logout(&self) {
    if let Err(err) = self.vault.clear_current() {
      tracing::warn!(%err, "could not clear the persisted identity");
    }
    self.state.send_modify(|s| s.identity = None);
    tracing::info!("signed out");
  }

  /// Whether `enrollment_number` matches an unused roster entry. Pauses like
  /// the other remote-shaped operations but does not flip the busy flag.
  pub async fn check_enrollment(&self, enrollment_number: &str) -> bool {
    self.pacer.pause().await;
    self
      .roster
      .iter()
      .any(|e| e.enrollment_number == enrollment_number && !e.is_used)
  }

  // ── State plumbing ────────────────────────────────────────────────────────

  fn set_loading(&self, loading: bool) {
    self.state.send_modify(|s| s.loading = loading);
  }

  /// Publish the outcome of a suspending operation: success activates the
  /// identity, failure leaves it untouched; the busy flag clears either way.
  fn settle(&self, outcome: &Result<Identity>) {
    match outcome {
      Ok(identity) => {
        self.state.send_replace(SessionState {
          identity: Some(identity.clone()),
          loading:  false,
        });
      }
      Err(_) => self.set_loading(false),
    }
  }
}

fn admin_identity() -> Identity {
  Identity {
    id:                ADMIN_ID,
    email:             ADMIN_EMAIL.to_owned(),
    name:              "Admin".to_owned(),
    enrollment_number: "ADMIN001".to_owned(),
    is_verified:       true,
    role:              Role::Admin,
  }
}
