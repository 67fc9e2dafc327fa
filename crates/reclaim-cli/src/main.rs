//! `reclaim` — command-line front end for the campus lost-and-found catalog.
//!
//! Browsing commands filter and sort the fixed catalog; account commands
//! drive the session store, which persists identities in a JSON vault on
//! disk. Reads `reclaim.toml` (or the path given with `--config`) plus
//! `RECLAIM_`-prefixed environment variables for settings.

mod output;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reclaim_core::{
  catalog::{Claim, ClaimStatus, Item, ItemKind, ItemStatus},
  query::{
    ClaimQuery, ClaimSortKey, ItemQuery, ItemSortKey, SortDirection,
    select_claims, select_items,
  },
};
use reclaim_session::{SessionStore, pacer::NetworkPacer};
use reclaim_store_json::JsonStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "reclaim", about = "Campus lost-and-found catalog")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "reclaim.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Browse the item catalog.
  Items {
    /// Match against title and description, case-insensitive.
    #[arg(long)]
    text: Option<String>,
    /// Exact campus location.
    #[arg(long)]
    location: Option<String>,
    /// lost | found
    #[arg(long)]
    kind: Option<String>,
    /// pending | claimed | resolved
    #[arg(long)]
    status: Option<String>,
    /// title | location | date | status
    #[arg(long)]
    sort: Option<String>,
    /// Sort descending instead of ascending.
    #[arg(long)]
    desc: bool,
  },

  /// Show one item with its claims and AI annotations.
  Show { item_id: String },

  /// List claims. Admins see every claim; students see their own.
  Claims {
    /// Match against item title, claimant email, and message.
    #[arg(long)]
    text: Option<String>,
    /// pending | approved | rejected
    #[arg(long)]
    status: Option<String>,
    /// date | status | confidence
    #[arg(long)]
    sort: Option<String>,
    #[arg(long)]
    desc: bool,
  },

  /// Sign in. Prompts for the password on stdin.
  Login { email: String },

  /// Create an account. Prompts for the password on stdin.
  Signup {
    name: String,
    email: String,
    enrollment_number: String,
  },

  /// Sign out.
  Logout,

  /// Show the signed-in identity.
  Whoami,

  /// Check whether an enrollment number is eligible for signup.
  Check { enrollment_number: String },

  /// Print the canned AI analysis table.
  Analyses,
}

// ─── Configuration ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CliConfig {
  /// Directory holding the session vault.
  store_dir: PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .set_default("store_dir", "~/.reclaim")?
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("RECLAIM"))
    .build()
    .context("failed to read config")?;
  let cfg: CliConfig = settings
    .try_deserialize()
    .context("failed to deserialise CliConfig")?;

  let store_dir = expand_tilde(&cfg.store_dir);
  let vault = JsonStore::open(&store_dir)
    .with_context(|| format!("failed to open session store at {}", store_dir.display()))?;

  let session = SessionStore::new(vault, reclaim_seed::enrollments(), NetworkPacer::default());
  session.initialize();

  let items = reclaim_seed::items();
  let claims = reclaim_seed::claims();

  match cli.command {
    Command::Items { text, location, kind, status, sort, desc } => {
      let query = ItemQuery {
        text,
        location,
        kind: kind.as_deref().and_then(ItemKind::parse),
        status: status.as_deref().and_then(ItemStatus::parse),
        sort_key: sort.as_deref().and_then(ItemSortKey::parse),
        direction: direction(desc),
      };
      print!("{}", output::item_table(&select_items(&items, &query)));
    }

    Command::Show { item_id } => show_item(&items, &claims, &item_id),

    Command::Claims { text, status, sort, desc } => {
      let Some(identity) = session.current() else {
        anyhow::bail!("sign in first: claims are only visible to signed-in users");
      };
      let mut query = ClaimQuery {
        text,
        claimant: None,
        status: status.as_deref().and_then(ClaimStatus::parse),
        sort_key: sort.as_deref().and_then(ClaimSortKey::parse),
        direction: direction(desc),
      };
      if !identity.is_admin() {
        query.claimant = Some(identity.email.clone());
      }
      print!("{}", output::claim_table(&select_claims(&claims, &items, &query), &items));
    }

    Command::Login { email } => {
      let password = prompt_password()?;
      let identity = session
        .login(&email, &password)
        .await
        .context("login failed")?;
      println!("Welcome back, {}!", identity.name);
    }

    Command::Signup { name, email, enrollment_number } => {
      let password = prompt_password()?;
      let identity = session
        .signup(&name, &email, &enrollment_number, &password)
        .await
        .context("signup failed")?;
      println!("Your account has been created, {}.", identity.name);
    }

    Command::Logout => {
      session.logout();
      println!("You have been logged out.");
    }

    Command::Whoami => match session.current() {
      Some(identity) => print!("{}", output::identity_card(&identity)),
      None => println!("Not signed in."),
    },

    Command::Check { enrollment_number } => {
      if session.check_enrollment(&enrollment_number).await {
        println!("{enrollment_number} is eligible for signup.");
      } else {
        println!("{enrollment_number} is not eligible for signup.");
      }
    }

    Command::Analyses => {
      print!("{}", output::analysis_list(&reclaim_seed::analyses()));
    }
  }

  Ok(())
}

// ─── Commands ────────────────────────────────────────────────────────────────

/// Item detail; for an unknown id, a notice plus the full catalog (the
/// command-line analog of "toast and redirect home").
fn show_item(items: &[Item], claims: &[Claim], item_id: &str) {
  match items.iter().find(|item| item.id == item_id) {
    Some(item) => {
      let item_claims: Vec<&Claim> =
        claims.iter().filter(|claim| claim.item_id == item.id).collect();
      print!("{}", output::item_detail(item, &item_claims));
    }
    None => {
      println!("No item with id {item_id}; showing the full catalog instead.");
      let all: Vec<&Item> = items.iter().collect();
      print!("{}", output::item_table(&all));
    }
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn direction(desc: bool) -> SortDirection {
  if desc { SortDirection::Descending } else { SortDirection::Ascending }
}

/// Read a password from stdin.
fn prompt_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
