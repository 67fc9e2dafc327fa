//! Catalog record types — items, claims, and canned AI analyses.
//!
//! The catalog is immutable seed data owned by an external data-loading
//! collaborator. Nothing in this workspace creates, updates, or deletes a
//! catalog record; report and review flows operate on copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Items ───────────────────────────────────────────────────────────────────

/// Whether an item was reported missing or handed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
  Lost,
  Found,
}

impl ItemKind {
  /// The discriminant string used in listings and filter values.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Lost => "lost",
      Self::Found => "found",
    }
  }

  /// Case-insensitive parse. Unrecognised values yield `None`, which filter
  /// construction treats as "any".
  pub fn parse(value: &str) -> Option<Self> {
    match value.to_ascii_lowercase().as_str() {
      "lost" => Some(Self::Lost),
      "found" => Some(Self::Found),
      _ => None,
    }
  }
}

/// Where an item report sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
  Pending,
  Claimed,
  Resolved,
}

impl ItemStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Claimed => "claimed",
      Self::Resolved => "resolved",
    }
  }

  pub fn parse(value: &str) -> Option<Self> {
    match value.to_ascii_lowercase().as_str() {
      "pending" => Some(Self::Pending),
      "claimed" => Some(Self::Claimed),
      "resolved" => Some(Self::Resolved),
      _ => None,
    }
  }
}

/// An optional campus map position for an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub latitude:  f64,
  pub longitude: f64,
}

/// A lost or found physical object report. `id` is assigned by the catalog
/// owner and is opaque to us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id:            String,
  pub title:         String,
  pub description:   String,
  /// Reference to a photo of the item, e.g. a URL.
  pub image:         String,
  pub location:      String,
  pub kind:          ItemKind,
  pub date:          NaiveDate,
  pub contact_email: String,
  pub status:        ItemStatus,
  pub coordinates:   Option<Coordinates>,
}

// ─── Claims ──────────────────────────────────────────────────────────────────

/// Where a claim sits in the admin review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
  Pending,
  Approved,
  Rejected,
}

impl ClaimStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Approved => "approved",
      Self::Rejected => "rejected",
    }
  }

  pub fn parse(value: &str) -> Option<Self> {
    match value.to_ascii_lowercase().as_str() {
      "pending" => Some(Self::Pending),
      "approved" => Some(Self::Approved),
      "rejected" => Some(Self::Rejected),
      _ => None,
    }
  }
}

/// An ownership assertion against a found item.
///
/// `ai_confidence` and `ai_reason` are constant annotations carried with the
/// record; there is no inference anywhere in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
  pub id:            String,
  /// References an [`Item::id`] in the same catalog. Holds for seed data;
  /// not enforced at runtime.
  pub item_id:       String,
  pub email:         String,
  pub message:       String,
  pub date:          NaiveDate,
  pub status:        ClaimStatus,
  /// 0–100.
  pub ai_confidence: u8,
  pub ai_reason:     String,
}

// ─── Canned analyses ─────────────────────────────────────────────────────────

/// The kind-specific payload of a canned analysis. The variant name serves as
/// the display discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum AnalysisKind {
  /// Candidate item titles judged similar to each other.
  ItemMatching { candidates: Vec<String> },
  /// A verdict on a specific claim against a specific item.
  ClaimVerification { item_id: String, claim_id: String },
  /// A rambling report condensed into a usable description.
  DescriptionSummary { original: String, summary: String },
}

/// A fixed AI analysis record. Pure lookup data; the typing-reveal effect
/// shown over it is a view-timing concern and lives entirely outside this
/// crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
  pub kind:       AnalysisKind,
  /// 0–100.
  pub confidence: u8,
  pub reason:     String,
}
