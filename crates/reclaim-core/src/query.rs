//! Pure filtering and sorting over the catalog collections.
//!
//! Selection never mutates its inputs and is deterministic: the same
//! arguments over the same slices yield the same references in the same
//! order. Filters compose with AND; an unset (or blank) filter passes
//! everything. Sorting is stable: records the sort key cannot distinguish
//! keep their input order, and with no sort key at all the input order is
//! preserved untouched.

use std::cmp::Ordering;

use crate::catalog::{Claim, ClaimStatus, Item, ItemKind, ItemStatus};

// ─── Sort parameters ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

impl SortDirection {
  fn apply(self, ordering: Ordering) -> Ordering {
    match self {
      Self::Ascending => ordering,
      Self::Descending => ordering.reverse(),
    }
  }
}

/// Sortable item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortKey {
  Title,
  Location,
  Date,
  Status,
}

impl ItemSortKey {
  /// Case-insensitive parse. Unknown field names yield `None`; selection
  /// with no sort key passes the input order through.
  pub fn parse(value: &str) -> Option<Self> {
    match value.to_ascii_lowercase().as_str() {
      "title" => Some(Self::Title),
      "location" => Some(Self::Location),
      "date" => Some(Self::Date),
      "status" => Some(Self::Status),
      _ => None,
    }
  }
}

/// Sortable claim fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimSortKey {
  Date,
  Status,
  Confidence,
}

impl ClaimSortKey {
  pub fn parse(value: &str) -> Option<Self> {
    match value.to_ascii_lowercase().as_str() {
      "date" => Some(Self::Date),
      "status" => Some(Self::Status),
      "confidence" => Some(Self::Confidence),
      _ => None,
    }
  }
}

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`select_items`].
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
  /// Case-insensitive substring match over title and description.
  pub text:      Option<String>,
  /// Exact location match.
  pub location:  Option<String>,
  pub kind:      Option<ItemKind>,
  pub status:    Option<ItemStatus>,
  pub sort_key:  Option<ItemSortKey>,
  pub direction: SortDirection,
}

/// Parameters for [`select_claims`].
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
  /// Case-insensitive substring match over the referenced item's title, the
  /// claimant email, and the message.
  pub text:      Option<String>,
  /// Exact claimant email match.
  pub claimant:  Option<String>,
  pub status:    Option<ClaimStatus>,
  pub sort_key:  Option<ClaimSortKey>,
  pub direction: SortDirection,
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Filter and sort `items` per `query`. Returns borrowed references in a new
/// sequence; the input slice is untouched.
pub fn select_items<'a>(items: &'a [Item], query: &ItemQuery) -> Vec<&'a Item> {
  let needle = lowercase_needle(query.text.as_deref());
  let location = nonblank(query.location.as_deref());

  let mut selected: Vec<&Item> = items
    .iter()
    .filter(|item| {
      let matches_text = needle.as_deref().is_none_or(|text| {
        item.title.to_lowercase().contains(text)
          || item.description.to_lowercase().contains(text)
      });
      let matches_location = location.is_none_or(|l| item.location == l);
      let matches_kind = query.kind.is_none_or(|k| item.kind == k);
      let matches_status = query.status.is_none_or(|s| item.status == s);

      matches_text && matches_location && matches_kind && matches_status
    })
    .collect();

  if let Some(key) = query.sort_key {
    selected.sort_by(|a, b| {
      let ordering = match key {
        ItemSortKey::Title => collate(&a.title, &b.title),
        ItemSortKey::Location => collate(&a.location, &b.location),
        ItemSortKey::Date => a.date.cmp(&b.date),
        ItemSortKey::Status => collate(a.status.as_str(), b.status.as_str()),
      };
      query.direction.apply(ordering)
    });
  }

  selected
}

/// Filter and sort `claims` per `query`. The item slice is consulted only to
/// resolve each claim's item title for the free-text match.
pub fn select_claims<'a>(
  claims: &'a [Claim],
  items: &[Item],
  query: &ClaimQuery,
) -> Vec<&'a Claim> {
  let needle = lowercase_needle(query.text.as_deref());
  let claimant = nonblank(query.claimant.as_deref());

  let mut selected: Vec<&Claim> = claims
    .iter()
    .filter(|claim| {
      let matches_text = needle.as_deref().is_none_or(|text| {
        let item_title = items
          .iter()
          .find(|item| item.id == claim.item_id)
          .map(|item| item.title.to_lowercase());
        item_title.is_some_and(|title| title.contains(text))
          || claim.email.to_lowercase().contains(text)
          || claim.message.to_lowercase().contains(text)
      });
      let matches_claimant = claimant.is_none_or(|email| claim.email == email);
      let matches_status = query.status.is_none_or(|s| claim.status == s);

      matches_text && matches_claimant && matches_status
    })
    .collect();

  if let Some(key) = query.sort_key {
    selected.sort_by(|a, b| {
      let ordering = match key {
        ClaimSortKey::Date => a.date.cmp(&b.date),
        ClaimSortKey::Status => collate(a.status.as_str(), b.status.as_str()),
        ClaimSortKey::Confidence => a.ai_confidence.cmp(&b.ai_confidence),
      };
      query.direction.apply(ordering)
    });
  }

  selected
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Lowercase a text filter, treating blank as unset.
fn lowercase_needle(text: Option<&str>) -> Option<String> {
  text.filter(|t| !t.trim().is_empty()).map(str::to_lowercase)
}

/// Treat an empty exact-match filter value as "any".
fn nonblank(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

/// Case-folded string comparison with a byte-wise tiebreak, so strings equal
/// ignoring case still order deterministically.
fn collate(a: &str, b: &str) -> Ordering {
  a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
