//! Plain-text rendering for catalog listings and session state.

use std::fmt::Write as _;

use reclaim_core::{
  catalog::{Analysis, AnalysisKind, Claim, Item},
  identity::Identity,
};

/// Render the item listing as a fixed-width table.
pub fn item_table(items: &[&Item]) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:<4} {:<30} {:<18} {:<6} {:<11} {:<9}",
    "ID", "TITLE", "LOCATION", "KIND", "DATE", "STATUS"
  );
  for item in items {
    let _ = writeln!(
      out,
      "{:<4} {:<30} {:<18} {:<6} {:<11} {:<9}",
      item.id,
      truncate(&item.title, 30),
      truncate(&item.location, 18),
      item.kind.as_str(),
      item.date,
      item.status.as_str(),
    );
  }
  let _ = writeln!(out, "{} item(s)", items.len());
  out
}

/// Render one item with its claims and their AI annotations.
pub fn item_detail(item: &Item, claims: &[&Claim]) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}  [{}]", item.title, item.status.as_str());
  let _ = writeln!(out, "  {}", item.description);
  let _ = writeln!(out, "  where: {}   when: {}", item.location, item.date);
  let _ = writeln!(out, "  kind: {}   contact: {}", item.kind.as_str(), item.contact_email);
  if let Some(coords) = item.coordinates {
    let _ = writeln!(out, "  position: {:.4}, {:.4}", coords.latitude, coords.longitude);
  }

  if claims.is_empty() {
    let _ = writeln!(out, "  no claims filed");
  } else {
    let _ = writeln!(out, "  claims:");
    for claim in claims {
      let _ = writeln!(
        out,
        "    [{}] {} ({}) - confidence {}%",
        claim.status.as_str(),
        claim.email,
        claim.date,
        claim.ai_confidence,
      );
      let _ = writeln!(out, "      {}", claim.message);
      let _ = writeln!(out, "      analysis: {}", claim.ai_reason);
    }
  }
  out
}

/// Render the claim listing as a fixed-width table.
pub fn claim_table(claims: &[&Claim], items: &[Item]) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:<4} {:<30} {:<24} {:<11} {:<9} {:>10}",
    "ID", "ITEM", "CLAIMANT", "DATE", "STATUS", "CONFIDENCE"
  );
  for claim in claims {
    let title = items
      .iter()
      .find(|item| item.id == claim.item_id)
      .map_or("(unknown item)", |item| item.title.as_str());
    let _ = writeln!(
      out,
      "{:<4} {:<30} {:<24} {:<11} {:<9} {:>9}%",
      claim.id,
      truncate(title, 30),
      truncate(&claim.email, 24),
      claim.date,
      claim.status.as_str(),
      claim.ai_confidence,
    );
  }
  let _ = writeln!(out, "{} claim(s)", claims.len());
  out
}

/// Render the signed-in identity.
pub fn identity_card(identity: &Identity) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{} <{}>", identity.name, identity.email);
  let _ = writeln!(out, "  enrollment: {}", identity.enrollment_number);
  let _ = writeln!(
    out,
    "  role: {}   {}",
    if identity.is_admin() { "admin" } else { "student" },
    if identity.is_verified { "verified" } else { "pending verification" },
  );
  out
}

/// Render the canned analysis table.
pub fn analysis_list(analyses: &[Analysis]) -> String {
  let mut out = String::new();
  for analysis in analyses {
    match &analysis.kind {
      AnalysisKind::ItemMatching { candidates } => {
        let _ = writeln!(out, "item matching ({}%)", analysis.confidence);
        let _ = writeln!(out, "  candidates: {}", candidates.join(" / "));
      }
      AnalysisKind::ClaimVerification { item_id, claim_id } => {
        let _ = writeln!(out, "claim verification ({}%)", analysis.confidence);
        let _ = writeln!(out, "  item {item_id}, claim {claim_id}");
      }
      AnalysisKind::DescriptionSummary { original, summary } => {
        let _ = writeln!(out, "description summary ({}%)", analysis.confidence);
        let _ = writeln!(out, "  original: {original}");
        let _ = writeln!(out, "  summary:  {summary}");
      }
    }
    let _ = writeln!(out, "  {}", analysis.reason);
  }
  out
}

/// Truncate on a character boundary, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    text.to_owned()
  } else {
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
  }
}
