//! Fixed seed collections for the reclaim catalog.
//!
//! This crate is the data-loading collaborator: it hands out the immutable
//! item catalog, the claim list, the enrollment roster, and the canned AI
//! analyses. Every constructor returns a fresh owned collection; callers
//! treat them as read-only inputs.

use chrono::NaiveDate;
use reclaim_core::{
  catalog::{
    Analysis, AnalysisKind, Claim, ClaimStatus, Coordinates, Item, ItemKind,
    ItemStatus,
  },
  enrollment::Enrollment,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

// ─── Locations ───────────────────────────────────────────────────────────────

/// The campus locations an item can be reported at.
pub fn locations() -> Vec<&'static str> {
  vec![
    "Main Building",
    "Library",
    "Cafeteria",
    "Engineering Block",
    "Sports Complex",
    "Auditorium",
    "Hostel Block A",
    "Hostel Block B",
    "Parking Lot",
    "Science Block",
  ]
}

// ─── Items ───────────────────────────────────────────────────────────────────

/// The fixed item catalog.
pub fn items() -> Vec<Item> {
  vec![
    Item {
      id:            "1".to_owned(),
      title:         "MacBook Pro 16-inch".to_owned(),
      description:   "Space gray MacBook Pro 16-inch (2021) with MIT sticker \
                      on the cover. Last seen in the library study room 203."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1496181133206-80ce9b88a853"
        .to_owned(),
      location:      "Library".to_owned(),
      kind:          ItemKind::Lost,
      date:          date(2023, 4, 10),
      contact_email: "student@mit.edu".to_owned(),
      status:        ItemStatus::Pending,
      coordinates:   Some(Coordinates { latitude: 42.3596, longitude: -71.0912 }),
    },
    Item {
      id:            "2".to_owned(),
      title:         "iPhone 14 Pro (Black)".to_owned(),
      description:   "iPhone 14 Pro in matte black with a clear case. The \
                      lock screen wallpaper is the MIT campus. Lost near the \
                      cafeteria."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1592286927505-1def25115df8"
        .to_owned(),
      location:      "Cafeteria".to_owned(),
      kind:          ItemKind::Lost,
      date:          date(2023, 4, 12),
      contact_email: "johndoe@mit.edu".to_owned(),
      status:        ItemStatus::Claimed,
      coordinates:   Some(Coordinates { latitude: 42.3601, longitude: -71.0942 }),
    },
    Item {
      id:            "3".to_owned(),
      title:         "Car Keys with MIT Keychain".to_owned(),
      description:   "Honda car keys with an MIT keychain and a small red \
                      flashlight attached. Found near the parking lot \
                      entrance."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1582139329536-e7284fece509"
        .to_owned(),
      location:      "Parking Lot".to_owned(),
      kind:          ItemKind::Found,
      date:          date(2023, 4, 15),
      contact_email: "security@mit.edu".to_owned(),
      status:        ItemStatus::Pending,
      coordinates:   None,
    },
    Item {
      id:            "4".to_owned(),
      title:         "Blue Water Bottle".to_owned(),
      description:   "Hydro Flask blue water bottle with MIT engineering \
                      department sticker. Found in Lecture Hall 102 after the \
                      Algorithms class."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1602443276673-f52c60ee4fc8"
        .to_owned(),
      location:      "Engineering Block".to_owned(),
      kind:          ItemKind::Found,
      date:          date(2023, 4, 8),
      contact_email: "staff@mit.edu".to_owned(),
      status:        ItemStatus::Pending,
      coordinates:   Some(Coordinates { latitude: 42.3598, longitude: -71.0921 }),
    },
    Item {
      id:            "5".to_owned(),
      title:         "Noise Cancelling Headphones".to_owned(),
      description:   "Sony WH-1000XM4 noise cancelling headphones in black. \
                      Left in the library study room near the computer \
                      stations."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1545127398-14699f92334b"
        .to_owned(),
      location:      "Library".to_owned(),
      kind:          ItemKind::Found,
      date:          date(2023, 4, 14),
      contact_email: "library@mit.edu".to_owned(),
      status:        ItemStatus::Pending,
      coordinates:   None,
    },
    Item {
      id:            "6".to_owned(),
      title:         "Student ID Card".to_owned(),
      description:   "MIT student ID card for Sarah Johnson. Found near the \
                      entrance to the cafeteria during lunch hours."
        .to_owned(),
      image:         "https://images.unsplash.com/photo-1586074299757-dc655f18518c"
        .to_owned(),
      location:      "Cafeteria".to_owned(),
      kind:          ItemKind::Found,
      date:          date(2023, 4, 11),
      contact_email: "frontdesk@mit.edu".to_owned(),
      status:        ItemStatus::Resolved,
      coordinates:   Some(Coordinates { latitude: 42.3601, longitude: -71.0942 }),
    },
  ]
}

// ─── Claims ──────────────────────────────────────────────────────────────────

/// The fixed claim list. Confidence values are constant annotations.
pub fn claims() -> Vec<Claim> {
  vec![
    Claim {
      id:            "1".to_owned(),
      item_id:       "3".to_owned(),
      email:         "carowner@mit.edu".to_owned(),
      message:       "These are my car keys. The Honda key has a scratch on \
                      the side and the keychain has my initials 'MJ' on the \
                      back. I lost them on April 15th after parking my car in \
                      the morning."
        .to_owned(),
      date:          date(2023, 4, 16),
      status:        ClaimStatus::Pending,
      ai_confidence: 85,
      ai_reason:     "The description details match the item. The date of \
                      loss aligns with the found date, and the location is \
                      consistent with where the item might have been lost."
        .to_owned(),
    },
    Claim {
      id:            "2".to_owned(),
      item_id:       "2".to_owned(),
      email:         "phoneowner@mit.edu".to_owned(),
      message:       "This is my iPhone. I can unlock it with my Face ID, and \
                      I can describe the phone case which has a small crack \
                      in the bottom right corner. I lost it during lunch in \
                      the cafeteria."
        .to_owned(),
      date:          date(2023, 4, 13),
      status:        ClaimStatus::Approved,
      ai_confidence: 93,
      ai_reason:     "High confidence match due to ability to unlock with \
                      biometrics, specific details about the case damage, and \
                      matching location and timing of loss."
        .to_owned(),
    },
  ]
}

// ─── Enrollment roster ───────────────────────────────────────────────────────

fn entry(id: &str, number: &str, name: &str, department: &str, year: u16) -> Enrollment {
  Enrollment {
    id:                id.to_owned(),
    enrollment_number: number.to_owned(),
    student_name:      name.to_owned(),
    department:        department.to_owned(),
    year,
    is_used:           false,
  }
}

/// The fixed enrollment roster consulted by signup.
pub fn enrollments() -> Vec<Enrollment> {
  vec![
    entry("enrl-001", "MIT2022001", "Rahul Sharma", "Computer Science", 2),
    entry("enrl-002", "MIT2022002", "Priya Patel", "Information Technology", 2),
    entry("enrl-003", "MIT2021023", "Amit Kumar", "Mechanical Engineering", 3),
    entry("enrl-004", "MIT2021045", "Sneha Gupta", "Electronics", 3),
    entry("enrl-005", "MIT2020067", "Vijay Singh", "Computer Science", 4),
    entry("enrl-006", "MIT2023012", "Neha Verma", "Information Technology", 1),
    entry("enrl-007", "MIT2023098", "Ravi Desai", "Data Science", 1),
    entry("enrl-008", "MIT2020103", "Sunil Rao", "Artificial Intelligence", 4),
    entry("enrl-009", "MIT2022134", "Ananya Reddy", "Computer Science", 2),
    entry("enrl-010", "MIT2021087", "Karan Malhotra", "Robotics", 3),
  ]
}

// ─── Canned analyses ─────────────────────────────────────────────────────────

/// The fixed AI analysis table. Pure lookup data; no inference exists.
pub fn analyses() -> Vec<Analysis> {
  vec![
    Analysis {
      kind:       AnalysisKind::ItemMatching {
        candidates: vec![
          "iPhone 14 Pro (Black)".to_owned(),
          "iPhone 13 (Black case)".to_owned(),
        ],
      },
      confidence: 78,
      reason:     "Both items are iPhones with similar physical \
                   characteristics. The color and case description match, but \
                   the models differ. The reported loss locations are near \
                   each other."
        .to_owned(),
    },
    Analysis {
      kind:       AnalysisKind::ClaimVerification {
        item_id:  "3".to_owned(),
        claim_id: "1".to_owned(),
      },
      confidence: 85,
      reason:     "The claimant provided specific details about the key \
                   (scratch) and keychain (initials) that weren't in the \
                   original description. The timeline and location are \
                   consistent."
        .to_owned(),
    },
    Analysis {
      kind:       AnalysisKind::DescriptionSummary {
        original: "I think I left my um... you know, the blue bag, the one \
                   with all my books and I think my calculator was in there \
                   too. It's kinda large and has like a logo on it. I think \
                   it was North... North Face? Yeah, that's it. I had it in \
                   the morning class, then lunch, then I noticed it was gone \
                   when I got to the lab."
          .to_owned(),
        summary:  "Blue North Face backpack containing books and a \
                   calculator. Last seen between lunch period and afternoon \
                   lab session."
          .to_owned(),
      },
      confidence: 90,
      reason:     "Extracted key item characteristics (blue North Face bag), \
                   contents (books, calculator), and last known \
                   locations/timing."
        .to_owned(),
    },
  ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use reclaim_core::query::{ItemQuery, select_items};

  use super::*;

  #[test]
  fn every_claim_references_a_catalog_item() {
    let items = items();
    for claim in claims() {
      assert!(
        items.iter().any(|item| item.id == claim.item_id),
        "claim {} references unknown item {}",
        claim.id,
        claim.item_id,
      );
    }
  }

  #[test]
  fn macbook_search_finds_exactly_one_item() {
    let items = items();
    let selected = select_items(&items, &ItemQuery {
      text: Some("macbook".to_owned()),
      ..Default::default()
    });
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].title, "MacBook Pro 16-inch");
    assert_eq!(selected[0].location, "Library");
  }

  #[test]
  fn roster_has_unused_mit2022001() {
    let roster = enrollments();
    let entry = roster
      .iter()
      .find(|e| e.enrollment_number == "MIT2022001")
      .expect("roster entry");
    assert!(!entry.is_used);
    assert_eq!(entry.student_name, "Rahul Sharma");
  }

  #[test]
  fn confidence_values_stay_in_range() {
    assert!(claims().iter().all(|c| c.ai_confidence <= 100));
    assert!(analyses().iter().all(|a| a.confidence <= 100));
  }

  #[test]
  fn item_locations_come_from_the_known_set() {
    let known = locations();
    assert!(items().iter().all(|i| known.contains(&i.location.as_str())));
  }
}
