//! Keyword lists matched against lower-cased symptom names.
//!
//! Matching is substring containment, not whole-word: "heartburn" contains
//! `heart` and therefore lands in the cardiac rules.

/// Any of these anywhere in a symptom name forces the emergency result.
pub const CRITICAL: &[&str] = &[
    "chest pain",
    "severe chest pain",
    "heart attack",
    "stroke",
    "difficulty breathing",
    "cannot breathe",
    "choking",
    "severe bleeding",
    "unconscious",
    "seizure",
    "paralysis",
];

pub const CARDIAC: &[&str] = &["chest pain", "heart"];

pub const RESPIRATORY: &[&str] = &["fever", "cough", "sore throat"];

/// Risk classification includes dizziness; treatment does not.
pub const NEUROLOGICAL: &[&str] = &["headache", "migraine", "dizziness"];

pub const HEADACHE: &[&str] = &["headache", "migraine"];

/// Risk classification includes stomach; treatment does not.
pub const GASTROINTESTINAL: &[&str] = &["nausea", "vomit", "diarrhea", "stomach"];

pub const GASTROINTESTINAL_TREATABLE: &[&str] = &["nausea", "vomit", "diarrhea"];

pub const MUSCULOSKELETAL: &[&str] = &["body ache", "joint", "muscle"];

/// Chronic conditions that push respiratory symptoms onto the severe path.
pub const CHRONIC_LUNG: &[&str] = &["asthma", "copd"];

/// A single severity at or above this always triggers the emergency result.
pub const EMERGENCY_MAX_SEVERITY: u8 = 9;
