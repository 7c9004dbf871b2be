//! Fictional patients, symptom reports and facilities for the reference
//! scenarios. Nothing here describes a real person or place of care.

use triage_contracts::{
    error::TriageResult,
    facility::Coordinate,
    patient::PatientContext,
    symptom::Symptom,
};
use triage_facilities::FacilityDirectory;

/// Embedded default facility directory.
pub const DEFAULT_FACILITIES: &str = include_str!("../data/facilities.toml");

/// Where the mock patient is when they look for care (downtown San Francisco).
pub const SAMPLE_LOCATION: Coordinate = Coordinate {
    latitude: 37.7749,
    longitude: -122.4194,
};

pub fn default_directory() -> TriageResult<FacilityDirectory> {
    FacilityDirectory::from_toml_str(DEFAULT_FACILITIES)
}

// ── Patients ──────────────────────────────────────────────────────────────────

/// 34-year-old with asthma and a penicillin allergy.
pub fn asthma_patient() -> PatientContext {
    PatientContext::default()
        .with_age(34)
        .with_condition("Asthma")
        .with_allergy("Penicillin")
}

/// 58-year-old with hypertension and type 2 diabetes.
pub fn hypertensive_patient() -> PatientContext {
    PatientContext::default()
        .with_age(58)
        .with_condition("Hypertension")
        .with_condition("Type 2 Diabetes")
}

// ── Symptom reports ───────────────────────────────────────────────────────────

pub fn respiratory_symptoms() -> Vec<Symptom> {
    vec![Symptom::new("Fever", 6), Symptom::new("Dry cough", 5)]
}

pub fn cardiac_symptoms() -> Vec<Symptom> {
    vec![
        Symptom::new("Heart racing", 8),
        Symptom::new("Shortness of breath", 6),
    ]
}

pub fn chest_pain_symptoms() -> Vec<Symptom> {
    vec![Symptom::new("Chest pain", 5)]
}
