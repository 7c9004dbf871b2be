//! Treatment plan produced by the treatment generator.

use serde::{Deserialize, Serialize};

/// Diagnosis label of the fixed cardiac referral. A plan carrying it never
/// lists medications.
pub const CARDIAC_REFERRAL_DIAGNOSIS: &str =
    "Potential Cardiac Concern - Immediate Medical Attention Required";

/// One suggested medication. Free text in prescribing-label style; nothing
/// here is checked against a drug database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

impl Medication {
    pub fn new(name: &str, dosage: &str, frequency: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            duration: duration.to_string(),
        }
    }
}

/// Treatment suggestion for one assessment.
///
/// `medications` is ordered; the order is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub diagnosis: String,
    pub treatment_plan: String,
    pub medications: Vec<Medication>,
    pub precautions: String,
}

impl TreatmentPlan {
    pub fn medication_names(&self) -> Vec<&str> {
        self.medications.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn is_cardiac_referral(&self) -> bool {
        self.diagnosis == CARDIAC_REFERRAL_DIAGNOSIS
    }
}
