//! Optional patient context consulted by the risk classifier.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What the application knows about the patient.
///
/// The classifier takes this as `Option<&PatientContext>`. `None` means "no
/// profile on file" and behaves exactly like a context with `age: None` and
/// empty condition sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    /// Age in years, if the patient entered one.
    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub chronic_conditions: BTreeSet<String>,

    /// Recorded for completeness; no current rule reads it.
    #[serde(default)]
    pub allergies: BTreeSet<String>,
}

impl PatientContext {
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.chronic_conditions.insert(condition.into());
        self
    }

    pub fn with_allergy(mut self, allergy: impl Into<String>) -> Self {
        self.allergies.insert(allergy.into());
        self
    }

    pub fn has_chronic_conditions(&self) -> bool {
        !self.chronic_conditions.is_empty()
    }

    /// Case-insensitive exact match against one recorded condition.
    pub fn has_condition(&self, condition: &str) -> bool {
        self.chronic_conditions
            .iter()
            .any(|c| c.eq_ignore_ascii_case(condition))
    }

    /// Case-insensitive substring match against any recorded condition.
    pub fn has_condition_containing(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.chronic_conditions
            .iter()
            .any(|c| c.to_lowercase().contains(&fragment))
    }
}
