//! Symptom normalization: the single aggregation step both evaluators share.
//!
//! The normalizer lower-cases every symptom name and reduces the severities
//! to a mean and a maximum. Empty input is rejected outright, since mean and
//! max are undefined over zero elements.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use triage_contracts::{
    error::{TriageError, TriageResult},
    symptom::Symptom,
};

/// Lowest severity on the reporting scale.
pub const MIN_SEVERITY: u8 = 1;
/// Highest severity on the reporting scale.
pub const MAX_SEVERITY: u8 = 10;

/// Aggregated view of a symptom list.
///
/// Keyword matching downstream is substring containment over `names`, so a
/// symptom named "Severe Chest Pain" answers to `"chest pain"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSymptoms {
    /// Lower-cased symptom names. Duplicates collapse.
    pub names: BTreeSet<String>,
    /// Arithmetic mean of all severities, not rounded.
    pub mean_severity: f64,
    /// Largest single severity.
    pub max_severity: u8,
}

impl NormalizedSymptoms {
    /// True if any normalized name contains `keyword` as a substring.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.names.iter().any(|name| name.contains(keyword))
    }

    /// True if any normalized name contains any of `keywords`.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }
}

/// Validate and aggregate `symptoms`.
///
/// # Errors
///
/// - `TriageError::EmptySymptoms` when the list is empty.
/// - `TriageError::InvalidSeverity` when any severity is outside 1..=10.
pub fn normalize(symptoms: &[Symptom]) -> TriageResult<NormalizedSymptoms> {
    if symptoms.is_empty() {
        return Err(TriageError::EmptySymptoms);
    }

    if let Some(bad) = symptoms
        .iter()
        .find(|s| !(MIN_SEVERITY..=MAX_SEVERITY).contains(&s.severity))
    {
        return Err(TriageError::InvalidSeverity {
            name: bad.name.clone(),
            severity: bad.severity,
        });
    }

    let names: BTreeSet<String> = symptoms.iter().map(|s| s.name.to_lowercase()).collect();
    let total: u32 = symptoms.iter().map(|s| u32::from(s.severity)).sum();
    let mean_severity = f64::from(total) / symptoms.len() as f64;
    let max_severity = symptoms.iter().map(|s| s.severity).max().unwrap_or(MIN_SEVERITY);

    debug!(
        symptom_count = symptoms.len(),
        mean_severity,
        max_severity,
        "symptoms normalized"
    );

    Ok(NormalizedSymptoms {
        names,
        mean_severity,
        max_severity,
    })
}

#[cfg(test)]
mod tests {
    use triage_contracts::{error::TriageError, symptom::Symptom};

    use super::normalize;

    #[test]
    fn test_mean_and_max() {
        let n = normalize(&[Symptom::new("A", 3), Symptom::new("B", 9)]).unwrap();
        assert_eq!(n.mean_severity, 6.0);
        assert_eq!(n.max_severity, 9);
    }

    #[test]
    fn test_mean_is_not_rounded() {
        let n = normalize(&[
            Symptom::new("a", 1),
            Symptom::new("b", 2),
            Symptom::new("c", 2),
        ])
        .unwrap();
        assert!((n.mean_severity - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_names_are_lowercased() {
        let n = normalize(&[Symptom::new("Severe Chest Pain", 4)]).unwrap();
        assert!(n.names.contains("severe chest pain"));
        assert!(n.mentions("chest pain"));
        assert!(!n.mentions("Chest Pain"), "keywords are matched against lowercased names");
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        let n = normalize(&[Symptom::new("Heartburn", 2)]).unwrap();
        assert!(n.mentions_any(&["chest pain", "heart"]));
    }

    #[test]
    fn test_empty_input_rejected() {
        match normalize(&[]) {
            Err(TriageError::EmptySymptoms) => {}
            other => panic!("expected EmptySymptoms, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_severity_rejected() {
        for severity in [0u8, 11] {
            match normalize(&[Symptom::new("cough", 5), Symptom::new("fever", severity)]) {
                Err(TriageError::InvalidSeverity { name, severity: s }) => {
                    assert_eq!(name, "fever");
                    assert_eq!(s, severity);
                }
                other => panic!("expected InvalidSeverity, got {:?}", other),
            }
        }
    }
}
