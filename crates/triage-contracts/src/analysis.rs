//! Preliminary analysis produced by the risk classifier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Urgent,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }
}

/// The structured result of one risk classification.
///
/// Every branch of the classifier populates all seven fields. `urgency` is
/// `Emergency` exactly when `risk_level` is `Critical`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreliminaryAnalysis {
    pub risk_level: RiskLevel,
    pub urgency: Urgency,
    pub preliminary_diagnosis: String,
    pub recommended_specialist: String,
    pub analysis_summary: String,
    pub key_findings: Vec<String>,
    pub warning_signs: Vec<String>,
}

impl PreliminaryAnalysis {
    pub fn is_emergency(&self) -> bool {
        self.urgency == Urgency::Emergency
    }
}
