//! Reported symptoms and the coarse severity band derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// A single caller-reported symptom.
///
/// `severity` is on a 1..=10 scale. The range is checked when the symptom
/// list is normalized, not here, so a record read back from storage can
/// always be deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub severity: u8,
}

impl Symptom {
    pub fn new(name: impl Into<String>, severity: u8) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }

    /// Display band for this symptom alone, using the same thresholds as the
    /// overall band.
    pub fn band(&self) -> SeverityBand {
        SeverityBand::from_mean(f64::from(self.severity))
    }
}

/// Three-level bucket derived from the mean symptom severity.
///
/// Computed by the caller and passed into the treatment generator. The risk
/// classifier does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    /// `< 4` mild, `4..<7` moderate, `>= 7` severe.
    pub fn from_mean(mean: f64) -> Self {
        if mean >= 7.0 {
            SeverityBand::Severe
        } else if mean >= 4.0 {
            SeverityBand::Moderate
        } else {
            SeverityBand::Mild
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Severe => "severe",
        }
    }

    pub fn is_severe(&self) -> bool {
        matches!(self, SeverityBand::Severe)
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityBand {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(SeverityBand::Mild),
            "moderate" => Ok(SeverityBand::Moderate),
            "severe" => Ok(SeverityBand::Severe),
            _ => Err(TriageError::InvalidSeverityBand {
                value: s.to_string(),
            }),
        }
    }
}
