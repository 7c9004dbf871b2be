//! Verification report types.
//!
//! Before an analysis or treatment plan is handed to storage, the verifier
//! checks it. Only a passing `VerificationReport` lets the pipeline continue.

use serde::{Deserialize, Serialize};

/// The result of running every check against one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if all checks passed.
    pub passed: bool,
    /// All failures collected during this run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    pub fn from_failures(failures: Vec<VerificationFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Failure messages joined into one line, for error reasons and logs.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single check failure within a `VerificationReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Identifier of the check that failed.
    pub rule_id: String,
    /// Human-readable explanation of why it failed.
    pub message: String,
}
