//! Error types for the triage pipeline.
//!
//! Every fallible operation in the workspace returns `TriageResult<T>`.
//! The classifiers themselves never fail on normalized input; the errors
//! below come from input validation, configuration, verification and the
//! storage seam.

use thiserror::Error;

/// The unified error type for the triage engine.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The caller supplied no symptoms. Mean and max are undefined over an
    /// empty list, so normalization refuses to run.
    #[error("input validation error: at least one symptom is required")]
    EmptySymptoms,

    /// A symptom severity fell outside the 1..=10 scale.
    #[error("input validation error: symptom '{name}' has severity {severity}, expected 1..=10")]
    InvalidSeverity { name: String, severity: u8 },

    /// A severity band label was not one of `mild`, `moderate`, `severe`.
    #[error("input validation error: unknown severity band '{value}'")]
    InvalidSeverityBand { value: String },

    /// A configuration document is missing, malformed or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The verifier rejected an analysis or treatment before it was stored.
    #[error("output verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// The assessment store could not persist a record.
    #[error("assessment store write failed: {reason}")]
    StoreWriteFailed { reason: String },

    /// A value could not be rendered as JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the triage crates.
pub type TriageResult<T> = Result<T, TriageError>;
