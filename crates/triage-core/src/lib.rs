//! # triage-core
//!
//! The deterministic core of the clinical triage engine.
//!
//! This crate provides:
//! - Symptom normalization (`normalize`), shared by both evaluators
//! - The four seam traits (`RiskClassifier`, `TreatmentGenerator`,
//!   `ReportVerifier`, `AssessmentStore`)
//! - The `TriagePipeline` that wires them together in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_core::{TriagePipeline, normalize::normalize};
//! ```

pub mod normalize;
pub mod pipeline;
pub mod traits;

pub use normalize::{normalize, NormalizedSymptoms};
pub use pipeline::TriagePipeline;
