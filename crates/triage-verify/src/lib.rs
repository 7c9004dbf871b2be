//! # triage-verify
//!
//! Checks every classifier output before the pipeline stores it.
//!
//! [`TriageVerifier`] implements
//! [`ReportVerifier`](triage_core::traits::ReportVerifier). Verification
//! runs a JSON Schema pass over the serialized output and then a set of
//! named semantic checks:
//!
//! | rule id                              | output    |
//! |--------------------------------------|-----------|
//! | `urgency-risk-coupling`              | analysis  |
//! | `findings-present`                   | analysis  |
//! | `warnings-present`                   | analysis  |
//! | `medication-fields`                  | treatment |
//! | `cardiac-referral-has-no-medication` | treatment |
//!
//! Schema violations are reported under the rule id `json-schema`.

pub mod engine;
pub mod schema;

pub use engine::TriageVerifier;

// ── Tests ─────────────────────────────────────────────────────────────────────
