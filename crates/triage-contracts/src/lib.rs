//! # triage-contracts
//!
//! Shared types, schemas, and contracts for the clinical triage engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions and error types.

pub mod analysis;
pub mod error;
pub mod facility;
pub mod patient;
pub mod record;
pub mod symptom;
pub mod treatment;
pub mod verify;
