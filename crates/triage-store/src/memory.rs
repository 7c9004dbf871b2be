//! In-memory implementation of `AssessmentStore`.
//!
//! Records are kept in append order in a `Vec` behind `Arc<Mutex<_>>`, so a
//! clone of the store shares the same backing list. Nothing is ever updated
//! or removed once saved.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use triage_contracts::{
    error::{TriageError, TriageResult},
    record::{AssessmentId, AssessmentRecord},
};
use triage_core::traits::AssessmentStore;

/// Append-only assessment store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    pub(crate) records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved record, oldest first.
    ///
    /// A poisoned lock yields an empty snapshot; the write path reports the
    /// poisoning as an error instead.
    pub fn records(&self) -> Vec<AssessmentRecord> {
        self.lock().map(|r| r.to_vec()).unwrap_or_default()
    }

    pub fn find(&self, id: &AssessmentId) -> Option<AssessmentRecord> {
        self.lock()
            .ok()?
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> TriageResult<MutexGuard<'_, Vec<AssessmentRecord>>> {
        self.records.lock().map_err(|e| TriageError::StoreWriteFailed {
            reason: format!("assessment store lock poisoned: {e}"),
        })
    }
}

impl AssessmentStore for InMemoryAssessmentStore {
    fn save(&self, record: &AssessmentRecord) -> TriageResult<()> {
        let mut records = self.lock()?;
        records.push(record.clone());

        info!(
            assessment_id = %record.id,
            urgency = record.analysis.urgency.as_str(),
            severity_band = record.severity_band.as_str(),
            stored = records.len(),
            "assessment record appended"
        );

        Ok(())
    }
}
