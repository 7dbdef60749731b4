//! Scholarship record store

use crate::models::ScholarshipRecord;

/// Read-only scholarship disbursement records
pub struct RecordStore {
    records: Vec<ScholarshipRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ScholarshipRecord>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[ScholarshipRecord] {
        &self.records
    }
}
