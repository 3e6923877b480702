use std::sync::{Mutex, PoisonError};

use gatekeeper_types::{AttemptRecord, NewAttempt, Status};

use super::HistoryStore;
use crate::error::StoreError;

/// In-process history. Ids start at 1, like the SQLite rowid.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<AttemptRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn append(&self, attempt: NewAttempt) -> Result<AttemptRecord, StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let id = records.last().map_or(1, |r| r.id + 1);
        let record = attempt.into_record(id);
        records.push(record.clone());
        Ok(record)
    }

    fn find_latest_ok(&self, code: &str) -> Result<Option<AttemptRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .filter(|r| r.status == Status::Ok && r.code == code)
            .max_by_key(|r| (r.timestamp, r.id))
            .cloned())
    }

    fn count(&self) -> Result<u64, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.len() as u64)
    }

    fn records(&self) -> Result<Vec<AttemptRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }
}
