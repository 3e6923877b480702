//! Append-only history of validation attempts.
//!
//! The store is both the audit trail and the only state the validator
//! consults: re-entry decisions read the latest admitted attempt for a code.
//! The contract has no update or delete; records are immutable once appended.
//!
//! Two implementations:
//! - [`SqliteHistory`]: durable, one `history` table.
//! - [`MemoryHistory`]: process-local, for tests and load runs.

mod memory;
mod sqlite;

pub use memory::MemoryHistory;
pub use sqlite::SqliteHistory;

use gatekeeper_types::{AttemptRecord, NewAttempt};

use crate::error::StoreError;

pub trait HistoryStore {
    /// Create the underlying structure if absent. Safe to call repeatedly.
    fn init(&self) -> Result<(), StoreError>;

    /// Durably append one attempt, returning it with its assigned id.
    ///
    /// All-or-nothing: on error no record is written.
    fn append(&self, attempt: NewAttempt) -> Result<AttemptRecord, StoreError>;

    /// The most recent `OK` attempt whose raw code equals `code` exactly.
    ///
    /// "Most recent" is by timestamp descending, ties broken by id.
    fn find_latest_ok(&self, code: &str) -> Result<Option<AttemptRecord>, StoreError>;

    /// Number of attempts recorded.
    fn count(&self) -> Result<u64, StoreError>;

    /// Every attempt, in append order.
    fn records(&self) -> Result<Vec<AttemptRecord>, StoreError>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for &S {
    fn init(&self) -> Result<(), StoreError> {
        (**self).init()
    }

    fn append(&self, attempt: NewAttempt) -> Result<AttemptRecord, StoreError> {
        (**self).append(attempt)
    }

    fn find_latest_ok(&self, code: &str) -> Result<Option<AttemptRecord>, StoreError> {
        (**self).find_latest_ok(code)
    }

    fn count(&self) -> Result<u64, StoreError> {
        (**self).count()
    }

    fn records(&self) -> Result<Vec<AttemptRecord>, StoreError> {
        (**self).records()
    }
}
