use chrono::NaiveDate;
use gatekeeper_types::{AttemptRecord, Category};

use crate::error::Rejection;

/// Classify a well-formed scan against its latest prior admission.
///
/// - no prior admission: `FirstEntry`
/// - prior admission on `today`: `ReEntry`, any number of times
/// - prior admission on another day: rejected as stale
pub(crate) fn check(prior: Option<&AttemptRecord>, today: NaiveDate) -> Result<Category, Rejection> {
    match prior {
        None => Ok(Category::FirstEntry),
        Some(record) if record.day() == today => Ok(Category::ReEntry),
        Some(record) => Err(Rejection::StaleTicket {
            last_entry: record.timestamp,
        }),
    }
}
