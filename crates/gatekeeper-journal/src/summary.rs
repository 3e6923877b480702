use std::collections::BTreeMap;

use gatekeeper_types::{AttemptRecord, Category, Status};
use serde::Serialize;

/// Counts per status and per category over a run of attempts.
///
/// Derived by folding over records; never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: u64,
    pub ok: u64,
    pub ng: u64,
    pub by_category: BTreeMap<Category, u64>,
}

impl Summary {
    pub fn from_records(records: &[AttemptRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.observe(record.category);
            summary
        })
    }

    /// Count one attempt. Status follows from the category.
    pub fn observe(&mut self, category: Category) {
        self.total += 1;
        match category.status() {
            Status::Ok => self.ok += 1,
            Status::Ng => self.ng += 1,
        }
        *self.by_category.entry(category).or_default() += 1;
    }

    pub fn count(&self, category: Category) -> u64 {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Share of attempts in `category`, in percent.
    pub fn percent(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 * 100.0 / self.total as f64
    }
}
