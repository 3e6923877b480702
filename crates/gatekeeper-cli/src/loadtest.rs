//! Synthetic scan traffic for exercising a store end to end.
//!
//! Every tenth scan follows the same mix:
//! - 5 valid codes above the threshold
//! - 1 below the threshold
//! - 1 for the wrong event
//! - 1 without a separator
//! - 1 with a non-numeric sequence
//! - 1 repeat of one of 50 fixed codes, to drive re-entry
//!
//! Sequences are clamped to the `i64` range. With a threshold of `i64::MIN`
//! nothing lies below it, so that slot scans the threshold itself.

use std::time::{Duration, Instant};

use gatekeeper_journal::{Clock, HistoryStore, StoreError, Summary, Validator};
use gatekeeper_types::ValidationRequest;
use rand::Rng;

/// Settings shared by every generated scan.
#[derive(Clone, Debug)]
pub struct Traffic {
    pub event: String,
    pub min_sequence: i64,
}

impl Traffic {
    /// The code for scan number `i`.
    pub fn code(&self, i: usize, rng: &mut impl Rng) -> String {
        let event = &self.event;
        let min = self.min_sequence;
        let above = min..=min.saturating_add(9899);
        match i % 10 {
            0..=4 => format!("{event},{}", rng.random_range(above)),
            5 => match min.checked_sub(1) {
                Some(below) => format!("{event},{}", rng.random_range(min.saturating_sub(99)..=below)),
                None => format!("{event},{min}"),
            },
            6 => format!("WrongEvent,{}", rng.random_range(above)),
            7 => format!("{event}{}", rng.random_range(100..=999)),
            8 => format!("{event},abc"),
            _ => format!("{event},{}", min.saturating_add((i % 50) as i64)),
        }
    }

    pub fn request(&self, code: String) -> ValidationRequest {
        ValidationRequest::new(code, self.event.clone(), self.min_sequence.to_string())
            .check_event(true)
            .check_sequence(true)
    }
}

/// Result of one load run.
#[derive(Clone, Debug)]
pub struct Report {
    pub summary: Summary,
    pub elapsed: Duration,
}

impl Report {
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.summary.total as f64 / secs
    }
}

/// Validate `count` generated scans and summarize the attempts they appended.
pub fn run<S: HistoryStore, C: Clock>(
    validator: &Validator<S, C>,
    traffic: &Traffic,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Report, StoreError> {
    let before = validator.store().count()? as usize;
    let start = Instant::now();
    for i in 0..count {
        let code = traffic.code(i, rng);
        validator.validate(&traffic.request(code))?;
    }
    let elapsed = start.elapsed();
    let records = validator.store().records()?;
    Ok(Report {
        summary: Summary::from_records(&records[before..]),
        elapsed,
    })
}
