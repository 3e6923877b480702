use chrono::NaiveDateTime;
use gatekeeper_types::{
    AttemptRecord, Category, DEFAULT_SEPARATOR, NewAttempt, Status, ValidationRequest, Verdict,
};
use tracing::{info, instrument};

use crate::clock::{Clock, SystemClock};
use crate::error::{Rejection, StoreError};
use crate::rules::{self, history};
use crate::store::HistoryStore;

/// Fully classified result of one scan, before it is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub category: Category,
    /// Persisted with the attempt. Empty for admissions.
    pub reason: String,
    /// Returned to the caller.
    pub msg: String,
}

impl Outcome {
    fn admitted(category: Category, sequence: i64) -> Self {
        let label = match category {
            Category::ReEntry => "re-entry",
            _ => "first entry",
        };
        Self {
            category,
            reason: String::new(),
            msg: format!("{label} ({sequence})"),
        }
    }

    fn rejected(rejection: &Rejection) -> Self {
        let reason = rejection.to_string();
        Self {
            category: rejection.category(),
            msg: reason.clone(),
            reason,
        }
    }

    pub fn status(&self) -> Status {
        self.category.status()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::new(self.status(), self.msg.clone())
    }
}

/// Runs the admission chain for one scan and records the attempt.
///
/// Every call to [`Validator::validate`] that returns `Ok` has appended
/// exactly one record to the store.
#[derive(Debug)]
pub struct Validator<S, C = SystemClock> {
    store: S,
    clock: C,
    separator: char,
}

impl<S: HistoryStore> Validator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl<S: HistoryStore, C: Clock> Validator<S, C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Validator<S, C2> {
        Validator {
            store: self.store,
            clock,
            separator: self.separator,
        }
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate one scan and append its attempt record.
    ///
    /// Rule rejections are returned as `NG` verdicts. Only storage faults are
    /// errors; in that case nothing is guaranteed to have been recorded.
    #[instrument(skip_all, fields(code = %request.code))]
    pub fn validate(&self, request: &ValidationRequest) -> Result<Verdict, StoreError> {
        let now = self.clock.now();
        let outcome = self.classify(request, now)?;
        let record = self.record(request, now, &outcome)?;
        info!(
            id = record.id,
            status = %record.status,
            category = %record.category,
            "scan validated"
        );
        Ok(outcome.verdict())
    }

    /// Decide the outcome without writing. Reads the store only when the
    /// request-level checks pass.
    pub fn classify(
        &self,
        request: &ValidationRequest,
        now: NaiveDateTime,
    ) -> Result<Outcome, StoreError> {
        let ticket = match rules::run(request, self.separator) {
            Ok(ticket) => ticket,
            Err(rejection) => return Ok(Outcome::rejected(&rejection)),
        };
        let prior = self.store.find_latest_ok(&request.code)?;
        Ok(match history::check(prior.as_ref(), now.date()) {
            Ok(category) => Outcome::admitted(category, ticket.sequence),
            Err(rejection) => Outcome::rejected(&rejection),
        })
    }

    fn record(
        &self,
        request: &ValidationRequest,
        now: NaiveDateTime,
        outcome: &Outcome,
    ) -> Result<AttemptRecord, StoreError> {
        self.store.append(NewAttempt {
            code: request.code.clone(),
            timestamp: now,
            status: outcome.status(),
            category: outcome.category,
            reason: outcome.reason.clone(),
        })
    }
}
