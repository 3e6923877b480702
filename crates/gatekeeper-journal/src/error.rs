use chrono::NaiveDateTime;
use gatekeeper_types::{Category, CodeError};

use crate::rules::CheckStep;

/// Describes why a scan was refused.
///
/// Each variant maps to exactly one [`Category`] and one [`CheckStep`]. The
/// `Display` output is the reason persisted with the attempt and returned to
/// the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The code has no separator.
    MissingSeparator,
    /// The segment after the first separator is not an integer.
    NonNumericSequence { segment: String },
    /// Event segment differs from the configured event.
    EventMismatch { found: String },
    /// The configured minimum sequence is not an integer.
    ThresholdNotNumeric { threshold: String },
    /// Sequence is strictly below the configured minimum.
    BelowThreshold { threshold: i64, found: i64 },
    /// The ticket was admitted on an earlier (or later) calendar day.
    StaleTicket { last_entry: NaiveDateTime },
}

impl Rejection {
    pub fn category(&self) -> Category {
        match self {
            Self::MissingSeparator | Self::NonNumericSequence { .. } => Category::FormatError,
            Self::EventMismatch { .. } => Category::EventMismatch,
            Self::ThresholdNotNumeric { .. } => Category::ConfigError,
            Self::BelowThreshold { .. } => Category::SequenceError,
            Self::StaleTicket { .. } => Category::StaleTicket,
        }
    }

    /// The check that produced this rejection.
    pub fn step(&self) -> CheckStep {
        match self {
            Self::MissingSeparator | Self::NonNumericSequence { .. } => CheckStep::Format,
            Self::EventMismatch { .. } => CheckStep::Event,
            Self::ThresholdNotNumeric { .. } | Self::BelowThreshold { .. } => CheckStep::Sequence,
            Self::StaleTicket { .. } => CheckStep::History,
        }
    }
}

impl From<CodeError> for Rejection {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::MissingSeparator { .. } => Self::MissingSeparator,
            CodeError::NonNumericSequence { segment } => Self::NonNumericSequence { segment },
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "format error (no separator)"),
            Self::NonNumericSequence { .. } => write!(f, "format error (non-numeric sequence)"),
            Self::EventMismatch { found } => write!(f, "event mismatch (found: {found})"),
            Self::ThresholdNotNumeric { .. } => write!(f, "configured threshold is not numeric"),
            Self::BelowThreshold { threshold, found } => write!(
                f,
                "sequence below threshold (threshold: {threshold} > found: {found})"
            ),
            Self::StaleTicket { .. } => {
                write!(f, "used ticket (prior entry on a different day)")
            }
        }
    }
}

/// Errors produced by history store operations.
///
/// These are unrecoverable for the current scan and surface to the caller as
/// an ERROR result.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("corrupt history record {id}: {reason}")]
    CorruptRecord { id: i64, reason: String },
}

impl StoreError {
    pub(crate) fn corrupt(id: i64, err: impl std::fmt::Display) -> Self {
        Self::CorruptRecord {
            id,
            reason: err.to_string(),
        }
    }
}
