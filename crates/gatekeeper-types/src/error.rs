use thiserror;

/// Why a scanned code could not be split into event and sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("no separator '{separator}' in code")]
    MissingSeparator { separator: char },
    #[error("sequence segment '{segment}' is not an integer")]
    NonNumericSequence { segment: String },
}

/// A persisted label that does not name a known status or category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown status label '{0}'")]
    UnknownStatus(String),
    #[error("unknown category label '{0}'")]
    UnknownCategory(String),
}
