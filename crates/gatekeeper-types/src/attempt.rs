use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Persisted timestamp layout, local time at second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Admission status stored with every attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NG")]
    Ng,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Ng => "NG",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Self::Ok),
            "NG" => Ok(Self::Ng),
            other => Err(DecodeError::UnknownStatus(other.to_string())),
        }
    }
}

/// Short label classifying the outcome of an attempt.
///
/// Two categories admit (`FirstEntry`, `ReEntry`); the rest reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FirstEntry,
    ReEntry,
    FormatError,
    EventMismatch,
    SequenceError,
    ConfigError,
    StaleTicket,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::FirstEntry,
        Self::ReEntry,
        Self::FormatError,
        Self::EventMismatch,
        Self::SequenceError,
        Self::ConfigError,
        Self::StaleTicket,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstEntry => "first-entry",
            Self::ReEntry => "re-entry",
            Self::FormatError => "format-error",
            Self::EventMismatch => "event-mismatch",
            Self::SequenceError => "sequence-error",
            Self::ConfigError => "config-error",
            Self::StaleTicket => "stale-ticket",
        }
    }

    /// The status every attempt in this category carries.
    pub fn status(self) -> Status {
        match self {
            Self::FirstEntry | Self::ReEntry => Status::Ok,
            _ => Status::Ng,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownCategory(s.to_string()))
    }
}

/// An attempt that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttempt {
    pub code: String,
    pub timestamp: NaiveDateTime,
    pub status: Status,
    pub category: Category,
    pub reason: String,
}

impl NewAttempt {
    /// Attach the store-assigned id. Used by store implementations only.
    pub fn into_record(self, id: i64) -> AttemptRecord {
        AttemptRecord {
            id,
            code: self.code,
            timestamp: self.timestamp,
            status: self.status,
            category: self.category,
            reason: self.reason,
        }
    }
}

/// A single entry in the append-only admission log.
///
/// `id` is assigned by the store and strictly increasing. Records are never
/// updated or deleted once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: i64,
    pub code: String,
    pub timestamp: NaiveDateTime,
    pub status: Status,
    pub category: Category,
    pub reason: String,
}

impl AttemptRecord {
    /// Calendar day of the attempt, used for re-entry decisions.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Timestamp rendered in the persisted layout.
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
