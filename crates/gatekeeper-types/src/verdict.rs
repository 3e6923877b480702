use serde::{Deserialize, Serialize};

use crate::attempt::Status;

/// Caller-facing status. `Error` never reaches the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NG")]
    Ng,
    #[serde(rename = "ERROR")]
    Error,
}

impl From<Status> for VerdictStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => Self::Ok,
            Status::Ng => Self::Ng,
        }
    }
}

/// The structured result returned for one invocation.
///
/// Serializes as `{"status": "OK" | "NG" | "ERROR", "msg": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub msg: String,
}

impl Verdict {
    pub fn new(status: impl Into<VerdictStatus>, msg: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            msg: msg.into(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(VerdictStatus::Error, msg)
    }

    pub fn is_admitted(&self) -> bool {
        self.status == VerdictStatus::Ok
    }

    pub fn is_error(&self) -> bool {
        self.status == VerdictStatus::Error
    }
}
