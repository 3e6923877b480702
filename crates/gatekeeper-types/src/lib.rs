pub mod attempt;
pub mod code;
pub mod error;
pub mod request;
pub mod verdict;

pub use attempt::{AttemptRecord, Category, NewAttempt, Status, TIMESTAMP_FORMAT};
pub use code::{DEFAULT_SEPARATOR, TicketCode, parse_integer};
pub use error::{CodeError, DecodeError};
pub use request::{ValidationRequest, parse_flag};
pub use verdict::{Verdict, VerdictStatus};
