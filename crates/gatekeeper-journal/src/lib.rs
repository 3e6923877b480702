//! Ticket admission: the ordered rule chain, the validator that drives it,
//! and the append-only history it records every attempt in.

pub mod clock;
pub mod error;
pub mod rules;
pub mod store;
pub mod summary;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Rejection, StoreError};
pub use rules::{CHECK_ORDER, CheckStep};
pub use store::{HistoryStore, MemoryHistory, SqliteHistory};
pub use summary::Summary;
pub use validator::{Outcome, Validator};
