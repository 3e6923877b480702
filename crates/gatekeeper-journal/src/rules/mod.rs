//! Ordered admission checks.
//!
//! Every scan walks [`CHECK_ORDER`] and stops at the first rejection:
//! - [`format`]: the code splits into event and integer sequence.
//! - [`event`]: the event matches the configured one (when enabled).
//! - [`sequence`]: the sequence meets the configured minimum (when enabled).
//! - [`history`]: prior admissions decide first entry, re-entry or stale.
//!
//! The first three are pure over the request and run through [`run`]. The
//! history step needs the store and clock, so the validator drives it after
//! [`run`] succeeds.

mod event;
mod format;
pub(crate) mod history;
mod sequence;

use gatekeeper_types::{TicketCode, ValidationRequest};

use crate::error::Rejection;

/// One stage of the admission chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStep {
    Format,
    Event,
    Sequence,
    History,
}

/// The fixed evaluation order.
pub const CHECK_ORDER: [CheckStep; 4] = [
    CheckStep::Format,
    CheckStep::Event,
    CheckStep::Sequence,
    CheckStep::History,
];

/// A check over a well-formed code.
#[derive(Clone, Copy)]
pub struct Guard {
    pub step: CheckStep,
    check: fn(&ValidationRequest, &TicketCode) -> Result<(), Rejection>,
}

impl Guard {
    pub fn check(&self, request: &ValidationRequest, ticket: &TicketCode) -> Result<(), Rejection> {
        (self.check)(request, ticket)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("step", &self.step).finish()
    }
}

/// Guards run after format parsing, in order.
pub const GUARDS: [Guard; 2] = [
    Guard {
        step: CheckStep::Event,
        check: event::check,
    },
    Guard {
        step: CheckStep::Sequence,
        check: sequence::check,
    },
];

/// Run the request-only steps (format, event, sequence).
///
/// Returns the parsed code when all pass, otherwise the first rejection.
pub fn run(request: &ValidationRequest, separator: char) -> Result<TicketCode, Rejection> {
    let ticket = format::check(&request.code, separator)?;
    for guard in &GUARDS {
        guard.check(request, &ticket)?;
    }
    Ok(ticket)
}
