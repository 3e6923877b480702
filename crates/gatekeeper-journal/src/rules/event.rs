use gatekeeper_types::{TicketCode, ValidationRequest};

use crate::error::Rejection;

/// Exact, case-sensitive match against the configured event.
pub(crate) fn check(request: &ValidationRequest, ticket: &TicketCode) -> Result<(), Rejection> {
    if request.check_event && ticket.event != request.target_event {
        return Err(Rejection::EventMismatch {
            found: ticket.event.clone(),
        });
    }
    Ok(())
}
