use gatekeeper_types::{TicketCode, ValidationRequest, parse_integer};

use crate::error::Rejection;

/// The sequence must be at least the configured minimum.
///
/// An unparseable minimum is a configuration fault, reported before any
/// comparison.
pub(crate) fn check(request: &ValidationRequest, ticket: &TicketCode) -> Result<(), Rejection> {
    if !request.check_sequence {
        return Ok(());
    }
    let threshold =
        parse_integer(&request.min_sequence).ok_or_else(|| Rejection::ThresholdNotNumeric {
            threshold: request.min_sequence.clone(),
        })?;
    if ticket.sequence < threshold {
        return Err(Rejection::BelowThreshold {
            threshold,
            found: ticket.sequence,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(threshold: &str) -> ValidationRequest {
        ValidationRequest::new("SampleEvent,0", "SampleEvent", threshold).check_sequence(true)
    }

    fn ticket(sequence: i64) -> TicketCode {
        TicketCode {
            event: "SampleEvent".into(),
            sequence,
        }
    }

    #[test]
    fn below_threshold_names_both_values() {
        assert_eq!(
            check(&request("100"), &ticket(50)).unwrap_err(),
            Rejection::BelowThreshold {
                threshold: 100,
                found: 50
            }
        );
    }

    #[test]
    fn equal_to_threshold_passes() {
        assert!(check(&request("100"), &ticket(100)).is_ok());
        assert!(check(&request("100"), &ticket(101)).is_ok());
    }

    #[test]
    fn non_numeric_threshold_is_a_config_rejection() {
        assert_eq!(
            check(&request("ten"), &ticket(500)).unwrap_err(),
            Rejection::ThresholdNotNumeric {
                threshold: "ten".into()
            }
        );
    }

    #[test]
    fn disabled_check_ignores_threshold_text() {
        let request = ValidationRequest::new("SampleEvent,0", "SampleEvent", "ten");
        assert!(check(&request, &ticket(0)).is_ok());
    }
}
