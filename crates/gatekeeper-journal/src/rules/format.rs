use gatekeeper_types::TicketCode;

use crate::error::Rejection;

/// The code must split on its first separator into an event and an integer.
pub fn check(code: &str, separator: char) -> Result<TicketCode, Rejection> {
    TicketCode::parse(code, separator).map_err(Rejection::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_separator() {
        assert_eq!(
            check("SampleEventXYZ", ',').unwrap_err(),
            Rejection::MissingSeparator
        );
    }

    #[test]
    fn non_numeric_sequence_keeps_segment() {
        assert_eq!(
            check("SampleEvent,abc", ',').unwrap_err(),
            Rejection::NonNumericSequence {
                segment: "abc".into()
            }
        );
    }
}
