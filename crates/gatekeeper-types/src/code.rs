use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// Separator between the event name and the sequence number.
pub const DEFAULT_SEPARATOR: char = ',';

/// A scanned code split into its event name and sequence number.
///
/// Expected shape: `"<event><separator><sequence>"`. Only the first
/// separator splits; everything after it is the sequence segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCode {
    pub event: String,
    pub sequence: i64,
}

impl TicketCode {
    /// Parse a raw code using `separator`.
    ///
    /// Returns [`CodeError::MissingSeparator`] when the separator is absent and
    /// [`CodeError::NonNumericSequence`] when the remainder is not an integer.
    pub fn parse(raw: &str, separator: char) -> Result<Self, CodeError> {
        let (event, segment) = raw
            .split_once(separator)
            .ok_or(CodeError::MissingSeparator { separator })?;
        let sequence = parse_integer(segment).ok_or_else(|| CodeError::NonNumericSequence {
            segment: segment.to_string(),
        })?;
        Ok(Self {
            event: event.to_string(),
            sequence,
        })
    }
}

/// Parse a signed integer, tolerating surrounding ASCII whitespace.
///
/// The grammar is ASCII digits with an optional `+`/`-` sign. Digit group
/// underscores, non-ASCII digits and non-ASCII whitespace are rejected.
/// Used for both the sequence segment and the configured threshold so the two
/// sides of the comparison accept the same spellings.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim_ascii().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn parses_event_and_sequence() {
        let code = TicketCode::parse("SampleEvent,150", DEFAULT_SEPARATOR).unwrap();
        assert_eq!(
            code,
            TicketCode {
                event: "SampleEvent".into(),
                sequence: 150,
            }
        );
    }

    #[test]
    fn splits_on_first_separator_only() {
        let err = TicketCode::parse("A,1,2", DEFAULT_SEPARATOR).unwrap_err();
        assert_eq!(
            err,
            CodeError::NonNumericSequence {
                segment: "1,2".into()
            }
        );
    }

    #[test]
    fn missing_separator_is_reported() {
        let err = TicketCode::parse("SampleEventXYZ", DEFAULT_SEPARATOR).unwrap_err();
        assert_eq!(err, CodeError::MissingSeparator { separator: ',' });
    }

    #[test]
    fn non_numeric_and_empty_sequences_are_rejected() {
        for raw in ["SampleEvent,abc", "SampleEvent,", "SampleEvent,1.5"] {
            assert!(
                matches!(
                    TicketCode::parse(raw, DEFAULT_SEPARATOR),
                    Err(CodeError::NonNumericSequence { .. })
                ),
                "{raw} should be non-numeric"
            );
        }
    }

    #[test]
    fn empty_event_segment_is_still_well_formed() {
        let code = TicketCode::parse(",7", DEFAULT_SEPARATOR).unwrap();
        assert_eq!(code.event, "");
        assert_eq!(code.sequence, 7);
    }

    #[test]
    fn custom_separator() {
        let code = TicketCode::parse("Expo|42", '|').unwrap();
        assert_eq!(code.sequence, 42);
        assert!(TicketCode::parse("Expo,42", '|').is_err());
    }

    #[test]
    fn integers_tolerate_whitespace_and_sign() {
        assert_eq!(parse_integer(" 100 "), Some(100));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("+8"), Some(8));
        assert_eq!(parse_integer("ten"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn integers_are_ascii_only() {
        for text in ["1_000", "１５０", "\u{3000}100", "100\u{a0}", "٣", "1 000", ""] {
            assert_eq!(parse_integer(text), None, "{text:?}");
        }
        assert_eq!(
            TicketCode::parse("SampleEvent,１５０", ','),
            Err(CodeError::NonNumericSequence {
                segment: "１５０".into()
            })
        );
    }
}
