use serde::{Deserialize, Serialize};

/// One scan to validate, as supplied by the caller.
///
/// `min_sequence` stays raw text: an unparseable threshold is a logged
/// configuration rejection, not an invocation error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub code: String,
    pub target_event: String,
    pub min_sequence: String,
    pub check_event: bool,
    pub check_sequence: bool,
}

impl ValidationRequest {
    pub fn new(
        code: impl Into<String>,
        target_event: impl Into<String>,
        min_sequence: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            target_event: target_event.into(),
            min_sequence: min_sequence.into(),
            check_event: false,
            check_sequence: false,
        }
    }

    pub fn check_event(mut self, enabled: bool) -> Self {
        self.check_event = enabled;
        self
    }

    pub fn check_sequence(mut self, enabled: bool) -> Self {
        self.check_sequence = enabled;
        self
    }
}

/// `"true"` in any ASCII case enables a check; anything else disables it.
pub fn parse_flag(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_only_true() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("True"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(" true"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn checks_default_to_disabled() {
        let request = ValidationRequest::new("A,1", "A", "0");
        assert!(!request.check_event);
        assert!(!request.check_sequence);

        let request = request.check_event(true).check_sequence(true);
        assert!(request.check_event && request.check_sequence);
    }
}
