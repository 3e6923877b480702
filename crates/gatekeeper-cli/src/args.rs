use std::ffi::OsString;

use gatekeeper_types::{ValidationRequest, parse_flag};
use tracing::warn;

use crate::error::CliError;

/// Number of positional parameters a scan needs.
pub const SCAN_PARAMS: usize = 5;

/// Positional parameters of one scan, in the order they were passed.
///
/// The scan command line carries nothing else: no token is ever read as an
/// option, so codes such as `-h` or `--db` reach the validator unchanged.
/// Settings come from the environment (see [`crate::config`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanArgs {
    params: Vec<String>,
}

impl ScanArgs {
    /// Collect parameters from the process arguments, skipping the binary name.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }

    /// Non-UTF-8 arguments are converted lossily.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let params = args
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();
        Self { params }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Build the request from the positional parameters, in fixed order.
    ///
    /// Fewer than [`SCAN_PARAMS`] is an invocation error. Extra parameters are
    /// ignored.
    pub fn scan_request(&self) -> Result<ValidationRequest, CliError> {
        let [code, event, min_sequence, check_event, check_sequence, rest @ ..] =
            self.params.as_slice()
        else {
            return Err(CliError::MissingParameters {
                expected: SCAN_PARAMS,
                got: self.params.len(),
            });
        };
        if !rest.is_empty() {
            warn!(extra = rest.len(), "ignoring extra parameters");
        }
        Ok(ValidationRequest::new(code, event, min_sequence)
            .check_event(parse_flag(check_event))
            .check_sequence(parse_flag(check_sequence)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_params_build_a_request() {
        let request = ScanArgs::from_args(["SampleEvent,150", "SampleEvent", "100", "TRUE", "false"])
            .scan_request()
            .unwrap();
        assert_eq!(
            request,
            ValidationRequest::new("SampleEvent,150", "SampleEvent", "100")
                .check_event(true)
                .check_sequence(false)
        );
    }

    #[test]
    fn fewer_than_five_params_is_missing_parameters() {
        let err = ScanArgs::from_args(["SampleEvent,150", "SampleEvent", "100", "true"])
            .scan_request()
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingParameters {
                expected: 5,
                got: 4
            }
        ));
        assert_eq!(err.to_string(), "missing parameters (expected 5, got 4)");
    }

    #[test]
    fn negative_threshold_is_a_value_not_a_flag() {
        let request = ScanArgs::from_args(["SampleEvent,1", "SampleEvent", "-5", "false", "true"])
            .scan_request()
            .unwrap();
        assert_eq!(request.min_sequence, "-5");
    }

    #[test]
    fn option_lookalikes_stay_positional() {
        for code in ["-h", "--help", "--db", "--separator", "-V", "--"] {
            let args = ScanArgs::from_args([code, "SampleEvent", "100", "true", "true"]);
            assert_eq!(args.params().len(), SCAN_PARAMS, "{code}");
            assert_eq!(args.scan_request().unwrap().code, code);
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_are_converted_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let code = OsString::from_vec(b"Sample\xffEvent,150".to_vec());
        let args = ScanArgs::from_args([
            code,
            "SampleEvent".into(),
            "100".into(),
            "true".into(),
            "true".into(),
        ]);
        assert_eq!(args.params()[0], "Sample\u{fffd}Event,150");
    }
}
