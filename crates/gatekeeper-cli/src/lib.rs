//! Invocation boundary: five positional parameters in, one JSON verdict out.

pub mod args;
pub mod config;
pub mod error;
pub mod export;
pub mod loadtest;
pub mod logging;
pub mod output;

pub use args::ScanArgs;
pub use config::GateConfig;
pub use error::CliError;

use gatekeeper_journal::{SqliteHistory, Validator};
use gatekeeper_types::Verdict;
use tracing::error;

/// Validate one scan. Parameters are checked before settings are resolved
/// and before the store is opened.
pub fn run(
    args: &ScanArgs,
    config: impl FnOnce() -> Result<GateConfig, CliError>,
) -> Result<Verdict, CliError> {
    let request = args.scan_request()?;
    let config = config()?;
    let store = SqliteHistory::open(config.db_path())?;
    let verdict = Validator::new(store)
        .separator(config.code_separator())
        .validate(&request)?;
    Ok(verdict)
}

/// [`run`], with invocation, configuration and storage failures folded into
/// an ERROR verdict.
pub fn execute(
    args: &ScanArgs,
    config: impl FnOnce() -> Result<GateConfig, CliError>,
) -> Verdict {
    run(args, config).unwrap_or_else(|err| {
        error!(%err, "scan not validated");
        Verdict::error(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use gatekeeper_journal::HistoryStore;
    use gatekeeper_types::{Category, Status, VerdictStatus};

    use super::*;

    fn scan(db: &Path, params: &[&str]) -> Verdict {
        execute(&ScanArgs::from_args(params), || Ok(GateConfig::new(db)))
    }

    const SCAN: [&str; 5] = ["SampleEvent,150", "SampleEvent", "100", "true", "true"];

    #[test_log::test]
    fn scans_are_recorded_in_the_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("attendance.db");

        let first = scan(&db, &SCAN);
        let second = scan(&db, &SCAN);

        assert_eq!(first.msg, "first entry (150)");
        assert_eq!(second.msg, "re-entry (150)");
        let records = SqliteHistory::open(&db).unwrap().records().unwrap();
        let categories: Vec<_> = records.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::FirstEntry, Category::ReEntry]);
    }

    #[test]
    fn missing_parameters_never_touch_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("attendance.db");

        let verdict = scan(&db, &SCAN[..4]);

        insta::assert_json_snapshot!(verdict, @r#"
        {
          "status": "ERROR",
          "msg": "missing parameters (expected 5, got 4)"
        }
        "#);
        assert!(!db.exists());
    }

    #[test]
    fn missing_parameters_win_over_bad_configuration() {
        let verdict = execute(&ScanArgs::from_args(&SCAN[..2]), || {
            Err(CliError::Config("unreachable".into()))
        });
        assert_eq!(verdict.msg, "missing parameters (expected 5, got 2)");
    }

    #[test]
    fn rejections_are_ng_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("attendance.db");

        let verdict = scan(&db, &["SampleEvent,50", "SampleEvent", "100", "true", "true"]);

        assert_eq!(verdict.status, VerdictStatus::Ng);
        assert_eq!(SqliteHistory::open(&db).unwrap().count().unwrap(), 1);
    }

    #[test_log::test]
    fn option_lookalike_codes_are_scanned_and_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("attendance.db");

        for code in ["-h", "--help", "--db"] {
            let verdict = scan(&db, &[code, "SampleEvent", "100", "true", "true"]);
            assert_eq!(verdict, Verdict::new(Status::Ng, "format error (no separator)"));
        }

        let records = SqliteHistory::open(&db).unwrap().records().unwrap();
        let logged: Vec<_> = records
            .iter()
            .map(|r| (r.code.as_str(), r.status, r.category))
            .collect();
        assert_eq!(
            logged,
            vec![
                ("-h", Status::Ng, Category::FormatError),
                ("--help", Status::Ng, Category::FormatError),
                ("--db", Status::Ng, Category::FormatError),
            ]
        );
    }

    #[test]
    fn bad_configuration_is_an_error_verdict() {
        let verdict = execute(&ScanArgs::from_args(SCAN), || {
            GateConfig::from_vars(|key| match key {
                config::DB_ENV => Some("/tmp/unused.db".into()),
                config::SEPARATOR_ENV => Some("ab".into()),
                _ => None,
            })
        });

        assert!(verdict.is_error());
        assert_eq!(
            verdict.msg,
            "invalid configuration: GATEKEEPER_SEPARATOR must be a single character, got \"ab\""
        );
    }

    #[test]
    fn unopenable_store_is_an_error_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("missing-dir").join("attendance.db");

        let verdict = scan(&db, &SCAN);

        assert!(verdict.is_error());
        assert!(verdict.msg.starts_with("history store failure"));
    }
}
