use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use gatekeeper_types::DEFAULT_SEPARATOR;

use crate::error::CliError;

/// File name of the history database when no location is given.
pub const DEFAULT_DB_FILE: &str = "attendance.db";

/// Environment variable holding the history database path.
pub const DB_ENV: &str = "GATEKEEPER_DB";
/// Environment variable holding the code separator, a single character.
pub const SEPARATOR_ENV: &str = "GATEKEEPER_SEPARATOR";

/// Resolved settings for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    db_path: PathBuf,
    separator: char,
}

impl GateConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Store next to the running executable.
    pub fn beside_executable() -> Result<Self, CliError> {
        let exe = std::env::current_exe().map_err(|e| CliError::Config(e.to_string()))?;
        let dir = exe
            .parent()
            .ok_or_else(|| CliError::Config(format!("{} has no parent", exe.display())))?;
        Ok(Self::new(dir.join(DEFAULT_DB_FILE)))
    }

    /// Settings for a scan, read from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_vars(|key| std::env::var_os(key))
    }

    /// Resolve settings through `var`. An unset or empty [`DB_ENV`] falls back
    /// to [`GateConfig::beside_executable`].
    pub fn from_vars(var: impl Fn(&str) -> Option<OsString>) -> Result<Self, CliError> {
        let config = match var(DB_ENV).filter(|path| !path.is_empty()) {
            Some(path) => Self::new(path),
            None => Self::beside_executable()?,
        };
        match var(SEPARATOR_ENV) {
            Some(raw) => Ok(config.separator(parse_separator(&raw)?)),
            None => Ok(config),
        }
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn code_separator(&self) -> char {
        self.separator
    }
}

fn parse_separator(raw: &OsStr) -> Result<char, CliError> {
    let text = raw
        .to_str()
        .ok_or_else(|| CliError::Config(format!("{SEPARATOR_ENV} is not valid UTF-8")))?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(CliError::Config(format!(
            "{SEPARATOR_ENV} must be a single character, got {text:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_comma_separator() {
        let config = GateConfig::new("/tmp/a.db");
        assert_eq!(config.code_separator(), ',');
        assert_eq!(config.separator('|').code_separator(), '|');
    }

    #[test]
    fn default_location_is_beside_the_executable() {
        let config = GateConfig::beside_executable().unwrap();
        assert_eq!(config.db_path().file_name().unwrap(), DEFAULT_DB_FILE);
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(config.db_path().parent().unwrap(), exe_dir);
    }

    #[test]
    fn variables_resolve_into_config() {
        let config =
            GateConfig::from_vars(vars(&[(DB_ENV, "/tmp/gate.db"), (SEPARATOR_ENV, "|")])).unwrap();
        assert_eq!(config, GateConfig::new("/tmp/gate.db").separator('|'));
    }

    #[test]
    fn empty_db_variable_falls_back_to_the_default_location() {
        let config = GateConfig::from_vars(vars(&[(DB_ENV, "")])).unwrap();
        assert_eq!(config, GateConfig::beside_executable().unwrap());
    }

    #[test]
    fn separator_must_be_one_character() {
        for bad in ["", "ab"] {
            let err = GateConfig::from_vars(vars(&[(DB_ENV, "/tmp/gate.db"), (SEPARATOR_ENV, bad)]))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(_)), "{bad:?}");
            assert!(err.to_string().contains(SEPARATOR_ENV));
        }
        let config =
            GateConfig::from_vars(vars(&[(DB_ENV, "/tmp/gate.db"), (SEPARATOR_ENV, "・")])).unwrap();
        assert_eq!(config.code_separator(), '・');
    }
}
