// Run mode and environment profile.
//
// The run mode picks which env file is read. The profile is that file's key/value
// pairs with the process environment laid on top, so exported variables win over
// file values. The profile is read once at startup and never mutated afterwards.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;

use crate::shared::config::error::ConfigError;

/// Checked in order; the first one set decides the run mode.
pub const RUN_MODE_VARS: [&str; 2] = ["APP_ENV", "NODE_ENV"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Dev,
    Test,
}

impl RunMode {
    /// Only the exact value `dev` selects development; anything else, including
    /// an unset variable, falls back to the test profile.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("dev") => RunMode::Dev,
            _ => RunMode::Test,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = RUN_MODE_VARS.into_iter().find_map(lookup);
        Self::from_value(value.as_deref())
    }

    pub fn env_file_path(self) -> &'static str {
        match self {
            RunMode::Dev => ".env.dev",
            RunMode::Test => ".env.test",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Dev => f.write_str("dev"),
            RunMode::Test => f.write_str("test"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentProfile {
    values: BTreeMap<String, String>,
}

impl EnvironmentProfile {
    pub fn load(mode: RunMode) -> Result<Self, ConfigError> {
        Self::load_from(mode.env_file_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, process_env())
    }

    /// Reads the env file at `path` and lays `process_vars` on top of it.
    pub fn load_with<I>(path: impl AsRef<Path>, process_vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let path = path.as_ref();
        let mut profile = match dotenvy::from_path_iter(path) {
            Ok(iter) => Self::collect(iter, path)?,
            Err(error) if error.not_found() => {
                tracing::warn!(
                    path = %path.display(),
                    "env file not found, using process environment only"
                );
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        profile.overlay(process_vars);
        tracing::info!(path = %path.display(), keys = profile.len(), "environment profile loaded");
        Ok(profile)
    }

    /// Parses dotenv formatted input without touching the process environment.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, ConfigError> {
        Self::collect(dotenvy::from_read_iter(reader), Path::new("<reader>"))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut profile = Self::default();
        profile.overlay(pairs);
        profile
    }

    pub fn overlay<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn collect<I>(iter: I, path: &Path) -> Result<Self, ConfigError>
    where
        I: Iterator<Item = dotenvy::Result<(String, String)>>,
    {
        let mut values = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            values.insert(key, value);
        }
        Ok(Self { values })
    }
}

/// The process environment, skipping entries that are not valid unicode.
pub fn process_env() -> Vec<(String, String)> {
    unicode_vars(std::env::vars_os())
}

fn unicode_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                tracing::warn!(%key, "skipping environment variable that is not valid unicode");
                None
            }
        })
        .collect()
}
