use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("missing configuration key: {0}")]
    MissingKey(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
