use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("{0} and {1} cannot be combined")]
    Conflict(String, String),
    #[error("{flag} requires {needs}")]
    Requires { flag: String, needs: String },
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
