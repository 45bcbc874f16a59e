#![deny(clippy::all, clippy::pedantic)]

use thiserror::Error;

use folio::client::ApiError;
use folio::config::LoadError;
use folio::infra::InfraError;
use folio::prefs::PrefsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] InfraError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Prefs(#[from] PrefsError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
