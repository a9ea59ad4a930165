use std::path::PathBuf;

use thiserror::Error;

/// Input rejected before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("previous exam score must be between 0 and 100, got {value}")]
    PreviousScoresOutOfRange { value: i64 },
}

/// Failures of the external score predictor. Surfaced verbatim; never retried.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to read model file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model definition")]
    Parse(#[from] serde_json::Error),
    #[error("predictor returned a non-finite score ({0})")]
    NonFinite(f64),
    #[error("predictor failed: {0}")]
    Failed(String),
    #[error("a global predictor is already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Error)]
pub enum AssessError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("prediction failed")]
    Predictor(#[from] PredictorError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}
