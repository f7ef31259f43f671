use crate::classifier::ClassifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OceanError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unsupported data format: {0}")]
    UnsupportedFormat(String),

    #[error("data parse error: {0}")]
    DataParse(String),

    #[error("invalid weight assignment: {0}")]
    InvalidWeight(String),

    #[error("classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OceanError>;
