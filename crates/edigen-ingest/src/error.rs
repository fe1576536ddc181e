use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("design archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("{0}")]
    Discovery(String),
}
