use thiserror::Error;

#[derive(Error, Debug)]
pub enum SniffError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode Error: input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("CSV Output Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SniffResult<T> = Result<T, SniffError>;
