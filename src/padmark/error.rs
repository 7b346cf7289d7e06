use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadmarkError {
    #[error("Initialization failed: {0}")]
    Init(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, PadmarkError>;
