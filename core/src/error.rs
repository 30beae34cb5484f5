use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corrupt price data: {0}")]
    CorruptData(String),

    #[error("Username '{0}' already exists")]
    DuplicateUser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchError {
    /// Errors the operator caused and can correct. These are reported as
    /// notices; the interaction is dropped and the table is left as it was.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::CorruptData(_) | Self::DuplicateUser(_)
        )
    }
}

pub type WatchResult<T> = Result<T, WatchError>;
