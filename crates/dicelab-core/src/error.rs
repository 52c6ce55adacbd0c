use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceLabError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Export Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dice count: {0}")]
    InvalidDiceCount(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub type DlResult<T> = Result<T, DiceLabError>;
