use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {name}, expected 1, 0, true or false")]
    Config { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
