use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No sources could be summarized")]
    NoSources,
}

pub type Result<T> = std::result::Result<T, Error>;
