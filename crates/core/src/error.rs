//! Error types for the yoke harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YokeError {
    #[error("Unknown metadata tag: {0}")]
    UnknownTag(String),

    #[error("Launcher failed to start: {0}")]
    Launch(String),

    #[error("Report parse error: {0}")]
    LogParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type YokeResult<T> = Result<T, YokeError>;
