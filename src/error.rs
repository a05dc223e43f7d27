use thiserror::Error;

/// Errors produced by ghenv commands.
#[derive(Error, Debug)]
pub enum Error {
    #[error("gh CLI not found on PATH")]
    GhNotFound,

    #[error("gh CLI is not authenticated")]
    Unauthenticated,

    #[error("gh command failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("verification failed: {0}")]
    VerificationMismatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON from gh: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
