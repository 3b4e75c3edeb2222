// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DepParseError>;

#[derive(Error, Debug)]
pub enum DepParseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download of {url} failed: {source}")]
    Download {
        url: String,
        source: reqwest::Error,
    },

    #[error("Download of {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    Checksum {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not start parser engine `{program}`: {source}")]
    EngineStartup {
        program: String,
        source: std::io::Error,
    },

    #[error("Parser engine error: {0}")]
    Engine(String),

    #[error("CoNLL parse error at line {line}: {message}")]
    Conll { line: usize, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DepParseError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }
}
