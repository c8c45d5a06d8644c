//! Error taxonomy for bioinfo operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for bioinfo operations
pub type BioResult<T> = Result<T, BioError>;

/// Errors that can occur while analysing or loading sequences
#[derive(Debug, Error)]
pub enum BioError {
    #[error("Sequences are not the same length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Motif is empty")]
    EmptyMotif,

    #[error("Motif of length {motif} is longer than the sequence of length {haystack}")]
    MotifTooLong { motif: usize, haystack: usize },

    #[error("Could not open sequence file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to fetch record {accession}: {message}")]
    Network { accession: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl BioError {
    pub fn file_open<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::FileOpen { path: path.into(), source }
    }

    pub fn network<A: Into<String>, M: Into<String>>(accession: A, message: M) -> Self {
        Self::Network {
            accession: accession.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn overflow<S: Into<String>>(message: S) -> Self {
        Self::Overflow(message.into())
    }
}
