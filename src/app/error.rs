use thiserror::Error;

use crate::chain::ChainError;
use crate::graph::GraphError;
use crate::wordlist::WordListError;

/// Broad classification of an `AppError`, used to pick the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command-line input.
    InvalidArgument,
    /// A file could not be read or written.
    ResourceUnavailable,
    /// The embedded data or an internal invariant is broken.
    InvariantViolation,
}

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),
    #[error("State graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) | AppError::Chain(ChainError::ZeroLength) => {
                ErrorKind::InvalidArgument
            }
            AppError::Io(_) | AppError::WordList(_) => ErrorKind::ResourceUnavailable,
            AppError::Graph(_) | AppError::Chain(ChainError::NodeNotFound(_)) => {
                ErrorKind::InvariantViolation
            }
        }
    }
}
