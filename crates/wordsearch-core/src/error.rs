use std::path::PathBuf;
use thiserror::Error;

/// Whole-input problems that stop puzzle generation before a grid exists.
///
/// A word that cannot be placed, or contains characters outside A-Z, is not
/// an error: it is logged and listed in [`crate::Puzzle::dropped`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no words to place")]
    EmptyWordList,

    #[error("invalid grid size {0}: must be between 1 and 1024")]
    InvalidGridSize(usize),

    #[error("invalid attempt budget {0}: must be at least 1")]
    InvalidAttemptBudget(usize),
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
