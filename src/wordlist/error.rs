use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for word list loading.
///
/// Malformed lines are never errors; they are skipped while indexing. Only a
/// word list that cannot be read at all is reported.
#[derive(Error, Debug)]
pub enum WordListError {
    /// Error when opening or reading the word list file.
    #[error("Failed to read word list '{0}': {1}")]
    ReadFile(String, std::io::Error),
}
