use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for building a `StateGraph` from an adjacency table.
///
/// Every variant means the static table itself is corrupt, never that the
/// user supplied bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two entries share the same state name.
    #[error("Duplicate state name '{0}' in adjacency table")]
    DuplicateName(String),

    /// Two entries share the same postal code.
    #[error("Duplicate code '{code}' used by '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    /// A code is not exactly two ASCII uppercase letters.
    #[error("State '{name}' has malformed code '{code}'")]
    MalformedCode { name: String, code: String },

    /// A neighbor name does not resolve to any entry of the table.
    #[error("State '{state}' lists unknown neighbor '{neighbor}'")]
    UnknownNeighbor { state: String, neighbor: String },

    /// A state lists itself as a neighbor.
    #[error("State '{0}' lists itself as a neighbor")]
    SelfLoop(String),
}
