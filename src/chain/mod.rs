// error module
mod error;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ChainError;
pub use explorer::{Chain, ChainExplorer, PRACTICAL_MAX_LENGTH};
