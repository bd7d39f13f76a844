// error module
mod error;
// graph module
mod graph;

// embedded adjacency table
pub mod states;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::{us_states, NodeId, StateGraph};
