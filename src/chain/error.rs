use crate::graph::NodeId;
use thiserror::Error;

/// Error type for chain enumeration and rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A chain needs at least one state.
    #[error("Chain length must be at least 1.")]
    ZeroLength,

    /// A chain refers to a node id that its graph does not contain.
    #[error("NodeId {0} not found in state graph")]
    NodeNotFound(NodeId),
}
