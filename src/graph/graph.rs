// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// StateGraph: the adjacency graph of states that chains are walked over.
// Nodes are stored in declaration order and addressed by their index; every
// neighbor list keeps the order of the table it was built from, so anything
// iterating the graph sees the same sequence on every run.
// ──────────────────────────────────────────────────────────────────────────────
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;

use super::error::GraphError;
use super::states::{StateEntry, US_STATES};

/// Index of a state inside its `StateGraph`.
pub type NodeId = usize;

/// A single state: its name, its two-letter code and the states it borders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    name: String,
    code: String,
    neighbors: Vec<NodeId>,
}

impl State {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Neighbors in the order they were listed.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// Immutable adjacency graph built from a validated table.
#[derive(Clone, Debug, Default)]
pub struct StateGraph {
    states: Vec<State>,
    by_name: HashMap<String, NodeId>,
    by_code: HashMap<String, NodeId>,
}

impl StateGraph {
    /// Builds a graph from an adjacency table, failing on the first entry
    /// that would leave the graph inconsistent.
    pub fn from_entries(entries: &[StateEntry]) -> Result<Self, GraphError> {
        let mut by_name: HashMap<String, NodeId> = HashMap::with_capacity(entries.len());
        let mut by_code: HashMap<String, NodeId> = HashMap::with_capacity(entries.len());

        // First pass assigns ids so neighbors can be resolved in any order.
        for (id, entry) in entries.iter().enumerate() {
            if !is_valid_code(entry.code) {
                return Err(GraphError::MalformedCode {
                    name: entry.name.to_string(),
                    code: entry.code.to_string(),
                });
            }
            if by_name.insert(entry.name.to_string(), id).is_some() {
                return Err(GraphError::DuplicateName(entry.name.to_string()));
            }
            if let Some(first) = by_code.insert(entry.code.to_string(), id) {
                return Err(GraphError::DuplicateCode {
                    code: entry.code.to_string(),
                    first: entries[first].name.to_string(),
                    second: entry.name.to_string(),
                });
            }
        }

        let states = entries
            .iter()
            .map(|entry| {
                let neighbors = entry
                    .neighbors
                    .iter()
                    .map(|neighbor| {
                        if *neighbor == entry.name {
                            return Err(GraphError::SelfLoop(entry.name.to_string()));
                        }
                        by_name.get(*neighbor).copied().ok_or_else(|| {
                            GraphError::UnknownNeighbor {
                                state: entry.name.to_string(),
                                neighbor: neighbor.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<NodeId>, GraphError>>()?;

                Ok(State {
                    name: entry.name.to_string(),
                    code: entry.code.to_string(),
                    neighbors,
                })
            })
            .collect::<Result<Vec<State>, GraphError>>()?;

        Ok(Self {
            states,
            by_name,
            by_code,
        })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns the state with the given id, if any.
    pub fn get_state(&self, id: NodeId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states in declaration order, paired with their ids.
    pub fn states(&self) -> impl Iterator<Item = (NodeId, &State)> + '_ {
        self.states.iter().enumerate()
    }

    /// Looks a state up by its full name, e.g. `"New Mexico"`.
    pub fn state_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Looks a state up by its code, ignoring case.
    pub fn state_by_code(&self, code: &str) -> Option<NodeId> {
        self.by_code.get(&code.to_ascii_uppercase()).copied()
    }

    /// True when `to` is listed as a neighbor of `from`.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.states
            .get(from)
            .is_some_and(|state| state.neighbors.contains(&to))
    }

    /// Every listed edge `(from, to)` whose reverse `(to, from)` is not listed.
    ///
    /// Traversal follows the table literally, so a one-sided entry would make
    /// a chain walkable in one direction only. The embedded table has none.
    pub fn asymmetric_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.states()
            .flat_map(|(from, state)| state.neighbors.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| !self.has_edge(to, from))
            .collect()
    }
}

/// Renders the table one state per line as `Name (CODE) Neighbor, Neighbor`,
/// with the neighbor names sorted alphabetically.
impl fmt::Display for StateGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            let mut neighbor_names: Vec<&str> = state
                .neighbors
                .iter()
                .map(|&id| self.states[id].name())
                .collect();
            neighbor_names.sort_unstable();
            writeln!(
                f,
                "{} ({}) {}",
                state.name(),
                state.code(),
                neighbor_names.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Returns the process-wide graph of US states, validating the embedded table
/// the first time it is requested.
pub fn us_states() -> Result<&'static StateGraph, GraphError> {
    static US_STATE_GRAPH: OnceCell<StateGraph> = OnceCell::new();
    US_STATE_GRAPH.get_or_try_init(|| StateGraph::from_entries(US_STATES))
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}
