use std::io::Write;

use super::error::ChainError;
use crate::graph::{NodeId, StateGraph};

/// Chains longer than this still work but the number of paths explodes.
pub const PRACTICAL_MAX_LENGTH: usize = 7;

/// A simple path through a `StateGraph`: consecutive states border each other
/// and no state appears twice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chain {
    nodes: Vec<NodeId>,
}

impl Chain {
    #[cfg(test)]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The two-letter codes of the chain's states, in chain order.
    pub fn codes<'g>(&self, graph: &'g StateGraph) -> Result<Vec<&'g str>, ChainError> {
        self.nodes
            .iter()
            .map(|&id| {
                graph
                    .get_state(id)
                    .map(|state| state.code())
                    .ok_or(ChainError::NodeNotFound(id))
            })
            .collect()
    }
}

/// `ChainExplorer` finds every chain of a given length in a `StateGraph`.
pub struct ChainExplorer;

impl ChainExplorer {
    /// Returns every simple path of exactly `length` states, starting from
    /// every state in turn.
    ///
    /// Start states are taken in declaration order and neighbors in listed
    /// order, so the result is identical on every run. A chain and its reverse
    /// are both returned.
    pub fn enumerate_paths(graph: &StateGraph, length: usize) -> Result<Vec<Chain>, ChainError> {
        if length == 0 {
            return Err(ChainError::ZeroLength);
        }

        let mut chains = Vec::new();
        for (start, _) in graph.states() {
            Self::traverse(graph, start, length, &mut chains);
        }
        Ok(chains)
    }

    /// Returns every chain of exactly `length` states that begins at `start`,
    /// in the same order `enumerate_paths` produces them.
    pub fn enumerate_from(
        graph: &StateGraph,
        start: NodeId,
        length: usize,
    ) -> Result<Vec<Chain>, ChainError> {
        if length == 0 {
            return Err(ChainError::ZeroLength);
        }
        if graph.get_state(start).is_none() {
            return Err(ChainError::NodeNotFound(start));
        }

        let mut chains = Vec::new();
        Self::traverse(graph, start, length, &mut chains);
        Ok(chains)
    }

    /// Writes every chain of `length` as a line of comma-separated codes,
    /// optionally only those beginning at `start`.
    pub fn print_chains_to_writer(
        graph: &StateGraph,
        start: Option<NodeId>,
        length: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let chains = match start {
            Some(start) => Self::enumerate_from(graph, start, length),
            None => Self::enumerate_paths(graph, length),
        }
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        writeln!(writer, "=== STATE CHAINS OF LENGTH {} ===", length)?;
        writeln!(writer, "Total chains found: {}", chains.len())?;
        for chain in &chains {
            let codes = chain
                .codes(graph)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{}", codes.join(", "))?;
        }
        Ok(())
    }

    /// Depth-first traversal collecting all chains of `length` from `start`.
    ///
    /// Each stack entry owns its chain so far, which doubles as the set of
    /// states already used on that branch. Sibling branches never see each
    /// other's states.
    fn traverse(graph: &StateGraph, start: NodeId, length: usize, chains: &mut Vec<Chain>) {
        let mut stack: Vec<Vec<NodeId>> = vec![vec![start]];

        while let Some(chain_so_far) = stack.pop() {
            if chain_so_far.len() == length {
                chains.push(Chain {
                    nodes: chain_so_far,
                });
                continue;
            }

            let Some(tail) = chain_so_far.last().and_then(|&id| graph.get_state(id)) else {
                continue;
            };

            // Pushed in reverse so the first listed neighbor is popped first.
            for &neighbor in tail.neighbors().iter().rev() {
                if chain_so_far.contains(&neighbor) {
                    continue;
                }
                let mut branch = chain_so_far.clone();
                branch.push(neighbor);
                stack.push(branch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::states::{entry, StateEntry};
    use crate::graph::us_states;
    use std::collections::HashSet;

    fn line_graph() -> StateGraph {
        const TABLE: &[StateEntry] = &[
            entry("A", "AA", &["B"]),
            entry("B", "BB", &["A", "C"]),
            entry("C", "CC", &["B"]),
        ];
        StateGraph::from_entries(TABLE).unwrap()
    }

    fn rendered(graph: &StateGraph, chains: &[Chain]) -> Vec<String> {
        chains
            .iter()
            .map(|chain| chain.codes(graph).unwrap().concat())
            .collect()
    }

    #[test]
    fn zero_length_is_rejected() {
        let graph = line_graph();
        assert_eq!(
            ChainExplorer::enumerate_paths(&graph, 0).unwrap_err(),
            ChainError::ZeroLength
        );
    }

    #[test]
    fn length_one_yields_one_chain_per_state() {
        let graph = line_graph();
        let chains = ChainExplorer::enumerate_paths(&graph, 1).unwrap();
        assert_eq!(rendered(&graph, &chains), vec!["AA", "BB", "CC"]);

        let states = us_states().unwrap();
        assert_eq!(ChainExplorer::enumerate_paths(states, 1).unwrap().len(), 50);
    }

    #[test]
    fn line_graph_length_two_follows_edges_only() {
        let graph = line_graph();
        let chains = ChainExplorer::enumerate_paths(&graph, 2).unwrap();
        assert_eq!(
            rendered(&graph, &chains),
            vec!["AABB", "BBAA", "BBCC", "CCBB"]
        );
    }

    #[test]
    fn line_graph_length_three_includes_reverse() {
        let graph = line_graph();
        let chains = ChainExplorer::enumerate_paths(&graph, 3).unwrap();
        assert_eq!(rendered(&graph, &chains), vec!["AABBCC", "CCBBAA"]);
        assert!(ChainExplorer::enumerate_paths(&graph, 4).unwrap().is_empty());
    }

    #[test]
    fn sibling_branches_do_not_share_visited_states() {
        // A square: both A-B-D and A-C-D must be found from A.
        const TABLE: &[StateEntry] = &[
            entry("A", "AA", &["B", "C"]),
            entry("B", "BB", &["A", "D"]),
            entry("C", "CC", &["A", "D"]),
            entry("D", "DD", &["B", "C"]),
        ];
        let graph = StateGraph::from_entries(TABLE).unwrap();
        let chains = ChainExplorer::enumerate_paths(&graph, 3).unwrap();
        let from_a: Vec<String> = rendered(&graph, &chains)
            .into_iter()
            .filter(|s| s.starts_with("AA"))
            .collect();
        assert_eq!(from_a, vec!["AABBDD", "AACCDD"]);
    }

    #[test]
    fn us_chain_counts() {
        let graph = us_states().unwrap();
        let counts: Vec<usize> = (1..=5)
            .map(|n| ChainExplorer::enumerate_paths(graph, n).unwrap().len())
            .collect();
        assert_eq!(counts, vec![50, 216, 876, 3306, 12044]);
    }

    #[test]
    fn us_chains_are_simple_paths_along_edges() {
        let graph = us_states().unwrap();
        for chain in ChainExplorer::enumerate_paths(graph, 4).unwrap() {
            assert_eq!(chain.nodes().len(), 4);
            let distinct: HashSet<_> = chain.nodes().iter().collect();
            assert_eq!(distinct.len(), 4);
            for pair in chain.nodes().windows(2) {
                assert!(graph.has_edge(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let graph = us_states().unwrap();
        let first = ChainExplorer::enumerate_paths(graph, 3).unwrap();
        let second = ChainExplorer::enumerate_paths(graph, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            rendered(graph, &first[..3]),
            vec!["ALMSLA", "ALMSTN", "ALMSAR"]
        );
    }

    #[test]
    fn print_chains_lists_header_and_codes() {
        let graph = line_graph();
        let mut out = Vec::new();
        ChainExplorer::print_chains_to_writer(&graph, None, 2, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== STATE CHAINS OF LENGTH 2 ===\nTotal chains found: 4\n"));
        assert!(text.ends_with("CC, BB\n"));
    }

    #[test]
    fn enumerate_from_matches_the_full_enumeration_for_that_start() {
        let graph = us_states().unwrap();
        let ohio = graph.state_by_code("OH").unwrap();
        let from_ohio = ChainExplorer::enumerate_from(graph, ohio, 3).unwrap();
        let expected: Vec<Chain> = ChainExplorer::enumerate_paths(graph, 3)
            .unwrap()
            .into_iter()
            .filter(|chain| chain.nodes()[0] == ohio)
            .collect();
        assert!(!from_ohio.is_empty());
        assert_eq!(from_ohio, expected);
    }

    #[test]
    fn enumerate_from_rejects_bad_input() {
        let graph = line_graph();
        assert_eq!(
            ChainExplorer::enumerate_from(&graph, 0, 0).unwrap_err(),
            ChainError::ZeroLength
        );
        assert_eq!(
            ChainExplorer::enumerate_from(&graph, 7, 2).unwrap_err(),
            ChainError::NodeNotFound(7)
        );
    }

    #[test]
    fn print_chains_from_one_start() {
        let graph = line_graph();
        let mut out = Vec::new();
        ChainExplorer::print_chains_to_writer(&graph, Some(1), 2, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== STATE CHAINS OF LENGTH 2 ===\nTotal chains found: 2\nBB, AA\nBB, CC\n"
        );
    }
}
