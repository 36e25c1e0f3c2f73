use std::collections::HashSet;

use super::{HighlightState, SimGraph};

impl SimGraph {
    /// The active node's index plus every node exactly one link away,
    /// in either link direction. A stale id yields the empty set; the
    /// caller then dims everything else and emphasizes nothing.
    pub(in crate::app) fn neighborhood(&self, active: &str) -> HashSet<usize> {
        let mut related = HashSet::new();

        let Some(&active_index) = self.index_by_id.get(active) else {
            return related;
        };
        related.insert(active_index);

        for edge in &self.edges {
            if edge.source == active_index {
                related.insert(edge.target);
            }
            if edge.target == active_index {
                related.insert(edge.source);
            }
        }

        related
    }
}

/// Derives the per-frame emphasis sets for an active node id: the
/// one-hop neighborhood and the indices of every edge touching the
/// active node.
pub(in crate::app) fn build_highlight_state(sim: &SimGraph, active: &str) -> HighlightState {
    let related_nodes = sim.neighborhood(active);
    let mut related_edges = HashSet::new();

    if let Some(&active_index) = sim.index_by_id.get(active) {
        for (edge_index, edge) in sim.edges.iter().enumerate() {
            if edge.source == active_index || edge.target == active_index {
                related_edges.insert(edge_index);
            }
        }
    }

    HighlightState {
        related_nodes,
        related_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{ResumeGraph, sample_resume};

    fn sample_sim() -> SimGraph {
        SimGraph::build(&ResumeGraph::build(&sample_resume()))
    }

    #[test]
    fn neighborhood_is_symmetric_over_every_link() {
        let sim = sample_sim();

        for edge in &sim.edges {
            let source_id = sim.nodes[edge.source].id.clone();
            let target_id = sim.nodes[edge.target].id.clone();

            assert!(
                sim.neighborhood(&source_id).contains(&edge.target),
                "{target_id} missing from neighborhood of {source_id}"
            );
            assert!(
                sim.neighborhood(&target_id).contains(&edge.source),
                "{source_id} missing from neighborhood of {target_id}"
            );
        }
    }

    #[test]
    fn neighborhood_contains_the_active_node() {
        let sim = sample_sim();
        let related = sim.neighborhood("Project Management");
        assert!(related.contains(&sim.index_by_id["Project Management"]));
        assert!(related.len() > 1);
    }

    #[test]
    fn stale_id_yields_empty_neighborhood_without_error() {
        let sim = sample_sim();
        assert!(sim.neighborhood("Imaginary Corp").is_empty());

        let state = build_highlight_state(&sim, "Imaginary Corp");
        assert!(state.related_nodes.is_empty());
        assert!(state.related_edges.is_empty());
    }

    #[test]
    fn highlight_edges_all_touch_the_active_node() {
        let sim = sample_sim();
        let active_index = sim.index_by_id["Quality Assurance"];
        let state = build_highlight_state(&sim, "Quality Assurance");

        assert!(!state.related_edges.is_empty());
        for &edge_index in &state.related_edges {
            let edge = &sim.edges[edge_index];
            assert!(edge.source == active_index || edge.target == active_index);
        }
    }
}
