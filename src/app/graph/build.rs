use std::collections::HashMap;
use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use crate::resume::ResumeGraph;
use crate::util::stable_pair;

use super::super::render_utils::node_radius;
use super::super::{SimEdge, SimGraph, SimNode};

impl SimGraph {
    /// Derives fresh simulation state from the immutable graph model.
    /// Initial placement is a ring ordered by index with a per-id hash
    /// jitter, so first-frame positions are deterministic per id but
    /// carry no meaning until the simulation has stepped.
    pub(in crate::app) fn build(graph: &ResumeGraph) -> Self {
        let mut index_by_id = HashMap::with_capacity(graph.nodes.len());
        for (index, node) in graph.nodes.iter().enumerate() {
            index_by_id.insert(node.id.clone(), index);
        }

        let node_count = graph.nodes.len().max(1);
        let ring_radius = (node_count as f32).sqrt() * 90.0;

        let nodes = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let angle = (index as f32 / node_count as f32) * TAU;
                let (jx, jy) = stable_pair(&node.id);
                let jitter = vec2(jx * 60.0, jy * 60.0);

                SimNode {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    kind: node.kind,
                    world_pos: vec2(angle.cos(), angle.sin()) * ring_radius + jitter,
                    velocity: Vec2::ZERO,
                    radius: node_radius(node.size),
                    pin: None,
                }
            })
            .collect::<Vec<_>>();

        let mut edges = Vec::with_capacity(graph.links.len());
        for link in &graph.links {
            // The graph model already drops dangling links; this guards
            // against callers that hand-assemble a ResumeGraph.
            if let (Some(&source), Some(&target)) = (
                index_by_id.get(link.source.as_str()),
                index_by_id.get(link.target.as_str()),
            ) && source != target
            {
                edges.push(SimEdge {
                    source,
                    target,
                    weight: link.weight,
                });
            }
        }

        Self {
            nodes,
            edges,
            index_by_id,
            energy: 1.0,
            energy_target: 0.0,
            stopped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{NodeKind, ResumeLink, ResumeNode, sample_resume};

    #[test]
    fn build_maps_every_node_and_resolved_link() {
        let graph = ResumeGraph::build(&sample_resume());
        let sim = SimGraph::build(&graph);

        assert_eq!(sim.nodes.len(), graph.node_count());
        assert_eq!(sim.edges.len(), graph.link_count());
        for (index, node) in sim.nodes.iter().enumerate() {
            assert_eq!(sim.index_by_id[&node.id], index);
        }
    }

    #[test]
    fn initial_positions_are_deterministic_and_spread() {
        let graph = ResumeGraph::build(&sample_resume());
        let first = SimGraph::build(&graph);
        let second = SimGraph::build(&graph);

        for (a, b) in first.nodes.iter().zip(&second.nodes) {
            assert_eq!(a.world_pos, b.world_pos);
        }

        for i in 0..first.nodes.len() {
            for j in (i + 1)..first.nodes.len() {
                assert_ne!(first.nodes[i].world_pos, first.nodes[j].world_pos);
            }
        }
    }

    #[test]
    fn unresolved_and_self_links_are_dropped_defensively() {
        let node = |id: &str| ResumeNode {
            id: id.to_owned(),
            label: id.to_owned(),
            kind: NodeKind::Skill,
            size: 30.0,
        };
        let link = |source: &str, target: &str| ResumeLink {
            source: source.to_owned(),
            target: target.to_owned(),
            weight: 1.0,
        };

        let sim = SimGraph::build(&ResumeGraph {
            nodes: vec![node("a"), node("b")],
            links: vec![link("a", "b"), link("a", "ghost"), link("b", "b")],
        });

        assert_eq!(sim.edges.len(), 1);
        assert_eq!(sim.edges[0].source, sim.index_by_id["a"]);
        assert_eq!(sim.edges[0].target, sim.index_by_id["b"]);
    }

    #[test]
    fn node_radius_follows_data_model_size() {
        let graph = ResumeGraph::build(&sample_resume());
        let sim = SimGraph::build(&graph);

        let skill = &sim.nodes[sim.index_by_id["Project Management"]];
        let certification = &sim.nodes[sim.index_by_id["Six Sigma Yellow Belt"]];
        assert!(skill.radius > certification.radius);
    }
}
