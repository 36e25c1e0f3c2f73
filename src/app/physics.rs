use eframe::egui::{Vec2, vec2};

use super::{SimConfig, SimGraph};

/// Target rest length for a linked pair, before weight scaling.
const REST_LENGTH: f32 = 100.0;
/// Below this energy with no pins active, the layout is considered
/// settled and stepping becomes a no-op until something reheats it.
const MIN_ENERGY: f32 = 0.004;
/// Per-step relaxation of energy toward its target.
const ENERGY_RELAX: f32 = 0.045;
/// Energy target while a node is being dragged, so neighbors re-settle
/// around the pin.
const DRAG_ENERGY_TARGET: f32 = 0.3;

const REPULSION_SOFTENING: f32 = 600.0;
const COLLISION_PADDING: f32 = 1.25;

#[cfg(test)]
impl SimConfig {
    fn for_test() -> Self {
        Self {
            intensity: 1.0,
            repulsion_scale: 1.0,
            spring_scale: 1.0,
            collision_scale: 1.0,
            delta_seconds: 1.0 / 60.0,
        }
    }
}

impl SimGraph {
    /// Advances the simulation by one discrete step and reports whether
    /// anything still moves. Combines pairwise repulsion, spring
    /// attraction along links, a centering pull toward the origin, and
    /// circle collision, then integrates velocities scaled by the
    /// decaying energy. Pinned nodes are snapped back to their pin after
    /// integration; other nodes still react to them.
    ///
    /// After [`SimGraph::stop`] this refuses to do anything.
    pub(in crate::app) fn step(&mut self, config: SimConfig) -> bool {
        if self.stopped || self.nodes.is_empty() {
            return false;
        }

        let time_scale = (config.delta_seconds * 60.0).clamp(0.25, 3.0);
        self.energy += (self.energy_target - self.energy) * ENERGY_RELAX * time_scale;
        self.energy = self.energy.clamp(0.0, 1.0);

        let has_pins = self.nodes.iter().any(|node| node.pin.is_some());
        if self.energy <= MIN_ENERGY && self.energy_target <= MIN_ENERGY && !has_pins {
            for node in &mut self.nodes {
                node.velocity = Vec2::ZERO;
            }
            return false;
        }

        let node_count = self.nodes.len();
        let intensity = config.intensity.clamp(0.2, 2.5);
        let repulsion_strength = 26_000.0 * intensity * config.repulsion_scale.clamp(0.25, 2.6);
        let spring_strength = 0.016 * intensity * config.spring_scale.clamp(0.2, 2.2);
        let collision_strength = 1.2 * intensity * config.collision_scale.clamp(0.2, 2.0);
        let center_pull = 0.0035 * intensity;
        let damping_factor = 0.88_f32.powf(time_scale);

        let mut forces = vec![Vec2::ZERO; node_count];

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let delta = self.nodes[i].world_pos - self.nodes[j].world_pos;
                let distance_sq = delta.length_sq();
                let distance = distance_sq.sqrt();
                let direction = if distance > 0.0001 {
                    delta / distance
                } else {
                    // Coincident nodes get a deterministic push-apart axis.
                    let angle = ((i as f32) * 0.618_034 + (j as f32) * 0.414_214)
                        * std::f32::consts::TAU;
                    vec2(angle.cos(), angle.sin())
                };

                let repulsion = repulsion_strength / (distance_sq + REPULSION_SOFTENING);
                forces[i] += direction * repulsion;
                forces[j] -= direction * repulsion;

                let min_distance =
                    (self.nodes[i].radius + self.nodes[j].radius) * COLLISION_PADDING;
                if distance < min_distance {
                    let overlap_push = (min_distance - distance) * collision_strength;
                    forces[i] += direction * overlap_push;
                    forces[j] -= direction * overlap_push;
                }
            }
        }

        for edge in &self.edges {
            if edge.source >= node_count || edge.target >= node_count || edge.source == edge.target
            {
                continue;
            }

            let delta = self.nodes[edge.source].world_pos - self.nodes[edge.target].world_pos;
            let distance_sq = delta.length_sq();
            if distance_sq <= 0.0001 * 0.0001 {
                continue;
            }
            let distance = distance_sq.sqrt();
            let direction = delta / distance;

            let spring = (distance - REST_LENGTH) * spring_strength * edge.weight.max(0.1);
            forces[edge.source] -= direction * spring;
            forces[edge.target] += direction * spring;
        }

        for (index, force) in forces.iter_mut().enumerate() {
            *force -= self.nodes[index].world_pos * center_pull;
        }

        let max_force = 165.0 + (intensity * 90.0);
        let max_force_sq = max_force * max_force;
        let max_speed = 11.0 + (intensity * 15.0);
        let max_speed_sq = max_speed * max_speed;
        let min_sleep_speed_sq = 0.02 * 0.02;
        let min_sleep_force_sq = 0.08 * 0.08;
        let mut any_motion = false;

        for (index, force_value) in forces.iter().enumerate() {
            let mut force = *force_value;
            let force_sq = force.length_sq();
            if force_sq > max_force_sq {
                force *= max_force / force_sq.sqrt();
            }

            let mut velocity = (self.nodes[index].velocity
                + (force * (0.06 * time_scale * self.energy)))
                * damping_factor;
            let mut speed_sq = velocity.length_sq();
            if speed_sq > max_speed_sq {
                velocity *= max_speed / speed_sq.sqrt();
                speed_sq = max_speed_sq;
            }

            if speed_sq < min_sleep_speed_sq && force_sq < min_sleep_force_sq {
                velocity = Vec2::ZERO;
                speed_sq = 0.0;
            }

            self.nodes[index].velocity = velocity;
            self.nodes[index].world_pos += velocity * time_scale;

            if let Some(pin) = self.nodes[index].pin {
                self.nodes[index].world_pos = pin;
                self.nodes[index].velocity = Vec2::ZERO;
            } else if speed_sq > 0.000_001 {
                any_motion = true;
            }
        }

        any_motion || has_pins
    }

    /// Pins the node at its current position and reheats the system so
    /// the neighborhood re-settles around the pin while it moves.
    pub(in crate::app) fn begin_drag(&mut self, id: &str) {
        if self.stopped {
            return;
        }
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };

        let node = &mut self.nodes[index];
        node.pin = Some(node.world_pos);
        node.velocity = Vec2::ZERO;
        self.energy_target = DRAG_ENERGY_TARGET;
        self.energy = self.energy.max(DRAG_ENERGY_TARGET);
    }

    pub(in crate::app) fn update_drag(&mut self, id: &str, position: Vec2) {
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };

        let node = &mut self.nodes[index];
        if node.pin.is_some() {
            node.pin = Some(position);
            node.world_pos = position;
        }
    }

    /// Releases the pin; energy decays back toward rest.
    pub(in crate::app) fn end_drag(&mut self, id: &str) {
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };

        self.nodes[index].pin = None;
        self.energy_target = 0.0;
    }

    /// Halts the simulation permanently. Every later `step` is a no-op
    /// returning `false`; there is no restart.
    pub(in crate::app) fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{ResumeGraph, ResumeLink, ResumeNode};
    use crate::resume::NodeKind;

    fn ring_graph(node_count: usize) -> SimGraph {
        let nodes = (0..node_count)
            .map(|index| ResumeNode {
                id: format!("node-{index}"),
                label: format!("node-{index}"),
                kind: NodeKind::Skill,
                size: 20.0,
            })
            .collect::<Vec<_>>();

        let links = (0..node_count)
            .map(|index| ResumeLink {
                source: format!("node-{index}"),
                target: format!("node-{}", (index + 1) % node_count),
                weight: 1.0,
            })
            .collect::<Vec<_>>();

        SimGraph::build(&ResumeGraph { nodes, links })
    }

    fn run_until_settled(sim: &mut SimGraph, max_steps: usize) -> Option<usize> {
        let config = SimConfig::for_test();
        for step_index in 0..max_steps {
            if !sim.step(config) {
                return Some(step_index);
            }
        }
        None
    }

    #[test]
    fn layout_settles_within_bounded_steps() {
        let mut sim = ring_graph(50);
        let settled_after = run_until_settled(&mut sim, 2000);
        assert!(settled_after.is_some(), "50-node ring never settled");

        // Once settled, further steps must not move anything.
        let before = sim.nodes.iter().map(|node| node.world_pos).collect::<Vec<_>>();
        assert!(!sim.step(SimConfig::for_test()));
        for (node, position) in sim.nodes.iter().zip(before) {
            assert_eq!(node.world_pos, position);
        }
    }

    #[test]
    fn linked_nodes_end_up_closer_than_unlinked_ones() {
        let mut sim = ring_graph(12);
        run_until_settled(&mut sim, 2000);

        let linked = (sim.nodes[0].world_pos - sim.nodes[1].world_pos).length();
        let across = (sim.nodes[0].world_pos - sim.nodes[6].world_pos).length();
        assert!(
            linked < across,
            "linked pair ({linked}) should sit closer than opposite pair ({across})"
        );
    }

    #[test]
    fn pinned_node_stays_exactly_at_the_drag_position() {
        let mut sim = ring_graph(8);
        let config = SimConfig::for_test();
        for _ in 0..20 {
            sim.step(config);
        }

        sim.begin_drag("node-3");
        sim.update_drag("node-3", vec2(321.0, -77.0));
        for _ in 0..50 {
            sim.step(config);
            let index = sim.index_by_id["node-3"];
            assert_eq!(sim.nodes[index].world_pos, vec2(321.0, -77.0));
        }

        sim.end_drag("node-3");
        assert!(sim.nodes[sim.index_by_id["node-3"]].pin.is_none());
    }

    #[test]
    fn drag_reheats_a_settled_layout() {
        let mut sim = ring_graph(8);
        run_until_settled(&mut sim, 2000);
        assert!(sim.energy <= MIN_ENERGY);

        sim.begin_drag("node-0");
        assert!(sim.energy >= DRAG_ENERGY_TARGET);
        assert!(sim.step(SimConfig::for_test()));

        sim.end_drag("node-0");
        assert!(run_until_settled(&mut sim, 2000).is_some());
    }

    #[test]
    fn unknown_drag_ids_are_ignored() {
        let mut sim = ring_graph(3);
        sim.begin_drag("nobody");
        sim.update_drag("nobody", vec2(1.0, 1.0));
        sim.end_drag("nobody");
        assert!(sim.nodes.iter().all(|node| node.pin.is_none()));
    }

    #[test]
    fn stop_refuses_further_steps() {
        let mut sim = ring_graph(6);
        assert!(sim.step(SimConfig::for_test()));

        sim.stop();
        let before = sim.nodes.iter().map(|node| node.world_pos).collect::<Vec<_>>();
        assert!(!sim.step(SimConfig::for_test()));
        for (node, position) in sim.nodes.iter().zip(before) {
            assert_eq!(node.world_pos, position);
        }

        // Drag entry points are inert once stopped.
        sim.begin_drag("node-0");
        assert!(sim.nodes[0].pin.is_none());
    }

    #[test]
    fn empty_simulation_is_valid_and_settled() {
        let mut sim = SimGraph::build(&ResumeGraph::default());
        assert!(!sim.step(SimConfig::for_test()));
        assert!(sim.nodes.is_empty());
    }

    #[test]
    fn coincident_nodes_are_pushed_apart() {
        let mut sim = ring_graph(2);
        sim.nodes[0].world_pos = Vec2::ZERO;
        sim.nodes[1].world_pos = Vec2::ZERO;

        let config = SimConfig::for_test();
        for _ in 0..30 {
            sim.step(config);
        }

        assert!((sim.nodes[0].world_pos - sim.nodes[1].world_pos).length() > 1.0);
    }
}
