use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::resume::NodeKind;

use super::super::highlight::build_highlight_state;
use super::super::render_utils::{
    LINK_BASE_COLOR, LINK_EMPHASIS_COLOR, blend_color, circle_visible, dim_color, draw_background,
    kind_color, world_to_screen,
};
use super::super::{SimConfig, ViewModel};

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

impl ViewModel {
    /// Node-label matches for the search box. Only meaningful while no
    /// node is selected; an active selection takes over the emphasis.
    fn search_matches(&self) -> Option<HashSet<usize>> {
        if self.selected.is_some() {
            return None;
        }

        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        Some(
            self.sim
                .nodes
                .iter()
                .enumerate()
                .filter_map(|(index, node)| {
                    fuzzy_match_score(&matcher, &node.label, query).map(|_| index)
                })
                .collect(),
        )
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);

        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let config = SimConfig {
            intensity: self.physics_intensity,
            repulsion_scale: self.physics_repulsion,
            spring_scale: self.physics_spring,
            collision_scale: self.physics_collision,
            delta_seconds: frame_delta_seconds,
        };

        // The draw path is the only place the simulation is stepped; the
        // repaint request below is what keeps it ticking while it moves.
        let physics_moving = if self.live_physics {
            self.sim.step(config)
        } else {
            false
        };
        if physics_moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        let pan = self.pan;
        let zoom = self.zoom;
        let screen_positions = self
            .sim
            .nodes
            .iter()
            .map(|node| world_to_screen(rect, pan, zoom, node.world_pos))
            .collect::<Vec<_>>();
        let screen_radii = self
            .sim
            .nodes
            .iter()
            .map(|node| (node.radius * zoom.powf(0.75)).clamp(3.0, 60.0))
            .collect::<Vec<_>>();

        let hovered = self
            .hovered_index(ui, &screen_positions, &screen_radii)
            .map(|(index, _distance)| index);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        self.handle_node_drag(ui, rect, &response, hovered);

        // A completed drag never counts as a click, so dragging cannot
        // change the selection.
        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            Some(hovered.map(|index| self.sim.nodes[index].id.clone()))
        } else {
            None
        };

        let highlight = self
            .selected
            .as_deref()
            .map(|id| build_highlight_state(&self.sim, id));
        let search_matches = self.search_matches();
        let search_active = search_matches
            .as_ref()
            .is_some_and(|matches| !matches.is_empty());

        let zoom_sqrt = zoom.sqrt();
        for (edge_index, edge) in self.sim.edges.iter().enumerate() {
            let start = screen_positions[edge.source];
            let end = screen_positions[edge.target];

            let emphasized = highlight
                .as_ref()
                .is_some_and(|state| state.related_edges.contains(&edge_index));

            let base_width = (edge.weight.max(0.25).sqrt() * 1.6 * zoom_sqrt).clamp(0.6, 5.0);
            let (width, color) = if emphasized {
                (base_width + 0.8, LINK_EMPHASIS_COLOR)
            } else if highlight.is_some() {
                (base_width, dim_color(LINK_BASE_COLOR, 0.12))
            } else if search_active {
                (base_width, dim_color(LINK_BASE_COLOR, 0.35))
            } else {
                (base_width, dim_color(LINK_BASE_COLOR, 0.75))
            };

            painter.line_segment([start, end], Stroke::new(width, color));
        }

        let selected_ring_color = Color32::from_rgb(245, 206, 93);
        let mut selection_animating = false;

        for (index, node) in self.sim.nodes.iter().enumerate() {
            let position = screen_positions[index];
            let radius = screen_radii[index];
            if !circle_visible(rect, position, radius + 20.0) {
                continue;
            }

            let is_selected = self.selected.as_deref() == Some(node.id.as_str());
            let is_hovered = hovered == Some(index);
            let in_neighborhood = highlight
                .as_ref()
                .is_some_and(|state| state.related_nodes.contains(&index));
            let is_search_match = search_matches
                .as_ref()
                .is_some_and(|matches| matches.contains(&index));

            let base_color = kind_color(node.kind);
            let fill = if is_hovered || in_neighborhood {
                base_color
            } else if highlight.is_some() {
                dim_color(base_color, 0.2)
            } else if search_active && !is_search_match {
                dim_color(base_color, 0.35)
            } else {
                base_color
            };

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("node-selection", node.id.as_str())),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }

            painter.circle_filled(position, radius, fill);
            painter.circle_stroke(
                position,
                radius,
                Stroke::new(
                    2.0,
                    if highlight.is_some() && !in_neighborhood && !is_hovered {
                        Color32::from_rgba_unmultiplied(255, 255, 255, 60)
                    } else {
                        Color32::from_rgba_unmultiplied(255, 255, 255, 220)
                    },
                ),
            );
            if selection_mix > 0.0 {
                painter.circle_stroke(
                    position,
                    radius + 3.0 + ((1.0 - selection_mix) * 5.0),
                    Stroke::new(
                        1.4 + (selection_mix * 1.2),
                        blend_color(Color32::TRANSPARENT, selected_ring_color, selection_mix),
                    ),
                );
            }

            let label_color = if highlight.is_some() && !in_neighborhood && !is_hovered {
                Color32::from_gray(110)
            } else {
                Color32::from_gray(230)
            };
            painter.text(
                position + vec2(0.0, radius + 4.0),
                Align2::CENTER_TOP,
                &node.label,
                FontId::proportional(11.0),
                label_color,
            );
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        self.draw_legend(&painter, rect);
        painter.text(
            rect.right_top() + vec2(-10.0, 10.0),
            Align2::RIGHT_TOP,
            "Drag to explore, click to filter",
            FontId::proportional(11.0),
            Color32::from_gray(140),
        );

        if let Some(selected) = pending_selection {
            self.select(selected);
        }
    }

    fn draw_legend(&self, painter: &egui::Painter, rect: egui::Rect) {
        let mut cursor = rect.left_top() + vec2(14.0, 14.0);
        painter.text(
            cursor,
            Align2::LEFT_TOP,
            "Graph legend",
            FontId::proportional(10.0),
            Color32::from_gray(140),
        );
        cursor.y += 16.0;

        for kind in [NodeKind::Skill, NodeKind::Experience, NodeKind::Certification] {
            painter.circle_filled(cursor + vec2(5.0, 6.0), 5.0, kind_color(kind));
            painter.text(
                cursor + vec2(15.0, 0.0),
                Align2::LEFT_TOP,
                kind.label(),
                FontId::proportional(11.0),
                Color32::from_gray(200),
            );
            cursor.y += 16.0;
        }
    }
}
