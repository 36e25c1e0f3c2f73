use eframe::egui::{self, Pos2, Rect, Ui};

use super::super::render_utils::screen_to_world;
use super::super::{DragState, ViewModel};

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.2, 6.0);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    pub(in crate::app) fn hovered_index(
        &self,
        ui: &Ui,
        screen_positions: &[Pos2],
        screen_radii: &[f32],
    ) -> Option<(usize, f32)> {
        let pointer_pos = ui.input(|input| input.pointer.hover_pos());
        pointer_pos.and_then(|pointer| {
            (0..screen_positions.len())
                .filter_map(|index| {
                    let distance = screen_positions[index].distance(pointer);
                    if distance <= screen_radii[index] {
                        Some((index, distance))
                    } else {
                        None
                    }
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
        })
    }

    /// Primary-button drag on a node drives the simulation's pin entry
    /// points. Dragging never changes the selection; click handling is
    /// mutually exclusive with it per pointer gesture.
    pub(in crate::app) fn handle_node_drag(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(index) = hovered {
                let id = self.sim.nodes[index].id.clone();
                self.sim.begin_drag(&id);
                self.drag = Some(DragState { index });
            }
            return;
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(drag) = &self.drag
                && let Some(pointer) = ui.input(|input| input.pointer.interact_pos())
            {
                let id = self.sim.nodes[drag.index].id.clone();
                let world = screen_to_world(rect, self.pan, self.zoom, pointer);
                self.sim.update_drag(&id, world);
            }
            return;
        }

        if response.drag_stopped_by(egui::PointerButton::Primary)
            && let Some(drag) = self.drag.take()
        {
            let id = self.sim.nodes[drag.index].id.clone();
            self.sim.end_drag(&id);
        }
    }
}
