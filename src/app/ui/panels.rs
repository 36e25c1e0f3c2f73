use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::resume::{ResumeData, ResumeGraph};

use super::super::{SimGraph, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(data: ResumeData) -> Self {
        let graph = ResumeGraph::build(&data);
        let sim = SimGraph::build(&graph);

        Self {
            data,
            graph,
            sim,
            selected: None,
            search: String::new(),
            drag: None,
            pan: Vec2::ZERO,
            zoom: 1.0,
            live_physics: true,
            physics_intensity: 1.0,
            physics_repulsion: 1.0,
            physics_spring: 1.0,
            physics_collision: 1.0,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(&self.data.name);
                    ui.separator();
                    ui.label(&self.data.title);
                    ui.separator();
                    ui.label(format!("nodes: {}", self.graph.node_count()));
                    ui.label(format!("links: {}", self.graph.link_count()));

                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload resume"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(selected) = self.selected.clone() {
                            if ui.button("Clear selection").clicked() {
                                self.select(None);
                            }
                            ui.label(format!("active: {selected}"));
                        }
                    });
                });
            });

        egui::SidePanel::left("overview")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_overview(ui));

        egui::SidePanel::right("records")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.draw_records(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Loading resume dataset...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_graph(ui);
            }
        });
    }

    fn draw_overview(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(6.0);
            ui.heading("Summary");
            ui.add_space(4.0);
            ui.label(&self.data.summary);

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Find a node");
            ui.add_space(4.0);
            let search_response = ui.text_edit_singleline(&mut self.search);
            if search_response.changed() && self.selected.is_some() {
                // Searching while a selection is active would be invisible;
                // drop the selection so the matches take over the emphasis.
                self.select(None);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Layout");
            ui.add_space(4.0);
            ui.checkbox(&mut self.live_physics, "Live simulation");
            ui.add(
                egui::Slider::new(&mut self.physics_intensity, 0.2..=2.5).text("intensity"),
            );
            ui.add(
                egui::Slider::new(&mut self.physics_repulsion, 0.25..=2.6).text("repulsion"),
            );
            ui.add(egui::Slider::new(&mut self.physics_spring, 0.2..=2.2).text("springs"));
            ui.add(
                egui::Slider::new(&mut self.physics_collision, 0.2..=2.0).text("collision"),
            );
            if ui.button("Reset view").clicked() {
                self.pan = Vec2::ZERO;
                self.zoom = 1.0;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Education");
            ui.add_space(4.0);
            for education in &self.data.educations {
                ui.label(egui::RichText::new(&education.period).small().weak());
                ui.label(egui::RichText::new(&education.degree).strong());
                ui.label(&education.school);
                ui.add_space(8.0);
            }
        });
    }
}
