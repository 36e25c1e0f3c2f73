use eframe::egui::{self, Color32, RichText, Stroke, Ui};

use crate::resume::{filter_certifications, filter_experiences};

use super::super::ViewModel;

const EXPERIENCE_RING: Color32 = Color32::from_rgb(245, 158, 11);
const CERTIFICATION_RING: Color32 = Color32::from_rgb(16, 185, 129);
const SKILL_CHIP_ACTIVE: Color32 = Color32::from_rgb(59, 130, 246);

impl ViewModel {
    /// The experience and certification panels. Both lists are pure
    /// functions of the active selection; clicking a skill chip routes
    /// back through `select`, the same entry point the diagram uses.
    pub(in crate::app) fn draw_records(&mut self, ui: &mut Ui) {
        let mut pending_selection: Option<Option<String>> = None;
        let active = self.selected.as_deref();

        let experiences = filter_experiences(active, &self.data);
        ui.add_space(6.0);
        ui.heading(format!("Professional experience ({})", experiences.len()));
        ui.add_space(4.0);

        for experience in experiences {
            let is_active = active == Some(experience.company.as_str());
            let mut frame = egui::Frame::group(ui.style());
            if is_active {
                frame = frame.stroke(Stroke::new(2.0, EXPERIENCE_RING));
            }

            frame.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&experience.role).strong());
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| ui.label(RichText::new(&experience.period).small().weak()),
                    );
                });
                ui.label(RichText::new(&experience.company).color(EXPERIENCE_RING));
                for bullet in &experience.bullets {
                    ui.label(RichText::new(format!("- {bullet}")).small());
                }
                ui.horizontal_wrapped(|ui| {
                    for tag in &experience.skills {
                        let chip_active = active == Some(tag.as_str());
                        let chip = ui.selectable_label(
                            chip_active,
                            RichText::new(tag).small().color(if chip_active {
                                Color32::WHITE
                            } else {
                                SKILL_CHIP_ACTIVE
                            }),
                        );
                        if chip.clicked() {
                            pending_selection = Some(Some(tag.clone()));
                        }
                    }
                });
            });
            ui.add_space(6.0);
        }

        let certifications = filter_certifications(active, &self.data);
        ui.add_space(8.0);
        ui.separator();
        ui.heading(format!("Certifications ({})", certifications.len()));
        ui.add_space(4.0);

        for certification in certifications {
            let is_active = active == Some(certification.name.as_str());
            let mut frame = egui::Frame::group(ui.style());
            if is_active {
                frame = frame.stroke(Stroke::new(2.0, CERTIFICATION_RING));
            }

            frame.show(ui, |ui| {
                ui.label(RichText::new(&certification.name).strong());
                ui.label(RichText::new(&certification.issuer).small().weak());
                ui.horizontal_wrapped(|ui| {
                    for tag in &certification.skills {
                        let chip_active = active == Some(tag.as_str());
                        let chip = ui.selectable_label(
                            chip_active,
                            RichText::new(tag).small().color(if chip_active {
                                Color32::WHITE
                            } else {
                                SKILL_CHIP_ACTIVE
                            }),
                        );
                        if chip.clicked() {
                            pending_selection = Some(Some(tag.clone()));
                        }
                    }
                });
            });
            ui.add_space(4.0);
        }

        if let Some(selection) = pending_selection {
            self.select(selection);
        }
    }
}
