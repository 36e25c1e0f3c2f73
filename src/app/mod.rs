use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::resume::{NodeKind, ResumeData, ResumeGraph, load_resume};

mod graph;
mod highlight;
mod physics;
mod render_utils;
mod selection;
mod ui;

pub struct ResumeGraphApp {
    resume_path: Option<PathBuf>,
    state: AppState,
    reload_rx: Option<Receiver<Result<ResumeData, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<ResumeData, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    data: ResumeData,
    graph: ResumeGraph,
    sim: SimGraph,
    selected: Option<String>,
    search: String,
    drag: Option<DragState>,
    pan: Vec2,
    zoom: f32,
    live_physics: bool,
    physics_intensity: f32,
    physics_repulsion: f32,
    physics_spring: f32,
    physics_collision: f32,
}

/// Mutable simulation state, owned for the lifetime of one mounted
/// diagram and rebuilt wholesale when the dataset changes. Kept separate
/// from the immutable [`ResumeGraph`] so layout never aliases source data.
struct SimGraph {
    nodes: Vec<SimNode>,
    edges: Vec<SimEdge>,
    index_by_id: HashMap<String, usize>,
    energy: f32,
    energy_target: f32,
    stopped: bool,
}

struct SimNode {
    id: String,
    label: String,
    kind: NodeKind,
    world_pos: Vec2,
    velocity: Vec2,
    radius: f32,
    pin: Option<Vec2>,
}

#[derive(Clone, Copy)]
struct SimEdge {
    source: usize,
    target: usize,
    weight: f32,
}

struct DragState {
    index: usize,
}

#[derive(Clone, Copy)]
struct SimConfig {
    intensity: f32,
    repulsion_scale: f32,
    spring_scale: f32,
    collision_scale: f32,
    delta_seconds: f32,
}

struct HighlightState {
    related_nodes: HashSet<usize>,
    related_edges: HashSet<usize>,
}

impl ResumeGraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, resume_path: Option<PathBuf>) -> Self {
        let state = Self::start_load(resume_path.clone());
        Self {
            resume_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(resume_path: Option<PathBuf>) -> Receiver<Result<ResumeData, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_resume(resume_path.as_deref()).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(resume_path: Option<PathBuf>) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(resume_path),
        }
    }
}

impl eframe::App for ResumeGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(data) => AppState::Ready(Box::new(ViewModel::new(data))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading resume dataset...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load resume dataset");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.resume_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.resume_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(data) => AppState::Ready(Box::new(ViewModel::new(data))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            // Only one simulation may run per mounted diagram; halt the
            // outgoing one before the replacement takes over.
            if let AppState::Ready(model) = &mut self.state {
                model.sim.stop();
            }
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
