// SPDX-License-Identifier: MIT OR Apache-2.0
//! The editor application shell.

use crate::panels::SceneTreePanel;
use crate::state::EditorState;

/// Top-level application: state plus panels
pub struct EditorApp {
    state: EditorState,
    scene_tree: SceneTreePanel,
}

impl EditorApp {
    /// Create the application with the demo scene loaded
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
            scene_tree: SceneTreePanel::new(),
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Scene").clicked() {
                    self.state.new_scene();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Demo", |ui| {
                if ui.button("Level Up").clicked() {
                    self.state.load_demo();
                    ui.close_menu();
                }
            });
        });
    }

    fn export_dialog(&mut self, ctx: &egui::Context) {
        let mut open = self.state.last_export.is_some();
        if let Some(artifact) = &self.state.last_export {
            egui::Window::new(&artifact.title)
                .open(&mut open)
                .default_size([480.0, 360.0])
                .vscroll(true)
                .show(ctx, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut artifact.body.as_str())
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
        }
        if !open {
            self.state.last_export = None;
        }
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ui);
        });

        egui::SidePanel::left("scene_tree")
            .default_width(300.0)
            .show(ctx, |ui| {
                self.scene_tree.ui(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Viewport rendering lives in the host runtime; show the
            // selection the tree propagated instead
            ui.centered_and_justified(|ui| {
                let text = match &self.state.last_selected {
                    Some(label) => format!("Selected: {label}"),
                    None => "No selection".to_string(),
                };
                ui.label(text);
            });
        });

        self.export_dialog(ctx);
    }
}
