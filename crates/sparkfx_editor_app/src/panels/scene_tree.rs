// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene tree panel.
//!
//! Renders the projection's current snapshot as indented rows and turns UI
//! events into addressed commands. Actions are collected while iterating the
//! rows and applied afterwards, so one frame never mixes a mutation with
//! rows rendered from the pre-mutation snapshot.

use crate::state::EditorState;
use sparkfx_editor_scene::{Address, Command, NodeTemplate};

const TEMPLATES: [NodeTemplate; 3] = [
    NodeTemplate::ParticleSystem,
    NodeTemplate::Group,
    NodeTemplate::Light,
];

/// A deferred UI action for this frame
enum PanelAction {
    Select(Address),
    Toggle(Address),
    Dispatch(Command),
}

/// The scene tree panel
#[derive(Default)]
pub struct SceneTreePanel;

impl SceneTreePanel {
    /// Create a new scene tree panel
    pub fn new() -> Self {
        Self
    }

    /// Render the panel
    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState) {
        let mut pending: Option<PanelAction> = None;

        // Toolbar
        ui.horizontal(|ui| {
            ui.label("Scene Graph");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button("+", |ui| {
                    // Add under the selection, or under the root when
                    // nothing is selected
                    let target = state.projection.selected().unwrap_or(0);
                    for template in TEMPLATES {
                        if ui.button(template.menu_label()).clicked() {
                            pending = Some(PanelAction::Dispatch(Command::Add { target, template }));
                            ui.close_menu();
                        }
                    }
                });
            });
        });

        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let rows = state.projection.snapshot(&state.root, &state.index);

            if rows.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("Scene is empty");
                });
                return;
            }

            for row in rows {
                ui.horizontal(|ui| {
                    ui.add_space(row.depth as f32 * 16.0);

                    if row.has_children {
                        let icon = if row.is_expanded { "v" } else { ">" };
                        if ui.small_button(icon).clicked() {
                            pending = Some(PanelAction::Toggle(row.address));
                        }
                    } else {
                        ui.add_space(20.0);
                    }

                    let label = egui::SelectableLabel::new(row.is_selected, &row.label);
                    let response = ui.add(label);

                    if response.clicked() {
                        pending = Some(PanelAction::Select(row.address));
                    }

                    response.context_menu(|ui| {
                        ui.menu_button("Add", |ui| {
                            for template in TEMPLATES {
                                if ui.button(template.menu_label()).clicked() {
                                    pending = Some(PanelAction::Dispatch(Command::Add {
                                        target: row.address,
                                        template,
                                    }));
                                    ui.close_menu();
                                }
                            }
                        });
                        ui.separator();
                        if ui.button("Duplicate").clicked() {
                            pending = Some(PanelAction::Dispatch(Command::Duplicate {
                                target: row.address,
                            }));
                            ui.close_menu();
                        }
                        if ui.button("Remove").clicked() {
                            pending = Some(PanelAction::Dispatch(Command::Remove {
                                target: row.address,
                            }));
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("Export JSON").clicked() {
                            pending = Some(PanelAction::Dispatch(Command::ExportJson {
                                target: row.address,
                            }));
                            ui.close_menu();
                        }
                        if ui.button("Copy JS Code").clicked() {
                            pending = Some(PanelAction::Dispatch(Command::ExportCode {
                                target: row.address,
                            }));
                            ui.close_menu();
                        }
                    });
                });
            }
        });

        match pending {
            Some(PanelAction::Select(address)) => state.select(address),
            Some(PanelAction::Toggle(address)) => state.toggle_expand(address),
            Some(PanelAction::Dispatch(command)) => state.dispatch(command),
            None => {}
        }
    }
}
