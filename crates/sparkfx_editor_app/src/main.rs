// SPDX-License-Identifier: MIT OR Apache-2.0
//! SparkFX Editor - scene tree editor for particle effect scenes.
//!
//! The editor hosts the projection-and-mutation engine from
//! `sparkfx_editor_scene`:
//! - Scene tree panel with expand/collapse, selection and context-menu
//!   commands (add, duplicate, remove, export)
//! - Export dialog showing JSON and construction-code artifacts
//! - Built-in demo effect scene
//!
//! Rendering of the 3D content itself is handled by the host runtime and is
//! not part of this editor.

mod app;
mod demo;
mod panels;
mod state;

use app::EditorApp;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), eframe::Error> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("sparkfx_editor_app=debug".parse().unwrap())
        .add_directive("sparkfx_editor_scene=debug".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting SparkFX Editor");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("SparkFX Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "SparkFX Editor",
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
    )
}
