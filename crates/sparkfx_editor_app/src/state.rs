// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor state: the live scene graph plus its projection.
//!
//! The editor owns the scene root and drives the index/reconcile cycle: any
//! command that mutates the graph is immediately followed by a rebuild, so
//! the UI never sees addresses from a stale snapshot.

use crate::demo;
use sparkfx_editor_scene::{
    dispatch, Address, Command, NodeKind, Outcome, Projection, SceneExporter, SceneNode,
    SelectionSink, TreeIndex,
};

/// An export artifact awaiting display in the dialog
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Dialog title
    pub title: String,
    /// Artifact text
    pub body: String,
}

/// Main editor state
pub struct EditorState {
    /// The scene graph; mutated only through [`EditorState::dispatch`]
    pub root: SceneNode,
    /// Address table for the current snapshot
    pub index: TreeIndex,
    /// Selection and expansion state
    pub projection: Projection,
    /// Whether the scene has unsaved changes
    pub dirty: bool,
    /// Label of the most recently selected node, for the status line
    pub last_selected: Option<String>,
    /// Export artifact shown in the dialog, if any
    pub last_export: Option<ExportArtifact>,
    exporter: SceneExporter,
}

/// Forwards selection changes to the log and the status line.
///
/// Stands in for the viewport/inspector channel of a full editor.
struct SelectionNotifier<'a> {
    last_selected: &'a mut Option<String>,
}

impl SelectionSink for SelectionNotifier<'_> {
    fn notify_selected(&mut self, node: &SceneNode) {
        tracing::info!(label = %node.label(), "selection changed");
        *self.last_selected = Some(node.label());
    }
}

impl EditorState {
    /// Create the editor state with the demo scene loaded
    pub fn new() -> Self {
        let root = demo::default_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);
        Self {
            root,
            index,
            projection,
            dirty: false,
            last_selected: None,
            last_export: None,
            exporter: SceneExporter,
        }
    }

    /// Replace the scene with an empty one
    pub fn new_scene(&mut self) {
        self.root = SceneNode::new(NodeKind::Group, "scene");
        self.last_selected = None;
        self.dirty = false;
        self.rebuild();
        tracing::info!("created new scene");
    }

    /// Replace the scene with the demo effect
    pub fn load_demo(&mut self) {
        self.root = demo::default_scene();
        self.last_selected = None;
        self.dirty = false;
        self.rebuild();
        tracing::info!("loaded demo scene");
    }

    /// Re-index the graph and reconcile retained UI state
    pub fn rebuild(&mut self) {
        self.index = TreeIndex::build(&self.root);
        self.projection.reconcile(&self.index);
    }

    /// Select an address, notifying the selection channel.
    ///
    /// Stale addresses are dropped silently: the tree the user clicked was
    /// rendered from the current snapshot, so this only happens when views
    /// disagree, and retrying cannot help.
    pub fn select(&mut self, address: Address) {
        let mut sink = SelectionNotifier {
            last_selected: &mut self.last_selected,
        };
        if let Err(err) = self
            .projection
            .select(address, &self.root, &self.index, &mut sink)
        {
            tracing::warn!(%err, "select dropped");
        }
    }

    /// Toggle expansion of an address
    pub fn toggle_expand(&mut self, address: Address) {
        self.projection.toggle_expand(address, &self.index);
    }

    /// Execute a command against the current snapshot.
    ///
    /// Mutations trigger an immediate rebuild; export artifacts land in
    /// [`EditorState::last_export`]; failures are logged and dropped.
    pub fn dispatch(&mut self, command: Command) {
        match dispatch(&mut self.root, &self.index, &command, &self.exporter) {
            Ok(Outcome::Mutated) => {
                self.dirty = true;
                self.rebuild();
            }
            Ok(Outcome::Structured(value)) => match serde_json::to_string_pretty(&value) {
                Ok(body) => {
                    self.last_export = Some(ExportArtifact {
                        title: "Export JSON".to_string(),
                        body,
                    });
                }
                Err(err) => tracing::warn!(%err, "could not format export artifact"),
            },
            Ok(Outcome::Code(body)) => {
                self.last_export = Some(ExportArtifact {
                    title: "JS Code".to_string(),
                    body,
                });
            }
            Err(err) => tracing::warn!(?command, %err, "command dropped"),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
