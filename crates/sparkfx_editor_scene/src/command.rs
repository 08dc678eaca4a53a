// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command dispatcher: addressed mutations and exports against the live graph.
//!
//! A command captures an address, never a node reference; the target is
//! resolved fresh at execution time against the index for the current
//! snapshot. All mutations are synchronous and atomic: validation happens
//! before any child vector is touched, so a failed dispatch leaves the
//! graph exactly as it was.

use crate::error::SceneError;
use crate::export::ExportAdapter;
use crate::index::{Address, TreeIndex};
use crate::node::{NodeTemplate, SceneNode};
use serde::{Deserialize, Serialize};

/// A user-initiated request against an addressed node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Insert a freshly constructed node as the last child of the target
    Add {
        /// Address of the parent-to-be
        target: Address,
        /// Which default node to construct
        template: NodeTemplate,
    },
    /// Deep-copy the target subtree and insert it as the next sibling
    Duplicate {
        /// Address of the node to copy
        target: Address,
    },
    /// Detach the target subtree from its parent
    Remove {
        /// Address of the node to detach
        target: Address,
    },
    /// Produce a structured document for the target subtree
    ExportJson {
        /// Address of the subtree root
        target: Address,
    },
    /// Produce portable construction code for the target subtree
    ExportCode {
        /// Address of the subtree root
        target: Address,
    },
}

impl Command {
    /// The address this command resolves at execution time
    pub fn target(&self) -> Address {
        match *self {
            Self::Add { target, .. }
            | Self::Duplicate { target }
            | Self::Remove { target }
            | Self::ExportJson { target }
            | Self::ExportCode { target } => target,
        }
    }
}

/// What a successful dispatch produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The graph changed; the caller must re-index before reusing addresses
    Mutated,
    /// Structured export artifact; the graph is untouched
    Structured(serde_json::Value),
    /// Code export artifact; the graph is untouched
    Code(String),
}

/// Execute one command against one snapshot of the scene.
///
/// `index` must have been built from `root` after the most recent mutation;
/// a mismatched index surfaces as [`SceneError::InvalidTarget`].
pub fn dispatch(
    root: &mut SceneNode,
    index: &TreeIndex,
    command: &Command,
    exporter: &dyn ExportAdapter,
) -> Result<Outcome, SceneError> {
    match *command {
        Command::Add { target, template } => {
            let Some(parent) = index.resolve_mut(root, target) else {
                return Err(SceneError::InvalidTarget(target));
            };
            let node = template.instantiate();
            tracing::info!(
                address = target,
                kind = node.kind.kind_name(),
                "adding node as last child"
            );
            parent.children.push(node);
            Ok(Outcome::Mutated)
        }
        Command::Duplicate { target } => {
            let (parent, pos) = detachable(root, index, target)?;
            let copy = parent.children[pos].clone();
            tracing::info!(address = target, nodes = copy.subtree_len(), "duplicating subtree");
            parent.children.insert(pos + 1, copy);
            Ok(Outcome::Mutated)
        }
        Command::Remove { target } => {
            let (parent, pos) = detachable(root, index, target)?;
            let removed = parent.children.remove(pos);
            tracing::info!(address = target, nodes = removed.subtree_len(), "removed subtree");
            Ok(Outcome::Mutated)
        }
        Command::ExportJson { target } => {
            let Some(node) = index.resolve(root, target) else {
                return Err(SceneError::InvalidTarget(target));
            };
            Ok(Outcome::Structured(exporter.export_structured(node)?))
        }
        Command::ExportCode { target } => {
            let Some(node) = index.resolve(root, target) else {
                return Err(SceneError::InvalidTarget(target));
            };
            Ok(Outcome::Code(exporter.export_code(node)?))
        }
    }
}

/// Resolve a non-root target to its parent node and child position.
///
/// The root resolves but cannot be detached, so it reports
/// [`SceneError::UnsupportedOperation`].
fn detachable<'a>(
    root: &'a mut SceneNode,
    index: &TreeIndex,
    target: Address,
) -> Result<(&'a mut SceneNode, usize), SceneError> {
    let Some(path) = index.path(target) else {
        return Err(SceneError::InvalidTarget(target));
    };
    let Some((&pos, parent_path)) = path.split_last() else {
        return Err(SceneError::UnsupportedOperation);
    };
    let Some(parent) = root.descendant_mut(parent_path) else {
        return Err(SceneError::InvalidTarget(target));
    };
    if pos >= parent.children.len() {
        return Err(SceneError::InvalidTarget(target));
    }
    Ok((parent, pos))
}
