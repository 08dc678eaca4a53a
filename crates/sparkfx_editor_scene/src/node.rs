// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene node model.
//!
//! Nodes form an ordered tree owned by the host application. A node carries
//! no parent back-reference and no persistent identifier; identity is purely
//! positional and is recovered by the indexer on every pass.

use serde::{Deserialize, Serialize};

/// A typed node in the effect scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Node kind with its per-kind payload
    pub kind: NodeKind,
    /// Display name (empty renders as "unnamed")
    pub name: String,
    /// Ordered owned children; order is significant
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a childless node with the given kind and name
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The label shown in the tree view: `[Kind] name`
    pub fn label(&self) -> String {
        let name = if self.name.is_empty() {
            "unnamed"
        } else {
            self.name.as_str()
        };
        format!("[{}] {name}", self.kind.kind_name())
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneNode::subtree_len).sum::<usize>()
    }

    /// Walk a child-index path down from this node.
    ///
    /// An empty path resolves to `self`.
    pub fn descendant(&self, path: &[usize]) -> Option<&SceneNode> {
        let mut node = self;
        for &pos in path {
            node = node.children.get(pos)?;
        }
        Some(node)
    }

    /// Mutable variant of [`SceneNode::descendant`]
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut SceneNode> {
        let mut node = self;
        for &pos in path {
            node = node.children.get_mut(pos)?;
        }
        Some(node)
    }
}

/// Node kind as a closed tagged variant.
///
/// Every dispatch over kinds (labels, factories, code export) matches
/// exhaustively, so adding a kind is a compile-checked, localized change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A plain grouping node
    Group,
    /// A light source
    Light(LightParams),
    /// The root of a particle system
    ParticleSystem(SystemParams),
    /// A sub-emitter under a particle system
    ParticleEmitter,
    /// Any other object the host placed in the scene
    Generic,
}

impl NodeKind {
    /// Display name used in tree labels
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Light(_) => "Light",
            Self::ParticleSystem(_) => "ParticleSystem",
            Self::ParticleEmitter => "ParticleEmitter",
            Self::Generic => "Object",
        }
    }
}

/// Light payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightParams {
    /// Linear RGB color
    pub color: [f32; 3],
    /// Brightness multiplier
    pub intensity: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        }
    }
}

/// Particle system payload.
///
/// Only the top-level emission envelope lives here; the per-kind rendering
/// catalog (shapes, over-life curves) belongs to the host's runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParams {
    /// Emission duration in seconds
    pub duration: f32,
    /// Whether emission restarts after `duration`
    pub looping: bool,
    /// Particle pool capacity
    pub max_particles: u32,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            looping: true,
            max_particles: 100,
        }
    }
}

/// Factory templates for the Add command.
///
/// The particle-system template inserts a system node with one emitter
/// child, matching how a freshly constructed system parents its emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeTemplate {
    /// Default particle system with one sub-emitter
    ParticleSystem,
    /// Empty group
    Group,
    /// Default light
    Light,
}

impl NodeTemplate {
    /// Construct a ready-to-insert node for this template
    pub fn instantiate(self) -> SceneNode {
        match self {
            Self::ParticleSystem => {
                let mut system =
                    SceneNode::new(NodeKind::ParticleSystem(SystemParams::default()), "");
                system
                    .children
                    .push(SceneNode::new(NodeKind::ParticleEmitter, "emitter"));
                system
            }
            Self::Group => SceneNode::new(NodeKind::Group, ""),
            Self::Light => SceneNode::new(NodeKind::Light(LightParams::default()), ""),
        }
    }

    /// Menu text for this template
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::ParticleSystem => "Particle System",
            Self::Group => "Group",
            Self::Light => "Light",
        }
    }
}
