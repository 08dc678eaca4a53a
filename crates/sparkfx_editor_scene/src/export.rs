// SPDX-License-Identifier: MIT OR Apache-2.0
//! Export adapter contract and the default adapter.
//!
//! Exports are pure: they never mutate the graph, and the same node state
//! always yields the same artifact. The engine only depends on the
//! [`ExportAdapter`] trait; hosts can swap in their own serializer.

use crate::error::SceneError;
use crate::node::{NodeKind, SceneNode};
use std::fmt::Write as _;

/// Converts a node subtree into an exportable artifact
pub trait ExportAdapter {
    /// Structured (serializable) description of the subtree
    fn export_structured(&self, node: &SceneNode) -> Result<serde_json::Value, SceneError>;

    /// Portable source text reproducing the subtree's construction
    fn export_code(&self, node: &SceneNode) -> Result<String, SceneError>;
}

/// Default adapter: serde tree for the structured form, JavaScript-flavored
/// construction code for the textual form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneExporter;

impl ExportAdapter for SceneExporter {
    fn export_structured(&self, node: &SceneNode) -> Result<serde_json::Value, SceneError> {
        Ok(serde_json::to_value(node)?)
    }

    fn export_code(&self, node: &SceneNode) -> Result<String, SceneError> {
        let mut out = String::new();
        let mut counter = 0;
        emit(node, &mut out, &mut counter)
            .map_err(|e| SceneError::ExportFailure(e.to_string()))?;
        Ok(out)
    }
}

/// Emit construction code for one subtree; returns the node's variable id
fn emit(node: &SceneNode, out: &mut String, counter: &mut usize) -> Result<usize, std::fmt::Error> {
    let id = *counter;
    *counter += 1;

    match &node.kind {
        NodeKind::Group => writeln!(out, "const node{id} = new Group();")?,
        NodeKind::Light(params) => writeln!(
            out,
            "const node{id} = new AmbientLight(0x{:06x}, {});",
            hex_color(params.color),
            params.intensity
        )?,
        NodeKind::ParticleSystem(params) => writeln!(
            out,
            "const node{id} = new ParticleSystem({{ duration: {}, looping: {}, maxParticle: {} }});",
            params.duration, params.looping, params.max_particles
        )?,
        NodeKind::ParticleEmitter => writeln!(out, "const node{id} = new ParticleEmitter();")?,
        NodeKind::Generic => writeln!(out, "const node{id} = new Object3D();")?,
    }
    if !node.name.is_empty() {
        writeln!(out, "node{id}.name = {:?};", node.name)?;
    }
    for child in &node.children {
        let child_id = emit(child, out, counter)?;
        writeln!(out, "node{id}.add(node{child_id});")?;
    }
    Ok(id)
}

fn hex_color(color: [f32; 3]) -> u32 {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (byte(color[0]) << 16) | (byte(color[1]) << 8) | byte(color[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LightParams, NodeTemplate, SystemParams};

    fn sample_effect() -> SceneNode {
        let mut group = SceneNode::new(NodeKind::Group, "levelUp");
        group.children.push(SceneNode::new(
            NodeKind::ParticleSystem(SystemParams::default()),
            "glow",
        ));
        group.children.push(SceneNode::new(
            NodeKind::Light(LightParams::default()),
            "",
        ));
        group
    }

    #[test]
    fn test_structured_export_round_trips() {
        let node = sample_effect();
        let value = SceneExporter.export_structured(&node).unwrap();
        let back: SceneNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_exports_are_pure() {
        let node = sample_effect();
        let before = node.clone();

        let a = SceneExporter.export_structured(&node).unwrap();
        let b = SceneExporter.export_structured(&node).unwrap();
        assert_eq!(a, b);

        let a = SceneExporter.export_code(&node).unwrap();
        let b = SceneExporter.export_code(&node).unwrap();
        assert_eq!(a, b);

        assert_eq!(node, before);
    }

    #[test]
    fn test_code_export_wires_hierarchy() {
        let code = SceneExporter.export_code(&sample_effect()).unwrap();

        assert!(code.contains("const node0 = new Group();"));
        assert!(code.contains("node0.name = \"levelUp\";"));
        assert!(code.contains(
            "const node1 = new ParticleSystem({ duration: 1, looping: true, maxParticle: 100 });"
        ));
        assert!(code.contains("node0.add(node1);"));
        assert!(code.contains("const node2 = new AmbientLight(0xffffff, 1);"));
        assert!(code.contains("node0.add(node2);"));
    }

    #[test]
    fn test_code_export_is_total_over_kinds() {
        for node in [
            SceneNode::new(NodeKind::Generic, ""),
            SceneNode::new(NodeKind::ParticleEmitter, "emitter"),
            NodeTemplate::ParticleSystem.instantiate(),
        ] {
            assert!(!SceneExporter.export_code(&node).unwrap().is_empty());
        }
    }
}
