// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in demo scene.
//!
//! A "level up" burst effect: a gather pass pulling particles inward, two
//! glow flashes and an outward cone burst, grouped under one node.

use sparkfx_editor_scene::{LightParams, NodeKind, SceneNode, SystemParams};

/// The initial scene shown at startup
pub fn default_scene() -> SceneNode {
    let mut scene = SceneNode::new(NodeKind::Group, "scene");
    scene.children.push(SceneNode::new(
        NodeKind::Light(LightParams::default()),
        "ambient",
    ));
    scene.children.push(level_up());
    scene
}

/// The "levelUp" effect group with its four particle systems
pub fn level_up() -> SceneNode {
    let mut group = SceneNode::new(NodeKind::Group, "levelUp");
    group
        .children
        .push(system("gatherParticles", 0.5, false, 100));
    group.children.push(system("glow", 2.0, false, 10));
    group.children.push(system("glow2", 2.0, false, 10));
    group.children.push(system("particle", 1.0, false, 100));
    group
}

fn system(name: &str, duration: f32, looping: bool, max_particles: u32) -> SceneNode {
    let mut node = SceneNode::new(
        NodeKind::ParticleSystem(SystemParams {
            duration,
            looping,
            max_particles,
        }),
        name,
    );
    node.children
        .push(SceneNode::new(NodeKind::ParticleEmitter, "emitter"));
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkfx_editor_scene::TreeIndex;

    #[test]
    fn test_demo_scene_indexes_cleanly() {
        let scene = default_scene();
        let index = TreeIndex::build(&scene);
        // scene + light + group + 4 systems with one emitter each
        assert_eq!(index.len(), scene.subtree_len());
        assert_eq!(index.len(), 11);
    }
}
