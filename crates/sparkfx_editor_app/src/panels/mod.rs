// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor panels.

pub mod scene_tree;

pub use scene_tree::SceneTreePanel;
