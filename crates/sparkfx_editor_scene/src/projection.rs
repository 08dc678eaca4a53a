// SPDX-License-Identifier: MIT OR Apache-2.0
//! Projection view model: persistent UI intent over unstable addresses.
//!
//! Selection and expansion are stored as addresses, which are invalidated by
//! every structural mutation. The reconciliation policy is deliberately
//! conservative: if a rebuild changes the total node count, all retained
//! state is dropped; if the count is unchanged (attribute-only edits), state
//! is kept as-is. No structural-proximity guessing.

use crate::error::SceneError;
use crate::index::{Address, TreeIndex};
use crate::node::SceneNode;
use std::collections::HashSet;

/// Observer for selection changes.
///
/// The host wires this to its selection-propagation channel so other views
/// (viewport, inspector) can highlight the same object.
pub trait SelectionSink {
    /// Called with the resolved node whenever the user selects an address
    fn notify_selected(&mut self, node: &SceneNode);
}

/// One visible row of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Address of the node in the current snapshot
    pub address: Address,
    /// Indentation level, counted from the visible top level
    pub depth: usize,
    /// Display label, `[Kind] name`
    pub label: String,
    /// Whether the row can be expanded
    pub has_children: bool,
    /// Whether the row is currently expanded
    pub is_expanded: bool,
    /// Whether the row is the current selection
    pub is_selected: bool,
}

/// Selection and expansion state bridged across indexing passes.
///
/// Created empty when the view mounts and destroyed with it.
#[derive(Debug, Default)]
pub struct Projection {
    selected: Option<Address>,
    expanded: HashSet<Address>,
    node_count: usize,
}

impl Projection {
    /// Create an empty projection
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected address, if any
    pub fn selected(&self) -> Option<Address> {
        self.selected
    }

    /// Reconcile retained state against a freshly built index.
    ///
    /// Must be called after every rebuild, before the state is read again.
    pub fn reconcile(&mut self, index: &TreeIndex) {
        if index.len() != self.node_count {
            if self.selected.is_some() || !self.expanded.is_empty() {
                tracing::debug!(
                    old_count = self.node_count,
                    new_count = index.len(),
                    "node count changed, dropping selection and expansion state"
                );
            }
            self.selected = None;
            self.expanded.clear();
            self.node_count = index.len();
        }
    }

    /// Select an address and notify the sink with the resolved node
    pub fn select(
        &mut self,
        address: Address,
        root: &SceneNode,
        index: &TreeIndex,
        sink: &mut dyn SelectionSink,
    ) -> Result<(), SceneError> {
        let Some(node) = index.resolve(root, address) else {
            return Err(SceneError::InvalidTarget(address));
        };
        self.selected = Some(address);
        sink.notify_selected(node);
        Ok(())
    }

    /// Flip expansion for an address that resolves and has children
    pub fn toggle_expand(&mut self, address: Address, index: &TreeIndex) {
        if !index.has_children(address) {
            return;
        }
        if !self.expanded.remove(&address) {
            self.expanded.insert(address);
        }
    }

    /// Whether an address is currently expanded
    pub fn is_expanded(&self, address: Address) -> bool {
        self.expanded.contains(&address)
    }

    /// Render the visible tree for the current snapshot.
    ///
    /// The root contributes address 0 but is suppressed; its children are
    /// the top-level rows. Descendants of collapsed rows are omitted.
    pub fn snapshot(&self, root: &SceneNode, index: &TreeIndex) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        // Depth below which rows are hidden by a collapsed ancestor
        let mut prune_depth: Option<usize> = None;

        for address in 1..index.len() {
            let Some(depth) = index.depth(address) else {
                continue;
            };
            if let Some(limit) = prune_depth {
                if depth > limit {
                    continue;
                }
                prune_depth = None;
            }
            let Some(node) = index.resolve(root, address) else {
                continue;
            };

            let has_children = index.has_children(address);
            let is_expanded = self.expanded.contains(&address);
            rows.push(TreeRow {
                address,
                depth: depth - 1,
                label: node.label(),
                has_children,
                is_expanded,
                is_selected: self.selected == Some(address),
            });
            if has_children && !is_expanded {
                prune_depth = Some(depth);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[derive(Default)]
    struct RecordingSink {
        notified: Vec<String>,
    }

    impl SelectionSink for RecordingSink {
        fn notify_selected(&mut self, node: &SceneNode) {
            self.notified.push(node.name.clone());
        }
    }

    fn sample_scene() -> SceneNode {
        // root -> [a, b -> [c]]
        let mut root = SceneNode::new(NodeKind::Group, "root");
        root.children.push(SceneNode::new(NodeKind::Generic, "a"));
        let mut b = SceneNode::new(NodeKind::Group, "b");
        b.children.push(SceneNode::new(NodeKind::Generic, "c"));
        root.children.push(b);
        root
    }

    #[test]
    fn test_snapshot_suppresses_root_and_collapsed_children() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);

        let rows = projection.snapshot(&root, &index);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, 1);
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].address, 2);
        assert!(rows[1].has_children);
        assert!(!rows[1].is_expanded);

        projection.toggle_expand(2, &index);
        let rows = projection.snapshot(&root, &index);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].address, 3);
        assert_eq!(rows[2].depth, 1);
        assert_eq!(rows[2].label, "[Object] c");
    }

    #[test]
    fn test_select_notifies_sink() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);
        let mut sink = RecordingSink::default();

        projection.select(2, &root, &index, &mut sink).unwrap();
        assert_eq!(projection.selected(), Some(2));
        assert_eq!(sink.notified, vec!["b".to_string()]);
    }

    #[test]
    fn test_select_stale_address_fails() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);
        let mut sink = RecordingSink::default();

        let err = projection.select(9, &root, &index, &mut sink).unwrap_err();
        assert!(matches!(err, SceneError::InvalidTarget(9)));
        assert_eq!(projection.selected(), None);
        assert!(sink.notified.is_empty());
    }

    #[test]
    fn test_toggle_expand_ignores_leaves_and_stale_addresses() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);

        projection.toggle_expand(1, &index);
        projection.toggle_expand(42, &index);
        assert!(!projection.is_expanded(1));
        assert!(!projection.is_expanded(42));
    }

    #[test]
    fn test_reconcile_drops_state_on_count_change() {
        let mut root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);
        let mut sink = RecordingSink::default();

        projection.select(2, &root, &index, &mut sink).unwrap();
        projection.toggle_expand(2, &index);

        // Remove b's subtree, as the dispatcher would
        root.children.pop();
        let index = TreeIndex::build(&root);
        projection.reconcile(&index);

        assert_eq!(projection.selected(), None);
        assert!(!projection.is_expanded(2));
    }

    #[test]
    fn test_reconcile_keeps_state_on_attribute_change() {
        let mut root = sample_scene();
        let index = TreeIndex::build(&root);
        let mut projection = Projection::new();
        projection.reconcile(&index);
        let mut sink = RecordingSink::default();

        projection.select(2, &root, &index, &mut sink).unwrap();
        projection.toggle_expand(2, &index);

        // Rename only; node count is unchanged
        root.children[1].name = "renamed".to_string();
        let index = TreeIndex::build(&root);
        projection.reconcile(&index);

        assert_eq!(projection.selected(), Some(2));
        assert!(projection.is_expanded(2));
    }
}
