// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tree indexer: deterministic address assignment over one graph snapshot.
//!
//! One indexing pass walks the scene pre-order (node, then children
//! left-to-right) and assigns strictly increasing integer addresses starting
//! at 0 for the root. Traversal order, not any display attribute, is the
//! tie-break for identically named nodes.
//!
//! Addresses are only meaningful against the snapshot they were built from.
//! Any structural mutation invalidates the whole index; callers rebuild it
//! before resolving another address.

use crate::node::SceneNode;

/// A traversal-order integer identifying a node within one indexing pass
pub type Address = usize;

/// Per-address record captured during the indexing walk
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Child-index path from the root to this node
    path: Vec<usize>,
    /// Distance from the root (root is 0)
    depth: usize,
    /// Child count at the time of the walk
    child_count: usize,
}

/// The address table for one snapshot of the scene.
///
/// Building is O(N) for N nodes and yields exactly N addresses in `[0, N)`.
/// The index stores child paths rather than node references, so it borrows
/// nothing from the graph and resolution re-walks the stored path.
///
/// Precondition: the graph is a finite tree. The host guarantees acyclicity;
/// the indexer does not check for cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeIndex {
    entries: Vec<Entry>,
}

impl TreeIndex {
    /// Index one snapshot of the scene
    pub fn build(root: &SceneNode) -> Self {
        let mut entries = Vec::with_capacity(root.subtree_len());
        let mut path = Vec::new();
        Self::walk(root, 0, &mut path, &mut entries);
        Self { entries }
    }

    fn walk(node: &SceneNode, depth: usize, path: &mut Vec<usize>, entries: &mut Vec<Entry>) {
        entries.push(Entry {
            path: path.clone(),
            depth,
            child_count: node.children.len(),
        });
        for (pos, child) in node.children.iter().enumerate() {
            path.push(pos);
            Self::walk(child, depth + 1, path, entries);
            path.pop();
        }
    }

    /// Number of addresses assigned in this pass
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no addresses (never true for a built index)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the address was assigned in this pass
    pub fn contains(&self, address: Address) -> bool {
        address < self.entries.len()
    }

    /// Child-index path from the root to the addressed node
    pub fn path(&self, address: Address) -> Option<&[usize]> {
        self.entries.get(address).map(|e| e.path.as_slice())
    }

    /// Depth of the addressed node (root is 0)
    pub fn depth(&self, address: Address) -> Option<usize> {
        self.entries.get(address).map(|e| e.depth)
    }

    /// Whether the addressed node had children when indexed
    pub fn has_children(&self, address: Address) -> bool {
        self.entries
            .get(address)
            .is_some_and(|e| e.child_count > 0)
    }

    /// Address of the addressed node's parent (`None` for the root)
    pub fn parent_of(&self, address: Address) -> Option<Address> {
        let path = self.path(address)?;
        let parent_path = path.split_last()?.1;
        self.entries.iter().position(|e| e.path == parent_path)
    }

    /// Resolve an address against the graph this index was built from
    pub fn resolve<'a>(&self, root: &'a SceneNode, address: Address) -> Option<&'a SceneNode> {
        root.descendant(self.path(address)?)
    }

    /// Mutable variant of [`TreeIndex::resolve`]
    pub fn resolve_mut<'a>(
        &self,
        root: &'a mut SceneNode,
        address: Address,
    ) -> Option<&'a mut SceneNode> {
        root.descendant_mut(self.path(address)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

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
    fn test_preorder_addresses() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);

        assert_eq!(index.len(), 4);
        assert_eq!(index.resolve(&root, 0).unwrap().name, "root");
        assert_eq!(index.resolve(&root, 1).unwrap().name, "a");
        assert_eq!(index.resolve(&root, 2).unwrap().name, "b");
        assert_eq!(index.resolve(&root, 3).unwrap().name, "c");
        assert!(index.resolve(&root, 4).is_none());
    }

    #[test]
    fn test_indexing_is_deterministic() {
        let root = sample_scene();
        assert_eq!(TreeIndex::build(&root), TreeIndex::build(&root));
    }

    #[test]
    fn test_traversal_order_breaks_name_ties() {
        let mut root = SceneNode::new(NodeKind::Group, "root");
        root.children.push(SceneNode::new(NodeKind::Generic, "twin"));
        root.children.push(SceneNode::new(NodeKind::Generic, "twin"));
        let index = TreeIndex::build(&root);

        assert_eq!(index.path(1).unwrap(), &[0]);
        assert_eq!(index.path(2).unwrap(), &[1]);
    }

    #[test]
    fn test_depth_and_children() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);

        assert_eq!(index.depth(0), Some(0));
        assert_eq!(index.depth(3), Some(2));
        assert!(index.has_children(2));
        assert!(!index.has_children(3));
        assert!(!index.has_children(99));
    }

    #[test]
    fn test_parent_of() {
        let root = sample_scene();
        let index = TreeIndex::build(&root);

        assert_eq!(index.parent_of(0), None);
        assert_eq!(index.parent_of(1), Some(0));
        assert_eq!(index.parent_of(3), Some(2));
        assert_eq!(index.parent_of(42), None);
    }

    #[test]
    fn test_single_node_scene() {
        let root = SceneNode::new(NodeKind::Group, "root");
        let index = TreeIndex::build(&root);

        assert_eq!(index.len(), 1);
        assert_eq!(index.path(0).unwrap(), &[] as &[usize]);
    }
}
