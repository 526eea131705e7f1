// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree wrapper: path resolution and snapshotting edits.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::path::NodePath;
use crate::types::{EditError, Node, PathError};

/// A mind map: a wrapper holding exactly one root [`Node`].
///
/// The root is never deleted; "New Map" and "Import" replace it wholesale.
/// Cloning a `Tree` is cheap (it clones one reference), and every editing
/// operation returns a new `Tree` that shares all unedited subtrees with its
/// predecessor — only the nodes along the root-to-target spine are copied.
/// See the [crate docs](crate) for the snapshot semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    root: Arc<Node>,
}

impl Tree {
    /// Create a map consisting of a single root node with the given label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_root(Node::new(text))
    }

    /// Wrap an existing node (and its subtree) as the root of a map.
    #[must_use]
    pub fn with_root(root: Node) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of nodes in the map.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Resolve a path to the node it addresses.
    ///
    /// The empty path always resolves to the root. Resolution never mutates
    /// the tree and is safe to call speculatively to validate a path before
    /// acting on it.
    pub fn resolve(&self, path: &NodePath) -> Result<&Node, PathError> {
        let mut node: &Node = &self.root;
        for (depth, &index) in path.iter().enumerate() {
            let len = node.child_count();
            node = node
                .child_at(index)
                .ok_or(PathError::OutOfRange { depth, index, len })?;
        }
        Ok(node)
    }

    /// Resolve the parent of the node addressed by `path`.
    ///
    /// Returns `None` for the root path (the root has no parent). On success
    /// the final index of `path` is returned alongside the parent; it is
    /// *not* checked against the parent's arity — use [`Tree::resolve`] when
    /// the child itself must exist.
    pub fn resolve_parent(&self, path: &NodePath) -> Option<(&Node, usize)> {
        let (parent_path, index) = path.split_last()?;
        let parent = self.resolve(&parent_path).ok()?;
        Some((parent, index))
    }

    /// Append a new leaf with the given text as the last child of the node
    /// at `parent`.
    pub fn add_child(&self, parent: &NodePath, text: impl Into<String>) -> Result<Self, PathError> {
        let node = Node::new(text);
        self.edited(parent, move |target| {
            target.children.push(Arc::new(node));
        })
    }

    /// Append already-built subtrees as the last children of the node at
    /// `parent`, preserving their order.
    ///
    /// This is the splice primitive behind clipboard paste and outline
    /// import; an empty `nodes` sequence yields an unchanged snapshot.
    pub fn append_subtrees(
        &self,
        parent: &NodePath,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<Self, PathError> {
        let mut arcs: Vec<Arc<Node>> = nodes.into_iter().map(Arc::new).collect();
        self.edited(parent, move |target| {
            target.children.append(&mut arcs);
        })
    }

    /// Remove the node at `path` together with its entire subtree.
    ///
    /// The root path is refused ([`EditError::DeleteRoot`]). Remaining
    /// siblings keep their relative order. Any auxiliary selection state
    /// pointing into the removed subtree is the caller's to repair; this
    /// engine does not own selection.
    pub fn delete(&self, path: &NodePath) -> Result<Self, EditError> {
        let Some((parent_path, index)) = path.split_last() else {
            return Err(EditError::DeleteRoot);
        };
        let depth = parent_path.depth();
        let tree = self.try_edited(&parent_path, |parent| {
            let len = parent.children.len();
            if index >= len {
                return Err(PathError::OutOfRange { depth, index, len });
            }
            parent.children.remove(index);
            Ok(())
        })?;
        Ok(tree)
    }

    /// Replace the text of the node at `path`.
    pub fn update_text(&self, path: &NodePath, text: impl Into<String>) -> Result<Self, PathError> {
        let text = text.into();
        self.edited(path, move |target| {
            target.text = text;
        })
    }

    /// Record which child of the node at `parent` is in focus for
    /// breadcrumb navigation, or clear the record with `None`.
    ///
    /// This is presentation state only; it never changes structure. An index
    /// beyond the node's arity is refused rather than stored.
    pub fn set_selected_child(
        &self,
        parent: &NodePath,
        index: Option<usize>,
    ) -> Result<Self, PathError> {
        let depth = parent.depth();
        self.try_edited(parent, |target| {
            if let Some(index) = index {
                let len = target.children.len();
                if index >= len {
                    return Err(PathError::OutOfRange { depth, index, len });
                }
            }
            target.selected_child = index;
            Ok(())
        })
    }

    /// Swap the node at `path` with its previous sibling.
    ///
    /// Returns the new snapshot together with the node's path within it.
    /// Already-first children and the root are boundary no-ops: the original
    /// tree and the input path come back unchanged, so callers can detect
    /// "nothing happened" by path equality and skip any selection update.
    pub fn move_up(&self, path: &NodePath) -> Result<(Self, NodePath), PathError> {
        self.swap_with_sibling(path, SwapDirection::Up)
    }

    /// Swap the node at `path` with its next sibling.
    ///
    /// The counterpart of [`Tree::move_up`]; already-last children and the
    /// root are boundary no-ops.
    pub fn move_down(&self, path: &NodePath) -> Result<(Self, NodePath), PathError> {
        self.swap_with_sibling(path, SwapDirection::Down)
    }

    fn swap_with_sibling(
        &self,
        path: &NodePath,
        direction: SwapDirection,
    ) -> Result<(Self, NodePath), PathError> {
        let Some((parent_path, index)) = path.split_last() else {
            // The root has no siblings.
            return Ok((self.clone(), path.clone()));
        };
        let parent = self.resolve(&parent_path)?;
        let len = parent.child_count();
        if index >= len {
            return Err(PathError::OutOfRange {
                depth: parent_path.depth(),
                index,
                len,
            });
        }
        let target = match direction {
            SwapDirection::Up if index > 0 => index - 1,
            SwapDirection::Down if index + 1 < len => index + 1,
            _ => return Ok((self.clone(), path.clone())),
        };
        let tree = self.edited(&parent_path, |parent| {
            parent.children.swap(index, target);
        })?;
        Ok((tree, parent_path.child(target)))
    }

    /// Derive a snapshot with the node at `path` rewritten by `edit`.
    ///
    /// Copies exactly the nodes along the root-to-target spine; everything
    /// else is shared with `self`.
    fn edited(&self, path: &NodePath, edit: impl FnOnce(&mut Node)) -> Result<Self, PathError> {
        self.try_edited(path, |node| {
            edit(node);
            Ok(())
        })
    }

    fn try_edited<E>(
        &self,
        path: &NodePath,
        edit: impl FnOnce(&mut Node) -> Result<(), E>,
    ) -> Result<Self, E>
    where
        E: From<PathError>,
    {
        let mut root = Arc::clone(&self.root);
        let mut node = Arc::make_mut(&mut root);
        for (depth, &index) in path.iter().enumerate() {
            let len = node.children.len();
            let slot = node
                .children
                .get_mut(index)
                .ok_or(PathError::OutOfRange { depth, index, len })?;
            node = Arc::make_mut(slot);
        }
        edit(node)?;
        Ok(Self { root })
    }
}

#[derive(Copy, Clone)]
enum SwapDirection {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Tree {
        // Root
        // ├── Child 1
        // │   └── Grandchild 1
        // └── Child 2
        Tree::with_root(
            Node::new("Root")
                .child(Node::new("Child 1").child(Node::new("Grandchild 1")))
                .child(Node::new("Child 2")),
        )
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let tree = sample();
        assert_eq!(tree.resolve(&NodePath::root()).unwrap().text, "Root");
    }

    #[test]
    fn resolve_walks_child_indices() {
        let tree = sample();
        let node = tree.resolve(&NodePath::from_indices([0, 0])).unwrap();
        assert_eq!(node.text, "Grandchild 1");
    }

    #[test]
    fn resolve_reports_the_failing_depth() {
        let tree = sample();
        let err = tree.resolve(&NodePath::from_indices([1, 0])).unwrap_err();
        // "Child 2" is a leaf, so descending at depth 1 fails.
        assert_eq!(
            err,
            PathError::OutOfRange {
                depth: 1,
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn resolve_parent_of_root_is_none() {
        let tree = sample();
        assert!(tree.resolve_parent(&NodePath::root()).is_none());
        let (parent, index) = tree.resolve_parent(&NodePath::from_indices([0, 0])).unwrap();
        assert_eq!(parent.text, "Child 1");
        assert_eq!(index, 0);
    }

    #[test]
    fn add_child_appends_as_last_sibling() {
        let tree = sample();
        let tree = tree.add_child(&NodePath::root(), "X").unwrap();
        let last = NodePath::from_indices([tree.root().child_count() - 1]);
        let node = tree.resolve(&last).unwrap();
        assert_eq!(node.text, "X");
        assert!(!node.has_children());
    }

    #[test]
    fn add_child_to_unresolvable_parent_fails_without_mutation() {
        let tree = sample();
        let before = tree.clone();
        let err = tree
            .add_child(&NodePath::from_indices([5]), "X")
            .unwrap_err();
        assert!(matches!(err, PathError::OutOfRange { index: 5, .. }));
        assert_eq!(tree, before);
    }

    #[test]
    fn delete_preserves_sibling_order() {
        let tree = Tree::with_root(
            Node::new("Root")
                .child(Node::new("a"))
                .child(Node::new("b"))
                .child(Node::new("c")),
        );
        let tree = tree.delete(&NodePath::from_indices([0])).unwrap();
        assert_eq!(tree.root().child_count(), 2);
        assert_eq!(tree.resolve(&NodePath::from_indices([0])).unwrap().text, "b");
        assert_eq!(tree.resolve(&NodePath::from_indices([1])).unwrap().text, "c");
    }

    #[test]
    fn delete_discards_the_whole_subtree() {
        let tree = sample();
        let tree = tree.delete(&NodePath::from_indices([0])).unwrap();
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn root_is_undeletable() {
        let tree = sample();
        let err = tree.delete(&NodePath::root()).unwrap_err();
        assert_eq!(err, EditError::DeleteRoot);
        assert_eq!(tree, sample());
    }

    #[test]
    fn delete_out_of_range_trailing_index_is_a_reported_no_op() {
        let tree = sample();
        let err = tree.delete(&NodePath::from_indices([5])).unwrap_err();
        assert_eq!(
            err,
            EditError::Path(PathError::OutOfRange {
                depth: 0,
                index: 5,
                len: 2
            })
        );
        assert_eq!(tree, sample());
    }

    #[test]
    fn update_text_replaces_only_the_target_label() {
        let tree = sample();
        let tree = tree
            .update_text(&NodePath::from_indices([0]), "Renamed")
            .unwrap();
        assert_eq!(tree.resolve(&NodePath::from_indices([0])).unwrap().text, "Renamed");
        assert_eq!(
            tree.resolve(&NodePath::from_indices([0, 0])).unwrap().text,
            "Grandchild 1"
        );
    }

    #[test]
    fn move_down_then_up_round_trips() {
        let tree = sample();
        let (tree, path) = tree.move_down(&NodePath::from_indices([0])).unwrap();
        assert_eq!(path, NodePath::from_indices([1]));
        assert_eq!(tree.resolve(&NodePath::from_indices([0])).unwrap().text, "Child 2");

        let (tree, path) = tree.move_up(&path).unwrap();
        assert_eq!(path, NodePath::from_indices([0]));
        assert_eq!(tree, sample());
    }

    #[test]
    fn move_boundaries_are_no_ops() {
        let tree = sample();
        let first = NodePath::from_indices([0]);
        let (unchanged, path) = tree.move_up(&first).unwrap();
        assert_eq!(path, first);
        assert_eq!(unchanged, tree);

        let last = NodePath::from_indices([1]);
        let (unchanged, path) = tree.move_down(&last).unwrap();
        assert_eq!(path, last);
        assert_eq!(unchanged, tree);

        let (unchanged, path) = tree.move_up(&NodePath::root()).unwrap();
        assert_eq!(path, NodePath::root());
        assert_eq!(unchanged, tree);
    }

    #[test]
    fn set_selected_child_validates_the_index() {
        let tree = sample();
        let tree = tree
            .set_selected_child(&NodePath::root(), Some(1))
            .unwrap();
        assert_eq!(tree.root().selected_child, Some(1));

        let err = tree
            .set_selected_child(&NodePath::root(), Some(7))
            .unwrap_err();
        assert!(matches!(err, PathError::OutOfRange { index: 7, len: 2, .. }));

        let tree = tree.set_selected_child(&NodePath::root(), None).unwrap();
        assert_eq!(tree.root().selected_child, None);
    }

    #[test]
    fn append_subtrees_splices_in_order() {
        let tree = sample();
        let tree = tree
            .append_subtrees(
                &NodePath::from_indices([1]),
                vec![Node::new("x").child(Node::new("y")), Node::new("z")],
            )
            .unwrap();
        let parent = tree.resolve(&NodePath::from_indices([1])).unwrap();
        assert_eq!(parent.child_count(), 2);
        assert_eq!(parent.child_at(0).unwrap().text, "x");
        assert_eq!(parent.child_at(1).unwrap().text, "z");
        assert_eq!(parent.child_at(0).unwrap().child_at(0).unwrap().text, "y");
    }

    #[test]
    fn snapshots_share_untouched_subtrees() {
        let tree = sample();
        let edited = tree.update_text(&NodePath::from_indices([1]), "New").unwrap();

        // The unedited "Child 1" subtree is the same allocation in both
        // snapshots; the edited spine is not.
        assert!(Arc::ptr_eq(
            &tree.root().children[0],
            &edited.root().children[0]
        ));
        assert!(!Arc::ptr_eq(
            &tree.root().children[1],
            &edited.root().children[1]
        ));

        // The original snapshot is untouched.
        assert_eq!(tree, sample());
    }
}
