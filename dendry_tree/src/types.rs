// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node tree: the node entity and failure values.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use thiserror::Error;

/// A single labeled entity in the mind map.
///
/// A node owns its children; the tree is a single connected acyclic
/// ownership structure, so a node can never appear under two parents. Child
/// order is significant: it defines sibling traversal and rendering order.
///
/// Nodes are built either directly with the builder-style constructors or by
/// the editing operations on [`Tree`](crate::Tree):
///
/// ```rust
/// use dendry_tree::Node;
///
/// let node = Node::new("Packing")
///     .child(Node::new("Tent"))
///     .child(Node::new("Stove"));
/// assert!(node.has_children());
/// assert_eq!(node.count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Label text. Arbitrary content, including embedded newlines and tabs;
    /// the serialization codecs document which characters they reserve.
    pub text: String,
    /// Children in traversal order. Reference counted so that tree snapshots
    /// can share unedited subtrees.
    pub(crate) children: Vec<Arc<Node>>,
    /// Which child is "in focus" for column/breadcrumb navigation.
    ///
    /// Only meaningful on a node that has children. `None` means no child is
    /// selected: the visible spine ends here and breadcrumb navigation below
    /// this node is disabled. This field is presentation state, not part of
    /// the structural identity of the map.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "selectedChildIndex",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub selected_child: Option<usize>,
}

impl Node {
    /// Create a leaf node with the given label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
            selected_child: None,
        }
    }

    /// Append a child node (builder style).
    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(Arc::new(node));
        self
    }

    /// Replace the children with `nodes` (builder style).
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Self>) -> Self {
        self.children = nodes.into_iter().map(Arc::new).collect();
        self
    }

    /// Append a child node in place.
    ///
    /// Useful while assembling a subtree bottom-up (decoders do this); edits
    /// to nodes already inside a [`Tree`](crate::Tree) go through the tree's
    /// own operations instead.
    pub fn push_child(&mut self, node: Self) {
        self.children.push(Arc::new(node));
    }

    /// Whether this node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child at `index`, if present.
    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<&Self> {
        self.children.get(index).map(Arc::as_ref)
    }

    /// Iterate over the direct children in order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Self> {
        self.children.iter().map(Arc::as_ref)
    }

    /// Remove and return the children, leaving this node a leaf.
    ///
    /// Shared subtrees (held by other snapshots) are cloned out; uniquely
    /// owned ones are moved.
    pub fn take_children(&mut self) -> Vec<Self> {
        self.children.drain(..).map(Arc::unwrap_or_clone).collect()
    }

    /// Total number of nodes in this subtree, including this node.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children().map(Self::count).sum::<usize>()
    }
}

/// Failure to resolve a child-index path against a tree.
///
/// Resolution walks the path from the root; the first index that does not
/// select an existing child stops the walk and is reported here. Operations
/// receiving an unresolvable path perform no mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// An index selected a child that does not exist (this also covers
    /// descending into a node that has no children at all).
    #[error("child index {index} out of range at depth {depth} ({len} children present)")]
    OutOfRange {
        /// Tree depth at which the walk stopped (0 = children of the root).
        depth: usize,
        /// The index that failed to resolve.
        index: usize,
        /// How many children the node at that depth actually has.
        len: usize,
    },
}

/// Failure of a structural edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    /// The path did not resolve; nothing was changed.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The root node cannot be deleted (its text and children can be
    /// replaced instead).
    #[error("the root node cannot be deleted")]
    DeleteRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_constructs_ordered_children() {
        let node = Node::new("root")
            .child(Node::new("a"))
            .child(Node::new("b"));
        assert_eq!(node.child_at(0).unwrap().text, "a");
        assert_eq!(node.child_at(1).unwrap().text, "b");
        assert!(node.child_at(2).is_none());
    }

    #[test]
    fn count_includes_all_descendants() {
        let node = Node::new("root")
            .child(Node::new("a").child(Node::new("a1")))
            .child(Node::new("b"));
        assert_eq!(node.count(), 4);
        assert_eq!(Node::new("leaf").count(), 1);
    }

    #[test]
    fn leaf_has_no_children() {
        let leaf = Node::new("leaf");
        assert!(!leaf.has_children());
        assert_eq!(leaf.child_count(), 0);
        assert_eq!(leaf.children().len(), 0);
    }
}
