// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendry Focus: selection and breadcrumb-navigation state.
//!
//! Column-style rendering of a mind map shows a "visible spine": the chain
//! of nodes from the root down through each node's recorded
//! `selected_child`. This crate keeps that per-node record and the single
//! session-scoped "selected path" consistent, and classifies nodes relative
//! to the selection for presentation:
//!
//! - [`select`] updates a tree so the parent of the newly selected node
//!   records it as the child in focus (the selection/`selected_child` sync
//!   rule). The inverse is deliberately not automatic: changing a
//!   `selected_child` by hand does not move anyone's selected path, so hosts
//!   that track one must update both together.
//! - [`visible_spine`] computes the root-first chain of paths a column view
//!   renders. `selected_child = None` uniformly means "no child selected":
//!   the spine ends there.
//! - [`classify`] buckets a node into one of four mutually exclusive,
//!   priority-ordered presentation states ([`NodeRole`]).
//!
//! The selected path itself is plain session state — a
//! [`NodePath`] owned by the host (see `dendry_editor`) — and is never
//! persisted.
//!
//! ## Example
//!
//! ```rust
//! use dendry_focus::{NodeRole, classify, select, visible_spine};
//! use dendry_tree::{Node, NodePath, Tree};
//!
//! let tree = Tree::with_root(
//!     Node::new("Root")
//!         .child(Node::new("A").child(Node::new("A1")))
//!         .child(Node::new("B")),
//! );
//!
//! // Descend level by level; each select() records the child in focus on
//! // the node's immediate parent.
//! let tree = select(&tree, &NodePath::from_indices([0])).unwrap();
//! let selection = NodePath::from_indices([0, 0]);
//! let tree = select(&tree, &selection).unwrap();
//!
//! let spine = visible_spine(&tree);
//! assert_eq!(spine.last(), Some(&selection));
//!
//! // "A" sits between the root and the selection.
//! let a = NodePath::from_indices([0]);
//! assert_eq!(classify(&selection, &a, true), NodeRole::OnPath);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use dendry_tree::{NodePath, PathError, Tree};

/// How a node relates to the current selection, for presentation.
///
/// The four states are mutually exclusive and priority ordered: a node that
/// is exactly the selection is [`NodeRole::Selected`] even when it has
/// children, and an ancestor or descendant of the selection is
/// [`NodeRole::OnPath`] regardless of its arity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The node's path equals the selection exactly.
    Selected,
    /// The node is a strict ancestor or strict descendant of the selection.
    OnPath,
    /// Off the selection path, with children.
    HasChildren,
    /// Off the selection path, without children.
    Leaf,
}

/// Classify the node at `path` relative to `selection`.
///
/// `has_children` is the node's own arity, which only matters for the two
/// off-path states; callers typically feed it from
/// [`Node::has_children`](dendry_tree::Node::has_children).
#[must_use]
pub fn classify(selection: &NodePath, path: &NodePath, has_children: bool) -> NodeRole {
    if path == selection {
        NodeRole::Selected
    } else if path.is_strict_ancestor_of(selection) || path.is_strict_descendant_of(selection) {
        NodeRole::OnPath
    } else if has_children {
        NodeRole::HasChildren
    } else {
        NodeRole::Leaf
    }
}

/// Derive a snapshot in which the parent of the node at `path` records it as
/// the selected child.
///
/// Validates that `path` resolves first; an unresolvable path changes
/// nothing. Selecting the root is valid and touches no `selected_child`.
/// This implements only the forward half of the sync rule — the host moves
/// its own selected path alongside (see the [crate docs](crate)).
pub fn select(tree: &Tree, path: &NodePath) -> Result<Tree, PathError> {
    tree.resolve(path)?;
    match path.split_last() {
        Some((parent, index)) => tree.set_selected_child(&parent, Some(index)),
        None => Ok(tree.clone()),
    }
}

/// The root-first chain of paths a column view renders.
///
/// Starts at the root and follows each node's `selected_child`. The chain
/// stops at the first node with no recorded selection (`None` disables
/// breadcrumb navigation below it) and at any recorded index that no longer
/// resolves — deleting nodes can leave a stale record behind, which renders
/// as "nothing selected" rather than an error.
#[must_use]
pub fn visible_spine(tree: &Tree) -> Vec<NodePath> {
    let mut path = NodePath::root();
    let mut spine = vec![path.clone()];
    let mut node = tree.root();
    while let Some(index) = node.selected_child {
        let Some(child) = node.child_at(index) else {
            break;
        };
        path.push(index);
        spine.push(path.clone());
        node = child;
    }
    spine
}
