// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendry Tree: the mind-map node tree and its editing operations.
//!
//! This crate is the structural core shared by the rest of the Dendry
//! workspace. It models a mind map as a single rooted tree of labeled
//! [`Node`]s, addresses nodes with child-index paths ([`NodePath`]), and
//! provides the editing operations (add, delete, retitle, reorder, splice)
//! that the editor layers build on.
//!
//! - [`Node`]: a labeled entity owning an ordered list of child nodes, plus
//!   an optional "selected child" used for breadcrumb-style navigation.
//! - [`Tree`]: a wrapper around exactly one root node. The root is never
//!   deleted, though its text and children can be replaced wholesale.
//! - [`NodePath`]: an ordered sequence of child indices; the empty path is
//!   the root.
//!
//! ## Snapshot semantics
//!
//! Editing operations take `&self` and return a **new** [`Tree`]. Internally
//! children are reference counted, so deriving a snapshot clones only the
//! nodes along the root-to-target spine and shares every untouched subtree
//! with the previous snapshot. Holding on to an old `Tree` is therefore cheap
//! and always safe: no operation ever mutates structure reachable from a
//! previously returned snapshot.
//!
//! Operations that receive a path that does not resolve perform no work and
//! report a typed failure ([`PathError`]); there are no partial edits.
//!
//! ## Example
//!
//! ```rust
//! use dendry_tree::{NodePath, Tree};
//!
//! let tree = Tree::new("Trip planning");
//! let tree = tree.add_child(&NodePath::root(), "Packing").unwrap();
//! let tree = tree.add_child(&NodePath::from_indices([0]), "Tent").unwrap();
//!
//! let packing = tree.resolve(&NodePath::from_indices([0])).unwrap();
//! assert_eq!(packing.text, "Packing");
//! assert_eq!(packing.child_count(), 1);
//! assert_eq!(tree.node_count(), 3);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Node`] and [`Tree`] in the
//!   persisted JSON document shape (`{ "root": { "text", "children",
//!   "selectedChildIndex"? } }`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod path;
mod tree;
mod types;

pub use path::NodePath;
pub use tree::Tree;
pub use types::{EditError, Node, PathError};
