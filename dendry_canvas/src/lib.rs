// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendry Canvas: the arena-backed node store behind the standalone canvas
//! editor.
//!
//! The canvas editor flavor needs per-node state the path-addressed core
//! model does not carry: a process-unique identity, an expanded/collapsed
//! flag, and 2-D layout geometry for drawing. This crate models that as a
//! slot arena with generational ids:
//!
//! - Nodes live in slots; a freed slot can be reused, and its generation is
//!   bumped so stale [`CanvasId`]s held by callers can never alias a new
//!   node. Operations on stale ids are tolerated no-ops (or `None`).
//! - Parent links are ids resolved through the arena on demand — never live
//!   references — so removing a subtree cannot leave anything dangling.
//!   Depth is computed by walking parent ids ([`CanvasTree::depth`]).
//! - Layout rectangles are a derived cache, not part of node identity. Any
//!   geometry-affecting change (text, expansion, structure) marks the tree
//!   dirty; an explicit [`CanvasTree::layout`] pass recomputes every visible
//!   node's [`kurbo::Rect`] from a caller-supplied [`LayoutMetrics`].
//!
//! ## Example
//!
//! ```rust
//! use dendry_canvas::{CanvasTree, LayoutMetrics};
//!
//! let mut tree = CanvasTree::new("Trip planning");
//! let packing = tree.insert(tree.root(), "Packing").unwrap();
//! tree.insert(packing, "Tent").unwrap();
//!
//! assert_eq!(tree.depth(packing), Some(1));
//! assert_eq!(tree.visible_count(), 3);
//!
//! tree.set_expanded(packing, false);
//! assert_eq!(tree.visible_count(), 2);
//!
//! tree.layout(&LayoutMetrics::default());
//! assert!(!tree.is_layout_dirty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::CanvasTree;
pub use types::{CanvasId, LayoutMetrics, NodeFlags};
