// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendry Codec: paired encode/decode grammars for mind-map trees.
//!
//! Each codec is a pure, invertible (on well-formed input) pair of functions
//! between a [`dendry_tree::Tree`] and a string:
//!
//! - [`outline`]: the tab-indented text grammar — one node per line, depth
//!   counted in leading tab characters, root at depth 0. Also decodes
//!   *forests* (multiple depth-0 lines) for clipboard fragments.
//! - [`json`]: the persisted JSON document `{ "root": { "text", "children",
//!   "selectedChildIndex"? } }` — pretty for file export, compact for
//!   clipboard transfer. Strict: malformed input never yields a partial tree.
//! - [`adapters::canvas`] (feature `canvas_adapter`): the legacy two-space
//!   bullet-list grammar used by the standalone canvas editor, including its
//!   ` [expanded]`/` [collapsed]` markers and multi-line node text.
//!
//! Decoders return a typed [`DecodeError`] instead of a partially built
//! tree, so callers can distinguish "nothing to load" from "loaded an empty
//! map".
//!
//! ## Example
//!
//! ```rust
//! use dendry_codec::outline;
//! use dendry_tree::{Node, Tree};
//!
//! let tree = Tree::with_root(
//!     Node::new("Root")
//!         .child(Node::new("Child 1").child(Node::new("Grandchild 1")))
//!         .child(Node::new("Child 2")),
//! );
//!
//! let text = outline::encode(&tree);
//! assert_eq!(text, "Root\n\tChild 1\n\t\tGrandchild 1\n\tChild 2");
//! assert_eq!(outline::decode(&text).unwrap(), tree);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use thiserror::Error;

#[cfg(feature = "canvas_adapter")]
pub mod adapters;
pub mod json;
pub mod outline;

/// Failure to decode serialized input into a tree.
///
/// Decode failures are total: the input is rejected as a whole and no
/// partially built tree is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input contained no content (empty, or blank lines only).
    #[error("input contains no content")]
    Empty,
    /// The first non-blank line of an outline was indented; the root must
    /// sit at depth 0.
    #[error("first line must start at depth 0 (no leading indent)")]
    IndentedFirstLine,
    /// The outline describes several top-level nodes where a single root
    /// was expected. Fragment-aware callers use
    /// [`outline::decode_forest`] instead.
    #[error("input describes multiple top-level nodes where a single root was expected")]
    MultipleRoots,
    /// The JSON document was malformed or missing required fields.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
