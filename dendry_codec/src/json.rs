// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted JSON document grammar.
//!
//! A map serializes as `{ "root": Node }` where `Node` is
//! `{ "text": string, "children": [Node, ...], "selectedChildIndex"?: number }`.
//! Encoding is available pretty-printed (file export) or compact (clipboard
//! transfer). Decoding is strict structural parsing: malformed JSON or a
//! node missing its `text` or `children` field fails as a whole — there is
//! no lenient recovery and never a partial tree.

use alloc::string::String;

use dendry_tree::{Node, Tree};

use crate::DecodeError;

/// Encode a tree as an indented, human-readable JSON document.
pub fn encode_pretty(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

/// Encode a tree as compact single-line JSON.
pub fn encode_compact(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string(tree)
}

/// Encode a single node (with its subtree) as a compact JSON fragment.
///
/// Fragments serialize the node directly, without the `{ "root": ... }`
/// document wrapper.
pub fn encode_node_compact(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string(node)
}

/// Decode a JSON document into a tree.
///
/// Empty (or whitespace-only) input is reported as [`DecodeError::Empty`];
/// everything else that fails to parse into the document shape is
/// [`DecodeError::Json`].
pub fn decode(input: &str) -> Result<Tree, DecodeError> {
    if input.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(input)?)
}
