// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The legacy bullet-list grammar of the standalone canvas editor.
//!
//! Each node is a line of `depth × two spaces`, a `- ` bullet, and the node
//! text. Nodes **with children** carry a trailing ` [expanded]` or
//! ` [collapsed]` marker so the import/export cycle preserves the
//! expand/collapse UI state alongside structure. Node text may span several
//! physical lines: any line without a bullet (after indent stripping)
//! continues the previous node's text, joined with `'\n'`.
//!
//! Decoding mirrors the outline codec's stack-based reattachment by depth,
//! but deliberately more permissively: the first bullet line is accepted at
//! any indent as the root tier, and *later* lines at depth 0 are skipped
//! rather than treated as extra roots, which tolerates stray header lines in
//! hand-edited files.
//!
//! Reserved sequences inside node text: a physical line beginning with `- `
//! would re-parse as a bullet, and a bullet line ending in a literal
//! ` [expanded]`/` [collapsed]` would re-parse as a marker.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use dendry_canvas::{CanvasId, CanvasTree};

use crate::DecodeError;

const EXPANDED_MARKER: &str = " [expanded]";
const COLLAPSED_MARKER: &str = " [collapsed]";

/// Encode a canvas tree as a bullet list, root line included.
#[must_use]
pub fn encode(tree: &CanvasTree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), 0, &mut out);
    out
}

fn write_node(tree: &CanvasTree, id: CanvasId, depth: usize, out: &mut String) {
    let text = tree.text(id).unwrap_or("");
    let has_children = !tree.children_of(id).is_empty();

    let mut lines = text.split('\n');
    let head = lines.next().unwrap_or("");
    if !out.is_empty() {
        out.push('\n');
    }
    push_indent(out, depth);
    out.push_str("- ");
    out.push_str(head);
    if has_children {
        out.push_str(if tree.is_expanded(id) {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        });
    }
    for continuation in lines {
        out.push('\n');
        push_indent(out, depth);
        out.push_str(continuation);
    }

    for &child in tree.children_of(id) {
        write_node(tree, child, depth + 1, out);
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Decode a bullet list into a canvas tree.
///
/// Fails only when no bullet line is present at all
/// ([`DecodeError::Empty`]); everything else is accepted per the permissive
/// rules in the [module docs](self).
pub fn decode(input: &str) -> Result<CanvasTree, DecodeError> {
    let mut tree: Option<CanvasTree> = None;
    // stack[d] is the most recent node at depth d below the root tier.
    let mut stack: Vec<CanvasId> = Vec::new();

    for line in input.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let spaces = line.len() - line.trim_start_matches(' ').len();
        let rest = &line[spaces..];

        let Some(bullet) = rest.strip_prefix("- ") else {
            // Continuation of the most recent node's text. Strip at most the
            // indent that node was encoded with; deeper spaces are content.
            if let Some(current) = tree.as_mut()
                && let Some(&open) = stack.last()
            {
                let strip = spaces.min((stack.len() - 1) * 2);
                let joined = format!("{}\n{}", current.text(open).unwrap_or(""), &line[strip..]);
                current.set_text(open, joined);
            }
            continue;
        };

        let depth = spaces / 2;
        let (text, expanded) = strip_marker(bullet);

        let Some(current) = tree.as_mut() else {
            // First bullet line: accepted at any indent as the root tier.
            let mut built = CanvasTree::new(text);
            let root = built.root();
            built.set_expanded(root, expanded);
            stack.push(root);
            tree = Some(built);
            continue;
        };

        if depth == 0 {
            // Stray top-level lines after the root are skipped.
            continue;
        }
        let depth = depth.min(stack.len());
        stack.truncate(depth);
        let parent = *stack.last().expect("root stays on the stack");
        if let Some(id) = current.insert(parent, text) {
            current.set_expanded(id, expanded);
            stack.push(id);
        }
    }

    tree.ok_or(DecodeError::Empty)
}

fn strip_marker(text: &str) -> (&str, bool) {
    if let Some(stripped) = text.strip_suffix(EXPANDED_MARKER) {
        (stripped, true)
    } else if let Some(stripped) = text.strip_suffix(COLLAPSED_MARKER) {
        (stripped, false)
    } else {
        (text, true)
    }
}
