// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tab-indented outline grammar.
//!
//! One node per line: `depth × '\t'` followed by the node text, depth 0 for
//! the root, children in order, lines joined by `'\n'` with no trailing
//! terminator. Raw newlines and *leading* tabs inside node text are the
//! grammar's reserved characters; for any tree free of them (and carrying no
//! selection state, which this grammar does not persist),
//! `decode(encode(tree))` reconstructs the tree exactly.
//!
//! Decoding is lenient about depth jumps: a line indented more than one
//! level past its predecessor is attached to the deepest ancestor available
//! rather than rejected. The first line, however, must sit at depth 0, and
//! blank lines are discarded entirely.

use alloc::string::String;
use alloc::vec::Vec;

use dendry_tree::{Node, Tree};

use crate::DecodeError;

/// Encode a whole tree, root line included.
#[must_use]
pub fn encode(tree: &Tree) -> String {
    encode_node(tree.root())
}

/// Encode one node and its descendants as a fragment, with the node itself
/// at depth 0.
///
/// This is the clipboard form: copying the root therefore copies the whole
/// tree, and [`encode`] is exactly this function applied to the root.
#[must_use]
pub fn encode_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(&node.text);
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

/// Decode an outline into a single tree.
///
/// Fails with [`DecodeError::Empty`] when nothing but blank lines remains,
/// [`DecodeError::IndentedFirstLine`] when the first kept line is indented,
/// and [`DecodeError::MultipleRoots`] when the input is a forest (use
/// [`decode_forest`] for clipboard fragments, which may legitimately carry
/// several top-level nodes).
pub fn decode(input: &str) -> Result<Tree, DecodeError> {
    let mut forest = decode_forest(input)?;
    if forest.len() > 1 {
        return Err(DecodeError::MultipleRoots);
    }
    let root = forest.pop().ok_or(DecodeError::Empty)?;
    Ok(Tree::with_root(root))
}

/// Decode an outline into its top-level nodes.
///
/// Every depth-0 line starts a new top-level node; deeper lines attach to
/// the most recent ancestor one level up, kept on a stack of "current
/// ancestor at each depth". The stack is truncated to `depth` entries before
/// each attachment, which is what makes over-deep jumps lenient: the line
/// simply lands on whatever ancestor is still there.
pub fn decode_forest(input: &str) -> Result<Vec<Node>, DecodeError> {
    let mut roots: Vec<Node> = Vec::new();
    // stack[d] is the as-yet-unattached node currently open at depth d.
    let mut stack: Vec<Node> = Vec::new();
    let mut first = true;

    for line in input.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let depth = line.chars().take_while(|&c| c == '\t').count();
        if first && depth != 0 {
            return Err(DecodeError::IndentedFirstLine);
        }
        first = false;
        let depth = depth.min(stack.len());
        close_to_depth(&mut roots, &mut stack, depth);
        stack.push(Node::new(&line[depth..]));
    }

    close_to_depth(&mut roots, &mut stack, 0);
    if roots.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(roots)
}

/// Pop open nodes until only `depth` remain, attaching each to its parent
/// (or to the forest's top level).
fn close_to_depth(roots: &mut Vec<Node>, stack: &mut Vec<Node>, depth: usize) {
    while stack.len() > depth {
        let node = stack.pop().expect("stack is non-empty");
        match stack.last_mut() {
            Some(parent) => parent.push_child(node),
            None => roots.push(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dendry_tree::NodePath;

    fn sample() -> Tree {
        Tree::with_root(
            Node::new("Root")
                .child(Node::new("Child 1").child(Node::new("Grandchild 1")))
                .child(Node::new("Child 2")),
        )
    }

    #[test]
    fn encode_is_preorder_with_tab_depth() {
        assert_eq!(
            encode(&sample()),
            "Root\n\tChild 1\n\t\tGrandchild 1\n\tChild 2"
        );
    }

    #[test]
    fn single_node_encodes_to_one_line() {
        assert_eq!(encode(&Tree::new("Only")), "Only");
    }

    #[test]
    fn round_trip_reconstructs_structure() {
        let tree = sample();
        assert_eq!(decode(&encode(&tree)).unwrap(), tree);
    }

    #[test]
    fn empty_input_is_no_tree() {
        assert!(matches!(decode(""), Err(DecodeError::Empty)));
        assert!(matches!(decode("\n\n  \n"), Err(DecodeError::Empty)));
    }

    #[test]
    fn indented_first_line_is_no_tree() {
        assert!(matches!(decode("\tRoot"), Err(DecodeError::IndentedFirstLine)));
    }

    #[test]
    fn blank_lines_are_discarded() {
        let tree = decode("Root\n\n\tA\n   \n\tB").unwrap();
        assert_eq!(tree.root().child_count(), 2);
        assert_eq!(tree.root().child_at(1).unwrap().text, "B");
    }

    #[test]
    fn over_deep_jump_attaches_to_deepest_open_ancestor() {
        // "B" jumps from depth 1 straight to depth 3; it lands under "A".
        let tree = decode("Root\n\tA\n\t\t\tB").unwrap();
        let b = tree.resolve(&NodePath::from_indices([0, 0])).unwrap();
        assert_eq!(b.text, "B");
    }

    #[test]
    fn second_top_level_line_is_rejected_for_single_trees() {
        assert!(matches!(
            decode("Root\nAnother root"),
            Err(DecodeError::MultipleRoots)
        ));
    }

    #[test]
    fn forest_decoding_keeps_top_level_order() {
        let forest = decode_forest("A\n\ta1\nB\nC\n\tc1\n\t\tc2").unwrap();
        assert_eq!(forest.len(), 3);
        assert_eq!(forest[0].text, "A");
        assert_eq!(forest[0].child_at(0).unwrap().text, "a1");
        assert_eq!(forest[1].text, "B");
        assert_eq!(
            forest[2].child_at(0).unwrap().child_at(0).unwrap().text,
            "c2"
        );
    }

    #[test]
    fn interior_tabs_are_ordinary_text() {
        let tree = decode("Root\n\ta\tb").unwrap();
        assert_eq!(tree.root().child_at(0).unwrap().text, "a\tb");
    }

    #[test]
    fn fragment_encoding_puts_the_node_at_depth_zero() {
        let tree = sample();
        let child = tree.resolve(&NodePath::from_indices([0])).unwrap();
        assert_eq!(encode_node(child), "Child 1\n\tGrandchild 1");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Texts free of the grammar's reserved characters: no raw newlines
    /// anywhere, no leading tab. (Blank-line stripping also makes
    /// whitespace-only labels unrepresentable.)
    fn label() -> impl Strategy<Value = String> {
        "[ -~]{0,12}".prop_filter("label must survive the outline grammar", |s| {
            !s.trim().is_empty() && !s.starts_with('\t')
        })
    }

    fn arb_node(depth: u32) -> impl Strategy<Value = Node> {
        let leaf = label().prop_map(Node::new);
        leaf.prop_recursive(depth, 24, 4, |inner| {
            (label(), prop::collection::vec(inner, 0..4))
                .prop_map(|(text, children)| Node::new(text).with_children(children))
        })
    }

    proptest! {
        #[test]
        fn outline_round_trips(root in arb_node(3)) {
            let tree = Tree::with_root(root);
            let encoded = encode(&tree);
            let decoded = decode(&encoded).expect("encoded outline must decode");
            prop_assert_eq!(decoded, tree);
        }
    }
}
