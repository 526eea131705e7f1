// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning free-text model output into an importable fragment.
//!
//! The text-generation provider is an external collaborator: all this layer
//! asks of it is a string. Replies are expected to look like a tab-indented
//! outline whose first line names the requested topic:
//!
//! ```text
//! Main topic
//! \tIdea 1
//! \t\tSupporting detail
//! \tIdea 2
//! ```
//!
//! [`fragment_from_reply`] strips blank lines, runs the outline decoder over
//! the rest, and keeps only the decoded root's children — the "main topic"
//! line merely restates the prompt and is discarded as a wrapper. Content
//! generation degrades rather than fails: a reply the decoder rejects yields
//! an **empty** fragment, in contrast to the strict error reporting of
//! clipboard paste.

use alloc::string::String;
use alloc::vec::Vec;

use dendry_codec::outline;
use dendry_tree::Node;

/// Parse a model reply into the subtrees to splice under the target node.
///
/// Never fails; see the [module docs](self) for the degradation rule.
#[must_use]
pub fn fragment_from_reply(reply: &str) -> Vec<Node> {
    let mut cleaned = String::new();
    for line in reply.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if !cleaned.is_empty() {
            cleaned.push('\n');
        }
        cleaned.push_str(line);
    }

    match outline::decode(&cleaned) {
        Ok(tree) => tree.root().children().cloned().collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_children_become_the_fragment() {
        let fragment = fragment_from_reply("Main topic\n\tIdea 1\n\t\tDetail\n\tIdea 2");
        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment[0].text, "Idea 1");
        assert_eq!(fragment[0].child_at(0).unwrap().text, "Detail");
        assert_eq!(fragment[1].text, "Idea 2");
    }

    #[test]
    fn blank_lines_are_stripped_before_decoding() {
        let fragment = fragment_from_reply("\n\nMain topic\n\n\tIdea 1\n   \n\tIdea 2\n\n");
        assert_eq!(fragment.len(), 2);
    }

    #[test]
    fn undecodable_replies_yield_an_empty_fragment() {
        assert!(fragment_from_reply("").is_empty());
        assert!(fragment_from_reply("\tno zero-depth first line").is_empty());
        assert!(fragment_from_reply("Topic A\nTopic B\n\tidea").is_empty());
    }

    #[test]
    fn a_bare_topic_line_has_nothing_to_import() {
        assert!(fragment_from_reply("Main topic only").is_empty());
    }
}
