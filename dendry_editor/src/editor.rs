// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor state struct and its operations.

use alloc::string::String;

use dendry_codec::{DecodeError, json, outline};
use dendry_tree::{EditError, NodePath, PathError, Tree};
use thiserror::Error;

use crate::{SaveFormat, ai, filename};

/// Failure of an editor operation.
///
/// Every failure leaves the live map exactly as it was; "no change occurred"
/// is the invariant behind all of these.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A path did not resolve in the current snapshot.
    #[error(transparent)]
    Path(#[from] PathError),
    /// A structural edit was refused (for example deleting the root).
    #[error(transparent)]
    Edit(#[from] EditError),
    /// Serialized input could not be decoded; the live map is untouched.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The map could not be serialized for export.
    #[error("could not serialize the map: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The single current map plus its session state.
///
/// See the [crate docs](crate) for the overall contract. All operations are
/// synchronous; hosts driving asynchronous sources (file reads, clipboard,
/// the AI provider) are responsible for not racing two completions into the
/// same editor.
#[derive(Clone, Debug)]
pub struct Editor {
    tree: Tree,
    selection: NodePath,
    file_name: Option<String>,
    modified: bool,
}

impl Editor {
    /// Start a fresh map with a single root node.
    #[must_use]
    pub fn new(root_text: impl Into<String>) -> Self {
        Self {
            tree: Tree::new(root_text),
            selection: NodePath::root(),
            file_name: None,
            modified: false,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The session's selected path.
    #[must_use]
    pub fn selection(&self) -> &NodePath {
        &self.selection
    }

    /// Whether the map has structural changes since the last new/import.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// The file name the map was loaded from or saved to, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Record the file name after a host-side save or load.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    /// Total node count, for status displays.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Move the selection to `path`, recording it on the parent's
    /// `selected_child` (the sync rule).
    ///
    /// Selection is session state, not a structural change: it does not mark
    /// the map modified.
    pub fn select(&mut self, path: &NodePath) -> Result<(), EditorError> {
        self.tree = dendry_focus::select(&self.tree, path)?;
        self.selection = path.clone();
        Ok(())
    }

    /// Append a new leaf under `parent` and return its path.
    pub fn add_child(
        &mut self,
        parent: &NodePath,
        text: impl Into<String>,
    ) -> Result<NodePath, EditorError> {
        let index = self.tree.resolve(parent)?.child_count();
        self.tree = self.tree.add_child(parent, text)?;
        self.modified = true;
        Ok(parent.child(index))
    }

    /// Replace the text of the node at `path`.
    pub fn update_text(
        &mut self,
        path: &NodePath,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.tree = self.tree.update_text(path, text)?;
        self.modified = true;
        Ok(())
    }

    /// Delete the node at `path` with its subtree, repairing selection
    /// state.
    ///
    /// When the deleted node was selected (or contained the selection), the
    /// selection retreats to the deleted node's parent. A `selected_child`
    /// record on the parent that now points past its last child is cleared.
    pub fn delete(&mut self, path: &NodePath) -> Result<(), EditorError> {
        self.tree = self.tree.delete(path)?;
        self.modified = true;

        if path == &self.selection || path.is_strict_ancestor_of(&self.selection) {
            self.selection = path.parent().unwrap_or_else(NodePath::root);
        }
        if let Some((parent_path, _)) = path.split_last()
            && let Ok(parent) = self.tree.resolve(&parent_path)
            && parent.selected_child.is_some_and(|i| i >= parent.child_count())
        {
            self.tree = self.tree.set_selected_child(&parent_path, None)?;
        }
        Ok(())
    }

    /// Swap the node at `path` with its previous sibling.
    ///
    /// Returns the node's (possibly unchanged) path; boundary no-ops leave
    /// the map, the modified flag, and the selection alone.
    pub fn move_up(&mut self, path: &NodePath) -> Result<NodePath, EditorError> {
        let moved = self.tree.move_up(path)?;
        self.finish_move(path, moved)
    }

    /// Swap the node at `path` with its next sibling.
    pub fn move_down(&mut self, path: &NodePath) -> Result<NodePath, EditorError> {
        let moved = self.tree.move_down(path)?;
        self.finish_move(path, moved)
    }

    fn finish_move(
        &mut self,
        path: &NodePath,
        (tree, new_path): (Tree, NodePath),
    ) -> Result<NodePath, EditorError> {
        if new_path == *path {
            return Ok(new_path);
        }
        self.tree = tree;
        self.modified = true;
        if self.selection == *path {
            self.tree = dendry_focus::select(&self.tree, &new_path)?;
            self.selection = new_path.clone();
        }
        Ok(new_path)
    }

    /// Discard the current map and start over with a fresh root.
    pub fn new_map(&mut self, root_text: impl Into<String>) {
        *self = Self::new(root_text);
    }

    /// Replace the map with a decoded document.
    ///
    /// A failed decode reports the error and leaves the live map, the
    /// selection, and the flags untouched.
    pub fn import(&mut self, input: &str, format: SaveFormat) -> Result<(), EditorError> {
        let tree = match format {
            SaveFormat::Json => json::decode(input)?,
            SaveFormat::Outline => outline::decode(input)?,
        };
        self.tree = tree;
        self.selection = NodePath::root();
        self.modified = false;
        Ok(())
    }

    /// Serialize the full map (root line included) in the given grammar.
    pub fn export(&self, format: SaveFormat) -> Result<String, EditorError> {
        match format {
            SaveFormat::Json => Ok(json::encode_pretty(&self.tree)?),
            SaveFormat::Outline => Ok(outline::encode(&self.tree)),
        }
    }

    /// Serialize the node at `path` (with its subtree) as an outline
    /// fragment for the clipboard.
    ///
    /// Copying the root copies the whole map.
    pub fn copy_at(&self, path: &NodePath) -> Result<String, EditorError> {
        Ok(outline::encode_node(self.tree.resolve(path)?))
    }

    /// Serialize the node at `path` as a compact JSON fragment.
    pub fn copy_json_at(&self, path: &NodePath) -> Result<String, EditorError> {
        Ok(json::encode_node_compact(self.tree.resolve(path)?)?)
    }

    /// Paste an outline fragment under the node at `path`.
    ///
    /// The fragment is decoded as a forest. At a non-root path, every
    /// top-level node is appended as a new child, in order. At the root
    /// path, the first top-level node's text **replaces** the root's own
    /// text and its children are appended instead: copy serializes the
    /// copied node itself as the fragment's top line, and pasting back at
    /// the root has to unwrap that line rather than nest it. Any remaining
    /// top-level nodes are appended alongside.
    ///
    /// Returns the number of subtrees appended. A fragment that fails to
    /// parse changes nothing and reports the decode error.
    pub fn paste_at(&mut self, path: &NodePath, fragment: &str) -> Result<usize, EditorError> {
        let mut forest = outline::decode_forest(fragment)?;
        let added = if path.is_root() {
            let mut first = forest.remove(0);
            let children = first.take_children();
            let added = children.len() + forest.len();
            let tree = self.tree.update_text(path, first.text)?;
            self.tree = tree.append_subtrees(path, children.into_iter().chain(forest))?;
            added
        } else {
            let added = forest.len();
            self.tree = self.tree.append_subtrees(path, forest)?;
            added
        };
        self.modified = true;
        Ok(added)
    }

    /// Splice an AI-generated outline reply under the node at `path`.
    ///
    /// The reply is parsed with [`ai::fragment_from_reply`]: its top line is
    /// treated as a throwaway wrapper and its children become new subtrees
    /// under `path`. Unlike [`Editor::paste_at`], an unparseable reply is
    /// not an error — it degrades to zero topics added. Returns how many
    /// subtrees were appended.
    pub fn splice_reply(&mut self, path: &NodePath, reply: &str) -> Result<usize, EditorError> {
        self.tree.resolve(path)?;
        let fragment = ai::fragment_from_reply(reply);
        if fragment.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "dendry::ai", "reply yielded no topics; map unchanged");
            return Ok(0);
        }
        let added = fragment.len();
        self.tree = self.tree.append_subtrees(path, fragment)?;
        self.modified = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "dendry::ai", added, at = %path, "spliced generated topics");
        Ok(added)
    }

    /// A download name derived from the root text (see [`filename`]),
    /// falling back to `mindmap.<ext>` when nothing usable remains.
    #[must_use]
    pub fn suggested_file_name(&self, format: SaveFormat) -> String {
        filename::suggested_file_name(&self.tree.root().text, format)
    }
}
