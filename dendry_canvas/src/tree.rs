// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas arena: slot storage, structure edits, and the layout pass.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{CanvasId, LayoutMetrics, NodeFlags};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    parent: Option<CanvasId>,
    children: Vec<CanvasId>,
    text: String,
    flags: NodeFlags,
    /// Derived drawing rectangle; valid only after [`CanvasTree::layout`].
    layout: Rect,
}

impl Slot {
    fn new(generation: u32, parent: Option<CanvasId>, text: String) -> Self {
        Self {
            generation,
            parent,
            children: Vec::new(),
            text,
            flags: NodeFlags::default(),
            layout: Rect::ZERO,
        }
    }
}

/// The canvas editor's node store.
///
/// Always holds exactly one root node, created with the tree and never
/// removable. See the [crate docs](crate) for the id and layout model.
#[derive(Clone, Debug)]
pub struct CanvasTree {
    /// slots
    nodes: Vec<Option<Slot>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: CanvasId,
    layout_dirty: bool,
}

impl CanvasTree {
    /// Create a tree holding a single root node with the given text.
    #[must_use]
    pub fn new(root_text: impl Into<String>) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: CanvasId::new(0, 0),
            layout_dirty: true,
        };
        tree.root = tree.alloc(None, root_text.into());
        tree
    }

    /// The root node's id. Always live.
    #[must_use]
    pub fn root(&self) -> CanvasId {
        self.root
    }

    /// Whether `id` refers to a node that is currently in the tree.
    #[must_use]
    pub fn is_alive(&self, id: CanvasId) -> bool {
        self.nodes
            .get(id.idx())
            .is_some_and(|slot| slot.as_ref().is_some_and(|s| s.generation == id.1))
    }

    fn slot(&self, id: CanvasId) -> Option<&Slot> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|s| s.generation == id.1)
    }

    fn slot_mut(&mut self, id: CanvasId) -> Option<&mut Slot> {
        self.nodes
            .get_mut(id.idx())?
            .as_mut()
            .filter(|s| s.generation == id.1)
    }

    fn alloc(&mut self, parent: Option<CanvasId>, text: String) -> CanvasId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Slot::new(generation, parent, text));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CanvasId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Slot::new(generation, parent, text)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CanvasId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        CanvasId::new(idx, generation)
    }

    /// Insert a new node as the last child of `parent`.
    ///
    /// Returns `None` when `parent` is stale; the arena is unchanged in that
    /// case.
    pub fn insert(&mut self, parent: CanvasId, text: impl Into<String>) -> Option<CanvasId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.alloc(Some(parent), text.into());
        if let Some(p) = self.slot_mut(parent) {
            p.children.push(id);
        }
        self.layout_dirty = true;
        Some(id)
    }

    /// Remove a node and its whole subtree.
    ///
    /// The root is refused, and stale ids are tolerated; both return
    /// `false`. Freed slots are reused with a bumped generation, so removed
    /// ids can never alias a later node.
    pub fn remove(&mut self, id: CanvasId) -> bool {
        if id == self.root || !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.slot(id).and_then(|s| s.parent)
            && let Some(p) = self.slot_mut(parent)
        {
            p.children.retain(|&c| c != id);
        }
        self.remove_subtree(id);
        self.layout_dirty = true;
        true
    }

    fn remove_subtree(&mut self, id: CanvasId) {
        let children = match self.slot(id) {
            Some(slot) => slot.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Replace a node's text. No-op on stale ids.
    pub fn set_text(&mut self, id: CanvasId, text: impl Into<String>) {
        if let Some(slot) = self.slot_mut(id) {
            slot.text = text.into();
            self.layout_dirty = true;
        }
    }

    /// A node's text, or `None` for stale ids.
    #[must_use]
    pub fn text(&self, id: CanvasId) -> Option<&str> {
        self.slot(id).map(|s| s.text.as_str())
    }

    /// Whether a node shows its children.
    #[must_use]
    pub fn is_expanded(&self, id: CanvasId) -> bool {
        self.slot(id)
            .is_some_and(|s| s.flags.contains(NodeFlags::EXPANDED))
    }

    /// Expand or collapse a node. No-op on stale ids.
    pub fn set_expanded(&mut self, id: CanvasId, expanded: bool) {
        if let Some(slot) = self.slot_mut(id) {
            slot.flags.set(NodeFlags::EXPANDED, expanded);
            self.layout_dirty = true;
        }
    }

    /// Toggle a node between expanded and collapsed.
    pub fn toggle_expanded(&mut self, id: CanvasId) {
        let expanded = self.is_expanded(id);
        self.set_expanded(id, !expanded);
    }

    /// The parent of a live node; `None` for the root and for stale ids.
    #[must_use]
    pub fn parent_of(&self, id: CanvasId) -> Option<CanvasId> {
        self.slot(id)?.parent
    }

    /// The children of a node in order. Empty for leaves and stale ids.
    #[must_use]
    pub fn children_of(&self, id: CanvasId) -> &[CanvasId] {
        self.slot(id).map_or(&[], |s| s.children.as_slice())
    }

    /// Tree depth of a node (root = 0), computed by walking parent ids.
    #[must_use]
    pub fn depth(&self, id: CanvasId) -> Option<usize> {
        if !self.is_alive(id) {
            return None;
        }
        let mut depth = 0;
        let mut cursor = id;
        while let Some(parent) = self.parent_of(cursor) {
            depth += 1;
            cursor = parent;
        }
        Some(depth)
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.count_subtree(self.root)
    }

    fn count_subtree(&self, id: CanvasId) -> usize {
        1 + self
            .children_of(id)
            .iter()
            .map(|&c| self.count_subtree(c))
            .sum::<usize>()
    }

    /// Number of nodes not hidden by a collapsed ancestor.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_in_subtree(self.root)
    }

    fn visible_in_subtree(&self, id: CanvasId) -> usize {
        let mut count = 1;
        if self.is_expanded(id) {
            for &child in self.children_of(id) {
                count += self.visible_in_subtree(child);
            }
        }
        count
    }

    /// Whether node/structure changes since the last [`CanvasTree::layout`]
    /// have invalidated the cached rectangles.
    #[must_use]
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// The drawing rectangle computed by the last layout pass.
    ///
    /// `Rect::ZERO` for nodes hidden under a collapsed ancestor. Stale ids
    /// yield `None`.
    #[must_use]
    pub fn layout_of(&self, id: CanvasId) -> Option<Rect> {
        self.slot(id).map(|s| s.layout)
    }

    /// Whether the node was placed (not hidden) by the last layout pass.
    #[must_use]
    pub fn is_placed(&self, id: CanvasId) -> bool {
        self.slot(id)
            .is_some_and(|s| s.flags.contains(NodeFlags::VISIBLE))
    }

    /// Recompute the drawing rectangle of every visible node.
    ///
    /// Children are placed in a column to the right of their parent, sibling
    /// subtrees stacked top to bottom, and each parent vertically centered
    /// on its subtree. Nodes under a collapsed ancestor are unplaced: their
    /// rects reset to zero and [`CanvasTree::is_placed`] turns false until a
    /// later pass reaches them again.
    pub fn layout(&mut self, metrics: &LayoutMetrics) {
        self.place(self.root, 0.0, 0.0, metrics);
        self.layout_dirty = false;
    }

    fn measure(&self, id: CanvasId, metrics: &LayoutMetrics) -> (f64, f64) {
        let Some(slot) = self.slot(id) else {
            return (0.0, 0.0);
        };
        let mut lines = 0_usize;
        let mut widest = 0_usize;
        for line in slot.text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        // One character of padding on each side of the widest line.
        let width = metrics.char_width * (widest + 2) as f64;
        let height = metrics.line_height * lines.max(1) as f64;
        (width, height)
    }

    fn subtree_extent(&self, id: CanvasId, metrics: &LayoutMetrics) -> f64 {
        let (_, own) = self.measure(id, metrics);
        let children = self.children_of(id);
        if !self.is_expanded(id) || children.is_empty() {
            return own;
        }
        let mut total = 0.0;
        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                total += metrics.v_gap;
            }
            total += self.subtree_extent(child, metrics);
        }
        own.max(total)
    }

    fn place(&mut self, id: CanvasId, x: f64, y: f64, metrics: &LayoutMetrics) {
        let extent = self.subtree_extent(id, metrics);
        let (width, height) = self.measure(id, metrics);
        let top = y + (extent - height) / 2.0;
        let expanded = self.is_expanded(id);
        if let Some(slot) = self.slot_mut(id) {
            slot.layout = Rect::new(x, top, x + width, top + height);
            slot.flags.insert(NodeFlags::VISIBLE);
        }
        let children = self.children_of(id).to_vec();
        if expanded {
            let mut cursor = y;
            for child in children {
                let child_extent = self.subtree_extent(child, metrics);
                self.place(child, x + width + metrics.h_gap, cursor, metrics);
                cursor += child_extent + metrics.v_gap;
            }
        } else {
            for child in children {
                self.unplace(child);
            }
        }
    }

    fn unplace(&mut self, id: CanvasId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.layout = Rect::ZERO;
            slot.flags.remove(NodeFlags::VISIBLE);
        }
        for child in self.children_of(id).to_vec() {
            self.unplace(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (CanvasTree, CanvasId, CanvasId, CanvasId) {
        let mut tree = CanvasTree::new("Root");
        let a = tree.insert(tree.root(), "A").unwrap();
        let a1 = tree.insert(a, "A1").unwrap();
        let b = tree.insert(tree.root(), "B").unwrap();
        (tree, a, a1, b)
    }

    #[test]
    fn insert_links_parent_and_children() {
        let (tree, a, a1, b) = sample();
        assert_eq!(tree.children_of(tree.root()), &[a, b]);
        assert_eq!(tree.parent_of(a1), Some(a));
        assert_eq!(tree.parent_of(tree.root()), None);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn depth_walks_parent_ids() {
        let (tree, a, a1, _) = sample();
        assert_eq!(tree.depth(tree.root()), Some(0));
        assert_eq!(tree.depth(a), Some(1));
        assert_eq!(tree.depth(a1), Some(2));
    }

    #[test]
    fn remove_discards_the_subtree_and_stales_ids() {
        let (mut tree, a, a1, b) = sample();
        assert!(tree.remove(a));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(a1));
        assert_eq!(tree.children_of(tree.root()), &[b]);
        assert_eq!(tree.node_count(), 2);
        // Further operations on the stale id are tolerated no-ops.
        assert!(!tree.remove(a));
        assert_eq!(tree.text(a), None);
        assert_eq!(tree.depth(a1), None);
    }

    #[test]
    fn root_is_not_removable() {
        let (mut tree, ..) = sample();
        assert!(!tree.remove(tree.root()));
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn slot_reuse_bumps_the_generation() {
        let (mut tree, a, a1, _) = sample();
        tree.remove(a);
        let c = tree.insert(tree.root(), "C").unwrap();
        // The new node reuses a freed slot but old ids stay stale.
        assert!(tree.is_alive(c));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(a1));
        assert_eq!(tree.text(c), Some("C"));
    }

    #[test]
    fn collapse_hides_descendants_from_visible_count() {
        let (mut tree, a, _, _) = sample();
        assert_eq!(tree.visible_count(), 4);
        tree.set_expanded(a, false);
        assert_eq!(tree.visible_count(), 3);
        tree.toggle_expanded(a);
        assert_eq!(tree.visible_count(), 4);
    }

    #[test]
    fn layout_places_children_to_the_right() {
        let (mut tree, a, a1, _) = sample();
        let metrics = LayoutMetrics::default();
        tree.layout(&metrics);
        assert!(!tree.is_layout_dirty());

        let root_rect = tree.layout_of(tree.root()).unwrap();
        let a_rect = tree.layout_of(a).unwrap();
        let a1_rect = tree.layout_of(a1).unwrap();
        assert!(a_rect.x0 >= root_rect.x1 + metrics.h_gap);
        assert!(a1_rect.x0 >= a_rect.x1 + metrics.h_gap);
    }

    #[test]
    fn siblings_stack_without_overlap() {
        let (mut tree, a, _, b) = sample();
        tree.layout(&LayoutMetrics::default());
        let a_rect = tree.layout_of(a).unwrap();
        let b_rect = tree.layout_of(b).unwrap();
        assert!(a_rect.y1 <= b_rect.y0, "sibling boxes must not overlap");
    }

    #[test]
    fn geometry_changes_mark_layout_dirty() {
        let (mut tree, a, a1, _) = sample();
        tree.layout(&LayoutMetrics::default());
        assert!(!tree.is_layout_dirty());

        tree.set_text(a, "Renamed");
        assert!(tree.is_layout_dirty());
        tree.layout(&LayoutMetrics::default());

        tree.set_expanded(a, false);
        assert!(tree.is_layout_dirty());
        tree.layout(&LayoutMetrics::default());
        assert!(!tree.is_placed(a1));
        assert_eq!(tree.layout_of(a1), Some(Rect::ZERO));

        tree.set_expanded(a, true);
        tree.layout(&LayoutMetrics::default());
        assert!(tree.is_placed(a1));
    }

    #[test]
    fn multi_line_text_heightens_the_box() {
        let mut tree = CanvasTree::new("one\ntwo\nthree");
        let metrics = LayoutMetrics::default();
        tree.layout(&metrics);
        let rect = tree.layout_of(tree.root()).unwrap();
        assert_eq!(rect.height(), metrics.line_height * 3.0);
        assert_eq!(rect.width(), metrics.char_width * 7.0); // "three" + padding
    }
}
