// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child-index paths addressing nodes relative to the root.

use core::fmt;

use smallvec::SmallVec;

/// An ordered sequence of child indices locating a node relative to the root.
///
/// The empty path denotes the root. Each index at position `i` selects the
/// child to descend into at tree depth `i`. A path is just an address: it
/// carries no reference into any tree, so it can outlive the snapshot it was
/// derived from (and may stop resolving after an edit).
///
/// Paths are short in practice, so indices are stored inline up to a small
/// fixed capacity.
///
/// ```rust
/// use dendry_tree::NodePath;
///
/// let path = NodePath::from_indices([0, 2]);
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.parent(), Some(NodePath::from_indices([0])));
/// assert!(NodePath::root().is_strict_ancestor_of(&path));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[usize; 8]>);

impl NodePath {
    /// The empty path, addressing the root.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Build a path from a sequence of child indices.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Whether this is the empty (root) path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of indices, which equals the addressed node's tree depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The indices as a slice.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Iterate over the indices from the root downwards.
    pub fn iter(&self) -> core::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Descend one level: a copy of this path extended by `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.0.push(index);
        path
    }

    /// Append an index in place.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    /// The last index, or `None` for the root path.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Split into parent path and final index; `None` for the root path.
    #[must_use]
    pub fn split_last(&self) -> Option<(Self, usize)> {
        let (&last, parent) = self.0.split_last()?;
        Some((Self(SmallVec::from_slice(parent)), last))
    }

    /// The parent path, or `None` for the root path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.split_last().map(|(parent, _)| parent)
    }

    /// A copy of this path with the final index replaced by `index`.
    ///
    /// Returns `None` for the root path, which has no siblings.
    #[must_use]
    pub fn sibling(&self, index: usize) -> Option<Self> {
        let (parent, _) = self.split_last()?;
        Some(parent.child(index))
    }

    /// Whether this path is a strict ancestor of `other` (a proper prefix).
    ///
    /// A path is not its own ancestor.
    #[must_use]
    pub fn is_strict_ancestor_of(&self, other: &Self) -> bool {
        self.depth() < other.depth() && other.0.starts_with(&self.0)
    }

    /// Whether this path is a strict descendant of `other`.
    #[must_use]
    pub fn is_strict_descendant_of(&self, other: &Self) -> bool {
        other.is_strict_ancestor_of(self)
    }
}

impl FromIterator<usize> for NodePath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NodePath {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn root_path_is_empty() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.parent(), None);
        assert_eq!(root.last(), None);
        assert_eq!(root.sibling(3), None);
    }

    #[test]
    fn split_last_peels_the_final_index() {
        let path = NodePath::from_indices([1, 4, 2]);
        let (parent, last) = path.split_last().unwrap();
        assert_eq!(parent, NodePath::from_indices([1, 4]));
        assert_eq!(last, 2);
    }

    #[test]
    fn sibling_replaces_the_final_index() {
        let path = NodePath::from_indices([0, 3]);
        assert_eq!(path.sibling(2), Some(NodePath::from_indices([0, 2])));
    }

    #[test]
    fn strict_ancestry_excludes_self_and_unrelated_paths() {
        let a = NodePath::from_indices([0]);
        let ab = NodePath::from_indices([0, 1]);
        let c = NodePath::from_indices([2]);

        assert!(a.is_strict_ancestor_of(&ab));
        assert!(ab.is_strict_descendant_of(&a));
        assert!(NodePath::root().is_strict_ancestor_of(&a));
        assert!(!a.is_strict_ancestor_of(&a));
        assert!(!a.is_strict_ancestor_of(&c));
        assert!(!c.is_strict_descendant_of(&a));
    }

    #[test]
    fn prefix_check_compares_whole_indices() {
        // [1] is not an ancestor of [12]: index values, not digits.
        let one = NodePath::from_indices([1]);
        let twelve = NodePath::from_indices([12]);
        assert!(!one.is_strict_ancestor_of(&twelve));
    }

    #[test]
    fn display_is_slash_separated() {
        assert_eq!(format!("{}", NodePath::root()), "/");
        assert_eq!(format!("{}", NodePath::from_indices([0, 2])), "/0/2");
    }
}
