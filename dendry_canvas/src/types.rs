// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the canvas arena: node identifiers, flags, and layout
//! configuration.

/// Identifier for a node in the canvas arena (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CanvasId(pub(crate) u32, pub(crate) u32);

impl CanvasId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-node state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node shows its children (participates in layout and visible
        /// counting below itself).
        const EXPANDED = 0b0000_0001;
        /// Node is drawn at all. Cleared for nodes hidden by a collapsed
        /// ancestor during layout.
        const VISIBLE  = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::EXPANDED | Self::VISIBLE
    }
}

/// Sizing and spacing configuration for the layout pass.
///
/// The canvas editor draws with a monospace metric: a node box is sized from
/// its longest text line and line count, and children are laid out to the
/// right of their parent, stacked vertically.
#[derive(Clone, Debug)]
pub struct LayoutMetrics {
    /// Width of one text character, in canvas units.
    pub char_width: f64,
    /// Height of one text line, in canvas units.
    pub line_height: f64,
    /// Horizontal gap between a parent box and its children's column.
    pub h_gap: f64,
    /// Vertical gap between sibling subtrees.
    pub v_gap: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 22.0,
            h_gap: 48.0,
            v_gap: 14.0,
        }
    }
}
