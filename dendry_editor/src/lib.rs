// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dendry Editor: the application-state layer over the tree core.
//!
//! [`Editor`] owns the single current [`Tree`](dendry_tree::Tree) snapshot,
//! the session's selected path, and the dirty flag — an explicit state
//! struct with editing methods, passed wherever it is needed, rather than a
//! process-global store. Every mutation reads the current snapshot, derives
//! a new one, and swaps it in whole, so a failed operation (bad path,
//! malformed paste, rejected import) always leaves the live map untouched.
//!
//! On top of the structural operations it layers the editor concerns:
//!
//! - selection-aware wrappers that keep the selected path and the per-node
//!   `selected_child` records in sync (and repair them after deletions);
//! - wholesale "New Map" / import / export in both persisted grammars
//!   ([`SaveFormat`]);
//! - clipboard fragments: copy as outline or compact JSON, paste of outline
//!   forests with the root special case (see [`Editor::paste_at`]);
//! - splicing of AI-generated outlines ([`ai`], [`Editor::splice_reply`]);
//! - download-name derivation with filesystem sanitization ([`filename`]).
//!
//! Reading a file, talking to the clipboard, and calling the text-generation
//! provider are the host's job; this crate only consumes and produces
//! strings.
//!
//! ## Example
//!
//! ```rust
//! use dendry_editor::{Editor, SaveFormat};
//! use dendry_tree::NodePath;
//!
//! let mut editor = Editor::new("Trip planning");
//! let packing = editor.add_child(&NodePath::root(), "Packing").unwrap();
//! editor.add_child(&packing, "Tent").unwrap();
//! editor.select(&packing).unwrap();
//!
//! assert_eq!(editor.export(SaveFormat::Outline).unwrap(),
//!            "Trip planning\n\tPacking\n\t\tTent");
//! assert_eq!(editor.suggested_file_name(SaveFormat::Json),
//!            "Trip planning.json");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events at the lossy boundaries (ignored AI
//!   decode failures, splice results).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ai;
mod editor;
pub mod filename;

pub use editor::{Editor, EditorError};

/// Persisted grammars a map can be exported to or imported from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SaveFormat {
    /// Pretty-printed JSON document (`.json`).
    Json,
    /// Tab-indented outline text (`.txt`).
    Outline,
}

impl SaveFormat {
    /// The conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Outline => "txt",
        }
    }
}
