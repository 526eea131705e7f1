// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Download-name derivation from the root node's text.
//!
//! Browsers and filesystems disagree about what a file may be called; the
//! rules here produce a name that is safe everywhere Windows is, which is
//! the strictest common denominator: reserved punctuation stripped,
//! whitespace runs collapsed, outer dots trimmed, reserved device names
//! defused, and the stem capped at 95 characters before the extension.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::SaveFormat;

/// Characters that cannot appear in a file name portably.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names Windows reserves regardless of extension.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_STEM_CHARS: usize = 95;

/// Sanitize raw text into a file stem (no extension).
///
/// May return an empty string when nothing usable remains; callers fall
/// back to a default stem (see [`suggested_file_name`]).
#[must_use]
pub fn sanitize_stem(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !INVALID_CHARS.contains(c)).collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches('.');

    let stem = if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(trimmed))
    {
        format!("{trimmed}_mindmap")
    } else {
        String::from(trimmed)
    };

    if stem.chars().count() > MAX_STEM_CHARS {
        stem.chars().take(MAX_STEM_CHARS).collect()
    } else {
        stem
    }
}

/// Derive a full download name from root text and format, defaulting to
/// `mindmap.<ext>` when the text sanitizes away entirely.
#[must_use]
pub fn suggested_file_name(root_text: &str, format: SaveFormat) -> String {
    let stem = sanitize_stem(root_text);
    let stem = if stem.is_empty() { "mindmap" } else { &stem };
    format!("{stem}.{}", format.extension())
}
