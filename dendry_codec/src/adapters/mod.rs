// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codec adapters for other Dendry stores.
//!
//! ## Feature
//!
//! Enable with `canvas_adapter`.

pub mod canvas;
