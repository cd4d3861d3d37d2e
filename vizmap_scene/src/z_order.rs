// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for guide nodes.
//!
//! Nodes carry an explicit `z_index`. Renderers should paint in ascending `z_index`
//! and fall back to tree order for ties.

/// Guide backgrounds, painted below everything else in the guide.
pub const GUIDE_BACKGROUND: i32 = -1;
/// Guide content (symbols and labels).
pub const GUIDE_CONTENT: i32 = 0;
