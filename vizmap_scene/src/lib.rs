// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene primitives for `VizMap` guides.
//!
//! Guides (legends, visual map controls) are built as a small retained tree:
//! - **Nodes**: groups, text, symbols, and rectangles, each carrying its own
//!   position relative to the parent group.
//! - **Layout**: a box layout that stacks a group's children along an axis,
//!   plus helpers that back a group with a padded rectangle and place it
//!   within a canvas.
//! - **Hit testing**: groups may carry an integer tag; a pointer position is
//!   resolved to the tag of the topmost tagged group under it.
//!
//! Text shaping is out of scope. Text nodes store unshaped strings, and layout
//! asks a [`TextMeasurer`] for extents.

#![no_std]

extern crate alloc;

mod background;
mod error;
mod layout;
mod measure;
mod node;
mod symbol;
pub mod z_order;

pub use background::{BackgroundStyle, Padding, render_background};
pub use error::ParseOptionError;
pub use layout::{Offset, Orient, Placement, Size, box_layout, position_group};
pub use measure::{
    Font, FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextMeasurer, TextMetrics,
};
pub use node::{Group, Node, RectNode, SymbolNode, TextAnchor, TextBaseline, TextNode};
pub use symbol::Symbol;
