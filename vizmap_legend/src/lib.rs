// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise visual map legend for `VizMap`.
//!
//! A piecewise visual map splits a data dimension into discrete pieces
//! (intervals or categories). This crate renders that mapping as an
//! interactive legend:
//! - **View data** orders pieces for display and places optional end labels.
//! - **Items** draw one symbol per piece, colored by the model's current
//!   visual for that piece, with an optional label beside it.
//! - **Selection** toggles pieces on click and reports the new selection to
//!   the host as a [`LegendAction`], without touching the model.
//!
//! The view only reads the [`PiecewiseModel`]. Hosts apply dispatched actions
//! and call [`PiecewiseView::render`] again.

#![no_std]

extern crate alloc;

mod action;
mod ends_text;
mod host;
mod item;
mod model;
mod options;
mod piece;
mod selection;
mod view;
mod view_data;

pub use action::{LegendAction, SelectDataRange, ViewId, VisualMapId};
pub use ends_text::render_ends_text;
pub use host::LegendHost;
pub use item::ItemRenderer;
pub use model::{ControllerVisual, PiecewiseModel, PiecewiseModelSpec, ValueState};
pub use options::{ItemAlign, PiecewiseOptions, SelectedMode, TextStyle};
pub use piece::{Piece, PieceValue};
pub use selection::SelectionMap;
pub use view::PiecewiseView;
pub use view_data::{IndexedPiece, ViewData, is_reversed};

pub use vizmap_scene::{
    BackgroundStyle, Offset, Orient, Padding, ParseOptionError, Placement, Size, Symbol,
};
