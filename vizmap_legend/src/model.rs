// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The model a piecewise legend renders, and a ready-made implementation.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;
use vizmap_scene::Symbol;

use crate::action::{LegendAction, VisualMapId};
use crate::options::{PiecewiseOptions, SelectedMode, TextStyle};
use crate::piece::{Piece, PieceValue};
use crate::selection::SelectionMap;

/// The symbol and color an item is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerVisual {
    /// Item shape.
    pub symbol: Symbol,
    /// Item fill.
    pub color: Color,
}

/// State and visual mapping consumed by a piecewise legend view.
///
/// The view only reads from the model. Selection changes travel through the
/// host as [`LegendAction`]s; the host applies them and renders again.
pub trait PiecewiseModel {
    /// Identity reported in emitted actions.
    fn id(&self) -> &VisualMapId;

    /// Pieces in model (value) order.
    fn piece_list(&self) -> &[Piece];

    /// Whether the pieces are categories rather than intervals.
    fn is_category(&self) -> bool;

    /// Layout, selection, and styling options.
    fn options(&self) -> &PiecewiseOptions;

    /// Label font and color.
    fn text_style(&self) -> &TextStyle;

    /// Maps a piece's representative value to its item visual.
    fn controller_visual(&self, value: &PieceValue) -> ControllerVisual;
}

/// Whether a value is inside the active data range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueState {
    /// The value falls in a selected piece.
    InRange,
    /// The value falls in no piece, or in an unselected one.
    OutOfRange,
}

/// A self-contained [`PiecewiseModel`]: pieces, options, and a palette.
///
/// Selected pieces are drawn with their palette color (cycled by piece index);
/// unselected pieces, and values outside every piece, use the out-of-range color.
#[derive(Clone, Debug)]
pub struct PiecewiseModelSpec {
    id: VisualMapId,
    pieces: Vec<Piece>,
    options: PiecewiseOptions,
    text_style: TextStyle,
    in_range: Vec<Color>,
    out_of_range: Color,
}

impl PiecewiseModelSpec {
    /// Creates a model with default options, every piece selected.
    pub fn new(id: impl Into<VisualMapId>, pieces: Vec<Piece>) -> Self {
        let mut model = Self {
            id: id.into(),
            pieces,
            options: PiecewiseOptions::default(),
            text_style: TextStyle::default(),
            in_range: vec![
                Color::from_rgb8(0xf6, 0xef, 0xa6),
                Color::from_rgb8(0xe7, 0xb8, 0x8c),
                Color::from_rgb8(0xd8, 0x82, 0x73),
                Color::from_rgb8(0xcb, 0x63, 0x60),
                Color::from_rgb8(0xbf, 0x44, 0x4c),
            ],
            out_of_range: Color::from_rgb8(0xcc, 0xcc, 0xcc),
        };
        model.reset_selected();
        model
    }

    /// Replaces the options.
    ///
    /// Pieces missing from `options.selected` start selected.
    pub fn with_options(mut self, options: PiecewiseOptions) -> Self {
        self.options = options;
        self.reset_selected();
        self
    }

    /// Replaces the label style.
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Replaces the in-range palette.
    pub fn with_palette(mut self, colors: Vec<Color>) -> Self {
        self.in_range = colors;
        self
    }

    /// Replaces the out-of-range color.
    pub fn with_out_of_range(mut self, color: Color) -> Self {
        self.out_of_range = color;
        self
    }

    /// Index of the first piece containing `value`.
    pub fn find_piece(&self, value: &PieceValue) -> Option<usize> {
        self.pieces.iter().position(|p| p.contains(value))
    }

    /// Whether `value` is inside the active data range.
    pub fn value_state(&self, value: &PieceValue) -> ValueState {
        match self.find_piece(value) {
            Some(i) if self.options.selected.is_selected(i) => ValueState::InRange,
            _ => ValueState::OutOfRange,
        }
    }

    /// Replaces the selection.
    pub fn set_selected(&mut self, selected: SelectionMap) {
        self.options.selected = selected;
        self.reset_selected();
    }

    /// Applies an action addressed to this model.
    ///
    /// Returns `false` (and changes nothing) for actions addressed elsewhere.
    pub fn apply_action(&mut self, action: &LegendAction) -> bool {
        match action {
            LegendAction::SelectDataRange(req) if req.visual_map_id == self.id => {
                self.set_selected(req.selected.clone());
                true
            }
            LegendAction::SelectDataRange(_) => false,
        }
    }

    // Fills in missing entries as selected, then in single mode keeps only the
    // first selected piece.
    fn reset_selected(&mut self) {
        let selected = &mut self.options.selected;
        for i in 0..self.pieces.len() {
            if selected.get(i).is_none() {
                selected.set(i, true);
            }
        }
        if self.options.selected_mode == SelectedMode::Single {
            let mut seen = false;
            for i in 0..self.pieces.len() {
                if selected.is_selected(i) {
                    if seen {
                        selected.set(i, false);
                    }
                    seen = true;
                }
            }
        }
    }
}

impl PiecewiseModel for PiecewiseModelSpec {
    fn id(&self) -> &VisualMapId {
        &self.id
    }

    fn piece_list(&self) -> &[Piece] {
        &self.pieces
    }

    fn is_category(&self) -> bool {
        self.pieces.first().is_some_and(Piece::is_category)
    }

    fn options(&self) -> &PiecewiseOptions {
        &self.options
    }

    fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    fn controller_visual(&self, value: &PieceValue) -> ControllerVisual {
        let in_range = self
            .find_piece(value)
            .filter(|&i| self.options.selected.is_selected(i))
            .and_then(|i| {
                (!self.in_range.is_empty()).then(|| self.in_range[i % self.in_range.len()])
            });
        ControllerVisual {
            symbol: self.options.item_symbol,
            color: in_range.unwrap_or(self.out_of_range),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::action::{SelectDataRange, ViewId};

    fn model() -> PiecewiseModelSpec {
        PiecewiseModelSpec::new(
            "vm",
            vec![
                Piece::interval(None, Some(10.0)),
                Piece::interval(Some(10.0), Some(20.0)),
                Piece::interval(Some(20.0), None),
            ],
        )
        .with_palette(vec![css::RED, css::GREEN, css::BLUE])
        .with_out_of_range(css::GRAY)
    }

    #[test]
    fn every_piece_starts_selected() {
        let m = model();
        assert_eq!(m.options().selected, SelectionMap::uniform(3, true));
    }

    #[test]
    fn single_mode_keeps_only_first_selected_piece() {
        let m = model().with_options(
            PiecewiseOptions::new()
                .with_selected_mode(SelectedMode::Single)
                .with_selected(SelectionMap::from([(0, false)])),
        );
        assert_eq!(
            m.options().selected,
            SelectionMap::from([(0, false), (1, true), (2, false)])
        );
    }

    #[test]
    fn visual_follows_selection_state() {
        let mut m = model();
        let mid = PieceValue::Number(15.0);
        assert_eq!(m.controller_visual(&mid).color, css::GREEN);
        assert_eq!(m.value_state(&mid), ValueState::InRange);

        m.set_selected(SelectionMap::from([(1, false)]));
        assert_eq!(m.controller_visual(&mid).color, css::GRAY);
        assert_eq!(m.value_state(&mid), ValueState::OutOfRange);
        assert_eq!(m.controller_visual(&mid).symbol, Symbol::RoundRect);
    }

    #[test]
    fn values_outside_every_piece_are_out_of_range() {
        let m = PiecewiseModelSpec::new("vm", vec![Piece::category("A")])
            .with_out_of_range(css::GRAY);
        assert!(m.is_category());
        assert_eq!(m.controller_visual(&PieceValue::from("B")).color, css::GRAY);
        assert_ne!(m.controller_visual(&PieceValue::from("A")).color, css::GRAY);
    }

    #[test]
    fn apply_action_only_accepts_own_id() {
        let mut m = model();
        let selected = SelectionMap::from([(0, false), (1, true), (2, true)]);
        let foreign = LegendAction::SelectDataRange(SelectDataRange {
            from: ViewId::from_raw(1),
            visual_map_id: "other".into(),
            selected: selected.clone(),
        });
        assert!(!m.apply_action(&foreign));
        assert!(m.options().selected.is_selected(0));

        let own = LegendAction::SelectDataRange(SelectDataRange {
            from: ViewId::from_raw(1),
            visual_map_id: "vm".into(),
            selected: selected.clone(),
        });
        assert!(m.apply_action(&own));
        assert_eq!(m.options().selected, selected);
    }
}
