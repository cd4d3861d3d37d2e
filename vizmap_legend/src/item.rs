// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-piece item nodes.

use kurbo::{Point, Rect};
use vizmap_scene::{Group, Size, SymbolNode, TextAnchor, TextBaseline, TextNode};

use crate::model::ControllerVisual;
use crate::options::{ItemAlign, TextStyle};
use crate::piece::PieceValue;
use crate::view_data::IndexedPiece;

/// Builds one item group per piece: a symbol, an optional label, and the
/// piece's index as the group's routing tag.
#[derive(Clone, Copy, Debug)]
pub struct ItemRenderer<'a> {
    item_size: Size,
    text_gap: f64,
    align: ItemAlign,
    text_style: &'a TextStyle,
    show_label: bool,
}

impl<'a> ItemRenderer<'a> {
    /// Creates a renderer that draws labels on the side given by `align`.
    ///
    /// `align` should already be resolved; `Auto` is treated as `Left`.
    pub fn new(item_size: Size, text_gap: f64, align: ItemAlign, text_style: &'a TextStyle) -> Self {
        Self {
            item_size,
            text_gap,
            align,
            text_style,
            show_label: true,
        }
    }

    /// Suppresses per-item labels (end labels are shown instead).
    pub fn without_labels(mut self) -> Self {
        self.show_label = false;
        self
    }

    /// Builds the item group for `item`.
    ///
    /// `visual_of` is called once, with the piece's representative value.
    pub fn render(
        &self,
        item: &IndexedPiece<'_>,
        visual_of: impl FnOnce(&PieceValue) -> ControllerVisual,
    ) -> Group {
        let Size { width, height } = self.item_size;
        let visual = visual_of(&item.piece.representative_value());

        let mut group = Group::new().with_tag(item.index).with_child(SymbolNode::new(
            visual.symbol,
            Rect::new(0.0, 0.0, width, height),
            visual.color,
        ));

        if !self.show_label {
            return group;
        }
        let Some(text) = item.piece.text().filter(|t| !t.is_empty()) else {
            return group;
        };
        let (x, anchor) = match self.align {
            ItemAlign::Right => (width + self.text_gap, TextAnchor::Start),
            ItemAlign::Left | ItemAlign::Auto => (-self.text_gap, TextAnchor::End),
        };
        group.push(
            TextNode::new(Point::new(x, height * 0.5), text)
                .with_font(self.text_style.font.clone())
                .with_fill(self.text_style.color)
                .with_anchor(anchor)
                .with_baseline(TextBaseline::Middle),
        );
        group
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::RefCell;
    use std::vec::Vec;

    use peniko::color::palette::css;
    use vizmap_scene::{Node, Symbol};

    use super::*;
    use crate::piece::Piece;

    fn visual(_: &PieceValue) -> ControllerVisual {
        ControllerVisual {
            symbol: Symbol::Circle,
            color: css::TEAL,
        }
    }

    #[test]
    fn visual_lookup_uses_representative_value() {
        let style = TextStyle::default();
        let renderer = ItemRenderer::new(Size::new(20.0, 14.0), 5.0, ItemAlign::Right, &style);
        let pieces = [
            Piece::category("A"),
            Piece::interval(Some(10.0), Some(20.0)),
            Piece::interval(None, Some(20.0)),
        ];
        let seen = RefCell::new(Vec::new());
        for (index, piece) in pieces.iter().enumerate() {
            renderer.render(&IndexedPiece { piece, index }, |v| {
                seen.borrow_mut().push(v.clone());
                visual(v)
            });
        }
        assert_eq!(
            seen.into_inner(),
            [
                PieceValue::from("A"),
                PieceValue::Number(15.0),
                PieceValue::Number(10.0)
            ]
        );
    }

    #[test]
    fn item_carries_symbol_label_and_model_index() {
        let style = TextStyle::default();
        let renderer = ItemRenderer::new(Size::new(20.0, 14.0), 5.0, ItemAlign::Right, &style);
        let piece = Piece::interval(Some(0.0), Some(1.0)).with_text("0 - 1");
        let group = renderer.render(&IndexedPiece { piece: &piece, index: 4 }, visual);

        assert_eq!(group.tag, Some(4));
        assert_eq!(group.len(), 2);
        let Node::Symbol(symbol) = &group.children()[0] else {
            panic!("first child should be the symbol");
        };
        assert_eq!(symbol.symbol, Symbol::Circle);
        assert_eq!(symbol.cell, Rect::new(0.0, 0.0, 20.0, 14.0));
        let Node::Text(label) = &group.children()[1] else {
            panic!("second child should be the label");
        };
        assert_eq!(label.text, "0 - 1");
        assert_eq!(label.pos, Point::new(25.0, 7.0));
        assert_eq!(label.anchor, TextAnchor::Start);
        assert_eq!(label.baseline, TextBaseline::Middle);
    }

    #[test]
    fn left_aligned_label_ends_before_symbol() {
        let style = TextStyle::default();
        let renderer = ItemRenderer::new(Size::new(20.0, 14.0), 5.0, ItemAlign::Left, &style);
        let piece = Piece::category("A").with_text("A");
        let group = renderer.render(&IndexedPiece { piece: &piece, index: 0 }, visual);
        let Node::Text(label) = &group.children()[1] else {
            panic!("second child should be the label");
        };
        assert_eq!(label.pos, Point::new(-5.0, 7.0));
        assert_eq!(label.anchor, TextAnchor::End);
    }

    #[test]
    fn empty_or_suppressed_labels_produce_symbol_only() {
        let style = TextStyle::default();
        let renderer = ItemRenderer::new(Size::new(20.0, 14.0), 5.0, ItemAlign::Right, &style);
        let unlabeled = Piece::interval(None, None).with_text("");
        let group = renderer.render(&IndexedPiece { piece: &unlabeled, index: 0 }, visual);
        assert_eq!(group.len(), 1);

        let labeled = Piece::interval(None, None).with_text("x");
        let group = renderer
            .without_labels()
            .render(&IndexedPiece { piece: &labeled, index: 0 }, visual);
        assert_eq!(group.len(), 1);
    }
}
