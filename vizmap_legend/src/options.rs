// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise legend options and text styling.

extern crate alloc;

use alloc::string::String;
use core::str::FromStr;

use peniko::Color;
use vizmap_scene::{BackgroundStyle, Font, Orient, ParseOptionError, Placement, Size, Symbol};

use crate::selection::SelectionMap;

/// How many pieces may be selected at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectedMode {
    /// Clicking a piece deselects every other piece.
    Single,
    /// Pieces toggle independently.
    #[default]
    Multiple,
}

impl FromStr for SelectedMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            _ => Err(ParseOptionError::new("selectedMode", s)),
        }
    }
}

/// Which side of its symbol an item label sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemAlign {
    /// Decide from orientation and the legend's position in the canvas.
    #[default]
    Auto,
    /// Labels to the left of the symbols, anchored at their end.
    Left,
    /// Labels to the right of the symbols, anchored at their start.
    Right,
}

impl ItemAlign {
    /// Resolves `Auto` to `Left` or `Right`; explicit values pass through.
    ///
    /// Horizontal legends put labels to the right. Vertical legends put labels on
    /// the side facing the canvas center: a legend whose items sit in the left
    /// half gets labels on the right, and vice versa.
    pub fn resolve(
        self,
        orient: Orient,
        placement: &Placement,
        item_width: f64,
        canvas_width: f64,
    ) -> Self {
        match (self, orient) {
            (Self::Left | Self::Right, _) => self,
            (Self::Auto, Orient::Horizontal) => Self::Right,
            (Self::Auto, Orient::Vertical) => {
                let x = placement.resolve_x(item_width, canvas_width);
                if x + 0.5 * item_width < 0.5 * canvas_width {
                    Self::Right
                } else {
                    Self::Left
                }
            }
        }
    }
}

impl FromStr for ItemAlign {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseOptionError::new("align", s)),
        }
    }
}

/// Font and fill shared by all legend labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Label font.
    pub font: Font,
    /// Label fill color.
    pub color: Color,
}

impl TextStyle {
    /// 12px sans-serif in `#333`.
    pub fn new() -> Self {
        Self {
            font: Font::new(12.0),
            color: Color::from_rgb8(0x33, 0x33, 0x33),
        }
    }

    /// Sets the font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Options of a piecewise legend.
#[derive(Clone, Debug)]
pub struct PiecewiseOptions {
    /// Stacking axis.
    pub orient: Orient,
    /// Flips the display order.
    pub inverse: bool,
    /// Size of one item cell (the symbol's box).
    pub item_size: Size,
    /// Gap between consecutive items (and end labels).
    pub item_gap: f64,
    /// Gap between a symbol and its label.
    pub text_gap: f64,
    /// Label side.
    pub align: ItemAlign,
    /// Symbol used for every item.
    pub item_symbol: Symbol,
    /// Selection behavior on click.
    pub selected_mode: SelectedMode,
    /// Which pieces are in the active range.
    pub selected: SelectionMap,
    /// End labels `[high, low]` in model order; replace per-item labels.
    pub text: Option<[String; 2]>,
    /// Position within the canvas.
    pub placement: Placement,
    /// Background, border, and padding.
    pub background: BackgroundStyle,
}

impl PiecewiseOptions {
    /// Vertical, 20×14 round-rect items, gaps of 10, multiple selection.
    pub fn new() -> Self {
        Self {
            orient: Orient::Vertical,
            inverse: false,
            item_size: Size::new(20.0, 14.0),
            item_gap: 10.0,
            text_gap: 10.0,
            align: ItemAlign::Auto,
            item_symbol: Symbol::RoundRect,
            selected_mode: SelectedMode::Multiple,
            selected: SelectionMap::new(),
            text: None,
            placement: Placement::default(),
            background: BackgroundStyle::default(),
        }
    }

    /// Sets the stacking axis.
    pub fn with_orient(mut self, orient: Orient) -> Self {
        self.orient = orient;
        self
    }

    /// Sets the inverse flag.
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Sets the item cell size.
    pub fn with_item_size(mut self, width: f64, height: f64) -> Self {
        self.item_size = Size::new(width.max(0.0), height.max(0.0));
        self
    }

    /// Sets the gap between items.
    pub fn with_item_gap(mut self, gap: f64) -> Self {
        self.item_gap = gap;
        self
    }

    /// Sets the gap between symbol and label.
    pub fn with_text_gap(mut self, gap: f64) -> Self {
        self.text_gap = gap;
        self
    }

    /// Sets the label side.
    pub fn with_align(mut self, align: ItemAlign) -> Self {
        self.align = align;
        self
    }

    /// Sets the item symbol.
    pub fn with_item_symbol(mut self, symbol: Symbol) -> Self {
        self.item_symbol = symbol;
        self
    }

    /// Sets the selection mode.
    pub fn with_selected_mode(mut self, mode: SelectedMode) -> Self {
        self.selected_mode = mode;
        self
    }

    /// Sets the initial selection.
    pub fn with_selected(mut self, selected: SelectionMap) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the end labels, high end first.
    pub fn with_ends_text(mut self, high: impl Into<String>, low: impl Into<String>) -> Self {
        self.text = Some([high.into(), low.into()]);
        self
    }

    /// Sets the placement within the canvas.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the background style.
    pub fn with_background(mut self, background: BackgroundStyle) -> Self {
        self.background = background;
        self
    }
}

impl Default for PiecewiseOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use vizmap_scene::Offset;

    use super::*;

    #[test]
    fn string_options_parse() {
        assert_eq!("single".parse::<SelectedMode>(), Ok(SelectedMode::Single));
        assert_eq!("right".parse::<ItemAlign>(), Ok(ItemAlign::Right));
        let err = "some".parse::<SelectedMode>().unwrap_err();
        assert_eq!(err.option(), "selectedMode");
    }

    #[test]
    fn explicit_align_is_kept() {
        let p = Placement::default();
        assert_eq!(
            ItemAlign::Left.resolve(Orient::Horizontal, &p, 20.0, 400.0),
            ItemAlign::Left
        );
    }

    #[test]
    fn auto_align_faces_canvas_center_when_vertical() {
        let left = Placement::default();
        assert_eq!(
            ItemAlign::Auto.resolve(Orient::Vertical, &left, 20.0, 400.0),
            ItemAlign::Right
        );

        let right = Placement {
            left: None,
            right: Some(10.0),
            ..Placement::default()
        };
        assert_eq!(
            ItemAlign::Auto.resolve(Orient::Vertical, &right, 20.0, 400.0),
            ItemAlign::Left
        );

        let centered = Placement {
            left: Some(Offset::Percent(60.0)),
            ..Placement::default()
        };
        assert_eq!(
            ItemAlign::Auto.resolve(Orient::Vertical, &centered, 20.0, 400.0),
            ItemAlign::Left
        );
        assert_eq!(
            ItemAlign::Auto.resolve(Orient::Horizontal, &right, 20.0, 400.0),
            ItemAlign::Right
        );
    }
}
