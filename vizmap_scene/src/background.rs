// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padded background rectangles for guide groups.

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::measure::TextMeasurer;
use crate::node::{Group, RectNode};
use crate::z_order;

/// CSS-style padding, one value per side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Space above the content.
    pub top: f64,
    /// Space right of the content.
    pub right: f64,
    /// Space below the content.
    pub bottom: f64,
    /// Space left of the content.
    pub left: f64,
}

impl Padding {
    /// Same padding on all four sides.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Padding in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Grows `rect` outward by this padding.
    pub fn expand(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.left,
            rect.y0 - self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }
}

impl From<f64> for Padding {
    fn from(v: f64) -> Self {
        Self::uniform(v)
    }
}

/// Background and border styling for a guide group.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
    /// Fill paint.
    pub fill: Brush,
    /// Border paint.
    pub border: Brush,
    /// Border width; `0` draws no border.
    pub border_width: f64,
    /// Space between the content bounds and the background edge.
    pub padding: Padding,
}

impl BackgroundStyle {
    /// A transparent background with a `#ccc` border of width `0` and padding `5`.
    pub fn new() -> Self {
        Self {
            fill: Brush::Solid(css::TRANSPARENT),
            border: Brush::Solid(Color::from_rgb8(0xcc, 0xcc, 0xcc)),
            border_width: 0.0,
            padding: Padding::uniform(5.0),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the border paint and width.
    pub fn with_border(mut self, border: impl Into<Brush>, width: f64) -> Self {
        self.border = border.into();
        self.border_width = width.max(0.0);
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends a silent background rectangle covering the group's current bounds
/// grown by the style's padding.
///
/// The rectangle is painted below the content via [`z_order::GUIDE_BACKGROUND`].
/// An empty group gets no background.
pub fn render_background(group: &mut Group, style: &BackgroundStyle, measurer: &dyn TextMeasurer) {
    let Some(bounds) = group.local_bounds(measurer) else {
        return;
    };
    group.push(
        RectNode::new(style.padding.expand(bounds), style.fill.clone())
            .with_stroke(style.border.clone(), style.border_width)
            .with_z_index(z_order::GUIDE_BACKGROUND)
            .silent(),
    );
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use crate::node::{Node, SymbolNode};
    use crate::symbol::Symbol;

    #[test]
    fn background_covers_padded_bounds_and_is_silent() {
        let m = HeuristicTextMeasurer;
        let mut g = Group::new().with_child(SymbolNode::new(
            Symbol::Circle,
            Rect::new(0.0, 0.0, 20.0, 14.0),
            css::BLUE,
        ));
        let style = BackgroundStyle::new().with_padding(Padding::new(1.0, 2.0, 3.0, 4.0));
        render_background(&mut g, &style, &m);

        assert_eq!(g.len(), 2);
        let Node::Rect(bg) = &g.children()[1] else {
            panic!("background should be appended last");
        };
        assert_eq!(bg.rect, Rect::new(-4.0, -1.0, 22.0, 17.0));
        assert_eq!(bg.z_index, z_order::GUIDE_BACKGROUND);
        assert!(bg.silent);
    }

    #[test]
    fn empty_group_gets_no_background() {
        let mut g = Group::new();
        render_background(&mut g, &BackgroundStyle::default(), &HeuristicTextMeasurer);
        assert!(g.is_empty());
    }
}
