// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box layout and canvas placement for guide groups.
//!
//! Guides are laid out in two steps:
//! - **Stack**: [`box_layout`] places a group's children one after another along
//!   an axis, separated by a fixed gap between their visible extents.
//! - **Place**: [`position_group`] moves the whole group so that its bounds land
//!   at the requested offsets within the canvas.

use core::str::FromStr;

use kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::error::ParseOptionError;
use crate::measure::TextMeasurer;
use crate::node::Group;

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The axis a guide's items are stacked along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orient {
    /// Items flow left to right.
    Horizontal,
    /// Items flow top to bottom.
    #[default]
    Vertical,
}

impl Orient {
    /// Returns the option name, `"horizontal"` or `"vertical"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for Orient {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseOptionError::new("orient", s)),
        }
    }
}

/// Stacks the children of `group` along `orient`, `gap` apart.
///
/// Each child is positioned so that the gap separates the visible extents of
/// consecutive children, even when a child's local bounds do not start at its
/// origin (e.g. a label anchored to the left of its symbol).
///
/// When `max_extent` is set, a child that would end beyond it starts a new line
/// (horizontal) or column (vertical), offset by the largest cross-axis extent of
/// the previous line plus `gap`.
pub fn box_layout(
    orient: Orient,
    group: &mut Group,
    gap: f64,
    max_extent: Option<f64>,
    measurer: &dyn TextMeasurer,
) {
    let rects: SmallVec<[Rect; 16]> = group
        .children()
        .iter()
        .map(|c| c.local_bounds(measurer))
        .collect();

    let mut x = 0.0;
    let mut y = 0.0;
    let mut line_max = 0.0_f64;

    for (i, child) in group.children_mut().iter_mut().enumerate() {
        let rect = rects[i];
        let next = rects.get(i + 1);
        match orient {
            Orient::Horizontal => {
                let move_x = rect.width() + next.map_or(0.0, |n| rect.x0 - n.x0);
                let mut next_x = x + move_x;
                if i > 0 && max_extent.is_some_and(|max| next_x > max) {
                    x = 0.0;
                    next_x = move_x;
                    y += line_max + gap;
                    line_max = rect.height();
                } else {
                    line_max = line_max.max(rect.height());
                }
                child.set_position(Vec2::new(x, y));
                x = next_x + gap;
            }
            Orient::Vertical => {
                let move_y = rect.height() + next.map_or(0.0, |n| rect.y0 - n.y0);
                let mut next_y = y + move_y;
                if i > 0 && max_extent.is_some_and(|max| next_y > max) {
                    x += line_max + gap;
                    y = 0.0;
                    next_y = move_y;
                    line_max = rect.width();
                } else {
                    line_max = line_max.max(rect.width());
                }
                child.set_position(Vec2::new(x, y));
                y = next_y + gap;
            }
        }
        tracing::trace!(index = i, x = child.position().x, y = child.position().y, "box_layout");
    }
}

/// One offset from the start edge (left or top) of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Absolute offset in canvas units.
    Px(f64),
    /// Offset as a percentage of the canvas extent.
    Percent(f64),
    /// Center the group along this axis.
    Center,
}

impl From<f64> for Offset {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Where a guide group sits within the canvas.
///
/// `left`/`top` win over `right`/`bottom` when both are set on an axis; with
/// neither, the group sits at the start edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Offset of the group's left edge.
    pub left: Option<Offset>,
    /// Offset of the group's top edge.
    pub top: Option<Offset>,
    /// Distance of the group's right edge from the canvas right edge.
    pub right: Option<f64>,
    /// Distance of the group's bottom edge from the canvas bottom edge.
    pub bottom: Option<f64>,
}

impl Placement {
    /// Bottom-left corner of the canvas.
    pub const BOTTOM_LEFT: Self = Self {
        left: Some(Offset::Px(0.0)),
        top: None,
        right: None,
        bottom: Some(0.0),
    };

    /// Resolves the left edge for a group of width `width`.
    pub fn resolve_x(&self, width: f64, canvas_width: f64) -> f64 {
        resolve_axis(self.left, self.right, width, canvas_width)
    }

    /// Resolves the top edge for a group of height `height`.
    pub fn resolve_y(&self, height: f64, canvas_height: f64) -> f64 {
        resolve_axis(self.top, self.bottom, height, canvas_height)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::BOTTOM_LEFT
    }
}

fn resolve_axis(start: Option<Offset>, end: Option<f64>, extent: f64, container: f64) -> f64 {
    match (start, end) {
        (Some(Offset::Px(v)), _) => v,
        (Some(Offset::Percent(p)), _) => container * p / 100.0,
        (Some(Offset::Center), _) => (container - extent) * 0.5,
        (None, Some(e)) => container - e - extent,
        (None, None) => 0.0,
    }
}

/// Moves `group` so its bounds are placed within `canvas` per `placement`.
///
/// The bounds include every child, so a background added before this call is
/// what ends up aligned with the canvas edges.
pub fn position_group(
    group: &mut Group,
    placement: &Placement,
    canvas: Size,
    measurer: &dyn TextMeasurer,
) {
    let Some(bounds) = group.local_bounds(measurer) else {
        group.position = Vec2::ZERO;
        return;
    };
    let x = placement.resolve_x(bounds.width(), canvas.width);
    let y = placement.resolve_y(bounds.height(), canvas.height);
    group.position = Vec2::new(x - bounds.x0, y - bounds.y0);
    tracing::debug!(
        x,
        y,
        width = bounds.width(),
        height = bounds.height(),
        "positioned guide group"
    );
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;
    use crate::measure::{Font, HeuristicTextMeasurer};
    use crate::node::{SymbolNode, TextAnchor, TextNode};
    use crate::symbol::Symbol;

    fn cell(w: f64, h: f64) -> SymbolNode {
        SymbolNode::new(Symbol::Rect, Rect::new(0.0, 0.0, w, h), css::BLACK)
    }

    #[test]
    fn horizontal_layout_separates_children_by_gap() {
        let m = HeuristicTextMeasurer;
        let mut g = Group::new();
        g.push(cell(20.0, 10.0));
        g.push(cell(30.0, 10.0));
        g.push(cell(10.0, 10.0));
        box_layout(Orient::Horizontal, &mut g, 5.0, None, &m);
        let xs: std::vec::Vec<f64> = g.children().iter().map(|c| c.position().x).collect();
        assert_eq!(xs, [0.0, 25.0, 60.0]);
        assert!(g.children().iter().all(|c| c.position().y == 0.0));
    }

    #[test]
    fn vertical_layout_compensates_for_negative_local_origin() {
        let m = HeuristicTextMeasurer;
        let mut g = Group::new();
        // A label hanging above its origin: local y range is -5..5.
        g.push(
            TextNode::new(Point::new(0.0, 0.0), "ab")
                .with_font(Font::new(10.0))
                .with_anchor(TextAnchor::Start),
        );
        g.push(cell(10.0, 10.0));
        box_layout(Orient::Vertical, &mut g, 4.0, None, &m);
        let first = g.children()[0].bounds(&m);
        let second = g.children()[1].bounds(&m);
        assert!(
            (second.y0 - first.y1 - 4.0).abs() < 1e-9,
            "visible gap should be 4: {first:?} {second:?}"
        );
    }

    #[test]
    fn horizontal_layout_wraps_at_max_extent() {
        let m = HeuristicTextMeasurer;
        let mut g = Group::new();
        for _ in 0..3 {
            g.push(cell(20.0, 10.0));
        }
        box_layout(Orient::Horizontal, &mut g, 5.0, Some(50.0), &m);
        let positions: std::vec::Vec<Vec2> = g.children().iter().map(|c| c.position()).collect();
        assert_eq!(
            positions,
            [Vec2::new(0.0, 0.0), Vec2::new(25.0, 0.0), Vec2::new(0.0, 15.0)]
        );
    }

    #[test]
    fn placement_resolves_each_offset_kind() {
        let p = Placement {
            left: Some(Offset::Center),
            top: Some(Offset::Percent(10.0)),
            right: Some(3.0),
            bottom: None,
        };
        assert_eq!(p.resolve_x(20.0, 100.0), 40.0);
        assert_eq!(p.resolve_y(20.0, 200.0), 20.0);

        let p = Placement {
            left: None,
            top: None,
            right: Some(3.0),
            bottom: Some(7.0),
        };
        assert_eq!(p.resolve_x(20.0, 100.0), 77.0);
        assert_eq!(p.resolve_y(20.0, 200.0), 173.0);
    }

    #[test]
    fn position_group_aligns_bounds_not_origin() {
        let m = HeuristicTextMeasurer;
        let mut inner = cell(10.0, 10.0);
        inner.cell = Rect::new(-4.0, -2.0, 6.0, 8.0);
        let mut g = Group::new().with_child(inner);
        position_group(&mut g, &Placement::BOTTOM_LEFT, Size::new(100.0, 50.0), &m);
        let b = g.bounds(&m).expect("non-empty");
        assert_eq!(b, Rect::new(0.0, 40.0, 10.0, 50.0));
    }

    #[test]
    fn orient_parses_option_names() {
        assert_eq!("horizontal".parse::<Orient>(), Ok(Orient::Horizontal));
        assert_eq!(Orient::Vertical.name().parse::<Orient>(), Ok(Orient::Vertical));
        assert!("diagonal".parse::<Orient>().is_err());
    }
}
