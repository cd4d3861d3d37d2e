// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scene nodes.
//!
//! Every node carries a `position`: a translation applied to its own geometry
//! relative to the parent group. Layout moves nodes by rewriting positions only,
//! so shape geometry stays in the node's local coordinates.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Brush;

use crate::measure::{Font, TextMeasurer};
use crate::symbol::Symbol;
use crate::z_order;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// `pos.x` is the start of the text.
    Start,
    /// `pos.x` is the center of the text.
    Middle,
    /// `pos.x` is the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// `pos.y` is the vertical middle of the line.
    Middle,
    /// `pos.y` is the alphabetic baseline.
    Alphabetic,
    /// `pos.y` is the top of the line.
    Hanging,
    /// `pos.y` is the bottom of the line.
    Ideographic,
}

/// A text node (unshaped).
#[derive(Clone, Debug)]
pub struct TextNode {
    /// Translation relative to the parent group.
    pub position: Vec2,
    /// Anchor point in local coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font used for measuring and drawing.
    pub font: Font,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

impl TextNode {
    /// Creates a start-anchored, middle-baseline text node.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            position: Vec2::ZERO,
            pos,
            text: text.into(),
            font: Font::default(),
            fill: Brush::default(),
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
        }
    }

    /// Sets the font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Bounds of the text in local coordinates, as estimated by `measurer`.
    pub fn local_bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        let metrics = measurer.measure(&self.text, &self.font);
        let w = metrics.advance_width;
        let h = metrics.line_height();
        let Point { x, y } = self.pos;
        let (x0, x1) = match self.anchor {
            TextAnchor::Start => (x, x + w),
            TextAnchor::Middle => (x - w * 0.5, x + w * 0.5),
            TextAnchor::End => (x - w, x),
        };
        let (y0, y1) = match self.baseline {
            TextBaseline::Middle => (y - h * 0.5, y + h * 0.5),
            TextBaseline::Alphabetic => (y - metrics.ascent, y + metrics.descent),
            TextBaseline::Hanging => (y, y + h),
            TextBaseline::Ideographic => (y - h, y),
        };
        Rect::new(x0, y0, x1, y1)
    }
}

/// A filled symbol fitted into a cell.
#[derive(Clone, Debug)]
pub struct SymbolNode {
    /// Translation relative to the parent group.
    pub position: Vec2,
    /// Shape.
    pub symbol: Symbol,
    /// Cell the shape is fitted into, in local coordinates.
    pub cell: Rect,
    /// Fill paint.
    pub fill: Brush,
}

impl SymbolNode {
    /// Creates a symbol node.
    pub fn new(symbol: Symbol, cell: Rect, fill: impl Into<Brush>) -> Self {
        Self {
            position: Vec2::ZERO,
            symbol,
            cell,
            fill: fill.into(),
        }
    }

    /// Outline of the symbol in local coordinates.
    pub fn path(&self) -> BezPath {
        self.symbol.path(self.cell)
    }
}

/// A filled and optionally stroked rectangle.
#[derive(Clone, Debug)]
pub struct RectNode {
    /// Translation relative to the parent group.
    pub position: Vec2,
    /// Rectangle in local coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
    /// Paint order hint, see [`crate::z_order`].
    pub z_index: i32,
    /// Silent rectangles are skipped by hit testing.
    pub silent: bool,
}

impl RectNode {
    /// Creates an unstroked rectangle.
    pub fn new(rect: Rect, fill: impl Into<Brush>) -> Self {
        Self {
            position: Vec2::ZERO,
            rect,
            fill: fill.into(),
            stroke: Brush::default(),
            stroke_width: 0.0,
            z_index: z_order::GUIDE_CONTENT,
            silent: false,
        }
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width.max(0.0);
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Marks the rectangle as silent (not hit-testable).
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }
}

/// A group of child nodes.
///
/// A group may carry a `tag`, an opaque integer returned by [`Group::hit_test`]
/// when a point falls within the group. Interaction is routed by tag rather than
/// by per-node callbacks.
#[derive(Clone, Debug, Default)]
pub struct Group {
    /// Translation relative to the parent group.
    pub position: Vec2,
    /// Routing tag reported by hit testing.
    pub tag: Option<usize>,
    children: Vec<Node>,
}

impl Group {
    /// Creates an empty, untagged group at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the routing tag.
    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Appends a child, builder style.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Removes every child and resets the position.
    pub fn clear(&mut self) {
        self.children.clear();
        self.position = Vec2::ZERO;
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children, for layout.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Union of the children's bounds, in this group's local coordinates.
    ///
    /// Returns `None` for an empty group.
    pub fn local_bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        self.children
            .iter()
            .map(|c| c.bounds(measurer))
            .reduce(|a, b| a.union(b))
    }

    /// Bounds in the parent's coordinates.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        self.local_bounds(measurer).map(|r| r + self.position)
    }

    /// Returns the tag of the topmost tagged group containing `point`.
    ///
    /// `point` is in the parent's coordinates. Later children are on top of
    /// earlier ones; a tagged group is hit anywhere within the bounds of its
    /// non-silent children.
    pub fn hit_test(&self, point: Point, measurer: &dyn TextMeasurer) -> Option<usize> {
        let local = point - self.position;
        for child in self.children.iter().rev() {
            if let Node::Group(group) = child {
                if let Some(tag) = group.hit_test(local, measurer) {
                    return Some(tag);
                }
            }
        }
        let tag = self.tag?;
        self.children
            .iter()
            .filter(|c| !c.is_silent())
            .any(|c| c.bounds(measurer).contains(local))
            .then_some(tag)
    }
}

/// A scene node.
#[derive(Clone, Debug)]
pub enum Node {
    /// A nested group.
    Group(Group),
    /// A text label.
    Text(TextNode),
    /// A symbol.
    Symbol(SymbolNode),
    /// A rectangle.
    Rect(RectNode),
}

impl Node {
    /// Translation relative to the parent group.
    pub fn position(&self) -> Vec2 {
        match self {
            Self::Group(g) => g.position,
            Self::Text(t) => t.position,
            Self::Symbol(s) => s.position,
            Self::Rect(r) => r.position,
        }
    }

    /// Sets the translation relative to the parent group.
    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Self::Group(g) => g.position = position,
            Self::Text(t) => t.position = position,
            Self::Symbol(s) => s.position = position,
            Self::Rect(r) => r.position = position,
        }
    }

    /// Bounds in the node's own coordinates, ignoring `position`.
    ///
    /// An empty group reports a zero-sized rectangle at its origin.
    pub fn local_bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        match self {
            Self::Group(g) => g.local_bounds(measurer).unwrap_or(Rect::ZERO),
            Self::Text(t) => t.local_bounds(measurer),
            Self::Symbol(s) => s.cell,
            Self::Rect(r) => r.rect,
        }
    }

    /// Bounds in the parent's coordinates.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        self.local_bounds(measurer) + self.position()
    }

    /// Paint order hint.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Rect(r) => r.z_index,
            _ => z_order::GUIDE_CONTENT,
        }
    }

    /// Whether hit testing skips this node.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Rect(r) if r.silent)
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

impl From<TextNode> for Node {
    fn from(t: TextNode) -> Self {
        Self::Text(t)
    }
}

impl From<SymbolNode> for Node {
    fn from(s: SymbolNode) -> Self {
        Self::Symbol(s)
    }
}

impl From<RectNode> for Node {
    fn from(r: RectNode) -> Self {
        Self::Rect(r)
    }
}
