// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol shapes for legend items.

use core::str::FromStr;

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape};

use crate::error::ParseOptionError;

// Tolerance for flattening curves into path elements, in canvas units.
const TOLERANCE: f64 = 0.1;

/// The symbol shapes a legend item can take.
///
/// Every symbol is fitted into a bounding rectangle (the item cell), so the same
/// item size works for all shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The full cell.
    Rect,
    /// The full cell with rounded corners.
    #[default]
    RoundRect,
    /// A circle inscribed in the cell.
    Circle,
    /// An upward triangle.
    Triangle,
    /// A diamond touching the midpoints of the cell edges.
    Diamond,
    /// A map pin: a round head with a point at the bottom.
    Pin,
    /// An upward arrow head.
    Arrow,
}

impl Symbol {
    /// Returns the option name for this symbol, e.g. `"roundRect"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::RoundRect => "roundRect",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Pin => "pin",
            Self::Arrow => "arrow",
        }
    }

    /// Returns a path for this symbol fitted into `cell`.
    pub fn path(self, cell: Rect) -> BezPath {
        let cx = 0.5 * (cell.x0 + cell.x1);
        let cy = 0.5 * (cell.y0 + cell.y1);
        match self {
            Self::Rect => cell.to_path(TOLERANCE),
            Self::RoundRect => {
                let radius = 0.25 * cell.width().min(cell.height());
                RoundedRect::from_rect(cell, radius).to_path(TOLERANCE)
            }
            Self::Circle => {
                let r = 0.5 * cell.width().min(cell.height());
                Circle::new((cx, cy), r).to_path(TOLERANCE)
            }
            Self::Triangle => polygon(&[
                Point::new(cx, cell.y0),
                Point::new(cell.x1, cell.y1),
                Point::new(cell.x0, cell.y1),
            ]),
            Self::Diamond => polygon(&[
                Point::new(cx, cell.y0),
                Point::new(cell.x1, cy),
                Point::new(cx, cell.y1),
                Point::new(cell.x0, cy),
            ]),
            Self::Pin => pin_path(cell),
            Self::Arrow => polygon(&[
                Point::new(cx, cell.y0),
                Point::new(cell.x1, cell.y1),
                Point::new(cx, cell.y1 - 0.3 * cell.height()),
                Point::new(cell.x0, cell.y1),
            ]),
        }
    }
}

impl FromStr for Symbol {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(Self::Rect),
            "roundRect" => Ok(Self::RoundRect),
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            "diamond" => Ok(Self::Diamond),
            "pin" => Ok(Self::Pin),
            "arrow" => Ok(Self::Arrow),
            _ => Err(ParseOptionError::new("symbol", s)),
        }
    }
}

fn polygon(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        p.move_to(*first);
        for pt in iter {
            p.line_to(*pt);
        }
        p.close_path();
    }
    p
}

fn pin_path(cell: Rect) -> BezPath {
    // The head spans the full width (or two thirds of the height, if smaller);
    // the tail closes the remaining height down to the tip.
    let r = (0.5 * cell.width()).min(cell.height() / 3.0);
    let cx = 0.5 * (cell.x0 + cell.x1);
    let head_cy = cell.y0 + r;
    let mut p = Circle::new((cx, head_cy), r).to_path(TOLERANCE);
    p.move_to((cx - 0.7 * r, head_cy + 0.7 * r));
    p.line_to((cx, cell.y1));
    p.line_to((cx + 0.7 * r, head_cy + 0.7 * r));
    p.close_path();
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for symbol in [
            Symbol::Rect,
            Symbol::RoundRect,
            Symbol::Circle,
            Symbol::Triangle,
            Symbol::Diamond,
            Symbol::Pin,
            Symbol::Arrow,
        ] {
            assert_eq!(symbol.name().parse::<Symbol>(), Ok(symbol));
        }
        let err = "star".parse::<Symbol>().unwrap_err();
        assert_eq!(err.option(), "symbol");
        assert_eq!(err.value(), "star");
    }

    #[test]
    fn paths_stay_within_cell() {
        let cell = Rect::new(10.0, 20.0, 30.0, 34.0);
        for symbol in [
            Symbol::Rect,
            Symbol::RoundRect,
            Symbol::Circle,
            Symbol::Triangle,
            Symbol::Diamond,
            Symbol::Pin,
            Symbol::Arrow,
        ] {
            let b = symbol.path(cell).bounding_box();
            assert!(
                b.x0 >= cell.x0 - 1e-6
                    && b.y0 >= cell.y0 - 1e-6
                    && b.x1 <= cell.x1 + 1e-6
                    && b.y1 <= cell.y1 + 1e-6,
                "{symbol:?} escapes its cell: {b:?}"
            );
        }
    }
}
