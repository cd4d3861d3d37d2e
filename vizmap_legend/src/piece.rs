// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend pieces: value intervals and categories.

extern crate alloc;

use alloc::string::String;

/// A value a piece can stand for, or be looked up by.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PieceValue {
    /// A numeric value.
    Number(f64),
    /// A categorical label.
    Text(String),
}

impl From<f64> for PieceValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PieceValue {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for PieceValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One legend entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Piece {
    /// A continuous interval. A missing bound is open-ended.
    Interval {
        /// Lower bound.
        low: Option<f64>,
        /// Upper bound.
        high: Option<f64>,
        /// Label text.
        text: Option<String>,
    },
    /// A single categorical value.
    Category {
        /// The category.
        value: PieceValue,
        /// Label text.
        text: Option<String>,
    },
}

impl Piece {
    /// An unlabeled interval piece.
    pub fn interval(low: Option<f64>, high: Option<f64>) -> Self {
        Self::Interval {
            low,
            high,
            text: None,
        }
    }

    /// An unlabeled category piece.
    pub fn category(value: impl Into<PieceValue>) -> Self {
        Self::Category {
            value: value.into(),
            text: None,
        }
    }

    /// Sets the label text.
    pub fn with_text(mut self, label: impl Into<String>) -> Self {
        match &mut self {
            Self::Interval { text, .. } | Self::Category { text, .. } => {
                *text = Some(label.into());
            }
        }
        self
    }

    /// The label text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Interval { text, .. } | Self::Category { text, .. } => text.as_deref(),
        }
    }

    /// Whether this is a category piece.
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }

    /// The value used to look up this piece's visual.
    ///
    /// For a category this is the category itself. For an interval it is the
    /// midpoint of `[low, high]`, where a missing bound counts as `0`. This makes
    /// `{high: 20}` resolve to `10`, which is not necessarily inside a
    /// domain-meaningful part of the interval.
    pub fn representative_value(&self) -> PieceValue {
        match self {
            Self::Category { value, .. } => value.clone(),
            Self::Interval { low, high, .. } => {
                PieceValue::Number((low.unwrap_or(0.0) + high.unwrap_or(0.0)) / 2.0)
            }
        }
    }

    /// Whether `value` falls in this piece.
    ///
    /// Interval bounds are inclusive and a missing bound is unbounded.
    /// Categories match by equality.
    pub fn contains(&self, value: &PieceValue) -> bool {
        match (self, value) {
            (Self::Interval { low, high, .. }, PieceValue::Number(v)) => {
                low.is_none_or(|l| l <= *v) && high.is_none_or(|h| *v <= h)
            }
            (Self::Category { value: own, .. }, other) => own == other,
            (Self::Interval { .. }, PieceValue::Text(_)) => false,
        }
    }
}
