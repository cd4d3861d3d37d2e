// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts and text measurement hooks for guide layout.
//!
//! Guides must know how large their labels are before they can be stacked and
//! backed by a background rectangle. Shaping stays downstream, so layout only
//! depends on the small [`TextMeasurer`] interface.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// A minimal text measurement interface used by guide layout.
///
/// Implementations can be heuristic, or backed by a real shaping engine owned by
/// the host.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, font: &Font) -> TextMetrics;
}

/// A font descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Font size in canvas units (typically pixels).
    pub size: f64,
    /// The preferred font family.
    pub family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub style: FontStyle,
}

impl Font {
    /// Creates a sans-serif font of the given `size`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Sets the family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the CSS `font` shorthand, e.g. `normal 400 12px sans-serif`.
    pub fn to_css(&self) -> String {
        let style = match self.style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        };
        alloc::format!(
            "{style} {} {}px {}",
            self.weight.0,
            self.size,
            self.family.as_css_family()
        )
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic text measurer suitable for tests, demos, and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * font.size * text.chars().count() as f64,
            ascent: 0.8 * font.size,
            descent: 0.2 * font.size,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn css_shorthand_includes_weight_size_and_family() {
        let font = Font::new(14.0)
            .with_weight(FontWeight::BOLD)
            .with_family(FontFamily::Named("Inter".into()));
        assert_eq!(font.to_css(), "normal 700 14px Inter");
    }

    #[test]
    fn heuristic_width_scales_with_char_count() {
        let m = HeuristicTextMeasurer;
        let font = Font::new(10.0);
        let a = m.measure("ab", &font);
        let b = m.measure("abcd", &font);
        assert!((b.advance_width - 2.0 * a.advance_width).abs() < 1e-9);
        assert!((a.line_height() - 10.0).abs() < 1e-9);
    }
}
