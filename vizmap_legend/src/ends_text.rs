// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary labels shown at the two ends of a legend.

use kurbo::Point;
use vizmap_scene::{Group, Size, TextAnchor, TextBaseline, TextNode};

use crate::options::TextStyle;

/// Builds an end label centered in one item cell, or `None` for empty text.
///
/// The group is untagged, so clicks on end labels are not routed anywhere.
pub fn render_ends_text(text: &str, item_size: Size, style: &TextStyle) -> Option<Group> {
    if text.is_empty() {
        return None;
    }
    Some(
        Group::new().with_child(
            TextNode::new(Point::new(item_size.width * 0.5, item_size.height * 0.5), text)
                .with_font(style.font.clone())
                .with_fill(style.color)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle),
        ),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use vizmap_scene::Node;

    use super::*;

    #[test]
    fn empty_text_renders_nothing() {
        assert!(render_ends_text("", Size::new(20.0, 14.0), &TextStyle::default()).is_none());
    }

    #[test]
    fn label_is_centered_in_the_cell() {
        let style = TextStyle::default();
        let group = render_ends_text("High", Size::new(20.0, 14.0), &style).expect("non-empty");
        assert_eq!(group.tag, None);
        assert_eq!(group.len(), 1);
        let Node::Text(t) = &group.children()[0] else {
            panic!("end label should be a text node");
        };
        assert_eq!(t.pos, Point::new(10.0, 7.0));
        assert_eq!(t.anchor, TextAnchor::Middle);
        assert_eq!(t.baseline, TextBaseline::Middle);
        assert_eq!(t.font, style.font);
    }
}
