// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a scene group for `vizmap_demo`.

use kurbo::{Affine, Rect, Vec2};
use peniko::Brush;
use vizmap_scene::{Group, Node, TextAnchor, TextBaseline, TextMeasurer};

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    // (z, paint order, node with absolute position)
    nodes: Vec<(i32, usize, Node)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Flattens `group` into absolutely positioned leaf nodes.
    pub(crate) fn add_group(&mut self, group: &Group) {
        self.flatten(group, Vec2::ZERO);
    }

    fn flatten(&mut self, group: &Group, parent: Vec2) {
        let origin = parent + group.position;
        for child in group.children() {
            if let Node::Group(inner) = child {
                self.flatten(inner, origin);
                continue;
            }
            let mut leaf = child.clone();
            leaf.set_position(origin + child.position());
            let order = self.nodes.len();
            self.nodes.push((leaf.z_index(), order, leaf));
        }
    }

    pub(crate) fn to_svg_string(&self, measurer: &dyn TextMeasurer) -> String {
        let computed = self.content_box(measurer);
        let view_box = match (self.view_box, computed) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let view_box = view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut order: Vec<_> = self.nodes.iter().collect();
        order.sort_by_key(|(z, i, _)| (*z, *i));

        for (_z, _i, node) in order {
            let offset = node.position();
            match node {
                Node::Rect(r) => {
                    let rect = r.rect + offset;
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", &r.fill);
                    if r.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &r.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, r.stroke_width));
                    }
                    out.push_str("/>\n");
                }
                Node::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    let pos = t.pos + offset;
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}" dominant-baseline="{}""#,
                        pos.x,
                        pos.y,
                        t.font.size,
                        escape_xml(t.font.family.as_css_family()),
                        t.font.weight.0,
                        baseline
                    ));
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                Node::Symbol(s) => {
                    let d = (Affine::translate(offset) * s.path()).to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &s.fill);
                    out.push_str("/>\n");
                }
                Node::Group(_) => {}
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_box(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        self.nodes
            .iter()
            .map(|(_z, _i, node)| node.bounds(measurer))
            .reduce(|a, b| a.union(b))
            .map(|r| r.inflate(10.0, 10.0))
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::color::palette::css;
    use vizmap_scene::{HeuristicTextMeasurer, RectNode, TextNode};

    use super::*;

    #[test]
    fn nested_positions_are_flattened_and_sorted_by_z() {
        let mut inner = Group::new().with_child(TextNode::new(Point::new(1.0, 2.0), "a<b"));
        inner.position = Vec2::new(10.0, 0.0);
        let mut root = Group::new()
            .with_child(inner)
            .with_child(RectNode::new(Rect::new(0.0, 0.0, 4.0, 4.0), css::RED).with_z_index(-1));
        root.position = Vec2::new(0.0, 5.0);

        let mut scene = SvgScene::default();
        scene.add_group(&root);
        let svg = scene.to_svg_string(&HeuristicTextMeasurer);

        let rect_at = svg.find("<rect").expect("rect emitted");
        let text_at = svg.find("<text").expect("text emitted");
        assert!(rect_at < text_at, "background should paint first");
        assert!(svg.contains(r#"<text x="11" y="7""#), "text should be translated: {svg}");
        assert!(svg.contains("a&lt;b"), "text should be escaped");
    }
}
