// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise legend demo.
//!
//! Renders an interval legend and a category legend to SVG, then clicks an
//! item, applies the dispatched action the way a chart host would, and renders
//! the updated selection.
//!
//! Usage: `vizmap_demo [orient] [selected-mode]`, e.g. `vizmap_demo horizontal single`.
//! Set `RUST_LOG=debug` to see render passes.

mod svg;

use std::error::Error;

use kurbo::Rect;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizmap_legend::{
    BackgroundStyle, ItemAlign, LegendAction, LegendHost, Offset, Orient, Piece, PiecewiseModel,
    PiecewiseModelSpec, PiecewiseOptions, PiecewiseView, Placement, SelectedMode, Symbol,
};
use vizmap_scene::{HeuristicTextMeasurer, TextMeasurer};

/// A host that queues dispatched actions until the demo applies them.
#[derive(Debug)]
struct RecordingHost {
    width: f64,
    height: f64,
    measurer: HeuristicTextMeasurer,
    pending: Vec<LegendAction>,
}

impl RecordingHost {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            measurer: HeuristicTextMeasurer,
            pending: Vec::new(),
        }
    }

    /// Offers each queued action to every model, returning how many were accepted.
    fn flush(
        &mut self,
        models: &mut [&mut PiecewiseModelSpec],
    ) -> Result<usize, serde_json::Error> {
        let mut applied = 0;
        for action in self.pending.drain(..) {
            let json = serde_json::to_string(&action)?;
            tracing::info!(action = %json, "applying action");
            for model in models.iter_mut() {
                if model.apply_action(&action) {
                    applied += 1;
                }
            }
        }
        Ok(applied)
    }
}

impl LegendHost for RecordingHost {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn dispatch_action(&mut self, action: LegendAction) {
        self.pending.push(action);
    }

    fn text_measurer(&self) -> &dyn TextMeasurer {
        &self.measurer
    }
}

fn temperature_pieces() -> Vec<Piece> {
    vec![
        Piece::interval(None, Some(0.0)).with_text("< 0 °C"),
        Piece::interval(Some(0.0), Some(10.0)).with_text("0 - 10 °C"),
        Piece::interval(Some(10.0), Some(20.0)).with_text("10 - 20 °C"),
        Piece::interval(Some(20.0), Some(30.0)).with_text("20 - 30 °C"),
        Piece::interval(Some(30.0), None).with_text("> 30 °C"),
    ]
}

fn weather_pieces() -> Vec<Piece> {
    ["Sunny", "Cloudy", "Rain", "Snow"]
        .into_iter()
        .map(|c| Piece::category(c).with_text(c))
        .collect()
}

fn render_svg(view: &PiecewiseView, host: &RecordingHost) -> String {
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, host.width(), host.height()));
    scene.add_group(view.group());
    scene.to_svg_string(host.text_measurer())
}

fn write(path: &str, contents: &str) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, contents)?;
    println!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let orient: Orient = args.next().as_deref().unwrap_or("vertical").parse()?;
    let mode: SelectedMode = args.next().as_deref().unwrap_or("multiple").parse()?;

    let mut host = RecordingHost::new(480.0, 320.0);

    // Interval legend: end labels replace the per-item labels.
    let mut temperature = PiecewiseModelSpec::new("temperature", temperature_pieces())
        .with_options(
            PiecewiseOptions::new()
                .with_orient(orient)
                .with_selected_mode(mode)
                .with_ends_text("Hot", "Cold")
                .with_placement(Placement {
                    left: Some(Offset::Px(20.0)),
                    top: Some(Offset::Center),
                    right: None,
                    bottom: None,
                })
                .with_background(
                    BackgroundStyle::new()
                        .with_fill(css::WHITE)
                        .with_border(css::LIGHT_GRAY, 1.0),
                ),
        );
    let mut temperature_view = PiecewiseView::new();
    temperature_view.render(&temperature, &host);
    write(
        "vizmap_temperature.svg",
        &render_svg(&temperature_view, &host),
    )?;

    // Category legend with per-item labels.
    let mut weather = PiecewiseModelSpec::new("weather", weather_pieces()).with_options(
        PiecewiseOptions::new()
            .with_orient(orient)
            .with_selected_mode(mode)
            .with_item_symbol(Symbol::Circle)
            .with_align(ItemAlign::Auto)
            .with_placement(Placement {
                left: None,
                top: Some(Offset::Px(20.0)),
                right: Some(20.0),
                bottom: None,
            }),
    );
    let mut weather_view = PiecewiseView::new();
    weather_view.render(&weather, &host);
    write("vizmap_weather.svg", &render_svg(&weather_view, &host))?;

    let index = weather.piece_list().len() / 2;
    let selected = weather_view.on_item_click(index, &weather, &mut host);
    println!(
        "clicked piece {index}: now {}",
        if selected.is_selected(index) {
            "selected"
        } else {
            "deselected"
        }
    );

    // Each model only accepts actions carrying its own id.
    let applied = host.flush(&mut [&mut temperature, &mut weather])?;
    println!("applied {applied} action(s)");

    temperature_view.render(&temperature, &host);
    weather_view.render(&weather, &host);
    write(
        "vizmap_weather_clicked.svg",
        &render_svg(&weather_view, &host),
    )?;
    Ok(())
}
