// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host a legend view renders into.

use vizmap_scene::{HeuristicTextMeasurer, TextMeasurer};

use crate::action::LegendAction;

/// The chart host: canvas extent, text metrics, and action dispatch.
pub trait LegendHost {
    /// Canvas width.
    fn width(&self) -> f64;

    /// Canvas height.
    fn height(&self) -> f64;

    /// Submits an action; the host decides when (and whether) to apply it.
    fn dispatch_action(&mut self, action: LegendAction);

    /// Text measurement used for layout.
    fn text_measurer(&self) -> &dyn TextMeasurer {
        &HeuristicTextMeasurer
    }
}
