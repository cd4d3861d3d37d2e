// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The piecewise legend view: render passes and click handling.

use kurbo::Point;
use vizmap_scene::{Group, Size, box_layout, position_group, render_background};

use crate::action::{LegendAction, SelectDataRange, ViewId};
use crate::ends_text::render_ends_text;
use crate::host::LegendHost;
use crate::item::ItemRenderer;
use crate::model::PiecewiseModel;
use crate::selection::SelectionMap;
use crate::view_data::{ViewData, is_reversed};

/// An interactive piecewise legend.
///
/// The view owns one scene group, rebuilt from scratch on every
/// [`render`](Self::render). Item groups are tagged with their piece index, and
/// clicks are routed by that tag to [`on_item_click`](Self::on_item_click),
/// which proposes a new selection to the host without touching the model.
#[derive(Debug)]
pub struct PiecewiseView {
    id: ViewId,
    group: Group,
}

impl PiecewiseView {
    /// Creates a view with a fresh [`ViewId`].
    pub fn new() -> Self {
        Self::with_id(ViewId::next())
    }

    /// Creates a view with the given id.
    pub fn with_id(id: ViewId) -> Self {
        Self {
            id,
            group: Group::new(),
        }
    }

    /// The id reported as `from` in emitted actions.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The scene group produced by the last render pass.
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Runs a full render pass.
    ///
    /// Order of the group's children: the leading end label, one item per piece
    /// in display order, the trailing end label, then the background.
    pub fn render<M, H>(&mut self, model: &M, host: &H)
    where
        M: PiecewiseModel + ?Sized,
        H: LegendHost + ?Sized,
    {
        self.group.clear();

        let options = model.options();
        let text_style = model.text_style();
        let measurer = host.text_measurer();
        let item_size = options.item_size;

        let view_data = ViewData::build(
            model.piece_list(),
            options.text.as_ref(),
            options.orient,
            options.inverse,
        );

        let align = options.align.resolve(
            options.orient,
            &options.placement,
            item_size.width,
            host.width(),
        );
        let mut renderer = ItemRenderer::new(item_size, options.text_gap, align, text_style);
        if view_data.ends_text.is_some() {
            renderer = renderer.without_labels();
        }

        if let Some(node) = view_data
            .leading_end_text()
            .and_then(|text| render_ends_text(text, item_size, text_style))
        {
            self.group.push(node);
        }

        let is_category = model.is_category();
        for item in &view_data.piece_list {
            if item.piece.is_category() != is_category {
                tracing::warn!(
                    index = item.index,
                    is_category,
                    "piece kind does not match the model"
                );
            }
            self.group
                .push(renderer.render(item, |value| model.controller_visual(value)));
        }

        if let Some(node) = view_data
            .trailing_end_text()
            .and_then(|text| render_ends_text(text, item_size, text_style))
        {
            self.group.push(node);
        }

        box_layout(options.orient, &mut self.group, options.item_gap, None, measurer);
        render_background(&mut self.group, &options.background, measurer);
        position_group(
            &mut self.group,
            &options.placement,
            Size::new(host.width(), host.height()),
            measurer,
        );

        tracing::debug!(
            view = self.id.0,
            visual_map = %model.id(),
            pieces = view_data.piece_list.len(),
            reversed = is_reversed(options.orient, options.inverse),
            ends_text = view_data.ends_text.is_some(),
            children = self.group.len(),
            "rendered piecewise legend"
        );
    }

    /// Handles a click on the item for piece `index`.
    ///
    /// Dispatches a `selectDataRange` action carrying the toggled selection and
    /// returns that selection. The model is not modified; the host is expected to
    /// apply the action and render again.
    pub fn on_item_click<M, H>(&self, index: usize, model: &M, host: &mut H) -> SelectionMap
    where
        M: PiecewiseModel + ?Sized,
        H: LegendHost + ?Sized,
    {
        let options = model.options();
        let selected = options.selected.toggled(index, options.selected_mode);
        tracing::debug!(
            view = self.id.0,
            visual_map = %model.id(),
            index,
            now_selected = selected.is_selected(index),
            "dispatching selectDataRange"
        );
        host.dispatch_action(LegendAction::SelectDataRange(SelectDataRange {
            from: self.id,
            visual_map_id: model.id().clone(),
            selected: selected.clone(),
        }));
        selected
    }

    /// Routes a click at `point` (canvas coordinates) to the item under it.
    ///
    /// Returns the clicked piece index, or `None` when the point hits no item
    /// (end labels and the background are not clickable).
    pub fn click_at<M, H>(&self, point: Point, model: &M, host: &mut H) -> Option<usize>
    where
        M: PiecewiseModel + ?Sized,
        H: LegendHost + ?Sized,
    {
        let index = self.group.hit_test(point, host.text_measurer())?;
        self.on_item_click(index, model, host);
        Some(index)
    }
}

impl Default for PiecewiseView {
    fn default() -> Self {
        Self::new()
    }
}
