// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-ordered view of a model's pieces.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use vizmap_scene::Orient;

use crate::piece::Piece;

/// A piece paired with its position in the model's piece list.
///
/// `index` addresses the piece in the selection map and routes clicks; it is
/// independent of where the piece ends up on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedPiece<'a> {
    /// The piece.
    pub piece: &'a Piece,
    /// Position in the model's piece list.
    pub index: usize,
}

/// Whether display order runs opposite to the model's value order.
///
/// Horizontal legends read low to high unless inverted; vertical legends put the
/// high end on top unless inverted.
pub fn is_reversed(orient: Orient, inverse: bool) -> bool {
    match orient {
        Orient::Horizontal => inverse,
        Orient::Vertical => !inverse,
    }
}

/// Pieces and end labels in display order, rebuilt for each render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewData<'a> {
    /// Pieces in the order they are laid out.
    pub piece_list: Vec<IndexedPiece<'a>>,
    /// End labels, reversed together with `piece_list`.
    ///
    /// When present, per-item labels are not drawn.
    pub ends_text: Option<[&'a str; 2]>,
}

impl<'a> ViewData<'a> {
    /// Builds the view data for `pieces` and the raw `ends_text` pair.
    ///
    /// Neither input is modified; reversal applies to the returned copies, and the
    /// same rule ([`is_reversed`]) governs both outputs.
    pub fn build(
        pieces: &'a [Piece],
        ends_text: Option<&'a [String; 2]>,
        orient: Orient,
        inverse: bool,
    ) -> Self {
        let mut piece_list: Vec<IndexedPiece<'a>> = pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| IndexedPiece { piece, index })
            .collect();
        let mut ends_text = ends_text.map(|[a, b]| [a.as_str(), b.as_str()]);

        if is_reversed(orient, inverse) {
            piece_list.reverse();
            if let Some(ends) = &mut ends_text {
                ends.reverse();
            }
        }

        Self {
            piece_list,
            ends_text,
        }
    }

    /// The end label laid out before the items.
    pub fn leading_end_text(&self) -> Option<&'a str> {
        self.ends_text.map(|[_, leading]| leading)
    }

    /// The end label laid out after the items.
    pub fn trailing_end_text(&self) -> Option<&'a str> {
        self.ends_text.map(|[trailing, _]| trailing)
    }
}
