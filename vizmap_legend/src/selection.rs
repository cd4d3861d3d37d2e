// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state of a piecewise legend.

use hashbrown::HashMap;

use crate::options::SelectedMode;

/// Which pieces are in the active data range, keyed by piece index.
///
/// A missing entry reads as not selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SelectionMap(HashMap<usize, bool>);

impl SelectionMap {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection with pieces `0..count` all set to `selected`.
    pub fn uniform(count: usize, selected: bool) -> Self {
        (0..count).map(|i| (i, selected)).collect()
    }

    /// Whether piece `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(&index).copied().unwrap_or(false)
    }

    /// The stored entry for `index`, if any.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(&index).copied()
    }

    /// Sets the entry for `index`.
    pub fn set(&mut self, index: usize, selected: bool) {
        self.0.insert(index, selected);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0.iter().map(|(&i, &s)| (i, s))
    }

    /// Returns the selection proposed by a click on piece `index`.
    ///
    /// In [`SelectedMode::Single`] every stored entry is cleared first. The entry
    /// for `index` is then negated, with a missing entry counting as `false`.
    /// `self` is left untouched.
    #[must_use]
    pub fn toggled(&self, index: usize, mode: SelectedMode) -> Self {
        let mut next = self.clone();
        if mode == SelectedMode::Single {
            next.0.values_mut().for_each(|s| *s = false);
        }
        let current = next.is_selected(index);
        next.set(index, !current);
        next
    }
}

impl FromIterator<(usize, bool)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (usize, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(usize, bool); N]> for SelectionMap {
    fn from(entries: [(usize, bool); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn single_mode_clears_others_before_toggling() {
        let current = SelectionMap::from([(0, true), (1, false), (2, false)]);
        let next = current.toggled(2, SelectedMode::Single);
        assert_eq!(next, SelectionMap::from([(0, false), (1, false), (2, true)]));
        assert!(current.is_selected(0), "the input selection is not modified");
    }

    #[test]
    fn single_mode_click_on_selected_piece_keeps_it_selected() {
        let current = SelectionMap::from([(0, true), (1, false)]);
        let next = current.toggled(0, SelectedMode::Single);
        assert_eq!(next, SelectionMap::from([(0, true), (1, false)]));
    }

    #[test]
    fn multiple_mode_toggles_only_the_clicked_piece() {
        let current = SelectionMap::from([(0, true), (1, false)]);
        assert_eq!(
            current.toggled(1, SelectedMode::Multiple),
            SelectionMap::from([(0, true), (1, true)])
        );
        assert_eq!(
            current.toggled(0, SelectedMode::Multiple),
            SelectionMap::from([(0, false), (1, false)])
        );
    }

    #[test]
    fn missing_entry_toggles_to_selected() {
        let next = SelectionMap::new().toggled(4, SelectedMode::Multiple);
        assert_eq!(next.get(4), Some(true));
        assert_eq!(next.len(), 1);
        assert!(!next.is_selected(3));
    }

    #[test]
    fn uniform_covers_every_piece() {
        let all = SelectionMap::uniform(3, true);
        assert!((0..3).all(|i| all.is_selected(i)));
        assert_eq!(all.get(3), None);
    }
}
