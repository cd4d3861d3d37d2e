// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions a legend view submits to its host.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::selection::SelectionMap;

/// Stable identity of a legend view instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ViewId(pub u64);

impl ViewId {
    /// Allocates a fresh id, unique within the process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identity of the visual map model a legend renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VisualMapId(String);

impl VisualMapId {
    /// The id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VisualMapId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for VisualMapId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for VisualMapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to replace a visual map's selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct SelectDataRange {
    /// The view that emitted the request.
    pub from: ViewId,
    /// The model whose selection should change.
    pub visual_map_id: VisualMapId,
    /// The complete proposed selection.
    pub selected: SelectionMap,
}

impl SelectDataRange {
    /// The action type string.
    pub const TYPE: &'static str = "selectDataRange";
}

/// An action submitted to the host's dispatch loop.
///
/// With the `serde` feature this serializes as
/// `{"type": "selectDataRange", "from": …, "visualMapId": …, "selected": {…}}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum LegendAction {
    /// Replace the selection of a visual map.
    SelectDataRange(SelectDataRange),
}

impl LegendAction {
    /// The action type string.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::SelectDataRange(_) => SelectDataRange::TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn view_ids_are_unique() {
        let a = ViewId::next();
        let b = ViewId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn action_type_matches_wire_name() {
        let action = LegendAction::SelectDataRange(SelectDataRange {
            from: ViewId::from_raw(3),
            visual_map_id: "vm".into(),
            selected: SelectionMap::new(),
        });
        assert_eq!(action.action_type(), "selectDataRange");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_select_data_range_event() {
        let action = LegendAction::SelectDataRange(SelectDataRange {
            from: ViewId::from_raw(3),
            visual_map_id: "visualMap0".into(),
            selected: SelectionMap::from([(0, false), (1, true)]),
        });
        let json = serde_json::to_value(&action).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "selectDataRange",
                "from": 3,
                "visualMapId": "visualMap0",
                "selected": { "0": false, "1": true },
            })
        );
    }
}
