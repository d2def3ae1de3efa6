//! Per-day fill choices.
//!
//! # Invariants
//! - A `FillMap` belongs to exactly one `DateKey`; maps are never merged.
//! - An absent entry means the shape is unfilled.

use super::color::HexColor;
use super::shape::ShapeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from shape id to its chosen color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillMap {
    fills: BTreeMap<ShapeId, HexColor>,
}

impl FillMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, shape_id: &str) -> Option<&HexColor> {
        self.fills.get(shape_id)
    }

    /// Records `color` for `shape_id`.
    ///
    /// Returns `true` when the stored value changed.
    pub fn set(&mut self, shape_id: impl Into<ShapeId>, color: HexColor) -> bool {
        let shape_id = shape_id.into();
        match self.fills.get(&shape_id) {
            Some(existing) if *existing == color => false,
            _ => {
                self.fills.insert(shape_id, color);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.fills.clear();
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HexColor)> {
        self.fills
            .iter()
            .map(|(shape_id, color)| (shape_id.as_str(), color))
    }
}

impl FromIterator<(ShapeId, HexColor)> for FillMap {
    fn from_iter<T: IntoIterator<Item = (ShapeId, HexColor)>>(iter: T) -> Self {
        Self {
            fills: iter.into_iter().collect(),
        }
    }
}
