//! Shape model.
//!
//! # Responsibility
//! - Define the three generated shape kinds as one tagged sum type.
//! - Carry only the fields meaningful for each kind.
//!
//! # Invariants
//! - Coordinates and sizes are fractions of the canvas side.
//! - `id` is `shape-<index>` and unique within a scene.

use serde::{Deserialize, Serialize};

/// Stable identifier of a shape within one scene.
pub type ShapeId = String;

const SHAPE_ID_PREFIX: &str = "shape-";

/// Point in normalized canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalizes a surface offset by the surface size.
    ///
    /// Returns `None` when the surface has no usable area.
    pub fn from_surface(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Option<Self> {
        let usable = |side: f64| side.is_finite() && side > 0.0;
        if !usable(width) || !usable(height) {
            return None;
        }
        Some(Self::new(offset_x / width, offset_y / height))
    }
}

/// Discriminant of a `Shape`, used by storage-free callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rect,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Polygon => "polygon",
        }
    }
}

/// One generated shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        id: ShapeId,
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// Axis-aligned rectangle centered on `(cx, cy)`.
    Rect {
        id: ShapeId,
        cx: f64,
        cy: f64,
        w: f64,
        h: f64,
    },
    /// Closed polygon; the last vertex connects back to the first.
    Polygon {
        id: ShapeId,
        cx: f64,
        cy: f64,
        points: Vec<Point>,
    },
}

impl Shape {
    pub fn id(&self) -> &str {
        match self {
            Self::Circle { id, .. } | Self::Rect { id, .. } | Self::Polygon { id, .. } => id,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rect { .. } => ShapeKind::Rect,
            Self::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Center used during generation. For polygons this is the point the
    /// vertices were laid out around, not the centroid.
    pub fn center(&self) -> Point {
        match self {
            Self::Circle { cx, cy, .. }
            | Self::Rect { cx, cy, .. }
            | Self::Polygon { cx, cy, .. } => Point::new(*cx, *cy),
        }
    }
}

/// Formats the id for the shape generated at `index`.
pub fn shape_id(index: usize) -> ShapeId {
    format!("{SHAPE_ID_PREFIX}{index}")
}

/// Parses the generation index back out of a shape id.
pub fn shape_index(id: &str) -> Option<usize> {
    let digits = id.strip_prefix(SHAPE_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{shape_id, shape_index, Point, Shape, ShapeKind};

    #[test]
    fn shape_ids_roundtrip_through_index() {
        assert_eq!(shape_id(0), "shape-0");
        assert_eq!(shape_index("shape-27"), Some(27));
        assert_eq!(shape_index("shape-"), None);
        assert_eq!(shape_index("shape-07"), None);
        assert_eq!(shape_index("blob-1"), None);
    }

    #[test]
    fn from_surface_divides_by_size_and_rejects_empty_surfaces() {
        assert_eq!(
            Point::from_surface(160.0, 480.0, 640.0, 640.0),
            Some(Point::new(0.25, 0.75))
        );
        assert_eq!(Point::from_surface(1.0, 1.0, 0.0, 640.0), None);
        assert_eq!(Point::from_surface(1.0, 1.0, 640.0, f64::NAN), None);
    }

    #[test]
    fn shape_serializes_with_kind_tag() {
        let shape = Shape::Rect {
            id: shape_id(3),
            cx: 0.5,
            cy: 0.25,
            w: 0.2,
            h: 0.125,
        };
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["kind"], "rect");
        assert_eq!(json["id"], "shape-3");
        assert_eq!(shape.kind(), ShapeKind::Rect);
        assert_eq!(shape.center(), Point::new(0.5, 0.25));

        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }
}
