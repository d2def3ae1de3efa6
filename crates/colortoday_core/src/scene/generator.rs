//! Deterministic scene generation.
//!
//! # Responsibility
//! - Turn a seed into an ordered list of shapes.
//!
//! # Invariants
//! - Same `(seed, count)` always yields bit-identical shapes.
//! - Draw order per shape is kind-roll, cx, cy, then kind-specific draws.
//! - Trigonometry goes through `libm`, never the platform math library.
//! - Generation order is z-order: later shapes render on top.

use super::prng::Mulberry32;
use super::seed::date_key_to_seed;
use crate::geometry;
use crate::model::date_key::DateKey;
use crate::model::shape::{shape_id, Point, Shape};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of shapes in a daily scene.
pub const DAILY_SHAPES: usize = 28;

/// Minimum distance between a shape center and any canvas edge.
pub const CENTER_MARGIN: f64 = 0.08;

const CIRCLE_CUTOFF: f64 = 0.4;
const RECT_CUTOFF: f64 = 0.7;

const CIRCLE_RADIUS_MIN: f64 = 0.06;
const CIRCLE_RADIUS_SPAN: f64 = 0.12;

const RECT_SIDE_MIN: f64 = 0.12;
const RECT_SIDE_SPAN: f64 = 0.18;

const POLYGON_MIN_SIDES: usize = 5;
const POLYGON_SIDE_CHOICES: f64 = 4.0;
const POLYGON_RADIUS_MIN: f64 = 0.08;
const POLYGON_RADIUS_SPAN: f64 = 0.12;
const WOBBLE_MIN: f64 = 0.65;
const WOBBLE_SPAN: f64 = 0.5;

/// Ordered shapes generated from one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    seed: u32,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Generates the daily scene for `date_key`.
    pub fn for_date(date_key: &DateKey) -> Self {
        generate_scene(date_key_to_seed(date_key), DAILY_SHAPES)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Shapes in z-order (bottom first).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Topmost shape containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<&Shape> {
        geometry::hit_test(&self.shapes, point)
    }
}

/// Generates `count` shapes from `seed`.
pub fn generate_scene(seed: u32, count: usize) -> Scene {
    let mut rng = Mulberry32::new(seed);
    let shapes = (0..count)
        .map(|index| generate_shape(&mut rng, index))
        .collect();
    Scene { seed, shapes }
}

fn generate_shape(rng: &mut Mulberry32, index: usize) -> Shape {
    let kind_roll = rng.next_f64();
    let cx = centered(rng.next_f64());
    let cy = centered(rng.next_f64());
    let id = shape_id(index);

    if kind_roll < CIRCLE_CUTOFF {
        let r = CIRCLE_RADIUS_MIN + rng.next_f64() * CIRCLE_RADIUS_SPAN;
        return Shape::Circle { id, cx, cy, r };
    }

    if kind_roll < RECT_CUTOFF {
        let w = RECT_SIDE_MIN + rng.next_f64() * RECT_SIDE_SPAN;
        let h = RECT_SIDE_MIN + rng.next_f64() * RECT_SIDE_SPAN;
        return Shape::Rect { id, cx, cy, w, h };
    }

    let sides = POLYGON_MIN_SIDES + (rng.next_f64() * POLYGON_SIDE_CHOICES).floor() as usize;
    let radius = POLYGON_RADIUS_MIN + rng.next_f64() * POLYGON_RADIUS_SPAN;
    let start = rng.next_f64() * PI * 2.0;
    let points = (0..sides)
        .map(|vertex| {
            let angle = start + (PI * 2.0 * vertex as f64) / sides as f64;
            let wobble = WOBBLE_MIN + rng.next_f64() * WOBBLE_SPAN;
            Point::new(
                cx + libm::cos(angle) * radius * wobble,
                cy + libm::sin(angle) * radius * wobble,
            )
        })
        .collect();
    Shape::Polygon {
        id,
        cx,
        cy,
        points,
    }
}

fn centered(roll: f64) -> f64 {
    CENTER_MARGIN + (1.0 - CENTER_MARGIN * 2.0) * roll
}
