//! Point-in-shape containment and topmost hit resolution.
//!
//! # Responsibility
//! - Decide whether a normalized point lies inside a shape.
//! - Resolve overlaps: the last generated (topmost) shape wins.
//!
//! # Invariants
//! - Circle and rect boundaries are inclusive.
//! - Polygons use the even-odd ray-casting rule and are not validated.
//! - Stateless; no side effects.


pub use hit_test::{contains, hit_test, hit_test_id, point_in_polygon};
