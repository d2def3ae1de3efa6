//! Export and share helpers for a painted canvas.
//!
//! # Responsibility
//! - Rasterize a scene plus fills to PNG.
//! - Build social share links for the canvas page.

pub mod render;
pub mod share;
