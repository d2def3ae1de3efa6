//! Domain model for the daily canvas.
//!
//! # Responsibility
//! - Define the value types shared by generation, hit-testing, persistence
//!   and export.
//! - Validate externally supplied strings (dates, colors) at construction.
//!
//! # Invariants
//! - A `DateKey` is always a real calendar day in `YYYY-MM-DD` form.
//! - A `HexColor` is always `#rrggbb`, lowercase.
//! - Shapes are immutable once generated.

pub mod color;
pub mod date_key;
pub mod fill;
pub mod shape;
