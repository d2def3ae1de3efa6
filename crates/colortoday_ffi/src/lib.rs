//! Flutter-facing bindings for the color today core.

pub mod api;
