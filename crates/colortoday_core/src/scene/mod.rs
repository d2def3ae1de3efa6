//! Deterministic daily scene generation.
//!
//! # Responsibility
//! - Derive a seed from a `DateKey`.
//! - Produce the day's ordered shapes from that seed.
//!
//! # Invariants
//! - Everything here is pure; the same date always yields the same scene.

pub mod generator;
pub mod prng;
pub mod seed;
