//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate scene generation, hit-testing and fill persistence into
//!   use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod canvas_service;
pub mod day_tracker;
