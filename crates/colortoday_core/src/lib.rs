//! Core domain logic for color today, the daily coloring canvas.
//! This crate is the single source of truth for scene generation,
//! hit-testing and fill persistence.

pub mod db;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scene;
pub mod service;

pub use export::render::{encode_png, export_file_name, render_canvas, RenderError};
pub use export::share::{share_links, ShareLinks, SHARE_IMAGE_TEXT, SHARE_TITLE};
pub use geometry::{hit_test, hit_test_id};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::color::{palette, ColorError, HexColor, DEFAULT_COLOR, PALETTE};
pub use model::date_key::{DateKey, DateKeyError};
pub use model::fill::FillMap;
pub use model::shape::{Point, Shape, ShapeId, ShapeKind};
pub use repo::fill_repo::{FillRepository, RepoError, RepoResult, SqliteFillRepository};
pub use scene::generator::{generate_scene, Scene, DAILY_SHAPES};
pub use scene::prng::Mulberry32;
pub use scene::seed::date_key_to_seed;
pub use service::canvas_service::{CanvasService, DayCanvas, PaintGesture, PaintOutcome};
pub use service::day_tracker::DayTracker;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
