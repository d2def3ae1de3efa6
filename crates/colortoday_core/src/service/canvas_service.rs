//! Canvas use-case service.
//!
//! # Responsibility
//! - Open a day: generate its scene and load its fills.
//! - Paint shapes under a pointer, persisting every change.
//! - Reset a day.
//!
//! # Invariants
//! - Every in-memory fill mutation is written through to the repository
//!   before it becomes visible on the `DayCanvas`.
//! - Repeated hits on the same shape within one gesture paint once.
//! - The service holds no per-day or per-gesture state itself.

use crate::model::color::HexColor;
use crate::model::date_key::DateKey;
use crate::model::fill::FillMap;
use crate::model::shape::{Point, ShapeId};
use crate::repo::fill_repo::{FillRepository, RepoResult};
use crate::scene::generator::Scene;
use log::{debug, info};
use std::time::Instant;

/// One day's scene together with its current fills.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCanvas {
    date_key: DateKey,
    scene: Scene,
    fills: FillMap,
}

impl DayCanvas {
    pub fn date_key(&self) -> &DateKey {
        &self.date_key
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn fills(&self) -> &FillMap {
        &self.fills
    }

    /// Color of `shape_id`, or `None` when unfilled.
    pub fn fill_of(&self, shape_id: &str) -> Option<&HexColor> {
        self.fills.get(shape_id)
    }
}

/// Pointer state for one press-drag-release sequence.
///
/// Create one on pointer down and drop it on pointer up or leave.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintGesture {
    last_hit: Option<ShapeId>,
}

impl PaintGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a gesture whose last hit was tracked by the caller.
    pub fn resume(last_hit: Option<ShapeId>) -> Self {
        Self { last_hit }
    }

    pub fn last_hit(&self) -> Option<&str> {
        self.last_hit.as_deref()
    }
}

/// Result of one paint attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Shape was recorded with the brush color.
    Painted(ShapeId),
    /// Shape was already painted earlier in this gesture.
    Repeated(ShapeId),
    /// No shape under the pointer.
    Missed,
}

impl PaintOutcome {
    pub fn shape_id(&self) -> Option<&str> {
        match self {
            Self::Painted(id) | Self::Repeated(id) => Some(id),
            Self::Missed => None,
        }
    }
}

/// Use-case service for painting the daily canvas.
pub struct CanvasService<R: FillRepository> {
    repo: R,
}

impl<R: FillRepository> CanvasService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Generates the day's scene and loads its persisted fills.
    pub fn open_day(&self, date_key: DateKey) -> RepoResult<DayCanvas> {
        let started_at = Instant::now();
        let scene = Scene::for_date(&date_key);
        let fills = self.repo.load_fills(&date_key)?;

        info!(
            "event=day_open module=service status=ok date_key={date_key} seed={} shapes={} fills={} duration_ms={}",
            scene.seed(),
            scene.len(),
            fills.len(),
            started_at.elapsed().as_millis()
        );
        Ok(DayCanvas {
            date_key,
            scene,
            fills,
        })
    }

    /// Paints the topmost shape under `point` with `color`.
    ///
    /// # Contract
    /// - A miss leaves the gesture and the fills untouched.
    /// - A hit on the gesture's last shape is `Repeated` and writes nothing.
    /// - Any other hit is persisted, then applied to `canvas`.
    pub fn paint_at(
        &self,
        canvas: &mut DayCanvas,
        gesture: &mut PaintGesture,
        point: Point,
        color: &HexColor,
    ) -> RepoResult<PaintOutcome> {
        let Some(shape) = canvas.scene.hit_test(point) else {
            return Ok(PaintOutcome::Missed);
        };
        let shape_id = shape.id().to_string();

        if gesture.last_hit() == Some(shape_id.as_str()) {
            return Ok(PaintOutcome::Repeated(shape_id));
        }

        self.repo.save_fill(&canvas.date_key, &shape_id, color)?;
        canvas.fills.set(shape_id.clone(), color.clone());
        gesture.last_hit = Some(shape_id.clone());

        debug!(
            "event=shape_paint module=service status=ok date_key={} shape_id={shape_id} color={color}",
            canvas.date_key
        );
        Ok(PaintOutcome::Painted(shape_id))
    }

    /// Clears all fills of the canvas's day. Returns the number removed.
    pub fn reset_day(&self, canvas: &mut DayCanvas) -> RepoResult<usize> {
        let removed = self.repo.clear_fills(&canvas.date_key)?;
        canvas.fills.clear();
        info!(
            "event=day_reset module=service status=ok date_key={} removed={removed}",
            canvas.date_key
        );
        Ok(removed)
    }

    /// Days that have saved progress, newest first.
    pub fn painted_days(&self) -> RepoResult<Vec<DateKey>> {
        self.repo.list_days()
    }
}
