//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Gesture debounce state is owned by Dart and passed in per call.

use colortoday_core::db::open_db;
use colortoday_core::{
    core_version as core_version_inner, date_key_to_seed, encode_png, export_file_name,
    init_logging as init_logging_inner, palette as palette_inner, ping as ping_inner,
    share_links, CanvasService, DateKey, DayTracker, HexColor, PaintGesture, PaintOutcome,
    Point, RepoResult, Scene, Shape, SqliteFillRepository, SHARE_IMAGE_TEXT, SHARE_TITLE,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const CANVAS_DB_FILE_NAME: &str = "colortoday.sqlite3";
static CANVAS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to call repeatedly with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Today's `YYYY-MM-DD` key in the device's local timezone.
#[flutter_rust_bridge::frb(sync)]
pub fn today_date_key() -> String {
    DateKey::today().to_string()
}

/// Returns today's key when it differs from `shown_date_key`, else `None`.
///
/// Dart calls this at least once a minute and reloads the canvas on `Some`.
/// An unparseable `shown_date_key` always rolls over.
#[flutter_rust_bridge::frb(sync)]
pub fn check_day_rollover(shown_date_key: String) -> Option<String> {
    match DateKey::parse(&shown_date_key) {
        Ok(shown) => DayTracker::new(shown)
            .tick_now()
            .map(|today| today.to_string()),
        Err(_) => Some(DateKey::today().to_string()),
    }
}

/// Quick swatch colors, default brush first.
#[flutter_rust_bridge::frb(sync)]
pub fn palette() -> Vec<String> {
    palette_inner().into_iter().map(String::from).collect()
}

/// Point in normalized canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointItem {
    pub x: f64,
    pub y: f64,
}

/// Flattened shape for Dart rendering.
///
/// Only the fields relevant to `kind` are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeItem {
    pub id: String,
    /// `circle|rect|polygon`.
    pub kind: String,
    pub cx: f64,
    pub cy: f64,
    pub r: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub points: Vec<PointItem>,
    /// Persisted fill color, `None` when unfilled.
    pub fill: Option<String>,
}

/// Scene envelope for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneResponse {
    pub ok: bool,
    pub date_key: String,
    pub seed: u32,
    /// Shapes in paint order (bottom first).
    pub shapes: Vec<ShapeItem>,
    pub message: String,
}

/// Generic action envelope for paint/reset calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasActionResponse {
    pub ok: bool,
    /// Shape touched by the action, if any.
    pub shape_id: Option<String>,
    /// Whether the fill store changed.
    pub changed: bool,
    pub message: String,
}

impl CanvasActionResponse {
    fn success(message: impl Into<String>, shape_id: Option<String>, changed: bool) -> Self {
        Self {
            ok: true,
            shape_id,
            changed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            shape_id: None,
            changed: false,
            message: message.into(),
        }
    }
}

/// Exported PNG envelope.
///
/// `share_title` and `share_text` feed the native share sheet; when sharing
/// files is unsupported Dart saves `png` under `file_name` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub ok: bool,
    pub file_name: String,
    pub png: Vec<u8>,
    pub share_title: String,
    pub share_text: String,
    pub message: String,
}

/// One persisted fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillItem {
    pub shape_id: String,
    pub color: String,
}

/// Fills envelope for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillsResponse {
    pub ok: bool,
    pub fills: Vec<FillItem>,
    pub message: String,
}

/// Share links for the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinksResponse {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Derives the generation seed for `date_key`. Returns `None` when the key
/// is not a valid `YYYY-MM-DD` date.
#[flutter_rust_bridge::frb(sync)]
pub fn date_key_seed(date_key: String) -> Option<u32> {
    DateKey::parse(&date_key)
        .ok()
        .map(|key| date_key_to_seed(&key))
}

/// Generates the day's scene with persisted fills attached.
///
/// Fill loading failures degrade to an unfilled scene with `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_scene(date_key: String) -> SceneResponse {
    let key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(err) => {
            return SceneResponse {
                ok: false,
                date_key,
                seed: 0,
                shapes: Vec::new(),
                message: format!("daily_scene failed: {err}"),
            };
        }
    };

    match with_canvas_service(|service| service.open_day(key.clone())) {
        Ok(canvas) => SceneResponse {
            ok: true,
            date_key: key.to_string(),
            seed: canvas.scene().seed(),
            shapes: canvas
                .scene()
                .shapes()
                .iter()
                .map(|shape| to_shape_item(shape, canvas.fill_of(shape.id())))
                .collect(),
            message: format!("Loaded {} fill(s).", canvas.fills().len()),
        },
        Err(err) => {
            warn!("event=ffi_daily_scene module=ffi status=degraded date_key={key}");
            let scene = Scene::for_date(&key);
            SceneResponse {
                ok: false,
                date_key: key.to_string(),
                seed: scene.seed(),
                shapes: scene
                    .shapes()
                    .iter()
                    .map(|shape| to_shape_item(shape, None))
                    .collect(),
                message: format!("daily_scene fills unavailable: {err}"),
            }
        }
    }
}

/// Returns the id of the topmost shape at `(x, y)`, or `None` on a miss or
/// an invalid key. Pure; touches no storage.
#[flutter_rust_bridge::frb(sync)]
pub fn hit_shape(date_key: String, x: f64, y: f64) -> Option<String> {
    let key = DateKey::parse(&date_key).ok()?;
    Scene::for_date(&key)
        .hit_test(Point::new(x, y))
        .map(|shape| shape.id().to_string())
}

/// Paints the shape under `(x, y)` and persists the fill.
///
/// `last_hit_id` is the shape painted earlier in the current gesture (or
/// `None` at pointer down); Dart stores the returned `shape_id` as the next
/// `last_hit_id` when `changed` is true.
#[flutter_rust_bridge::frb(sync)]
pub fn paint_shape(
    date_key: String,
    x: f64,
    y: f64,
    color: String,
    last_hit_id: Option<String>,
) -> CanvasActionResponse {
    let key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(err) => return CanvasActionResponse::failure(format!("paint_shape failed: {err}")),
    };
    let color = match HexColor::parse(&color) {
        Ok(color) => color,
        Err(err) => return CanvasActionResponse::failure(format!("paint_shape failed: {err}")),
    };

    let result = with_canvas_service(|service| {
        let mut canvas = service.open_day(key)?;
        let mut gesture = PaintGesture::resume(last_hit_id);
        service.paint_at(&mut canvas, &mut gesture, Point::new(x, y), &color)
    });

    match result {
        Ok(PaintOutcome::Painted(id)) => {
            CanvasActionResponse::success("Shape painted.", Some(id), true)
        }
        Ok(PaintOutcome::Repeated(id)) => {
            CanvasActionResponse::success("Already painted in this stroke.", Some(id), false)
        }
        Ok(PaintOutcome::Missed) => CanvasActionResponse::success("No shape here.", None, false),
        Err(err) => CanvasActionResponse::failure(format!("paint_shape failed: {err}")),
    }
}

/// Lists persisted fills of `date_key`, ordered by shape id.
#[flutter_rust_bridge::frb(sync)]
pub fn day_fills(date_key: String) -> FillsResponse {
    let failure = |message: String| FillsResponse {
        ok: false,
        fills: Vec::new(),
        message,
    };
    let key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(err) => return failure(format!("day_fills failed: {err}")),
    };

    match with_canvas_service(|service| service.open_day(key)) {
        Ok(canvas) => {
            let fills: Vec<FillItem> = canvas
                .fills()
                .iter()
                .map(|(shape_id, color)| FillItem {
                    shape_id: shape_id.to_string(),
                    color: color.to_string(),
                })
                .collect();
            FillsResponse {
                ok: true,
                message: format!("Loaded {} fill(s).", fills.len()),
                fills,
            }
        }
        Err(err) => failure(format!("day_fills failed: {err}")),
    }
}

/// Clears every fill of `date_key`.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_day(date_key: String) -> CanvasActionResponse {
    let key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(err) => return CanvasActionResponse::failure(format!("reset_day failed: {err}")),
    };

    let result = with_canvas_service(|service| {
        let mut canvas = service.open_day(key)?;
        service.reset_day(&mut canvas)
    });
    match result {
        Ok(removed) => CanvasActionResponse::success(
            format!("Cleared {removed} fill(s)."),
            None,
            removed > 0,
        ),
        Err(err) => CanvasActionResponse::failure(format!("reset_day failed: {err}")),
    }
}

/// Renders the day's painted canvas as PNG, `size` pixels square
/// (clamped to the canvas maximum).
#[flutter_rust_bridge::frb(sync)]
pub fn export_png(date_key: String, size: u32) -> ExportResponse {
    let failure = |message: String| ExportResponse {
        ok: false,
        file_name: String::new(),
        png: Vec::new(),
        share_title: String::new(),
        share_text: String::new(),
        message,
    };
    let key = match DateKey::parse(&date_key) {
        Ok(key) => key,
        Err(err) => return failure(format!("export_png failed: {err}")),
    };
    let canvas = match with_canvas_service(|service| service.open_day(key.clone())) {
        Ok(canvas) => canvas,
        Err(err) => return failure(format!("export_png failed: {err}")),
    };

    match encode_png(canvas.scene(), canvas.fills(), &key, size) {
        Ok(png) => ExportResponse {
            ok: true,
            file_name: export_file_name(&key),
            png,
            share_title: SHARE_TITLE.to_string(),
            share_text: SHARE_IMAGE_TEXT.to_string(),
            message: "Canvas exported.".to_string(),
        },
        Err(err) => failure(format!("export_png failed: {err}")),
    }
}

/// Builds X, Facebook and LinkedIn share links for `page_url`.
#[flutter_rust_bridge::frb(sync)]
pub fn share_links_for(page_url: String) -> ShareLinksResponse {
    let links = share_links(page_url.trim());
    ShareLinksResponse {
        twitter: links.twitter,
        facebook: links.facebook,
        linkedin: links.linkedin,
    }
}

fn resolve_canvas_db_path() -> PathBuf {
    CANVAS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("COLORTODAY_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CANVAS_DB_FILE_NAME)
        })
        .clone()
}

fn with_canvas_service<T>(
    f: impl FnOnce(&CanvasService<SqliteFillRepository<'_>>) -> RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_canvas_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("canvas DB open failed: {err}"))?;
    let service = CanvasService::new(SqliteFillRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

fn to_shape_item(shape: &Shape, fill: Option<&HexColor>) -> ShapeItem {
    let center = shape.center();
    let mut item = ShapeItem {
        id: shape.id().to_string(),
        kind: shape.kind().as_str().to_string(),
        cx: center.x,
        cy: center.y,
        r: None,
        w: None,
        h: None,
        points: Vec::new(),
        fill: fill.map(|color| color.to_string()),
    };
    match shape {
        Shape::Circle { r, .. } => item.r = Some(*r),
        Shape::Rect { w, h, .. } => {
            item.w = Some(*w);
            item.h = Some(*h);
        }
        Shape::Polygon { points, .. } => {
            item.points = points
                .iter()
                .map(|point| PointItem {
                    x: point.x,
                    y: point.y,
                })
                .collect();
        }
    }
    item
}
