//! Software rasterizer for PNG export.
//!
//! Paints a scene the same way the interactive canvas does: diagonal
//! gradient background, shapes in z-order with their fill (or a translucent
//! white when unfilled), a dark round-joined outline, and the date label
//! in the bottom-left corner.

use crate::model::color::HexColor;
use crate::model::date_key::DateKey;
use crate::model::fill::FillMap;
use crate::model::shape::Shape;
use crate::scene::generator::Scene;
use fontdue::{Font, FontSettings};
use log::debug;
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tiny_skia::{
    Color, FillRule, GradientStop, LineJoin, LinearGradient, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, PremultipliedColorU8, Rect, SpreadMode, Stroke, Transform,
};

/// Canvas side used when the caller has no layout size.
pub const DEFAULT_CANVAS_SIZE: u32 = 640;
/// Largest canvas side, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 900;

const BACKGROUND_START: (u8, u8, u8) = (0xff, 0xf6, 0xe8);
const BACKGROUND_END: (u8, u8, u8) = (0xf1, 0xf7, 0xff);
const OUTLINE: (u8, u8, u8) = (0x1d, 0x1d, 0x1b);
const OUTLINE_WIDTH: f32 = 2.0;
// rgba(255, 255, 255, 0.92)
const UNFILLED_ALPHA: u8 = 235;

const LABEL_COLOR: (u8, u8, u8) = OUTLINE;
// rgba(29, 29, 27, 0.7)
const LABEL_ALPHA: u8 = 179;
const LABEL_FONT_SIZE: f32 = 12.0;
/// Distance of the label's left edge and baseline from the canvas edges.
const LABEL_INSET: f32 = 12.0;

static LABEL_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static LABEL_FONT: Lazy<Result<Font, &'static str>> =
    Lazy::new(|| Font::from_bytes(LABEL_FONT_BYTES, FontSettings::default()));

#[derive(Debug)]
pub enum RenderError {
    /// The pixel buffer for the requested size could not be allocated.
    Allocation(u32),
    /// The embedded label font failed to parse.
    Font(String),
    Encode(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocation(size) => write!(f, "failed to allocate {size}x{size} canvas"),
            Self::Font(message) => write!(f, "failed to load label font: {message}"),
            Self::Encode(message) => write!(f, "failed to encode png: {message}"),
        }
    }
}

impl Error for RenderError {}

/// Clamps a requested canvas side into `[1, MAX_CANVAS_SIZE]`.
pub fn clamp_canvas_size(size: u32) -> u32 {
    size.clamp(1, MAX_CANVAS_SIZE)
}

/// Rasterizes `scene` with `fills` onto a square pixmap labelled with
/// `date_key`.
pub fn render_canvas(
    scene: &Scene,
    fills: &FillMap,
    date_key: &DateKey,
    size: u32,
) -> Result<Pixmap, RenderError> {
    let size = clamp_canvas_size(size);
    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Allocation(size))?;
    let side = size as f32;

    paint_background(&mut pixmap, side);

    let mut outline = Paint::default();
    outline.anti_alias = true;
    outline.set_color_rgba8(OUTLINE.0, OUTLINE.1, OUTLINE.2, 255);
    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    for shape in scene.shapes() {
        // Degenerate shapes (e.g. zero-area polygons) produce no path.
        let Some(path) = shape_path(shape, side) else {
            continue;
        };
        let fill = fill_paint(fills.get(shape.id()));
        pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }

    draw_label(&mut pixmap, date_key.as_str())?;

    debug!(
        "event=canvas_render module=export status=ok date_key={date_key} size={size} shapes={} fills={}",
        scene.len(),
        fills.len()
    );
    Ok(pixmap)
}

/// Renders and encodes the canvas as PNG bytes.
pub fn encode_png(
    scene: &Scene,
    fills: &FillMap,
    date_key: &DateKey,
    size: u32,
) -> Result<Vec<u8>, RenderError> {
    render_canvas(scene, fills, date_key, size)?
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))
}

/// Download name for a day's canvas.
pub fn export_file_name(date_key: &DateKey) -> String {
    format!("color-today-{date_key}.png")
}

fn paint_background(pixmap: &mut Pixmap, side: f32) {
    let mut paint = Paint::default();
    let gradient = LinearGradient::new(
        tiny_skia::Point::from_xy(0.0, 0.0),
        tiny_skia::Point::from_xy(side, side),
        vec![
            GradientStop::new(0.0, opaque(BACKGROUND_START)),
            GradientStop::new(1.0, opaque(BACKGROUND_END)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    );
    match gradient {
        Some(shader) => paint.shader = shader,
        None => paint.set_color(opaque(BACKGROUND_START)),
    }

    if let Some(rect) = Rect::from_xywh(0.0, 0.0, side, side) {
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn draw_label(pixmap: &mut Pixmap, text: &str) -> Result<(), RenderError> {
    let font = LABEL_FONT
        .as_ref()
        .map_err(|err| RenderError::Font((*err).to_string()))?;
    let baseline = pixmap.height() as f32 - LABEL_INSET;
    let mut cursor_x = LABEL_INSET;

    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, LABEL_FONT_SIZE);
        if let Some(glyph) = glyph_pixmap(metrics.width, metrics.height, &coverage) {
            let x = (cursor_x + metrics.xmin as f32).round() as i32;
            let y = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;
            pixmap.draw_pixmap(
                x,
                y,
                glyph.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
        cursor_x += metrics.advance_width;
    }
    Ok(())
}

/// Tints a glyph coverage bitmap with the label color. `None` for blank
/// glyphs.
fn glyph_pixmap(width: usize, height: usize, coverage: &[u8]) -> Option<Pixmap> {
    let mut glyph = Pixmap::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?)?;
    let premultiply =
        |channel: u8, alpha: u8| ((u32::from(channel) * u32::from(alpha) + 127) / 255) as u8;

    for (pixel, &cover) in glyph.pixels_mut().iter_mut().zip(coverage) {
        let alpha = premultiply(LABEL_ALPHA, cover);
        let color = PremultipliedColorU8::from_rgba(
            premultiply(LABEL_COLOR.0, alpha),
            premultiply(LABEL_COLOR.1, alpha),
            premultiply(LABEL_COLOR.2, alpha),
            alpha,
        );
        if let Some(color) = color {
            *pixel = color;
        }
    }
    Some(glyph)
}

fn fill_paint(color: Option<&HexColor>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    match color {
        Some(color) => {
            let (r, g, b) = color.rgb();
            paint.set_color_rgba8(r, g, b, 255);
        }
        None => paint.set_color_rgba8(255, 255, 255, UNFILLED_ALPHA),
    }
    paint
}

fn shape_path(shape: &Shape, side: f32) -> Option<Path> {
    let px = |value: f64| value as f32 * side;
    match shape {
        Shape::Circle { cx, cy, r, .. } => PathBuilder::from_circle(px(*cx), px(*cy), px(*r)),
        Shape::Rect { cx, cy, w, h, .. } => {
            let rect = Rect::from_xywh(px(cx - w / 2.0), px(cy - h / 2.0), px(*w), px(*h))?;
            Some(PathBuilder::from_rect(rect))
        }
        Shape::Polygon { points, .. } => {
            let (first, rest) = points.split_first()?;
            let mut builder = PathBuilder::new();
            builder.move_to(px(first.x), px(first.y));
            for point in rest {
                builder.line_to(px(point.x), px(point.y));
            }
            builder.close();
            builder.finish()
        }
    }
}

fn opaque((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgba8(r, g, b, 255)
}
