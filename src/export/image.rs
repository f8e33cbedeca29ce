//! Stroke rasterization and PNG encoding.
//!
//! Renders a snapshot of stroke data into a bounding-box-normalized raster
//! image. Runs no UI-thread-only operations, so callers may dispatch it to a
//! worker context (see the pipeline module); the snapshot passed in must not
//! be mutated while an export is in flight.

use super::paint::Paint;
use super::types::{CancelToken, ExportError};
use crate::draw::{Point, Stroke, StrokeStyle, render};
use crate::util::Size;

/// Options shared by every export entry point.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Requested output dimensions. The result is downscaled to fit when
    /// smaller than the rendered bounding box; it is never upscaled.
    pub desired_size: Option<Size>,
    /// Background fill; `None` falls back to the default background color.
    pub background: Option<Paint>,
    /// Optional canvas dimensions. When given, points are clamped into
    /// `[0, width] x [0, height]` before the bounding box is computed, so
    /// stray off-canvas geometry cannot inflate the output.
    pub canvas_size: Option<Size>,
}

/// Rasterizes strokes into an encoded PNG.
///
/// Returns `Ok(None)` for degenerate input: nothing drawable, or a padded
/// bounding box under one pixel on either side. Actual rasterization or
/// encoding failures are the only errors surfaced, so callers can tell
/// "nothing to draw" apart from "render failed".
pub fn render_strokes_to_png(
    strokes: &[Stroke],
    options: &ExportOptions,
    cancel: &CancelToken,
) -> Result<Option<Vec<u8>>, ExportError> {
    if cancel.is_cancelled() {
        return Err(ExportError::Cancelled);
    }

    let strokes = clamp_to_canvas(strokes, options.canvas_size);

    let point_count: usize = strokes.iter().map(|s| s.len()).sum();
    if point_count < 2 {
        log::debug!("Export skipped: {point_count} drawable point(s)");
        return Ok(None);
    }

    let Some((min_x, min_y, max_x, max_y)) = bounds(strokes.iter().flat_map(|s| &s.points)) else {
        return Ok(None);
    };

    // Pad by the widest stroke so edge strokes are not clipped.
    let max_width = strokes
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.width)
        .fold(0.0f64, f64::max);
    let rendered_w = max_x - min_x + max_width;
    let rendered_h = max_y - min_y + max_width;
    if rendered_w < 1.0 || rendered_h < 1.0 {
        log::debug!("Export skipped: degenerate bounding box {rendered_w:.2}x{rendered_h:.2}");
        return Ok(None);
    }

    let surface_w = rendered_w.ceil() as i32;
    let surface_h = rendered_h.ceil() as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, surface_w, surface_h)?;
    let ctx = cairo::Context::new(&surface)?;

    options
        .background
        .clone()
        .unwrap_or_default()
        .fill(&ctx, surface_w as f64, surface_h as f64)?;

    // Shift strokes so the padded bounding box starts at the origin.
    ctx.translate(-min_x + max_width / 2.0, -min_y + max_width / 2.0);
    render::render_strokes(&ctx, &strokes);
    drop(ctx);
    surface.flush();

    let surface = scale_down(surface, rendered_w, rendered_h, options.desired_size)?;

    let mut png = Vec::new();
    surface.write_to_png(&mut png)?;
    log::info!("Exported {} stroke(s) to {} PNG bytes", strokes.len(), png.len());
    Ok(Some(png))
}

/// Rasterizes a raw point list as a single stroke with uniform styling.
pub fn render_points_to_png(
    points: &[Point],
    style: StrokeStyle,
    options: &ExportOptions,
    cancel: &CancelToken,
) -> Result<Option<Vec<u8>>, ExportError> {
    let stroke = Stroke::from_points(points.to_vec(), style);
    render_strokes_to_png(std::slice::from_ref(&stroke), options, cancel)
}

/// Min/max extent over an iterator of points.
fn bounds<'a>(points: impl Iterator<Item = &'a Point>) -> Option<(f64, f64, f64, f64)> {
    let mut extent: Option<(f64, f64, f64, f64)> = None;
    for p in points {
        extent = Some(match extent {
            None => (p.x, p.y, p.x, p.y),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(p.x),
                min_y.min(p.y),
                max_x.max(p.x),
                max_y.max(p.y),
            ),
        });
    }
    extent
}

/// Applies the canvas-size clamp when a hint is present.
fn clamp_to_canvas(strokes: &[Stroke], canvas: Option<Size>) -> Vec<Stroke> {
    match canvas {
        None => strokes.to_vec(),
        Some(size) => strokes
            .iter()
            .map(|stroke| {
                let mut clamped = stroke.clone();
                for point in &mut clamped.points {
                    *point = point.clamped(size.width, size.height);
                }
                clamped
            })
            .collect(),
    }
}

/// Downscales the rendered surface to fit `desired`, preserving aspect.
///
/// The service never upscales: when the desired size exceeds the rendered
/// size the image is returned at native resolution.
fn scale_down(
    surface: cairo::ImageSurface,
    rendered_w: f64,
    rendered_h: f64,
    desired: Option<Size>,
) -> Result<cairo::ImageSurface, ExportError> {
    let Some(desired) = desired else {
        return Ok(surface);
    };

    let scale = (desired.width / rendered_w).max(desired.height / rendered_h);
    if scale >= 1.0 {
        return Ok(surface);
    }

    let scaled_w = ((rendered_w * scale).round() as i32).max(1);
    let scaled_h = ((rendered_h * scale).round() as i32).max(1);
    let scaled = cairo::ImageSurface::create(cairo::Format::ARgb32, scaled_w, scaled_h)?;
    let ctx = cairo::Context::new(&scaled)?;
    ctx.scale(scale, scale);
    ctx.set_source_surface(&surface, 0.0, 0.0)?;
    ctx.paint()?;
    drop(ctx);
    scaled.flush();
    Ok(scaled)
}
