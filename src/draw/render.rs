//! Cairo stroke rendering helpers.
//!
//! Shared by the export rasterizer and by platform render backends, so both
//! paint strokes identically: round caps, round joins, smoothing applied
//! per-stroke.

use super::color::Color;
use super::stroke::{Point, Stroke};

/// Renders all strokes in a collection to a Cairo context.
///
/// Strokes are drawn in the order they appear (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke, honoring its smoothing flag.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    stroke_polyline(ctx, &stroke.render_points(), stroke.color, stroke.width);
}

/// Strokes a polyline through `points` with round caps and joins.
///
/// Accepts a borrowed slice so the in-progress stroke can be painted every
/// frame without cloning its point buffer.
pub fn stroke_polyline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some(first) = points.first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if points.len() == 1 {
        // Single point: a zero-length segment still paints a round dot.
        ctx.line_to(first.x, first.y);
    } else {
        for p in &points[1..] {
            ctx.line_to(p.x, p.y);
        }
    }

    let _ = ctx.stroke();
}
