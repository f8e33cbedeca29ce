//! Catmull-Rom path smoothing.
//!
//! Pure functions only: no shared state, deterministic output, safe to call
//! from a worker thread during export.

use super::stroke::{MIN_GRANULARITY, Point};

/// Smooths an ordered point sequence with a Catmull-Rom spline.
///
/// `granularity` controls how many interpolated points are inserted per
/// original segment; callers are expected to clamp it to
/// [`MIN_GRANULARITY`] beforehand (the function re-clamps defensively since
/// a zero would divide by zero).
///
/// When the input has fewer than `granularity + 2` points there is not
/// enough data to fit cubic segments safely and the input is returned
/// unchanged. Otherwise the first and last points are duplicated as
/// synthetic control points so every original segment gets the four control
/// points the spline needs. The first and last original points are always
/// emitted exactly; interpolated points never reorder the stroke.
pub fn smooth_points(points: &[Point], granularity: u32) -> Vec<Point> {
    let granularity = granularity.max(MIN_GRANULARITY) as usize;
    if points.len() < granularity + 2 {
        return points.to_vec();
    }

    // Pad with duplicated endpoints: Catmull-Rom needs p0..p3 per segment.
    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[points.len() - 1]);

    let segments = padded.len() - 3;
    let mut smoothed = Vec::with_capacity(1 + segments * granularity);
    smoothed.push(points[0]);

    for i in 1..padded.len() - 2 {
        let p0 = padded[i - 1];
        let p1 = padded[i];
        let p2 = padded[i + 1];
        let p3 = padded[i + 2];

        for step in 1..granularity {
            let t = step as f64 / granularity as f64;
            smoothed.push(catmull_rom(p0, p1, p2, p3, t));
        }

        // Close the segment on the original point so extremes are preserved.
        smoothed.push(p2);
    }

    smoothed
}

/// Standard cubic Catmull-Rom blend at parameter `t` in `(0, 1)`.
fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    let x = 0.5
        * (2.0 * p1.x
            + (p2.x - p0.x) * t
            + (2.0 * p0.x - 5.0 * p1.x + 4.0 * p2.x - p3.x) * t2
            + (3.0 * p1.x - p0.x - 3.0 * p2.x + p3.x) * t3);
    let y = 0.5
        * (2.0 * p1.y
            + (p2.y - p0.y) * t
            + (2.0 * p0.y - 5.0 * p1.y + 4.0 * p2.y - p3.y) * t2
            + (3.0 * p1.y - p0.y - 3.0 * p2.y + p3.y) * t3);

    Point::new(x, y)
}
