//! Stroke data model: points, styling, and bounding boxes.

use super::color::Color;
use super::smooth::smooth_points;
use crate::util::Rect;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// Lowest permitted spline subdivision density.
///
/// Granularity assignments below this floor are silently clamped up; values
/// this small would produce unusable curve fits.
pub const MIN_GRANULARITY: u32 = 5;

/// Default spline subdivision density for new strokes.
pub const DEFAULT_GRANULARITY: u32 = MIN_GRANULARITY;

/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// A position in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamps the point into `[0, width] x [0, height]`.
    ///
    /// Off-surface coordinates are snapped to the nearest edge so they cannot
    /// corrupt bounding-box computations during export.
    pub fn clamped(self, width: f64, height: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, width),
            y: self.y.clamp(0.0, height),
        }
    }
}

/// Appearance and smoothing settings applied to new strokes.
///
/// The surface holds the active style; the gesture machine copies it into
/// each stroke at pointer-down so later style changes don't retroactively
/// restyle finished strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub granularity: u32,
    pub smooth: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: DEFAULT_STROKE_WIDTH,
            granularity: DEFAULT_GRANULARITY,
            smooth: true,
        }
    }
}

/// One continuous freehand stroke.
///
/// Points are stored in drawing order. The stroke is mutable while in
/// progress (the gesture machine appends points during pointer-move) and
/// treated as immutable once promoted into a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Sequence of coordinates traced by the pointer, in drawing order.
    pub points: Vec<Point>,
    /// Stroke color.
    pub color: Color,
    /// Line thickness in pixels.
    pub width: f64,
    /// Spline subdivision density; never below [`MIN_GRANULARITY`].
    #[serde(deserialize_with = "deserialize_granularity")]
    granularity: u32,
    /// Whether rendering/export smooths the path or uses raw points.
    pub smooth: bool,
}

impl Stroke {
    /// Creates an empty stroke carrying the given style.
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: Vec::new(),
            color: style.color,
            width: style.width,
            granularity: style.granularity.max(MIN_GRANULARITY),
            smooth: style.smooth,
        }
    }

    /// Creates a stroke from existing points and a style.
    pub fn from_points(points: Vec<Point>, style: StrokeStyle) -> Self {
        let mut stroke = Self::new(style);
        stroke.points = points;
        stroke
    }

    /// Appends a point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points have been captured yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current spline subdivision density.
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Sets the subdivision density, clamping below-floor values up to
    /// [`MIN_GRANULARITY`].
    pub fn set_granularity(&mut self, granularity: u32) {
        self.granularity = granularity.max(MIN_GRANULARITY);
    }

    /// Returns the points to draw: smoothed when the smoothing flag is set,
    /// the raw captured points otherwise.
    pub fn render_points(&self) -> Cow<'_, [Point]> {
        if self.smooth {
            Cow::Owned(smooth_points(&self.points, self.granularity))
        } else {
            Cow::Borrowed(&self.points)
        }
    }

    /// Returns the axis-aligned bounding box of the raw points, expanded by
    /// half the stroke width on every side.
    ///
    /// Returns `None` when the stroke has no drawable area.
    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_for_points(&self.points, self.width)
    }
}

/// Bounding box over a point set, padded to cover the stroke width.
pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Rect> {
    let first = points.first()?;
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let padding = (width / 2.0).max(0.5);
    Rect::from_min_max(
        min_x - padding,
        min_y - padding,
        max_x + padding,
        max_y + padding,
    )
}

fn deserialize_granularity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    Ok(value.max(MIN_GRANULARITY))
}
