//! Configuration enum types.

use crate::draw::{BLACK, Color};
use crate::export::{DEFAULT_BACKGROUND, GradientStop, Paint};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using black");
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
                1.0,
            ),
        }
    }
}

/// One gradient stop in a configured background paint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StopSpec {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    pub color: ColorSpec,
}

/// Background paint specification for the surface and for exports.
///
/// Gradient coordinates are normalized to `[0, 1]` and mapped onto the
/// actual surface dimensions at render time.
///
/// # Example TOML
/// ```toml
/// [surface.background]
/// type = "linear-gradient"
/// start = [0.0, 0.0]
/// end = [0.0, 1.0]
/// stops = [
///     { offset = 0.0, color = "white" },
///     { offset = 1.0, color = [220, 220, 255] },
/// ]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PaintSpec {
    /// Uniform fill.
    Solid { color: ColorSpec },
    /// Linear ramp between two normalized anchors.
    LinearGradient {
        start: [f64; 2],
        end: [f64; 2],
        stops: Vec<StopSpec>,
    },
    /// Radial ramp around a normalized center.
    RadialGradient {
        center: [f64; 2],
        radius: f64,
        stops: Vec<StopSpec>,
    },
}

impl Default for PaintSpec {
    fn default() -> Self {
        PaintSpec::Solid {
            color: ColorSpec::Name("white".to_string()),
        }
    }
}

impl PaintSpec {
    /// Converts the specification into a renderable [`Paint`].
    ///
    /// Gradients without stops degrade to the default solid background with
    /// a warning rather than failing.
    pub fn to_paint(&self) -> Paint {
        match self {
            PaintSpec::Solid { color } => Paint::Solid(color.to_color()),
            PaintSpec::LinearGradient { start, end, stops } => {
                if stops.is_empty() {
                    warn!("linear-gradient background has no stops, using solid default");
                    return Paint::Solid(DEFAULT_BACKGROUND);
                }
                Paint::LinearGradient {
                    start: (start[0], start[1]),
                    end: (end[0], end[1]),
                    stops: convert_stops(stops),
                }
            }
            PaintSpec::RadialGradient {
                center,
                radius,
                stops,
            } => {
                if stops.is_empty() {
                    warn!("radial-gradient background has no stops, using solid default");
                    return Paint::Solid(DEFAULT_BACKGROUND);
                }
                Paint::RadialGradient {
                    center: (center[0], center[1]),
                    radius: radius.clamp(0.0, 1.0),
                    stops: convert_stops(stops),
                }
            }
        }
    }
}

fn convert_stops(stops: &[StopSpec]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| GradientStop::new(stop.offset, stop.color.to_color()))
        .collect()
}
