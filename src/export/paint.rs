//! Background paints for export surfaces.

use crate::draw::{Color, WHITE};

/// Background color used when no paint is supplied.
pub const DEFAULT_BACKGROUND: Color = WHITE;

/// A single stop in a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, in `[0, 1]`.
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// How an export surface's background is filled.
///
/// Gradient geometry is normalized to `[0, 1]` in both axes and mapped onto
/// the surface's actual pixel dimensions at fill time, so the same paint
/// renders consistently across differently-sized exports.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Uniform fill with one color.
    Solid(Color),
    /// Linear ramp between normalized start and end anchors.
    LinearGradient {
        start: (f64, f64),
        end: (f64, f64),
        stops: Vec<GradientStop>,
    },
    /// Radial ramp around a normalized center; the radius is a fraction of
    /// the surface's larger dimension.
    RadialGradient {
        center: (f64, f64),
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(DEFAULT_BACKGROUND)
    }
}

impl Paint {
    /// Fills a `width` x `height` surface with this paint.
    ///
    /// Gradients with no stops degrade to the default background rather
    /// than failing.
    pub fn fill(&self, ctx: &cairo::Context, width: f64, height: f64) -> Result<(), cairo::Error> {
        match self {
            Paint::Solid(color) => {
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                ctx.paint()?;
            }
            Paint::LinearGradient { start, end, stops } => {
                if stops.is_empty() {
                    return Paint::default().fill(ctx, width, height);
                }
                let gradient = cairo::LinearGradient::new(
                    start.0 * width,
                    start.1 * height,
                    end.0 * width,
                    end.1 * height,
                );
                for stop in stops {
                    let c = stop.color;
                    gradient.add_color_stop_rgba(stop.offset, c.r, c.g, c.b, c.a);
                }
                ctx.set_source(&gradient)?;
                ctx.paint()?;
            }
            Paint::RadialGradient {
                center,
                radius,
                stops,
            } => {
                if stops.is_empty() {
                    return Paint::default().fill(ctx, width, height);
                }
                let cx = center.0 * width;
                let cy = center.1 * height;
                let r = radius * width.max(height);
                let gradient = cairo::RadialGradient::new(cx, cy, 0.0, cx, cy, r);
                for stop in stops {
                    let c = stop.color;
                    gradient.add_color_stop_rgba(stop.offset, c.r, c.g, c.b, c.a);
                }
                ctx.set_source(&gradient)?;
                ctx.paint()?;
            }
        }
        Ok(())
    }
}
