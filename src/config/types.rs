//! Configuration type definitions.

use super::enums::{ColorSpec, PaintSpec};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the default appearance of new strokes. Callers can change these
/// values at runtime through the surface's setters.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue,
    /// yellow, orange, pink, white, black) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 32.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Spline subdivision density for path smoothing (minimum: 5)
    #[serde(default = "default_granularity")]
    pub granularity: u32,

    /// Whether finished strokes are smoothed with a Catmull-Rom spline
    #[serde(default = "default_smooth_paths")]
    pub smooth_paths: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            granularity: default_granularity(),
            smooth_paths: default_smooth_paths(),
        }
    }
}

/// Surface collection policies and background.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Accumulate strokes (`true`) or replace the previous one on each new
    /// stroke (`false`)
    #[serde(default)]
    pub multi_line: bool,

    /// Empty the collection immediately after each stroke completes
    /// (capture-then-export workflows)
    #[serde(default)]
    pub clear_on_finish: bool,

    /// Maximum number of settled strokes (0 = unlimited)
    #[serde(default)]
    pub max_strokes: usize,

    /// Background paint for the surface and for exported images
    #[serde(default)]
    pub background: PaintSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            multi_line: false,
            clear_on_finish: false,
            max_strokes: 0,
            background: PaintSpec::default(),
        }
    }
}

/// Export file delivery settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported images are saved to. Empty string selects the
    /// default (`~/Pictures/Inkboard`). Tilde is expanded.
    #[serde(default)]
    pub directory: String,

    /// Filename template with chrono format specifiers (no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            filename_template: default_filename_template(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    crate::draw::DEFAULT_STROKE_WIDTH
}

fn default_granularity() -> u32 {
    crate::draw::DEFAULT_GRANULARITY
}

fn default_smooth_paths() -> bool {
    true
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
