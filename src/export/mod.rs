//! Raster image export for captured strokes.
//!
//! Turns a snapshot of stroke data into an encoded PNG: flatten points,
//! normalize to a padded bounding box, paint the background, stroke each
//! line, optionally downscale, encode. Invoked on demand rather than
//! per-frame; the pipeline submodule dispatches the work to the blocking
//! thread pool with cooperative cancellation.

pub mod file;
pub mod image;
pub mod paint;
pub mod pipeline;
pub mod types;

// Re-export commonly used types at module level
pub use file::FileSaveConfig;
pub use image::{ExportOptions, render_points_to_png, render_strokes_to_png};
pub use paint::{DEFAULT_BACKGROUND, GradientStop, Paint};
pub use pipeline::{ExportOutcome, ExportRequest, perform_export};
pub use types::{CancelToken, ExportError};
