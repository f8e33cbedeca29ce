//! Freehand ink capture, path smoothing, and raster image export.
//!
//! The crate is organized around one [`surface::DrawingSurface`] per view:
//! pointer events feed the gesture state machine, finished strokes land in
//! an observable model collection, a synchronizer mirrors them into the
//! native collection the render backend paints from, and the export module
//! rasterizes a snapshot into an encoded PNG on demand.

pub mod backend;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod surface;
pub mod sync;
pub mod util;

pub use config::Config;
pub use surface::DrawingSurface;
