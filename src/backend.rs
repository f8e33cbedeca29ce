//! Render backend abstraction.
//!
//! Actual pixel drawing belongs to the hosting platform. The core talks to
//! it through one narrow capability interface, implemented once per target;
//! the core itself never branches on platform identity.

/// Platform-side rendering capability.
///
/// The surface calls [`invalidate`](Self::invalidate) whenever its visible
/// state changed; the backend schedules a repaint and, when ready, hands a
/// Cairo context to [`DrawingSurface::draw`](crate::surface::DrawingSurface::draw)
/// which paints background, overlay hook, settled strokes, and the
/// in-progress stroke in that order.
pub trait RenderBackend {
    /// Requests an asynchronous repaint of the surface.
    fn invalidate(&mut self);
}
