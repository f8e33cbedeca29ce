//! Drawing surface controller.
//!
//! The façade that owns the collections, wires the gesture machine and the
//! synchronizer, exposes configuration and events, and delegates pixel
//! drawing to the external render backend. One instance per view; all
//! methods run on the view's thread.

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::RenderBackend;
use crate::config::Config;
use crate::draw::{
    Color, MIN_GRANULARITY, Stroke, StrokeCollection, StrokeStyle, render_stroke, render_strokes,
};
use crate::export::{
    CancelToken, ExportError, ExportOptions, ExportRequest, FileSaveConfig, Paint,
    render_strokes_to_png,
};
use crate::input::{InputState, PointerEvent};
use crate::sync::CollectionSync;
use crate::util::Size;
use log::warn;

/// Collection policies applied when strokes are promoted or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePolicy {
    /// When false, starting a new stroke clears all previous ones and the
    /// collection holds at most one settled stroke.
    pub multi_line: bool,
    /// When true, the collection is emptied immediately after a stroke
    /// completes (capture-then-export workflows).
    pub clear_on_finish: bool,
    /// Maximum number of settled strokes (0 = unlimited).
    pub max_strokes: usize,
}

impl Default for SurfacePolicy {
    fn default() -> Self {
        Self {
            multi_line: false,
            clear_on_finish: false,
            max_strokes: 0,
        }
    }
}

/// Custom overlay painter invoked between the background and the strokes.
pub type DrawHook = Box<dyn Fn(&cairo::Context, f64, f64)>;

/// Callback fired once per finished stroke.
pub type StrokeCompletedHandler = Box<dyn FnMut(&Stroke)>;

/// Owns a drawing surface's state and wires its components together.
///
/// Pointer events flow through the gesture machine into the model
/// collection; the synchronizer mirrors the model into the native collection
/// the backend paints from; exports run against a snapshot of the model.
pub struct DrawingSurface {
    model: StrokeCollection,
    native: StrokeCollection,
    sync: CollectionSync,
    input: InputState,
    policy: SurfacePolicy,
    background: Paint,
    save_config: FileSaveConfig,
    backend: Option<Box<dyn RenderBackend>>,
    draw_hook: Option<DrawHook>,
    completed_handler: Option<StrokeCompletedHandler>,
    completed: Vec<Stroke>,
    model_changed: Rc<Cell<bool>>,
    native_changed: Rc<Cell<bool>>,
    width: f64,
    height: f64,
}

impl DrawingSurface {
    /// Creates a surface with built-in defaults.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a surface configured from a loaded [`Config`].
    pub fn with_config(config: &Config) -> Self {
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        let model_changed = Rc::new(Cell::new(false));
        let native_changed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&model_changed);
        model.set_listener(Box::new(move || flag.set(true)));
        let flag = Rc::clone(&native_changed);
        native.set_listener(Box::new(move || flag.set(true)));

        Self {
            model,
            native,
            sync: CollectionSync::new(),
            input: InputState::new(config.stroke_style()),
            policy: config.surface_policy(),
            background: config.background_paint(),
            save_config: config.file_save_config(),
            backend: None,
            draw_hook: None,
            completed_handler: None,
            completed: Vec::new(),
            model_changed,
            native_changed,
            width: 0.0,
            height: 0.0,
        }
    }

    // ------------------------------------------------------------------
    // Wiring
    // ------------------------------------------------------------------

    /// Attaches the platform render backend.
    pub fn set_backend(&mut self, backend: Box<dyn RenderBackend>) {
        self.backend = Some(backend);
    }

    /// Installs a custom overlay painter, drawn between background and
    /// strokes.
    pub fn set_draw_hook(&mut self, hook: DrawHook) {
        self.draw_hook = Some(hook);
        self.invalidate();
    }

    /// Removes the custom overlay painter.
    pub fn clear_draw_hook(&mut self) {
        if self.draw_hook.take().is_some() {
            self.invalidate();
        }
    }

    /// Registers the stroke-completed callback.
    ///
    /// Completed strokes are also queued for
    /// [`take_completed_strokes`](Self::take_completed_strokes) regardless of
    /// whether a callback is installed.
    pub fn set_completed_handler(&mut self, handler: StrokeCompletedHandler) {
        self.completed_handler = Some(handler);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Feeds one pointer event through the gesture machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.input
                    .on_pointer_press(x, y, &mut self.model, &self.policy)
            }
            PointerEvent::Move { x, y } => self.input.on_pointer_motion(x, y),
            PointerEvent::Up => self.input.on_pointer_release(&mut self.model, &self.policy),
            PointerEvent::Cancel => self.input.on_pointer_cancel(),
        }

        for stroke in self.input.take_completed() {
            if let Some(handler) = &mut self.completed_handler {
                handler(&stroke);
            }
            self.completed.push(stroke);
        }

        self.reconcile();

        if self.input.needs_redraw {
            self.input.needs_redraw = false;
            self.invalidate();
        }
    }

    /// Updates surface dimensions after backend (re)configuration.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.input.update_surface_size(width, height);
        self.invalidate();
    }

    /// Drains strokes completed since the last call.
    pub fn take_completed_strokes(&mut self) -> Vec<Stroke> {
        std::mem::take(&mut self.completed)
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    /// The settled strokes, in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        self.model.strokes()
    }

    /// The native mirror the render backend paints from.
    pub fn native_strokes(&self) -> &[Stroke] {
        self.native.strokes()
    }

    /// The in-progress stroke, if a gesture is active.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.input.current_stroke()
    }

    /// Adds a stroke directly to the model collection.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        if !self.model.try_push(stroke, self.policy.max_strokes) {
            warn!(
                "Stroke limit ({}) reached; discarding pushed stroke",
                self.policy.max_strokes
            );
            return;
        }
        self.after_direct_mutation();
    }

    /// Replaces the model collection's contents.
    pub fn set_strokes(&mut self, strokes: Vec<Stroke>) {
        self.model.replace_all(strokes);
        self.after_direct_mutation();
    }

    /// Removes every settled stroke.
    pub fn clear(&mut self) {
        self.model.clear();
        self.after_direct_mutation();
    }

    /// Mutates the native collection directly (platform-side injection) and
    /// reconciles the model afterwards.
    pub fn mutate_native(&mut self, mutate: impl FnOnce(&mut StrokeCollection)) {
        mutate(&mut self.native);
        self.after_direct_mutation();
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// The style stamped onto new strokes.
    pub fn style(&self) -> StrokeStyle {
        self.input.style
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.input.style.color = color;
    }

    /// Sets the stroke width; non-positive values are clamped up.
    pub fn set_stroke_width(&mut self, width: f64) {
        if width <= 0.0 {
            warn!("Invalid stroke width {width:.2}, clamping to 0.1");
        }
        self.input.style.width = width.max(0.1);
    }

    /// Sets the spline subdivision density; below-floor values are clamped
    /// up to [`MIN_GRANULARITY`].
    pub fn set_granularity(&mut self, granularity: u32) {
        self.input.style.granularity = granularity.max(MIN_GRANULARITY);
    }

    pub fn granularity(&self) -> u32 {
        self.input.style.granularity
    }

    pub fn set_smoothing(&mut self, smooth: bool) {
        self.input.style.smooth = smooth;
    }

    pub fn policy(&self) -> SurfacePolicy {
        self.policy
    }

    /// Toggles multi-line mode. Disabling it trims the collections down to
    /// the most recent stroke.
    pub fn set_multi_line(&mut self, enabled: bool) {
        self.policy.multi_line = enabled;
        if !enabled && self.model.len() > 1 {
            let survivor = self.model.last().cloned();
            self.model.replace_all(survivor.into_iter().collect());
        }
        self.after_direct_mutation();
    }

    pub fn set_clear_on_finish(&mut self, enabled: bool) {
        self.policy.clear_on_finish = enabled;
    }

    pub fn set_max_strokes(&mut self, max: usize) {
        self.policy.max_strokes = max;
    }

    pub fn background(&self) -> &Paint {
        &self.background
    }

    pub fn set_background(&mut self, paint: Paint) {
        self.background = paint;
        self.invalidate();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Paints the surface onto a backend-provided Cairo context.
    ///
    /// Order: background, custom overlay hook, settled strokes from the
    /// native mirror, then the in-progress stroke.
    pub fn draw(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        self.background.fill(ctx, self.width, self.height)?;
        if let Some(hook) = &self.draw_hook {
            hook(ctx, self.width, self.height);
        }
        render_strokes(ctx, self.native.strokes());
        if let Some(stroke) = self.input.current_stroke() {
            render_stroke(ctx, stroke);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Synchronously exports the settled strokes to an encoded PNG.
    ///
    /// Returns `Ok(None)` when there is nothing to draw. Runs against a
    /// snapshot, so the surface may keep capturing while callers hold the
    /// result.
    pub fn export(
        &self,
        desired_size: Size,
        cancel: &CancelToken,
    ) -> Result<Option<Vec<u8>>, ExportError> {
        render_strokes_to_png(&self.model.snapshot(), &self.export_options(desired_size), cancel)
    }

    /// Builds a self-contained job for the async export pipeline, optionally
    /// saving to the configured export directory.
    pub fn export_request(&self, desired_size: Size, save_to_file: bool) -> ExportRequest {
        ExportRequest {
            strokes: self.model.snapshot(),
            options: self.export_options(desired_size),
            save_config: save_to_file.then(|| self.save_config.clone()),
        }
    }

    fn export_options(&self, desired_size: Size) -> ExportOptions {
        ExportOptions {
            desired_size: Some(desired_size),
            background: Some(self.background.clone()),
            canvas_size: (self.width > 0.0 && self.height > 0.0)
                .then(|| Size::new(self.width, self.height)),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn after_direct_mutation(&mut self) {
        self.reconcile();
        self.invalidate();
    }

    /// Mirrors whichever collection changed since the last pass.
    ///
    /// The model wins when both flags are set: direct model mutation is the
    /// authoritative path, native changes only flow back when the platform
    /// layer wrote to the mirror on its own.
    fn reconcile(&mut self) {
        if self.model_changed.replace(false) {
            self.sync
                .model_to_native(&self.model, &mut self.native, self.policy.multi_line);
            self.native_changed.set(false);
        } else if self.native_changed.replace(false) {
            self.sync
                .native_to_model(&self.native, &mut self.model, self.policy.multi_line);
        }
    }

    fn invalidate(&mut self) {
        if let Some(backend) = &mut self.backend {
            backend.invalidate();
        }
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}
