//! Pointer gesture state machine for freehand stroke capture.

use crate::draw::{Point, Stroke, StrokeCollection, StrokeStyle};
use crate::surface::SurfacePolicy;
use log::{debug, warn};

/// Current gesture state.
///
/// Cycles between idle and drawing for the surface's lifetime; there is no
/// terminal state. The in-progress stroke lives only inside the `Drawing`
/// variant and is owned exclusively by this machine until promotion.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for pointer contact.
    Idle,
    /// Actively drawing a stroke (pointer held down).
    Drawing {
        /// The stroke being accumulated, point by point.
        stroke: Stroke,
    },
}

/// Processes pointer events into finished strokes.
///
/// Tracks the gesture state machine, accumulates the in-progress stroke, and
/// promotes completed strokes into the model collection. All mutation happens
/// on the caller's thread, synchronously with the platform event that caused
/// it; the struct carries no locking.
pub struct InputState {
    /// Current gesture state.
    pub state: DrawingState,
    /// Style stamped onto each new stroke at pointer-down.
    pub style: StrokeStyle,
    /// Whether the display needs to be redrawn.
    pub needs_redraw: bool,
    /// Surface width in pixels (0 until the backend reports a size).
    surface_width: f64,
    /// Surface height in pixels (0 until the backend reports a size).
    surface_height: f64,
    /// Strokes finished since the last drain.
    completed: Vec<Stroke>,
}

impl InputState {
    /// Creates an idle machine with the given stroke style.
    ///
    /// Surface dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_surface_size`); until then
    /// points are accepted unclamped.
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            state: DrawingState::Idle,
            style,
            needs_redraw: false,
            surface_width: 0.0,
            surface_height: 0.0,
            completed: Vec::new(),
        }
    }

    /// Updates surface dimensions after backend configuration.
    ///
    /// Subsequent points are clamped into `[0, width] x [0, height]` so
    /// off-surface motion cannot distort export bounding boxes.
    pub fn update_surface_size(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// The in-progress stroke, if a gesture is active.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    /// Drains strokes completed since the last call.
    pub fn take_completed(&mut self) -> Vec<Stroke> {
        std::mem::take(&mut self.completed)
    }

    /// Processes pointer-down: begins a new stroke.
    ///
    /// With multi-line mode disabled the model collection is cleared first,
    /// so at most one settled stroke exists at any time. A press while
    /// already drawing is ignored (multi-touch is collapsed to the first
    /// contact).
    pub fn on_pointer_press(
        &mut self,
        x: f64,
        y: f64,
        model: &mut StrokeCollection,
        policy: &SurfacePolicy,
    ) {
        if !matches!(self.state, DrawingState::Idle) {
            return;
        }

        if !policy.multi_line {
            model.clear();
        }

        let mut stroke = Stroke::new(self.style);
        stroke.add_point(self.clamp(Point::new(x, y)));
        self.state = DrawingState::Drawing { stroke };
        self.needs_redraw = true;
    }

    /// Processes pointer-move: appends a point to the in-progress stroke.
    pub fn on_pointer_motion(&mut self, x: f64, y: f64) {
        let point = self.clamp(Point::new(x, y));
        if let DrawingState::Drawing { stroke } = &mut self.state {
            stroke.add_point(point);
            self.needs_redraw = true;
        }
    }

    /// Processes pointer-up: finalizes the in-progress stroke.
    ///
    /// Strokes with at least 2 points are promoted into the model collection
    /// and queued as completed events; single-tap strokes are discarded
    /// rather than stored as zero-length geometry. When the policy's
    /// `clear_on_finish` is set, the collection is emptied again immediately
    /// after promotion (capture-then-export workflows).
    pub fn on_pointer_release(&mut self, model: &mut StrokeCollection, policy: &SurfacePolicy) {
        let DrawingState::Drawing { stroke } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };
        self.needs_redraw = true;

        if stroke.len() < 2 {
            debug!("Discarding degenerate stroke ({} point)", stroke.len());
            return;
        }

        if model.try_push(stroke.clone(), policy.max_strokes) {
            if policy.clear_on_finish {
                model.clear();
            }
            self.completed.push(stroke);
        } else {
            warn!(
                "Stroke limit ({}) reached; discarding new stroke",
                policy.max_strokes
            );
        }
    }

    /// Processes pointer-cancel: discards the in-progress stroke.
    ///
    /// No completion event is raised, but a redraw is still requested so the
    /// provisional stroke disappears from the screen.
    pub fn on_pointer_cancel(&mut self) {
        if matches!(self.state, DrawingState::Drawing { .. }) {
            debug!("Pointer cancelled; dropping in-progress stroke");
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    fn clamp(&self, point: Point) -> Point {
        if self.surface_width > 0.0 && self.surface_height > 0.0 {
            point.clamped(self.surface_width, self.surface_height)
        } else {
            point
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfacePolicy;

    fn machine() -> InputState {
        InputState::new(StrokeStyle::default())
    }

    fn draw_stroke(
        input: &mut InputState,
        model: &mut StrokeCollection,
        policy: &SurfacePolicy,
        points: &[(f64, f64)],
    ) {
        let (x0, y0) = points[0];
        input.on_pointer_press(x0, y0, model, policy);
        for &(x, y) in &points[1..] {
            input.on_pointer_motion(x, y);
        }
        input.on_pointer_release(model, policy);
    }

    #[test]
    fn press_move_release_promotes_stroke() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy::default();

        draw_stroke(
            &mut input,
            &mut model,
            &policy,
            &[(0.0, 0.0), (10.0, 5.0), (20.0, 10.0)],
        );

        assert_eq!(model.len(), 1);
        assert_eq!(model.last().unwrap().len(), 3);
        assert!(matches!(input.state, DrawingState::Idle));
        assert_eq!(input.take_completed().len(), 1);
    }

    #[test]
    fn single_tap_is_discarded() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy::default();

        input.on_pointer_press(5.0, 5.0, &mut model, &policy);
        input.on_pointer_release(&mut model, &policy);

        assert!(model.is_empty());
        assert!(input.take_completed().is_empty());
        assert!(input.needs_redraw);
    }

    #[test]
    fn cancel_discards_without_completion() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy::default();

        input.on_pointer_press(0.0, 0.0, &mut model, &policy);
        input.on_pointer_motion(50.0, 50.0);
        input.on_pointer_cancel();

        assert!(model.is_empty());
        assert!(input.take_completed().is_empty());
        assert!(matches!(input.state, DrawingState::Idle));
        assert!(input.needs_redraw);
    }

    #[test]
    fn single_line_mode_replaces_previous_stroke() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy {
            multi_line: false,
            ..SurfacePolicy::default()
        };

        draw_stroke(&mut input, &mut model, &policy, &[(0.0, 0.0), (10.0, 0.0)]);
        draw_stroke(&mut input, &mut model, &policy, &[(5.0, 5.0), (15.0, 5.0)]);

        assert_eq!(model.len(), 1);
        let survivor = model.last().unwrap();
        assert_eq!(survivor.points[0], Point::new(5.0, 5.0));
    }

    #[test]
    fn multi_line_mode_accumulates() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy {
            multi_line: true,
            ..SurfacePolicy::default()
        };

        draw_stroke(&mut input, &mut model, &policy, &[(0.0, 0.0), (10.0, 0.0)]);
        draw_stroke(&mut input, &mut model, &policy, &[(5.0, 5.0), (15.0, 5.0)]);

        assert_eq!(model.len(), 2);
    }

    #[test]
    fn clear_on_finish_empties_the_collection() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy {
            clear_on_finish: true,
            ..SurfacePolicy::default()
        };

        draw_stroke(&mut input, &mut model, &policy, &[(0.0, 0.0), (10.0, 0.0)]);

        // The stroke completed (event raised) but does not persist.
        assert!(model.is_empty());
        assert_eq!(input.take_completed().len(), 1);
    }

    #[test]
    fn points_are_clamped_to_surface_bounds() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy::default();
        input.update_surface_size(100.0, 100.0);

        input.on_pointer_press(-10.0, 50.0, &mut model, &policy);
        input.on_pointer_motion(200.0, 150.0);
        input.on_pointer_release(&mut model, &policy);

        let stroke = model.last().unwrap();
        assert_eq!(stroke.points[0], Point::new(0.0, 50.0));
        assert_eq!(stroke.points[1], Point::new(100.0, 100.0));
    }

    #[test]
    fn stroke_limit_discards_overflow() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy {
            multi_line: true,
            max_strokes: 1,
            ..SurfacePolicy::default()
        };

        draw_stroke(&mut input, &mut model, &policy, &[(0.0, 0.0), (10.0, 0.0)]);
        draw_stroke(&mut input, &mut model, &policy, &[(5.0, 5.0), (15.0, 5.0)]);

        assert_eq!(model.len(), 1);
        assert_eq!(input.take_completed().len(), 1);
    }

    #[test]
    fn press_while_drawing_is_ignored() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy::default();

        input.on_pointer_press(0.0, 0.0, &mut model, &policy);
        input.on_pointer_motion(10.0, 0.0);
        input.on_pointer_press(99.0, 99.0, &mut model, &policy);
        input.on_pointer_release(&mut model, &policy);

        let stroke = model.last().unwrap();
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.points[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn style_changes_apply_to_next_stroke_only() {
        let mut input = machine();
        let mut model = StrokeCollection::new();
        let policy = SurfacePolicy {
            multi_line: true,
            ..SurfacePolicy::default()
        };

        draw_stroke(&mut input, &mut model, &policy, &[(0.0, 0.0), (10.0, 0.0)]);
        input.style.width = 12.0;
        draw_stroke(&mut input, &mut model, &policy, &[(5.0, 5.0), (15.0, 5.0)]);

        assert_eq!(model.strokes()[0].width, crate::draw::DEFAULT_STROKE_WIDTH);
        assert_eq!(model.strokes()[1].width, 12.0);
    }
}
