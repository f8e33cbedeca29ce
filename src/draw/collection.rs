//! Observable stroke container.

use super::stroke::Stroke;

/// Callback invoked after the collection's contents change.
///
/// Listeners must not touch the collection they observe; they typically just
/// set a flag that the owning surface reconciles on its next pass.
pub type ChangeListener = Box<dyn FnMut()>;

/// Ordered container of finished strokes with change observation.
///
/// Holds strokes in draw order (first = bottom layer, last = top layer) and
/// notifies a single listener after every mutation. The listener slot can be
/// temporarily detached; the synchronizer does this while repopulating a
/// mirror collection so the write-back does not echo another notification.
#[derive(Default)]
pub struct StrokeCollection {
    strokes: Vec<Stroke>,
    listener: Option<ChangeListener>,
}

impl StrokeCollection {
    /// Creates a new empty collection with no listener attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strokes currently held.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when the collection holds no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Read access to the strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The most recently added stroke, if any.
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    /// Returns an owned copy of the contents, for handing to the export
    /// service (which must not observe live mutation, see the export docs).
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    /// Adds a stroke on top of the existing ones.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.notify();
    }

    /// Attempts to add a stroke, enforcing a maximum count when `max` > 0.
    ///
    /// Returns `true` if the stroke was added, `false` if the limit would be
    /// exceeded.
    pub fn try_push(&mut self, stroke: Stroke, max: usize) -> bool {
        if max == 0 || self.strokes.len() < max {
            self.push(stroke);
            true
        } else {
            false
        }
    }

    /// Removes all strokes. Notifies only when something was actually removed.
    pub fn clear(&mut self) {
        if !self.strokes.is_empty() {
            self.strokes.clear();
            self.notify();
        }
    }

    /// Replaces the entire contents in one operation (single notification).
    pub fn replace_all(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
        self.notify();
    }

    /// Installs the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: ChangeListener) {
        self.listener = Some(listener);
    }

    /// Detaches and returns the current listener.
    ///
    /// While detached, mutations proceed silently. Pair with
    /// [`restore_listener`](Self::restore_listener).
    pub fn take_listener(&mut self) -> Option<ChangeListener> {
        self.listener.take()
    }

    /// Reattaches a listener previously removed with
    /// [`take_listener`](Self::take_listener).
    pub fn restore_listener(&mut self, listener: Option<ChangeListener>) {
        self.listener = listener;
    }

    fn notify(&mut self) {
        if let Some(listener) = &mut self.listener {
            listener();
        }
    }
}

impl std::fmt::Debug for StrokeCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrokeCollection")
            .field("strokes", &self.strokes)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
