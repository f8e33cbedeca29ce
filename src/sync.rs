//! Bidirectional synchronization between the model and native collections.
//!
//! The model collection is what callers observe and export from; the native
//! collection is the mirror the render backend paints from. Both must hold
//! equivalent data at all times, but reacting to one side's change
//! notification by writing to the other side would re-trigger the other
//! side's own notification and recurse. The synchronizer breaks that echo by
//! detaching the target's listener for the duration of the write-back.
//!
//! This is a reentrancy guard for a single-threaded notification cycle, not
//! a concurrency primitive; all collection mutation happens on one logical
//! thread.

use crate::draw::{Stroke, StrokeCollection};

/// Mirrors stroke collections in either direction without update echoes.
#[derive(Debug, Default)]
pub struct CollectionSync;

impl CollectionSync {
    pub fn new() -> Self {
        Self
    }

    /// Rebuilds the native collection from the model.
    ///
    /// Skipped entirely when both collections already hold the same number
    /// of strokes: content-only changes flow through the model's direct
    /// mutation path, never through the collection-changed path, so count
    /// equality is a sufficient idempotence check.
    pub fn model_to_native(
        &self,
        model: &StrokeCollection,
        native: &mut StrokeCollection,
        multi_line: bool,
    ) {
        Self::mirror(model, native, multi_line);
    }

    /// Rebuilds the model collection from the native mirror.
    ///
    /// Used when a caller mutates the native collection directly (e.g. a
    /// platform layer injecting strokes); the same trim policy and echo
    /// guard apply.
    pub fn native_to_model(
        &self,
        native: &StrokeCollection,
        model: &mut StrokeCollection,
        multi_line: bool,
    ) {
        Self::mirror(native, model, multi_line);
    }

    fn mirror(source: &StrokeCollection, target: &mut StrokeCollection, multi_line: bool) {
        if source.len() == target.len() {
            return;
        }

        // Detach the target's listener so the repopulation below cannot echo
        // back as another collection-changed notification.
        let listener = target.take_listener();
        target.replace_all(trimmed_copy(source, multi_line));
        target.restore_listener(listener);
    }
}

/// Deep-copies the source strokes, applying the multi-line trim policy.
///
/// With multi-line mode off, only the most recent stroke survives. Clones
/// are value-equivalent copies; the two collections never share stroke
/// storage.
fn trimmed_copy(source: &StrokeCollection, multi_line: bool) -> Vec<Stroke> {
    if !multi_line && source.len() > 1 {
        source.last().cloned().into_iter().collect()
    } else {
        source.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, Stroke, StrokeStyle};
    use std::cell::Cell;
    use std::rc::Rc;

    fn stroke_at(x: f64) -> Stroke {
        Stroke::from_points(
            vec![Point::new(x, 0.0), Point::new(x + 10.0, 10.0)],
            StrokeStyle::default(),
        )
    }

    #[test]
    fn mirror_copies_all_strokes_in_multi_line_mode() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        model.push(stroke_at(0.0));
        model.push(stroke_at(20.0));
        sync.model_to_native(&model, &mut native, true);

        assert_eq!(native.len(), 2);
        assert_eq!(native.strokes()[1].points[0], Point::new(20.0, 0.0));
    }

    #[test]
    fn mirror_trims_to_last_stroke_in_single_line_mode() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        model.push(stroke_at(0.0));
        model.push(stroke_at(20.0));
        model.push(stroke_at(40.0));
        sync.model_to_native(&model, &mut native, false);

        assert_eq!(native.len(), 1);
        assert_eq!(native.strokes()[0].points[0], Point::new(40.0, 0.0));
    }

    #[test]
    fn equal_counts_short_circuit_the_sync() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        model.push(stroke_at(0.0));
        native.push(stroke_at(99.0));

        // Counts match, so the native contents are left untouched.
        sync.model_to_native(&model, &mut native, true);
        assert_eq!(native.strokes()[0].points[0], Point::new(99.0, 0.0));
    }

    #[test]
    fn repeated_sync_mutates_target_at_most_once() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        model.push(stroke_at(0.0));
        model.push(stroke_at(20.0));

        sync.model_to_native(&model, &mut native, true);
        sync.model_to_native(&model, &mut native, true);

        assert_eq!(native.len(), 2);
    }

    #[test]
    fn target_listener_does_not_fire_during_sync() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        native.set_listener(Box::new(move || counter.set(counter.get() + 1)));

        model.push(stroke_at(0.0));
        sync.model_to_native(&model, &mut native, true);

        assert_eq!(hits.get(), 0, "sync write-back must not echo");

        // The listener is reattached afterwards and still works.
        native.push(stroke_at(50.0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn copies_are_value_equivalent_not_shared() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        model.push(stroke_at(0.0));
        sync.model_to_native(&model, &mut native, true);

        let src = &model.strokes()[0];
        let dst = &native.strokes()[0];
        assert_eq!(src.points, dst.points);
        assert_eq!(src.color, dst.color);
        assert_eq!(src.width, dst.width);
        assert_eq!(src.granularity(), dst.granularity());
        assert!(!std::ptr::eq(src, dst));
    }

    #[test]
    fn native_to_model_applies_the_same_policy() {
        let sync = CollectionSync::new();
        let mut model = StrokeCollection::new();
        let mut native = StrokeCollection::new();

        native.push(stroke_at(0.0));
        native.push(stroke_at(20.0));
        sync.native_to_model(&native, &mut model, false);

        assert_eq!(model.len(), 1);
        assert_eq!(model.strokes()[0].points[0], Point::new(20.0, 0.0));
    }
}
