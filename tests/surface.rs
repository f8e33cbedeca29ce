//! End-to-end capture flow: pointer events through the surface controller
//! into the collections and out through the export service.

use inkboard::DrawingSurface;
use inkboard::draw::Point;
use inkboard::export::CancelToken;
use inkboard::input::PointerEvent;
use inkboard::util::Size;

fn draw_stroke(surface: &mut DrawingSurface, points: &[(f64, f64)]) {
    let (x0, y0) = points[0];
    surface.handle_pointer(PointerEvent::Down { x: x0, y: y0 });
    for &(x, y) in &points[1..] {
        surface.handle_pointer(PointerEvent::Move { x, y });
    }
    surface.handle_pointer(PointerEvent::Up);
}

fn png_dimensions(data: &[u8]) -> (u32, u32) {
    let width = u32::from_be_bytes(data[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(data[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn captured_strokes_mirror_into_the_native_collection() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut surface = DrawingSurface::new();
    surface.set_multi_line(true);
    surface.resize(800.0, 600.0);

    draw_stroke(&mut surface, &[(10.0, 10.0), (50.0, 40.0), (90.0, 10.0)]);
    draw_stroke(&mut surface, &[(10.0, 100.0), (90.0, 100.0)]);

    assert_eq!(surface.strokes().len(), 2);
    assert_eq!(surface.native_strokes().len(), 2);
    for (model, native) in surface.strokes().iter().zip(surface.native_strokes()) {
        assert_eq!(model.points, native.points);
    }
}

#[test]
fn second_stroke_replaces_the_first_without_multi_line() {
    let mut surface = DrawingSurface::new();

    draw_stroke(&mut surface, &[(0.0, 0.0), (10.0, 0.0)]);
    draw_stroke(&mut surface, &[(0.0, 20.0), (10.0, 20.0)]);

    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(surface.strokes()[0].points[0], Point::new(0.0, 20.0));
}

#[test]
fn tap_without_motion_leaves_no_stroke() {
    let mut surface = DrawingSurface::new();

    surface.handle_pointer(PointerEvent::Down { x: 42.0, y: 42.0 });
    surface.handle_pointer(PointerEvent::Up);

    assert!(surface.strokes().is_empty());
    assert!(surface.native_strokes().is_empty());
    assert!(surface.take_completed_strokes().is_empty());
}

#[test]
fn straight_stroke_exports_at_least_its_own_extent() {
    let mut surface = DrawingSurface::new();
    surface.set_stroke_width(10.0);
    surface.set_smoothing(false);

    draw_stroke(&mut surface, &[(0.0, 0.0), (100.0, 0.0)]);

    // Desired size equals the natural bounding box plus stroke padding.
    let png = surface
        .export(Size::new(110.0, 10.0), &CancelToken::new())
        .unwrap()
        .expect("a two-point stroke must render");

    let (w, h) = png_dimensions(&png);
    assert!(w >= 100, "exported width {w} must cover the 100px stroke");
    assert!(h >= 10, "exported height {h} must cover the 10px width");
}

#[test]
fn export_of_untouched_surface_is_empty() {
    let surface = DrawingSurface::new();
    let result = surface
        .export(Size::new(128.0, 128.0), &CancelToken::new())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn clear_on_finish_supports_capture_then_export() {
    let mut surface = DrawingSurface::new();
    surface.set_clear_on_finish(true);

    draw_stroke(&mut surface, &[(0.0, 0.0), (30.0, 30.0)]);

    // The surface is visually empty but the completed stroke was delivered.
    assert!(surface.strokes().is_empty());
    let completed = surface.take_completed_strokes();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].len(), 2);
}
