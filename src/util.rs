//! Geometry helpers shared by the stroke model and the export service.

/// Axis-aligned rectangle in surface-local coordinates.
///
/// Used for stroke bounding boxes and for sizing export surfaces. Construction
/// fails (returns `None`) for rectangles without positive area, so degenerate
/// geometry is handled at the source instead of leaking into rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns true if the rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Requested output dimensions for an export operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_non_positive_dimensions() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_none());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_none());
        assert!(Rect::new(5.0, 5.0, 1.0, 1.0).is_some());
    }

    #[test]
    fn rect_from_min_max_computes_extent() {
        let rect = Rect::from_min_max(10.0, 20.0, 30.0, 25.0).unwrap();
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 20.0);
        assert_eq!(rect.height, 5.0);
        assert!(rect.is_valid());
    }
}
