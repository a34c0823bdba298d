//! Float-space geometry for the interaction core.
//!
//! The controller works in an abstract unit space, not terminal cells, so
//! these types are deliberately independent of Ratatui's `Rect`.  The host
//! converts cell coordinates into units before feeding the controller.

/// A point in interaction-unit space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in interaction-unit space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ───────────────────────────────────────── pointer sample ────

/// One pointer-move observation, relative to the card.
///
/// Rebuilt on every move event, consumed by the controller, and discarded —
/// nothing here outlives the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position in unit space.
    pub x: f64,
    pub y: f64,
    /// Center of the card's current layout rect.
    pub card_center: Point,
    /// Pointer minus center.
    pub offset: Point,
    /// Euclidean norm of `offset`.
    pub distance: f64,
}

impl PointerSample {
    /// Capture a sample against the card's current rect.
    ///
    /// Before the first layout pass the rect is unknown; the center falls
    /// back to the origin and the card simply stays inert until layout
    /// catches up.
    pub fn capture(pointer: Point, card: Option<RectF>) -> Self {
        let card_center = card.map(|r| r.center()).unwrap_or(Point::ORIGIN);
        let offset = Point::new(pointer.x - card_center.x, pointer.y - card_center.y);
        let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();
        Self {
            x: pointer.x,
            y: pointer.y,
            card_center,
            offset,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rect_center() {
        let r = RectF::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r.center(), Point::new(30.0, 50.0));
    }

    #[test]
    fn sample_offset_and_distance() {
        let card = RectF::new(0.0, 0.0, 200.0, 100.0); // center (100, 50)
        let s = PointerSample::capture(Point::new(103.0, 54.0), Some(card));
        assert_eq!(s.card_center, Point::new(100.0, 50.0));
        assert_eq!(s.offset, Point::new(3.0, 4.0));
        assert!((s.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn missing_rect_falls_back_to_origin() {
        let s = PointerSample::capture(Point::new(30.0, 40.0), None);
        assert_eq!(s.card_center, Point::ORIGIN);
        assert_eq!(s.offset, Point::new(30.0, 40.0));
        assert!((s.distance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn sample_at_center_has_zero_distance() {
        let card = RectF::new(-50.0, -50.0, 100.0, 100.0);
        let s = PointerSample::capture(Point::ORIGIN, Some(card));
        assert_eq!(s.offset, Point::ORIGIN);
        assert_eq!(s.distance, 0.0);
    }
}
