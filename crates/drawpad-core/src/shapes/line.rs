//! Line shape model.

use super::{SerializableColor, ShapeId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line segment between two endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineModel {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke color.
    pub color: SerializableColor,
}

impl LineModel {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            color: SerializableColor::black(),
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Replace both endpoints. Each endpoint moves independently; coincident
    /// endpoints are a valid degenerate line.
    pub(crate) fn set_endpoints(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.start.x += delta.x;
        self.start.y += delta.y;
        self.end.x += delta.x;
        self.end.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = LineModel::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_normalized() {
        let line = LineModel::new(Point::new(80.0, 10.0), Point::new(20.0, 60.0));
        let bounds = line.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_shifts_both_endpoints() {
        let mut line = LineModel::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        line.translate(Vec2::new(3.0, 4.0));
        assert_eq!(line.start, Point::new(3.0, 4.0));
        assert_eq!(line.end, Point::new(13.0, 14.0));
    }

    #[test]
    fn test_set_endpoints_independent() {
        let mut line = LineModel::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        line.set_endpoints(Point::new(5.0, 5.0), line.end);
        assert_eq!(line.start, Point::new(5.0, 5.0));
        assert_eq!(line.end, Point::new(10.0, 10.0));
    }
}
