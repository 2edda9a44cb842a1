//! Rectangle shape model.

use super::{SerializableColor, ShapeId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle, stored as a top-left origin plus extents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleModel {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Fill color.
    pub color: SerializableColor,
}

impl RectangleModel {
    /// Create a new rectangle. Negative extents are clamped to zero.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: width.max(0.0),
            height: height.max(0.0),
            color: SerializableColor::black(),
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.position = Point::new(rect.x0, rect.y0);
        self.width = rect.width();
        self.height = rect.height();
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position.x += delta.x;
        self.position.y += delta.y;
    }
}
