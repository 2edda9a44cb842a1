//! Oval shape model.

use super::{SerializableColor, ShapeId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An oval, stored as a center point plus radii.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvalModel {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Fill color.
    pub color: SerializableColor,
}

impl OvalModel {
    /// Create a new oval. Negative radii are clamped to zero.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x: radius_x.max(0.0),
            radius_y: radius_y.max(0.0),
            color: SerializableColor::black(),
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.center = rect.center();
        self.radius_x = rect.width() / 2.0;
        self.radius_y = rect.height() / 2.0;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center.x += delta.x;
        self.center.y += delta.y;
    }
}
