//! Shape model definitions for the drawing surface.

mod line;
mod oval;
mod rectangle;
mod text;

pub use line::LineModel;
pub use oval::OvalModel;
pub use rectangle::RectangleModel;
pub use text::TextModel;

use kurbo::{Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The geometric and style state of one shape on the canvas.
///
/// A closed sum over the four drawable variants. Geometry mutators normalize
/// their inputs so width/height/radii never go negative; listener
/// notification after a mutation is the canvas's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeModel {
    Rectangle(RectangleModel),
    Oval(OvalModel),
    Line(LineModel),
    Text(TextModel),
}

impl ShapeModel {
    pub fn id(&self) -> ShapeId {
        match self {
            ShapeModel::Rectangle(s) => s.id,
            ShapeModel::Oval(s) => s.id,
            ShapeModel::Line(s) => s.id,
            ShapeModel::Text(s) => s.id,
        }
    }

    /// Variant name, used for logging and table rows.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeModel::Rectangle(_) => "rectangle",
            ShapeModel::Oval(_) => "oval",
            ShapeModel::Line(_) => "line",
            ShapeModel::Text(_) => "text",
        }
    }

    /// Axis-aligned box enclosing the shape.
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeModel::Rectangle(s) => s.as_rect(),
            ShapeModel::Oval(s) => s.bounds(),
            ShapeModel::Line(s) => s.bounds(),
            ShapeModel::Text(s) => s.bounds(),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ShapeModel::Rectangle(s) => s.color.into(),
            ShapeModel::Oval(s) => s.color.into(),
            ShapeModel::Line(s) => s.color.into(),
            ShapeModel::Text(s) => s.color.into(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            ShapeModel::Rectangle(s) => s.color = color.into(),
            ShapeModel::Oval(s) => s.color = color.into(),
            ShapeModel::Line(s) => s.color = color.into(),
            ShapeModel::Text(s) => s.color = color.into(),
        }
    }

    /// Translate the shape in place. Lines shift both endpoints by the same
    /// delta.
    pub fn move_by(&mut self, delta: Vec2) {
        match self {
            ShapeModel::Rectangle(s) => s.translate(delta),
            ShapeModel::Oval(s) => s.translate(delta),
            ShapeModel::Line(s) => s.translate(delta),
            ShapeModel::Text(s) => s.translate(delta),
        }
    }

    /// Reposition/resize a box-shape to an explicit rectangle. The rect is
    /// normalized so width and height are never negative. Lines are
    /// endpoint-based and ignore this operation.
    pub fn move_to_rect(&mut self, rect: Rect) {
        match self {
            ShapeModel::Rectangle(s) => s.set_rect(rect),
            ShapeModel::Oval(s) => s.set_rect(rect),
            ShapeModel::Line(_) => {}
            ShapeModel::Text(s) => s.set_rect(rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_color_round_trip() {
        let color = SerializableColor::new(10, 20, 30, 255);
        let peniko: Color = color.into();
        let back: SerializableColor = peniko.into();
        assert_eq!(color, back);
    }

    #[test]
    fn test_move_by_dispatch() {
        let mut model = ShapeModel::Rectangle(RectangleModel::new(
            Point::new(10.0, 10.0),
            20.0,
            20.0,
        ));
        model.move_by(Vec2::new(5.0, -5.0));
        let bounds = model.bounds();
        assert!((bounds.x0 - 15.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_to_rect_normalizes() {
        let mut model = ShapeModel::Oval(OvalModel::new(Point::new(0.0, 0.0), 10.0, 10.0));
        // Inverted rect: x0 > x1 and y0 > y1.
        model.move_to_rect(Rect::new(30.0, 30.0, 10.0, 10.0));
        let bounds = model.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_to_rect_ignored_for_lines() {
        let mut model = ShapeModel::Line(LineModel::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
        ));
        model.move_to_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        if let ShapeModel::Line(line) = &model {
            assert_eq!(line.end, Point::new(50.0, 50.0));
        } else {
            panic!("expected line");
        }
    }
}
