//! Text shape model.

use super::{SerializableColor, ShapeId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approximate glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Minimum rendered width so empty text stays selectable.
const MIN_WIDTH: f64 = 20.0;

/// Default font identifier for new text shapes.
pub(crate) const DEFAULT_FONT: &str = "sans";

/// A text shape. The font field is an identifier resolved to a family by the
/// view factory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModel {
    pub(crate) id: ShapeId,
    /// Position (top-left corner of the text box).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font identifier.
    pub font: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Text color.
    pub color: SerializableColor,
}

impl TextModel {
    /// Create a new text shape with the default font.
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content: content.into(),
            font: DEFAULT_FONT.to_string(),
            font_size: 16.0,
            color: SerializableColor::black(),
        }
    }

    /// Approximate layout width; the hosting shell's text engine owns the
    /// real metrics.
    pub fn width(&self) -> f64 {
        (self.content.chars().count() as f64 * self.font_size * CHAR_WIDTH_FACTOR).max(MIN_WIDTH)
    }

    pub fn height(&self) -> f64 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width(),
            self.position.y + self.height(),
        )
    }

    /// Box-resize a text shape: reposition to the rect origin and rescale
    /// the font from the rect height. Width stays content-derived.
    pub(crate) fn set_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.position = Point::new(rect.x0, rect.y0);
        self.font_size = (rect.height() / LINE_HEIGHT_FACTOR).max(1.0);
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position.x += delta.x;
        self.position.y += delta.y;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn set_font(&mut self, font: String) {
        self.font = font;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let text = TextModel::new(Point::new(0.0, 0.0), "Hello");
        assert_eq!(text.font, DEFAULT_FONT);
        assert!((text.font_size - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_content_keeps_min_width() {
        let text = TextModel::new(Point::new(0.0, 0.0), "");
        assert!(text.width() >= MIN_WIDTH);
        assert!(text.bounds().width() >= MIN_WIDTH);
    }

    #[test]
    fn test_width_grows_with_content() {
        let short = TextModel::new(Point::new(0.0, 0.0), "hi");
        let long = TextModel::new(Point::new(0.0, 0.0), "a considerably longer string");
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_set_rect_rescales_font() {
        let mut text = TextModel::new(Point::new(0.0, 0.0), "Hello");
        text.set_rect(Rect::new(10.0, 10.0, 100.0, 10.0 + 24.0 * LINE_HEIGHT_FACTOR));
        assert_eq!(text.position, Point::new(10.0, 10.0));
        assert!((text.font_size - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_rect_clamps_font_size() {
        let mut text = TextModel::new(Point::new(0.0, 0.0), "Hello");
        text.set_rect(Rect::new(10.0, 10.0, 10.0, 10.0));
        assert!(text.font_size >= 1.0);
    }
}
