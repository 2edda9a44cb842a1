//! Shape views: per-variant renderers bound 1:1 to shape models.
//!
//! A view holds only rendering state derivable from its model: a retained
//! drawable (outline path plus resolved color) recomputed from the model on
//! every draw call, so it never caches stale geometry. Rasterization belongs
//! to the hosting shell; this crate stops at drawables.

mod line;
mod oval;
mod rectangle;
mod text;

pub use line::LineView;
pub use oval::OvalView;
pub use rectangle::RectangleView;
pub use text::{FontFamily, TextView};

use crate::shapes::ShapeModel;
use kurbo::{BezPath, Rect, Shape as KurboShape};
use peniko::Color;
use thiserror::Error;

/// Errors raised while constructing a view for a model.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The model names a font identifier the renderer cannot resolve.
    #[error("unknown font identifier: {0}")]
    UnknownFont(String),
}

/// Retained rendering output of a view.
#[derive(Debug, Clone)]
pub struct Drawable {
    /// Outline path in scene coordinates.
    pub path: BezPath,
    /// Resolved draw color.
    pub color: Color,
}

impl Drawable {
    pub(crate) fn new() -> Self {
        Self {
            path: BezPath::new(),
            color: Color::BLACK,
        }
    }
}

/// A view paired with exactly one shape model for its entire lifetime.
#[derive(Debug, Clone)]
pub enum ShapeView {
    Rectangle(RectangleView),
    Oval(OvalView),
    Line(LineView),
    Text(TextView),
}

/// Construct the view matching a model variant and bind it with an initial
/// draw. Fails when a text model names an unresolvable font identifier; no
/// default is substituted.
pub fn create_view(model: &ShapeModel) -> Result<ShapeView, ViewError> {
    let mut view = match model {
        ShapeModel::Rectangle(_) => ShapeView::Rectangle(RectangleView::new()),
        ShapeModel::Oval(_) => ShapeView::Oval(OvalView::new()),
        ShapeModel::Line(_) => ShapeView::Line(LineView::new()),
        ShapeModel::Text(text) => ShapeView::Text(TextView::new(&text.font)?),
    };
    view.draw(model);
    Ok(view)
}

impl ShapeView {
    /// Recompute the drawable from the model's current geometry and color.
    pub fn draw(&mut self, model: &ShapeModel) {
        match (self, model) {
            (ShapeView::Rectangle(view), ShapeModel::Rectangle(model)) => view.draw(model),
            (ShapeView::Oval(view), ShapeModel::Oval(model)) => view.draw(model),
            (ShapeView::Line(view), ShapeModel::Line(model)) => view.draw(model),
            (ShapeView::Text(view), ShapeModel::Text(model)) => view.draw(model),
            _ => debug_assert!(false, "view paired with mismatched model variant"),
        }
    }

    /// Axis-aligned box enclosing the rendered shape, used for hit-testing.
    pub fn bounding_box(&self) -> Rect {
        self.drawable().path.bounding_box()
    }

    pub fn drawable(&self) -> &Drawable {
        match self {
            ShapeView::Rectangle(view) => view.drawable(),
            ShapeView::Oval(view) => view.drawable(),
            ShapeView::Line(view) => view.drawable(),
            ShapeView::Text(view) => view.drawable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{LineModel, OvalModel, RectangleModel, TextModel};
    use kurbo::Point;

    #[test]
    fn test_factory_matches_variant() {
        let rect = ShapeModel::Rectangle(RectangleModel::new(Point::new(0.0, 0.0), 10.0, 10.0));
        assert!(matches!(
            create_view(&rect),
            Ok(ShapeView::Rectangle(_))
        ));

        let oval = ShapeModel::Oval(OvalModel::new(Point::new(0.0, 0.0), 5.0, 5.0));
        assert!(matches!(create_view(&oval), Ok(ShapeView::Oval(_))));

        let line = ShapeModel::Line(LineModel::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        assert!(matches!(create_view(&line), Ok(ShapeView::Line(_))));

        let text = ShapeModel::Text(TextModel::new(Point::new(0.0, 0.0), "hi"));
        assert!(matches!(create_view(&text), Ok(ShapeView::Text(_))));
    }

    #[test]
    fn test_factory_rejects_unknown_font() {
        let mut text = TextModel::new(Point::new(0.0, 0.0), "hi");
        text.font = "comic-sans-3000".to_string();
        let result = create_view(&ShapeModel::Text(text));
        assert!(matches!(result, Err(ViewError::UnknownFont(_))));
    }

    #[test]
    fn test_bounding_box_tracks_model() {
        let model = ShapeModel::Rectangle(RectangleModel::new(Point::new(10.0, 20.0), 30.0, 40.0));
        let view = create_view(&model).unwrap();
        let bbox = view.bounding_box();
        assert!((bbox.x0 - 10.0).abs() < 1e-9);
        assert!((bbox.y0 - 20.0).abs() < 1e-9);
        assert!((bbox.x1 - 40.0).abs() < 1e-9);
        assert!((bbox.y1 - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_redraw_refreshes_drawable() {
        let mut model = ShapeModel::Line(LineModel::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        ));
        let mut view = create_view(&model).unwrap();

        model.move_by(kurbo::Vec2::new(0.0, 50.0));
        view.draw(&model);

        let bbox = view.bounding_box();
        assert!((bbox.y0 - 50.0).abs() < 1e-9);
    }
}
