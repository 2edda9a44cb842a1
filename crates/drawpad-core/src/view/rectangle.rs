//! Rectangle view.

use super::Drawable;
use crate::shapes::RectangleModel;
use kurbo::Shape as KurboShape;

/// Renders a rectangle model as a retained drawable.
#[derive(Debug, Clone)]
pub struct RectangleView {
    drawable: Drawable,
}

impl RectangleView {
    pub(crate) fn new() -> Self {
        Self {
            drawable: Drawable::new(),
        }
    }

    pub(crate) fn draw(&mut self, model: &RectangleModel) {
        self.drawable.path = model.as_rect().to_path(0.1);
        self.drawable.color = model.color.into();
    }

    pub(crate) fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}
