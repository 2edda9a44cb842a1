//! Line view.

use super::Drawable;
use crate::shapes::LineModel;
use kurbo::BezPath;

/// Renders a line model as a retained drawable.
#[derive(Debug, Clone)]
pub struct LineView {
    drawable: Drawable,
}

impl LineView {
    pub(crate) fn new() -> Self {
        Self {
            drawable: Drawable::new(),
        }
    }

    pub(crate) fn draw(&mut self, model: &LineModel) {
        let mut path = BezPath::new();
        path.move_to(model.start);
        path.line_to(model.end);
        self.drawable.path = path;
        self.drawable.color = model.color.into();
    }

    pub(crate) fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}
