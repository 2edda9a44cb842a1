//! Oval view.

use super::Drawable;
use crate::shapes::OvalModel;
use kurbo::{Ellipse, Shape as KurboShape};

/// Renders an oval model as a retained drawable.
#[derive(Debug, Clone)]
pub struct OvalView {
    drawable: Drawable,
}

impl OvalView {
    pub(crate) fn new() -> Self {
        Self {
            drawable: Drawable::new(),
        }
    }

    pub(crate) fn draw(&mut self, model: &OvalModel) {
        let ellipse = Ellipse::new(model.center, (model.radius_x, model.radius_y), 0.0);
        self.drawable.path = ellipse.to_path(0.1);
        self.drawable.color = model.color.into();
    }

    pub(crate) fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}
