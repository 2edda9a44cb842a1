//! Text view and font resolution.

use super::{Drawable, ViewError};
use crate::shapes::TextModel;
use kurbo::Shape as KurboShape;

/// Font families the renderer can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Clean sans-serif font (default).
    #[default]
    SansSerif,
    /// Serif font.
    Serif,
    /// Fixed-width font.
    Monospace,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans",
            FontFamily::Serif => "Serif",
            FontFamily::Monospace => "Mono",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::SansSerif,
            FontFamily::Serif,
            FontFamily::Monospace,
        ]
    }

    /// Resolve a font identifier. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<FontFamily> {
        match name.to_ascii_lowercase().as_str() {
            "sans" | "sans-serif" => Some(FontFamily::SansSerif),
            "serif" => Some(FontFamily::Serif),
            "mono" | "monospace" => Some(FontFamily::Monospace),
            _ => None,
        }
    }
}

/// Renders a text model as a retained drawable. The drawable carries the
/// layout box; the hosting shell lays out the actual glyphs.
#[derive(Debug, Clone)]
pub struct TextView {
    drawable: Drawable,
    font: FontFamily,
}

impl TextView {
    pub(crate) fn new(font: &str) -> Result<Self, ViewError> {
        let font =
            FontFamily::from_name(font).ok_or_else(|| ViewError::UnknownFont(font.to_string()))?;
        Ok(Self {
            drawable: Drawable::new(),
            font,
        })
    }

    /// Re-resolve the font identifier after a model font change.
    pub(crate) fn set_font(&mut self, name: &str) -> Result<(), ViewError> {
        self.font =
            FontFamily::from_name(name).ok_or_else(|| ViewError::UnknownFont(name.to_string()))?;
        Ok(())
    }

    /// The resolved font family.
    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub(crate) fn draw(&mut self, model: &TextModel) {
        self.drawable.path = model.bounds().to_path(0.1);
        self.drawable.color = model.color.into();
    }

    pub(crate) fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_known_families() {
        assert_eq!(FontFamily::from_name("sans"), Some(FontFamily::SansSerif));
        assert_eq!(FontFamily::from_name("SERIF"), Some(FontFamily::Serif));
        assert_eq!(
            FontFamily::from_name("monospace"),
            Some(FontFamily::Monospace)
        );
        assert_eq!(FontFamily::from_name("wingdings"), None);
    }

    #[test]
    fn test_every_family_round_trips_through_its_name() {
        for family in FontFamily::all() {
            assert_eq!(FontFamily::from_name(family.name()), Some(*family));
        }
    }

    #[test]
    fn test_set_font_keeps_old_family_on_error() {
        let mut view = TextView::new("sans").unwrap();
        assert!(view.set_font("wingdings").is_err());
        assert_eq!(view.font(), FontFamily::SansSerif);
    }
}
