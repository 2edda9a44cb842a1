//! Resize and endpoint knobs for the selected shape.

use crate::shapes::ShapeModel;
use kurbo::{Point, Rect};

/// Knob hit-box edge length in scene units.
pub const KNOB_SIZE: f64 = 9.0;

/// Corner positions on a box-shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Endpoints of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// The kind of knob - determines which control point a drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobKind {
    /// Corner handle on a box-shape.
    Corner(Corner),
    /// Endpoint handle on a line.
    Endpoint(Endpoint),
}

/// A fixed-size interactive handle centered on a control point.
#[derive(Debug, Clone, Copy)]
pub struct Knob {
    pub kind: KnobKind,
    /// Square hit-box centered on the control point.
    pub rect: Rect,
}

impl Knob {
    fn new(kind: KnobKind, center: Point) -> Self {
        Self {
            kind,
            rect: Rect::from_center_size(center, (KNOB_SIZE, KNOB_SIZE)),
        }
    }

    /// The control point the knob sits on.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// The knobs for the currently selected shape.
///
/// Ephemeral: rebuilt from scratch after every geometry change so hit-boxes
/// never go stale, and emptied whenever the selection clears.
#[derive(Debug, Clone, Default)]
pub struct KnobSet {
    knobs: Vec<Knob>,
}

impl KnobSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the set for a shape's current geometry: corner knobs on the
    /// bounding box for box-shapes, endpoint knobs for lines.
    pub fn rebuild(&mut self, model: &ShapeModel) {
        self.knobs.clear();
        match model {
            ShapeModel::Line(line) => {
                self.knobs
                    .push(Knob::new(KnobKind::Endpoint(Endpoint::Start), line.start));
                self.knobs
                    .push(Knob::new(KnobKind::Endpoint(Endpoint::End), line.end));
            }
            _ => {
                let bounds = model.bounds();
                self.knobs.push(Knob::new(
                    KnobKind::Corner(Corner::TopLeft),
                    Point::new(bounds.x0, bounds.y0),
                ));
                self.knobs.push(Knob::new(
                    KnobKind::Corner(Corner::TopRight),
                    Point::new(bounds.x1, bounds.y0),
                ));
                self.knobs.push(Knob::new(
                    KnobKind::Corner(Corner::BottomLeft),
                    Point::new(bounds.x0, bounds.y1),
                ));
                self.knobs.push(Knob::new(
                    KnobKind::Corner(Corner::BottomRight),
                    Point::new(bounds.x1, bounds.y1),
                ));
            }
        }
    }

    pub fn clear(&mut self) {
        self.knobs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Knob> {
        self.knobs.iter()
    }

    /// Find the knob under a point, if any.
    pub fn hit_test(&self, point: Point) -> Option<KnobKind> {
        self.knobs
            .iter()
            .find(|knob| knob.contains(point))
            .map(|knob| knob.kind)
    }
}

/// The fixed reference point held constant while a knob is dragged: the
/// diagonally opposite corner for box-shapes, the other endpoint for lines.
pub fn anchor_for(model: &ShapeModel, knob: KnobKind) -> Point {
    match (model, knob) {
        (ShapeModel::Line(line), KnobKind::Endpoint(Endpoint::Start)) => line.end,
        (ShapeModel::Line(line), KnobKind::Endpoint(Endpoint::End)) => line.start,
        (_, KnobKind::Corner(corner)) => {
            let bounds = model.bounds();
            match corner {
                Corner::TopLeft => Point::new(bounds.x1, bounds.y1),
                Corner::TopRight => Point::new(bounds.x0, bounds.y1),
                Corner::BottomLeft => Point::new(bounds.x1, bounds.y0),
                Corner::BottomRight => Point::new(bounds.x0, bounds.y0),
            }
        }
        _ => {
            debug_assert!(false, "endpoint knob on a non-line shape");
            model.bounds().center()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{LineModel, RectangleModel};

    fn rect_model() -> ShapeModel {
        ShapeModel::Rectangle(RectangleModel::new(Point::new(10.0, 10.0), 20.0, 20.0))
    }

    #[test]
    fn test_box_shape_gets_four_corner_knobs() {
        let mut knobs = KnobSet::new();
        knobs.rebuild(&rect_model());

        assert_eq!(knobs.len(), 4);
        let centers: Vec<Point> = knobs.iter().map(|k| k.center()).collect();
        assert!(centers.contains(&Point::new(10.0, 10.0)));
        assert!(centers.contains(&Point::new(30.0, 10.0)));
        assert!(centers.contains(&Point::new(10.0, 30.0)));
        assert!(centers.contains(&Point::new(30.0, 30.0)));
    }

    #[test]
    fn test_line_gets_two_endpoint_knobs() {
        let line = ShapeModel::Line(LineModel::new(Point::new(0.0, 0.0), Point::new(50.0, 50.0)));
        let mut knobs = KnobSet::new();
        knobs.rebuild(&line);

        assert_eq!(knobs.len(), 2);
        assert_eq!(
            knobs.hit_test(Point::new(0.0, 0.0)),
            Some(KnobKind::Endpoint(Endpoint::Start))
        );
        assert_eq!(
            knobs.hit_test(Point::new(50.0, 50.0)),
            Some(KnobKind::Endpoint(Endpoint::End))
        );
    }

    #[test]
    fn test_knob_hit_box_is_fixed_size() {
        let mut knobs = KnobSet::new();
        knobs.rebuild(&rect_model());

        // Just inside the 9-unit square around the top-left corner.
        assert!(knobs.hit_test(Point::new(10.0 - KNOB_SIZE / 2.0 + 0.1, 10.0)).is_some());
        // Just outside.
        assert!(knobs.hit_test(Point::new(10.0 - KNOB_SIZE / 2.0 - 0.1, 10.0)).is_none());
    }

    #[test]
    fn test_anchor_is_opposite_corner() {
        let model = rect_model();
        assert_eq!(
            anchor_for(&model, KnobKind::Corner(Corner::BottomRight)),
            Point::new(10.0, 10.0)
        );
        assert_eq!(
            anchor_for(&model, KnobKind::Corner(Corner::TopLeft)),
            Point::new(30.0, 30.0)
        );
    }

    #[test]
    fn test_anchor_is_other_endpoint() {
        let line = ShapeModel::Line(LineModel::new(Point::new(0.0, 0.0), Point::new(50.0, 60.0)));
        assert_eq!(
            anchor_for(&line, KnobKind::Endpoint(Endpoint::Start)),
            Point::new(50.0, 60.0)
        );
        assert_eq!(
            anchor_for(&line, KnobKind::Endpoint(Endpoint::End)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_rebuild_replaces_stale_knobs() {
        let mut knobs = KnobSet::new();
        knobs.rebuild(&rect_model());
        assert_eq!(knobs.len(), 4);

        let line = ShapeModel::Line(LineModel::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        knobs.rebuild(&line);
        assert_eq!(knobs.len(), 2);

        knobs.clear();
        assert!(knobs.is_empty());
    }
}
