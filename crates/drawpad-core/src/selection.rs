//! Selection state machine and drag interpretation.

use crate::knobs::{Endpoint, KnobKind, KnobSet, anchor_for};
use crate::shapes::{ShapeId, ShapeModel};
use crate::view::ShapeView;
use kurbo::{Point, Rect};

/// The active pointer gesture within a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No drag in progress.
    Idle,
    /// Dragging the selected shape's body. `last` is the previous pointer
    /// position, so each move applies a delta translation.
    DraggingShape { last: Point },
    /// Dragging a knob. `anchor` is captured at gesture start and held
    /// constant for the whole drag, making the resize anchor-stable.
    DraggingKnob { knob: KnobKind, anchor: Point },
}

/// Central state machine of the core: which shape is selected, which gesture
/// is active, and where the knobs are.
///
/// The controller operates on the canvas's parallel view/model lists, which
/// are passed into every handler; it never holds references into them. The
/// selected shape is kept as the last element of both lists.
#[derive(Debug)]
pub struct SelectionController {
    selected: Option<ShapeId>,
    gesture: Gesture,
    knobs: KnobSet,
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            selected: None,
            gesture: Gesture::Idle,
            knobs: KnobSet::new(),
        }
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn knobs(&self) -> &KnobSet {
        &self.knobs
    }

    /// Index of the selected shape in the parallel lists. Resolved by id on
    /// every call so an externally deleted shape is detected rather than
    /// assumed present.
    pub fn selected_index(&self, models: &[ShapeModel]) -> Option<usize> {
        let id = self.selected?;
        models.iter().position(|model| model.id() == id)
    }

    /// Select a shape: re-home it to the end of both parallel lists (front
    /// of the z-order) and rebuild its knobs. Re-selecting an already
    /// selected shape re-raises it.
    pub fn select(
        &mut self,
        id: ShapeId,
        views: &mut Vec<ShapeView>,
        models: &mut Vec<ShapeModel>,
    ) -> bool {
        let Some(index) = models.iter().position(|model| model.id() == id) else {
            return false;
        };
        let model = models.remove(index);
        let view = views.remove(index);
        models.push(model);
        views.push(view);
        self.selected = Some(id);
        if let Some(model) = models.last() {
            self.knobs.rebuild(model);
            log::debug!("selected {} ({})", id, model.kind());
        }
        true
    }

    /// Clear the selection and its knobs. Safe to call with no selection.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.knobs.clear();
            log::debug!("selection cleared");
        }
        self.gesture = Gesture::Idle;
    }

    /// Interpret a pointer-down. Knob hits are consumed first and arm a
    /// knob drag; otherwise the front-most shape under the point is selected
    /// and armed for a body drag; an empty hit clears the selection.
    /// Returns true when the z-order/selection changed (table update due).
    pub fn pointer_down(
        &mut self,
        point: Point,
        views: &mut Vec<ShapeView>,
        models: &mut Vec<ShapeModel>,
    ) -> bool {
        if self.selected.is_some() {
            if let Some(knob) = self.knobs.hit_test(point) {
                if let Some(index) = self.selected_index(models) {
                    let anchor = anchor_for(&models[index], knob);
                    self.gesture = Gesture::DraggingKnob { knob, anchor };
                    log::debug!("knob drag armed: {knob:?}");
                    return false;
                }
            }
        }

        // Back-to-front scan: the last shape whose bounding box contains the
        // point is the front-most hit.
        let mut hit = None;
        for (index, view) in views.iter().enumerate() {
            if view.bounding_box().contains(point) {
                hit = Some(models[index].id());
            }
        }

        match hit {
            Some(id) => {
                let changed = self.select(id, views, models);
                self.gesture = Gesture::DraggingShape { last: point };
                changed
            }
            None => {
                self.clear();
                false
            }
        }
    }

    /// Apply a pointer-move to the active gesture, mutating the selected
    /// model. Returns true when geometry changed; the canvas then redraws
    /// the paired view and fires the table callback.
    pub fn pointer_drag(&mut self, point: Point, models: &mut [ShapeModel]) -> bool {
        let Some(index) = self.selected_index(models) else {
            // Target vanished mid-gesture (deleted by an external command).
            if self.gesture != Gesture::Idle {
                self.gesture = Gesture::Idle;
                self.knobs.clear();
            }
            return false;
        };

        match self.gesture {
            Gesture::Idle => false,
            Gesture::DraggingShape { last } => {
                models[index].move_by(point - last);
                self.gesture = Gesture::DraggingShape { last: point };
                self.knobs.rebuild(&models[index]);
                true
            }
            Gesture::DraggingKnob { knob, anchor } => {
                match knob {
                    KnobKind::Corner(_) => {
                        // Axis-aligned box spanning anchor and pointer;
                        // from_points normalizes, so dragging past the
                        // anchor flips the box instead of going negative.
                        models[index].move_to_rect(Rect::from_points(anchor, point));
                    }
                    KnobKind::Endpoint(endpoint) => {
                        if let ShapeModel::Line(line) = &mut models[index] {
                            let (start, end) = match endpoint {
                                Endpoint::Start => (point, anchor),
                                Endpoint::End => (anchor, point),
                            };
                            line.set_endpoints(start, end);
                        }
                    }
                }
                self.knobs.rebuild(&models[index]);
                true
            }
        }
    }

    /// End the active gesture and rebuild knobs for the final geometry.
    pub fn pointer_release(&mut self, models: &[ShapeModel]) {
        self.gesture = Gesture::Idle;
        match self.selected_index(models) {
            Some(index) => self.knobs.rebuild(&models[index]),
            None => self.knobs.clear(),
        }
    }

    /// Rebuild knob hit-boxes for the selected shape's current geometry.
    pub fn refresh_knobs(&mut self, models: &[ShapeModel]) {
        if let Some(index) = self.selected_index(models) {
            self.knobs.rebuild(&models[index]);
        }
    }

    /// Re-home the selected shape to the end of both lists (front-most).
    /// No-op without a selection.
    pub fn raise_to_front(
        &mut self,
        views: &mut Vec<ShapeView>,
        models: &mut Vec<ShapeModel>,
    ) -> bool {
        let Some(index) = self.selected_index(models) else {
            return false;
        };
        let model = models.remove(index);
        let view = views.remove(index);
        models.push(model);
        views.push(view);
        self.refresh_knobs(models);
        true
    }

    /// Re-home the selected shape to index 0 of both lists (back-most).
    /// The shape stays selected. No-op without a selection.
    pub fn lower_to_back(
        &mut self,
        views: &mut Vec<ShapeView>,
        models: &mut Vec<ShapeModel>,
    ) -> bool {
        let Some(index) = self.selected_index(models) else {
            return false;
        };
        let model = models.remove(index);
        let view = views.remove(index);
        models.insert(0, model);
        views.insert(0, view);
        self.refresh_knobs(models);
        true
    }

    /// Remove the selected shape from both lists and discard the knobs.
    /// Returns the removed shape's id so the canvas can unregister its
    /// listener. No-op without a selection.
    pub fn delete_selected(
        &mut self,
        views: &mut Vec<ShapeView>,
        models: &mut Vec<ShapeModel>,
    ) -> Option<ShapeId> {
        let index = self.selected_index(models)?;
        let id = models[index].id();
        models.remove(index);
        views.remove(index);
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.knobs.clear();
        log::debug!("deleted {id}");
        Some(id)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
