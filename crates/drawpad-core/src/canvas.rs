//! Canvas container: parallel view/model lists, pointer dispatch, commands.

use crate::observer::{ChangeCallback, ListenerRegistry};
use crate::selection::SelectionController;
use crate::shapes::{ShapeId, ShapeModel};
use crate::view::{ShapeView, ViewError, create_view};
use kurbo::Point;
use peniko::Color;

/// The drawing surface: owns the ordered parallel lists of views and models,
/// hosts the selection controller, and notifies the external table view
/// after every mutating operation.
///
/// The view list and model list are always the same length and
/// index-aligned; every operation that mutates one mutates the other in the
/// same step. Z-order is list position, last element front-most.
pub struct Canvas {
    views: Vec<ShapeView>,
    models: Vec<ShapeModel>,
    listeners: ListenerRegistry,
    controller: SelectionController,
    on_change: Option<ChangeCallback>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            models: Vec::new(),
            listeners: ListenerRegistry::new(),
            controller: SelectionController::new(),
            on_change: None,
        }
    }

    /// Register the table-view callback, replacing any previous one. It
    /// fires with a read-only model snapshot after every mutating operation;
    /// the table is expected to re-read the whole list each time.
    pub fn set_on_change(&mut self, callback: impl FnMut(&[ShapeModel]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Models in z-order (back to front).
    pub fn models(&self) -> &[ShapeModel] {
        &self.models
    }

    /// Views in z-order, index-aligned with `models`.
    pub fn views(&self) -> &[ShapeView] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The hosted selection controller, for selection and gesture state.
    pub fn selection(&self) -> &SelectionController {
        &self.controller
    }

    /// Id of the selected shape, if any.
    pub fn get_selected(&self) -> Option<ShapeId> {
        self.controller.selected()
    }

    /// Model of the selected shape, for the property inspector.
    pub fn selected_model(&self) -> Option<&ShapeModel> {
        let index = self.controller.selected_index(&self.models)?;
        Some(&self.models[index])
    }

    /// Add a shape: build the matching view, register it as the model's
    /// listener, draw it, and select it. Newly added shapes are always
    /// selected.
    pub fn add_shape(&mut self, model: ShapeModel) -> Result<ShapeId, ViewError> {
        debug_assert!(
            !self.listeners.is_notifying(),
            "mutation from within a change callback"
        );
        let id = model.id();
        let kind = model.kind();
        let view = create_view(&model)?;
        self.listeners.register(id);
        self.views.push(view);
        self.models.push(model);
        log::debug!("added {id} ({kind})");
        if self.controller.select(id, &mut self.views, &mut self.models) {
            self.emit_changed();
        }
        Ok(id)
    }

    /// Pointer-down from the hosting shell, in scene coordinates.
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.reentrant() {
            return;
        }
        if self
            .controller
            .pointer_down(point, &mut self.views, &mut self.models)
        {
            self.emit_changed();
        }
    }

    /// Pointer-move while the button is held. Each event runs the full
    /// pipeline before the next: model update, knob rebuild, view redraw,
    /// table notification.
    pub fn on_pointer_drag(&mut self, point: Point) {
        if self.reentrant() {
            return;
        }
        if self.controller.pointer_drag(point, &mut self.models) {
            self.redraw_selected();
            self.emit_changed();
        }
    }

    /// Pointer-release ends the active gesture.
    pub fn on_pointer_release(&mut self) {
        if self.reentrant() {
            return;
        }
        self.controller.pointer_release(&self.models);
    }

    /// Delete the selected shape and unregister its listener. No-op when
    /// nothing is selected.
    pub fn delete_selected(&mut self) {
        if self.reentrant() {
            return;
        }
        if let Some(id) = self
            .controller
            .delete_selected(&mut self.views, &mut self.models)
        {
            self.listeners.unregister(id);
            self.emit_changed();
        }
    }

    /// Move the selected shape to the front of the z-order. No-op when
    /// nothing is selected.
    pub fn move_to_front(&mut self) {
        if self.reentrant() {
            return;
        }
        if self
            .controller
            .raise_to_front(&mut self.views, &mut self.models)
        {
            self.emit_changed();
        }
    }

    /// Move the selected shape to the back of the z-order. No-op when
    /// nothing is selected.
    pub fn move_to_back(&mut self) {
        if self.reentrant() {
            return;
        }
        if self
            .controller
            .lower_to_back(&mut self.views, &mut self.models)
        {
            self.emit_changed();
        }
    }

    /// Remove every shape and model. Safe to call with or without an active
    /// selection, and on an already empty canvas.
    pub fn clear_canvas(&mut self) {
        if self.reentrant() {
            return;
        }
        self.controller.clear();
        self.views.clear();
        self.models.clear();
        self.listeners.clear();
        self.emit_changed();
    }

    /// Set the selected shape's color. No-op when nothing is selected. The
    /// redraw happens through the listener path, not a direct view call.
    pub fn set_color(&mut self, color: Color) {
        if self.reentrant() {
            return;
        }
        let Some(index) = self.controller.selected_index(&self.models) else {
            return;
        };
        self.models[index].set_color(color);
        self.notify_model(index);
        self.emit_changed();
    }

    /// Replace the selected text shape's content. No-op unless the selected
    /// shape is text.
    pub fn set_text_content(&mut self, content: impl Into<String>) {
        if self.reentrant() {
            return;
        }
        let Some(index) = self.controller.selected_index(&self.models) else {
            return;
        };
        let ShapeModel::Text(text) = &mut self.models[index] else {
            return;
        };
        text.set_content(content.into());
        // Content changes the layout box, so knobs must follow.
        self.controller.refresh_knobs(&self.models);
        self.notify_model(index);
        self.emit_changed();
    }

    /// Change the selected text shape's font identifier. Fails when the
    /// identifier cannot be resolved, leaving the model untouched. No-op
    /// when the selection is absent or not text.
    pub fn set_font(&mut self, font: &str) -> Result<(), ViewError> {
        if self.reentrant() {
            return Ok(());
        }
        let Some(index) = self.controller.selected_index(&self.models) else {
            return Ok(());
        };
        match (&mut self.models[index], &mut self.views[index]) {
            (ShapeModel::Text(text), ShapeView::Text(view)) => {
                view.set_font(font)?;
                text.set_font(font.to_string());
            }
            _ => return Ok(()),
        }
        self.notify_model(index);
        self.emit_changed();
        Ok(())
    }

    /// Redraw every view from its model (full paint pass).
    pub fn redraw_all(&mut self) {
        for index in 0..self.models.len() {
            self.notify_model(index);
        }
    }

    /// Notify a model's single listener - its paired view - of a mutation.
    fn notify_model(&mut self, index: usize) {
        let model = &self.models[index];
        if self.listeners.is_registered(model.id()) {
            self.views[index].draw(model);
        }
    }

    fn redraw_selected(&mut self) {
        if let Some(index) = self.controller.selected_index(&self.models) {
            self.notify_model(index);
        }
    }

    /// Fire the table callback with a read-only snapshot of the model list.
    fn emit_changed(&mut self) {
        if !self.listeners.begin_notify() {
            return;
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.models);
        }
        self.listeners.end_notify();
    }

    /// True while the change callback is running; mutations arriving then
    /// are dropped.
    fn reentrant(&self) -> bool {
        if self.listeners.is_notifying() {
            log::warn!("canvas mutation attempted from within a change callback; ignoring");
            return true;
        }
        false
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
