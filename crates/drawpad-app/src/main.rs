//! Headless demo shell.
//!
//! Plays the external collaborators the engine expects: the hosting UI shell
//! (pointer events and commands in scene coordinates) and the table view
//! (re-reads the model list on every change notification).

mod table;

use drawpad_core::{Canvas, LineModel, OvalModel, RectangleModel, ShapeModel, TextModel, ViewError};
use kurbo::Point;
use peniko::Color;

fn main() -> Result<(), ViewError> {
    env_logger::init();
    log::info!("Starting drawpad demo");

    let mut canvas = Canvas::new();
    canvas.set_on_change(table::print_table);

    // Build a small scene; each added shape comes up selected.
    canvas.add_shape(ShapeModel::Rectangle(RectangleModel::new(
        Point::new(40.0, 40.0),
        120.0,
        80.0,
    )))?;
    canvas.add_shape(ShapeModel::Oval(OvalModel::new(
        Point::new(160.0, 100.0),
        50.0,
        30.0,
    )))?;
    canvas.add_shape(ShapeModel::Line(LineModel::new(
        Point::new(20.0, 200.0),
        Point::new(220.0, 240.0),
    )))?;
    canvas.add_shape(ShapeModel::Text(TextModel::new(
        Point::new(60.0, 260.0),
        "Hello",
    )))?;

    // Drag the oval by its body: click inside it, pull, release.
    log::info!("dragging the oval");
    canvas.on_pointer_down(Point::new(160.0, 100.0));
    canvas.on_pointer_drag(Point::new(180.0, 110.0));
    canvas.on_pointer_drag(Point::new(200.0, 120.0));
    canvas.on_pointer_release();

    // Resize the rectangle from its bottom-right knob.
    log::info!("resizing the rectangle");
    canvas.on_pointer_down(Point::new(100.0, 80.0)); // select it
    canvas.on_pointer_down(Point::new(160.0, 120.0)); // grab the knob
    canvas.on_pointer_drag(Point::new(200.0, 160.0));
    canvas.on_pointer_release();

    // Recolor the selection, push it behind everything, then delete it.
    canvas.set_color(Color::from_rgba8(200, 30, 30, 255));
    canvas.move_to_back();
    canvas.delete_selected();

    if let Some(model) = canvas.selected_model() {
        log::info!("selection after delete: {} ({})", model.id(), model.kind());
    } else {
        log::info!("no selection after delete");
    }

    canvas.redraw_all();
    for (view, model) in canvas.views().iter().zip(canvas.models()) {
        log::info!("{} drawable box: {:?}", model.kind(), view.bounding_box());
    }

    canvas.clear_canvas();
    log::info!("canvas cleared, {} shapes left", canvas.len());
    Ok(())
}
