//! Drawpad Core Library
//!
//! Selection, manipulation, and model/view synchronization engine for an
//! interactive vector-drawing surface.

pub mod canvas;
pub mod knobs;
pub mod observer;
pub mod selection;
pub mod shapes;
pub mod view;

pub use canvas::Canvas;
pub use knobs::{KNOB_SIZE, Corner, Endpoint, Knob, KnobKind, KnobSet};
pub use observer::{ChangeCallback, ListenerRegistry};
pub use selection::{Gesture, SelectionController};
pub use shapes::{
    LineModel, OvalModel, RectangleModel, SerializableColor, ShapeId, ShapeModel, TextModel,
};
pub use view::{Drawable, FontFamily, ShapeView, ViewError, create_view};
