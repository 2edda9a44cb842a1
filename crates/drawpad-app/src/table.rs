//! Stand-in for the list-backed table view.
//!
//! Re-reads the full model list on every notification; there is no diffing
//! contract with the engine.

use drawpad_core::ShapeModel;

/// Render the model list, one JSON row per shape.
pub fn print_table(models: &[ShapeModel]) {
    println!("-- table ({} shapes) --", models.len());
    for (row, model) in models.iter().enumerate() {
        match serde_json::to_string(model) {
            Ok(json) => println!("{row:>3}  {json}"),
            Err(err) => log::error!("table row {row}: {err}"),
        }
    }
}
