use std::io::{self, Read, Write};

use serde_json::Value;
use thiserror::Error;

use openstage_core::{Layer, Layout};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed scene data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Scene element is not an object")]
    NotAnObject,
}

// ── Structured-element round trip ─────────────────────────────────────

/// Emit a layer as a structured element. The field set is exactly
/// `{name, isVisible, cameras[]}` in that order, and each camera is
/// `{defaultSize, defaultViewport, x1, y1, x2, y2, width, height}`, for
/// compatibility with existing saved layouts.
pub fn layer_to_element(layer: &Layer) -> Result<Value, SceneError> {
    Ok(serde_json::to_value(layer)?)
}

/// Populate a layer from a structured element.
pub fn layer_from_element(element: &Value) -> Result<Layer, SceneError> {
    if !element.is_object() {
        return Err(SceneError::NotAnObject);
    }
    Ok(serde_json::from_value(element.clone())?)
}

/// Emit a whole layout, layers in stack order and instances in placement
/// order, as a structured element.
pub fn layout_to_element(layout: &Layout) -> Result<Value, SceneError> {
    Ok(serde_json::to_value(layout)?)
}

/// Populate a layout from a structured element.
pub fn layout_from_element(element: &Value) -> Result<Layout, SceneError> {
    if !element.is_object() {
        return Err(SceneError::NotAnObject);
    }
    Ok(serde_json::from_value(element.clone())?)
}

// ── Stream readers and writers ────────────────────────────────────────

/// Read a layout from a JSON stream.
pub fn read_layout<R: Read>(reader: R) -> Result<Layout, SceneError> {
    let layout: Layout = serde_json::from_reader(reader)?;
    log::info!(
        "Loaded layout {}: {} layers, {} instances",
        layout.name,
        layout.layer_count(),
        layout.instance_count()
    );
    Ok(layout)
}

/// Write a layout to a JSON stream, pretty-printed.
pub fn write_layout<W: Write>(writer: W, layout: &Layout) -> Result<(), SceneError> {
    serde_json::to_writer_pretty(writer, layout)?;
    log::info!("Saved layout {}", layout.name);
    Ok(())
}
