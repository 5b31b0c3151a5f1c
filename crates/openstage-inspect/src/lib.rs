//! # OpenStage Inspect
//!
//! Multi-selection property synchronization engine: merges the reflective
//! property lists of every selected entity into a single ordered view,
//! pushes it through an abstract property surface, and propagates edits
//! made on the surface back onto every selected entity.

pub mod catalog;
pub mod engine;
pub mod surface;

pub use catalog::{choose_object_type, ObjectTypeEntry, ObjectTypePicker};
pub use engine::SyncEngine;
pub use surface::{PropertyRow, PropertySurface, MULTIPLE_VALUES};
