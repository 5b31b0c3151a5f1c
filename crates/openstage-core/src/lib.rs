//! # OpenStage Core
//!
//! Scene model for the OpenStage authoring backend: render layers and their
//! cameras, placed object instances, the selection set, the reflective
//! property contract shared by every selectable entity, and the spatial
//! picking index used to build selections from the canvas.
//!
//! This crate is the heart of the OpenStage editing kernel.

pub mod properties;
pub mod layer;
pub mod instance;
pub mod layout;
pub mod selection;
pub mod spatial;

pub use layout::Layout;
pub use layer::{Camera, Layer};
pub use instance::{CustomProperty, InstanceId, PlacedInstance};
pub use properties::{Inspectable, PropertyDescriptor, PropertyKind};
pub use selection::SelectionSet;
