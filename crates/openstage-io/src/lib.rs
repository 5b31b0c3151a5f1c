//! # OpenStage I/O
//!
//! Readers and writers for the OpenStage scene format: layouts with their
//! layers, cameras, and placed instances as human-readable JSON, plus the
//! project metadata file.

pub mod project;
pub mod scene;

pub use project::{ProjectMeta, ProjectSettings};
pub use scene::{read_layout, write_layout, SceneError};
