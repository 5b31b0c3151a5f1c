use serde::{Deserialize, Serialize};

/// Metadata for an OpenStage project (.ostage directory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub version: String,
    pub description: String,
    pub created: String,
    pub modified: String,
    /// Layout opened when the project loads.
    pub first_layout: Option<String>,
    /// Names of the object types available for placement.
    pub object_types: Vec<String>,
    pub settings: ProjectSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub snap_to_grid: bool,
    pub grid_size: f64,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            snap_to_grid: false,
            grid_size: 32.0,
        }
    }
}

impl ProjectMeta {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            description: String::new(),
            created: String::new(),
            modified: String::new(),
            first_layout: None,
            object_types: Vec::new(),
            settings: ProjectSettings::default(),
        }
    }
}
