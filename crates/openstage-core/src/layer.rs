use serde::{Deserialize, Serialize};

use crate::properties::{Inspectable, PropertyDescriptor, PropertyKind};

/// A camera renders an area of the layout into a region of the window.
///
/// The viewport corners are fractions of the window in `[0, 1]`, meaningful
/// when `default_viewport` is false; the rendered-area size is meaningful
/// when `default_size` is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// True if the camera uses the default window size.
    #[serde(rename = "defaultSize")]
    pub default_size: bool,
    /// True if the camera uses the default (full-window) viewport.
    #[serde(rename = "defaultViewport")]
    pub default_viewport: bool,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Width of the rendered area.
    pub width: f32,
    /// Height of the rendered area.
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            default_size: true,
            default_viewport: true,
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Camera {
    /// Change the viewport, i.e. the area of the window where the camera is
    /// displayed. Coordinates must be between 0 and 1.
    pub fn set_viewport(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
    }

    /// Change the size of the rendered area of the scene.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_use_default_size(&mut self, use_default: bool) {
        self.default_size = use_default;
    }

    pub fn use_default_size(&self) -> bool {
        self.default_size
    }

    pub fn set_use_default_viewport(&mut self, use_default: bool) {
        self.default_viewport = use_default;
    }

    pub fn use_default_viewport(&self) -> bool {
        self.default_viewport
    }
}

impl Inspectable for Camera {
    fn list_properties(&self) -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new(
                "Default size",
                self.default_size.to_string(),
                PropertyKind::Boolean,
            ),
            PropertyDescriptor::new(
                "Default viewport",
                self.default_viewport.to_string(),
                PropertyKind::Boolean,
            ),
            PropertyDescriptor::new("x1", self.x1.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("y1", self.y1.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("x2", self.x2.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("y2", self.y2.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Width", self.width.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Height", self.height.to_string(), PropertyKind::Number),
        ]
    }

    fn set_property(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Default size" => match value.parse() {
                Ok(b) => {
                    self.default_size = b;
                    true
                }
                Err(_) => false,
            },
            "Default viewport" => match value.parse() {
                Ok(b) => {
                    self.default_viewport = b;
                    true
                }
                Err(_) => false,
            },
            "x1" | "y1" | "x2" | "y2" => {
                let v = match value.parse::<f32>() {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                // Viewport corners stay inside the window and keep
                // x1 < x2, y1 < y2.
                if !(0.0..=1.0).contains(&v) {
                    return false;
                }
                match name {
                    "x1" if v < self.x2 => self.x1 = v,
                    "y1" if v < self.y2 => self.y1 = v,
                    "x2" if v > self.x1 => self.x2 = v,
                    "y2" if v > self.y1 => self.y2 = v,
                    _ => return false,
                }
                true
            }
            "Width" | "Height" => {
                let v = match value.parse::<f32>() {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                if v < 0.0 {
                    return false;
                }
                if name == "Width" {
                    self.width = v;
                } else {
                    self.height = v;
                }
                true
            }
            _ => false,
        }
    }
}

/// A named, visibility-toggleable render grouping of a layout, owning an
/// ordered list of cameras.
///
/// Camera index is a transient identity: deleting a camera shifts every
/// camera after it down by one, so consumers must re-derive indices after
/// any structural edit instead of caching them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    #[serde(rename = "isVisible")]
    visible: bool,
    cameras: Vec<Camera>,
}

impl Layer {
    /// Create a layer with no cameras. By convention the owning layout
    /// gives its base layer one default camera via `set_camera_count(1)`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visible: true,
            cameras: Vec::new(),
        }
    }

    /// Change the layer name. Uniqueness within the owning layout is the
    /// layout's concern.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change whether the layer is displayed.
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn visibility(&self) -> bool {
        self.visible
    }

    /// Change the number of cameras. Growing appends default cameras,
    /// shrinking drops from the tail. Any `n` is accepted.
    pub fn set_camera_count(&mut self, n: usize) {
        self.cameras.resize(n, Camera::default());
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Bounds-checked camera read. An out-of-range index yields a default
    /// camera value; the copy is never stored back, so writing through it
    /// cannot touch this layer.
    pub fn camera(&self, n: usize) -> Camera {
        self.cameras.get(n).copied().unwrap_or_default()
    }

    /// Mutable camera access. Out-of-range indices return None.
    pub fn camera_mut(&mut self, n: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(n)
    }

    /// Append an already configured camera.
    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    /// Delete a camera. Out-of-range indices are ignored. Indices held for
    /// cameras after `n` are invalidated.
    pub fn delete_camera(&mut self, n: usize) {
        if n >= self.cameras.len() {
            return;
        }
        self.cameras.remove(n);
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_name_and_visibility() {
        let mut layer = Layer::new("Background");
        assert_eq!(layer.name(), "Background");
        assert!(layer.visibility());
        layer.set_visibility(false);
        assert!(!layer.visibility());
        layer.set_name("Foreground");
        assert_eq!(layer.name(), "Foreground");
    }

    #[test]
    fn test_set_camera_count_grows_and_shrinks() {
        let mut layer = Layer::new("Background");
        layer.set_camera_count(3);
        assert_eq!(layer.camera_count(), 3);
        layer.set_camera_count(1);
        assert_eq!(layer.camera_count(), 1);
        layer.set_camera_count(0);
        assert_eq!(layer.camera_count(), 0);
    }

    #[test]
    fn test_delete_camera_shifts_indices() {
        let mut layer = Layer::new("Background");
        layer.set_camera_count(3);
        // Tag each camera through its width so they stay distinguishable.
        layer.camera_mut(0).unwrap().set_size(100.0, 0.0);
        layer.camera_mut(1).unwrap().set_size(200.0, 0.0);
        layer.camera_mut(2).unwrap().set_size(300.0, 0.0);

        layer.delete_camera(1);
        assert_eq!(layer.camera_count(), 2);
        // The camera formerly at index 2 is now at index 1.
        assert!((layer.camera(1).width - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_delete_camera_out_of_range_is_noop() {
        let mut layer = Layer::new("Background");
        layer.set_camera_count(2);
        layer.delete_camera(5);
        assert_eq!(layer.camera_count(), 2);
    }

    #[test]
    fn test_out_of_range_camera_is_default() {
        let mut layer = Layer::new("Background");
        layer.set_camera_count(2);
        layer.camera_mut(0).unwrap().set_size(640.0, 480.0);

        let mut stray = layer.camera(5);
        assert_eq!(stray, Camera::default());

        // Mutating the returned value touches nothing stored.
        stray.set_size(9999.0, 9999.0);
        assert_eq!(layer.camera_count(), 2);
        assert!((layer.camera(0).width - 640.0).abs() < 1e-10);
        assert_eq!(layer.camera(1), Camera::default());
        assert!(layer.camera_mut(5).is_none());
    }

    #[test]
    fn test_camera_property_order() {
        let camera = Camera::default();
        let names: Vec<String> = camera
            .list_properties()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Default size",
                "Default viewport",
                "x1",
                "y1",
                "x2",
                "y2",
                "Width",
                "Height"
            ]
        );
    }

    #[test]
    fn test_camera_set_property_viewport_bounds() {
        let mut camera = Camera::default();
        assert!(camera.set_property("x2", "0.8"));
        assert!((camera.x2 - 0.8).abs() < 1e-6);

        // Out of [0, 1] is rejected, state untouched.
        assert!(!camera.set_property("x2", "1.5"));
        assert!((camera.x2 - 0.8).abs() < 1e-6);

        // An x1 at or above x2 is rejected.
        assert!(!camera.set_property("x1", "0.8"));
        assert!(!camera.set_property("x1", "0.9"));
        assert!(camera.set_property("x1", "0.5"));
        assert!((camera.x1 - 0.5).abs() < 1e-6);

        // Unparseable numbers are rejected.
        assert!(!camera.set_property("y1", "abc"));
    }

    #[test]
    fn test_camera_set_property_booleans_and_size() {
        let mut camera = Camera::default();
        assert!(camera.set_property("Default size", "false"));
        assert!(!camera.use_default_size());
        assert!(!camera.set_property("Default size", "maybe"));

        assert!(camera.set_property("Width", "800"));
        assert!((camera.width - 800.0).abs() < 1e-10);
        assert!(!camera.set_property("Width", "-5"));
        assert!((camera.width - 800.0).abs() < 1e-10);

        assert!(!camera.set_property("No such property", "1"));
    }
}
