use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::instance::{InstanceId, PlacedInstance};
use crate::layer::Layer;

/// A scene: an ordered stack of render layers and the object instances
/// placed into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Layout identifier.
    pub id: Uuid,
    /// Layout name, unique within the owning project.
    pub name: String,
    layers: Vec<Layer>,
    instances: Vec<PlacedInstance>,
}

impl Layout {
    /// Create a layout with the conventional base layer, which starts with
    /// a single default camera.
    pub fn new(name: &str) -> Self {
        let mut base = Layer::new("Base layer");
        base.set_camera_count(1);
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            layers: vec![base],
            instances: Vec::new(),
        }
    }

    // ── Layer management ─────────────────────────────────────────────

    /// Append a layer to the top of the stack.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layer(&self, n: usize) -> Option<&Layer> {
        self.layers.get(n)
    }

    pub fn layer_mut(&mut self, n: usize) -> Option<&mut Layer> {
        self.layers.get_mut(n)
    }

    pub fn layer_by_name(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    pub fn layer_by_name_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name() == name)
    }

    /// Remove and return a layer. Instances on the removed layer are left
    /// in place with a dangling layer name; reassigning them is the
    /// caller's concern. Out-of-range indices return None.
    pub fn remove_layer(&mut self, n: usize) -> Option<Layer> {
        if n >= self.layers.len() {
            return None;
        }
        Some(self.layers.remove(n))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    // ── Instance management ──────────────────────────────────────────

    pub fn add_instance(&mut self, instance: PlacedInstance) -> InstanceId {
        let id = instance.id;
        self.instances.push(instance);
        id
    }

    pub fn instance(&self, id: &InstanceId) -> Option<&PlacedInstance> {
        self.instances.iter().find(|i| i.id == *id)
    }

    pub fn instance_mut(&mut self, id: &InstanceId) -> Option<&mut PlacedInstance> {
        self.instances.iter_mut().find(|i| i.id == *id)
    }

    pub fn remove_instance(&mut self, id: &InstanceId) -> Option<PlacedInstance> {
        let pos = self.instances.iter().position(|i| i.id == *id)?;
        Some(self.instances.remove(pos))
    }

    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [PlacedInstance] {
        &mut self.instances
    }

    pub fn instances_on_layer(&self, layer: &str) -> Vec<&PlacedInstance> {
        self.instances.iter().filter(|i| i.layer == layer).collect()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_create_has_base_layer() {
        let layout = Layout::new("Level 1");
        assert_eq!(layout.name, "Level 1");
        assert_eq!(layout.layer_count(), 1);
        let base = layout.layer(0).unwrap();
        assert_eq!(base.name(), "Base layer");
        assert_eq!(base.camera_count(), 1);
        assert_eq!(layout.instance_count(), 0);
    }

    #[test]
    fn test_layer_lookup_by_name() {
        let mut layout = Layout::new("Level 1");
        layout.add_layer(Layer::new("Foreground"));
        assert_eq!(layout.layer_count(), 2);
        assert!(layout.layer_by_name("Foreground").is_some());
        assert!(layout.layer_by_name("Missing").is_none());

        layout
            .layer_by_name_mut("Foreground")
            .unwrap()
            .set_visibility(false);
        assert!(!layout.layer_by_name("Foreground").unwrap().visibility());
    }

    #[test]
    fn test_remove_layer() {
        let mut layout = Layout::new("Level 1");
        layout.add_layer(Layer::new("Foreground"));
        let removed = layout.remove_layer(1).unwrap();
        assert_eq!(removed.name(), "Foreground");
        assert_eq!(layout.layer_count(), 1);
        assert!(layout.remove_layer(5).is_none());
    }

    #[test]
    fn test_add_and_find_instance() {
        let mut layout = Layout::new("Level 1");
        let id = layout.add_instance(PlacedInstance::new("Hero").with_position(3.0, 4.0));
        assert_eq!(layout.instance_count(), 1);
        let found = layout.instance(&id).unwrap();
        assert_eq!(found.object_name, "Hero");

        layout.instance_mut(&id).unwrap().x = 7.0;
        assert!((layout.instance(&id).unwrap().x - 7.0).abs() < 1e-10);

        let removed = layout.remove_instance(&id).unwrap();
        assert_eq!(removed.object_name, "Hero");
        assert_eq!(layout.instance_count(), 0);
        assert!(layout.remove_instance(&id).is_none());
    }

    #[test]
    fn test_instances_on_layer() {
        let mut layout = Layout::new("Level 1");
        layout.add_instance(PlacedInstance::new("Hero").with_layer("Base layer"));
        layout.add_instance(PlacedInstance::new("Tree").with_layer("Background"));
        layout.add_instance(PlacedInstance::new("Rock").with_layer("Background"));

        let on_background = layout.instances_on_layer("Background");
        assert_eq!(on_background.len(), 2);
        assert!(layout.instances_on_layer("Missing").is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut layout = Layout::new("Level 1");
        layout.add_instance(PlacedInstance::new("Hero").with_position(10.0, 20.0));
        let json = layout.to_json().unwrap();
        let restored = Layout::from_json(&json).unwrap();
        assert_eq!(restored.name, "Level 1");
        assert_eq!(restored.instance_count(), 1);
        assert_eq!(restored.instances()[0].object_name, "Hero");
    }
}
