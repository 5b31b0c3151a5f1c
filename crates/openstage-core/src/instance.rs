use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::properties::{Inspectable, PropertyDescriptor, PropertyKind};

/// Unique placed-instance identifier.
pub type InstanceId = Uuid;

/// A per-object-type property carried by an instance, edited through the
/// same reflective contract as the base properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
    pub kind: PropertyKind,
}

/// An object placed into a layout: position, orientation, draw order, the
/// layer it belongs to, and the custom properties of its object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedInstance {
    pub id: InstanceId,
    /// Name of the object definition this instance was created from.
    pub object_name: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    pub angle: f64,
    /// Draw order within the layer.
    pub z_order: i32,
    /// Name of the layer this instance is placed on.
    pub layer: String,
    /// Locked instances are not selectable on the canvas.
    pub locked: bool,
    /// True if the instance overrides its object's default size.
    pub custom_size: bool,
    pub width: f64,
    pub height: f64,
    custom_properties: Vec<CustomProperty>,
}

impl PlacedInstance {
    pub fn new(object_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            object_name: object_name.to_string(),
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            z_order: 0,
            layer: String::new(),
            locked: false,
            custom_size: false,
            width: 0.0,
            height: 0.0,
            custom_properties: Vec::new(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_layer(mut self, layer: &str) -> Self {
        self.layer = layer.to_string();
        self
    }

    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Register a custom property exposed by this instance's object type.
    /// Registration order is the order it appears in the property list.
    pub fn add_custom_property(&mut self, name: &str, value: &str, kind: PropertyKind) {
        self.custom_properties.push(CustomProperty {
            name: name.to_string(),
            value: value.to_string(),
            kind,
        });
    }

    pub fn custom_properties(&self) -> &[CustomProperty] {
        &self.custom_properties
    }
}

impl Inspectable for PlacedInstance {
    fn list_properties(&self) -> Vec<PropertyDescriptor> {
        let mut props = vec![
            PropertyDescriptor::new("X", self.x.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Y", self.y.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Angle", self.angle.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Z order", self.z_order.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Layer", self.layer.clone(), PropertyKind::Choice),
            PropertyDescriptor::new("Locked", self.locked.to_string(), PropertyKind::Boolean),
            PropertyDescriptor::new(
                "Custom size",
                self.custom_size.to_string(),
                PropertyKind::Boolean,
            ),
            PropertyDescriptor::new("Width", self.width.to_string(), PropertyKind::Number),
            PropertyDescriptor::new("Height", self.height.to_string(), PropertyKind::Number),
        ];
        for custom in &self.custom_properties {
            props.push(PropertyDescriptor::new(
                &custom.name,
                custom.value.clone(),
                custom.kind,
            ));
        }
        props
    }

    fn set_property(&mut self, name: &str, value: &str) -> bool {
        match name {
            "X" | "Y" | "Angle" => {
                let v = match value.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                match name {
                    "X" => self.x = v,
                    "Y" => self.y = v,
                    _ => self.angle = v,
                }
                true
            }
            "Z order" => match value.parse::<i32>() {
                Ok(v) => {
                    self.z_order = v;
                    true
                }
                Err(_) => false,
            },
            "Layer" => {
                // Accepted as-is; resolving the name against the owning
                // layout's layers is the canvas's concern.
                self.layer = value.to_string();
                true
            }
            "Locked" => match value.parse() {
                Ok(b) => {
                    self.locked = b;
                    true
                }
                Err(_) => false,
            },
            "Custom size" => match value.parse() {
                Ok(b) => {
                    self.custom_size = b;
                    true
                }
                Err(_) => false,
            },
            "Width" | "Height" => {
                let v = match value.parse::<f64>() {
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
            _ => {
                let custom = match self
                    .custom_properties
                    .iter_mut()
                    .find(|c| c.name == name)
                {
                    Some(c) => c,
                    None => return false,
                };
                let accepted = match custom.kind {
                    PropertyKind::Number => value.parse::<f64>().is_ok(),
                    PropertyKind::Boolean => value.parse::<bool>().is_ok(),
                    PropertyKind::Text | PropertyKind::Choice => true,
                };
                if accepted {
                    custom.value = value.to_string();
                }
                accepted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_base_properties() {
        let instance = PlacedInstance::new("Hero")
            .with_position(10.0, 20.0)
            .with_layer("Background")
            .with_z_order(3);
        let props = instance.list_properties();
        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "X",
                "Y",
                "Angle",
                "Z order",
                "Layer",
                "Locked",
                "Custom size",
                "Width",
                "Height"
            ]
        );
        assert_eq!(props[0].value, "10");
        assert_eq!(props[1].value, "20");
        assert_eq!(props[3].value, "3");
        assert_eq!(props[4].value, "Background");
        assert_eq!(props[4].kind, PropertyKind::Choice);
    }

    #[test]
    fn test_set_property_parses_by_kind() {
        let mut instance = PlacedInstance::new("Hero");
        assert!(instance.set_property("X", "12.5"));
        assert!((instance.x - 12.5).abs() < 1e-10);
        assert!(!instance.set_property("X", "twelve"));
        assert!((instance.x - 12.5).abs() < 1e-10);

        assert!(instance.set_property("Z order", "-2"));
        assert_eq!(instance.z_order, -2);
        assert!(!instance.set_property("Z order", "1.5"));

        assert!(instance.set_property("Locked", "true"));
        assert!(instance.locked);
    }

    #[test]
    fn test_set_property_rejects_negative_size() {
        let mut instance = PlacedInstance::new("Hero");
        assert!(instance.set_property("Width", "64"));
        assert!(!instance.set_property("Width", "-1"));
        assert!((instance.width - 64.0).abs() < 1e-10);
        assert!(!instance.set_property("No such property", "1"));
    }

    #[test]
    fn test_custom_properties_listed_after_base() {
        let mut instance = PlacedInstance::new("Hero");
        instance.add_custom_property("Animation", "0", PropertyKind::Number);
        instance.add_custom_property("Text", "Hello", PropertyKind::Text);
        let props = instance.list_properties();
        assert_eq!(props[props.len() - 2].name, "Animation");
        assert_eq!(props[props.len() - 1].name, "Text");
    }

    #[test]
    fn test_custom_property_kind_validation() {
        let mut instance = PlacedInstance::new("Hero");
        instance.add_custom_property("Animation", "0", PropertyKind::Number);
        assert!(instance.set_property("Animation", "2"));
        assert_eq!(instance.custom_properties()[0].value, "2");
        assert!(!instance.set_property("Animation", "fast"));
        assert_eq!(instance.custom_properties()[0].value, "2");
    }
}
