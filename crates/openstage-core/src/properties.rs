use serde::{Deserialize, Serialize};

/// The value kind of an editable property, deciding which editor the
/// property surface shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Text,
    Number,
    Boolean,
    Choice,
}

/// A single property exposed by an entity: name, current value rendered as
/// a display string, and its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub value: String,
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    pub fn new(name: &str, value: String, kind: PropertyKind) -> Self {
        Self {
            name: name.to_string(),
            value,
            kind,
        }
    }
}

/// Uniform reflective contract implemented by every selectable entity.
///
/// Values cross this boundary as display strings. `set_property` parses and
/// validates; returning false leaves the entity's stored state untouched.
pub trait Inspectable {
    /// Ordered list of editable properties. The order is meaningful: when
    /// this entity is the first member of a selection, its declaration
    /// order becomes the canonical display order of the merged view.
    fn list_properties(&self) -> Vec<PropertyDescriptor>;

    /// Apply a new value to the named property. Returns false if the
    /// property does not exist on this entity or the value is rejected.
    fn set_property(&mut self, name: &str, value: &str) -> bool;
}
