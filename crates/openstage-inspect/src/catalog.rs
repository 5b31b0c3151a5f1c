use serde::{Deserialize, Serialize};

/// One entry of the object-type catalog offered when placing a new
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeEntry {
    pub name: String,
    /// Short help text shown next to the name.
    pub description: String,
}

impl ObjectTypeEntry {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Abstract contract of the type-chooser shell. Returns the chosen type
/// name, or None when the user cancelled.
pub trait ObjectTypePicker {
    fn pick(&mut self, entries: &[ObjectTypeEntry]) -> Option<String>;
}

/// Run the picker over the catalog and validate its answer against the
/// offered entries. A cancelled pick or an answer naming no entry yields
/// None.
pub fn choose_object_type(
    picker: &mut dyn ObjectTypePicker,
    entries: &[ObjectTypeEntry],
) -> Option<String> {
    let choice = picker.pick(entries)?;
    if entries.iter().any(|e| e.name == choice) {
        Some(choice)
    } else {
        log::debug!("picker answered with unknown object type {:?}", choice);
        None
    }
}
