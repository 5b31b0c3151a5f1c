use serde::{Deserialize, Serialize};

use openstage_core::PropertyKind;

/// Placeholder shown for a property whose value differs across the
/// selection.
pub const MULTIPLE_VALUES: &str = "(multiple values)";

/// One row of the merged property view pushed to the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    pub name: String,
    /// Value to display, or [`MULTIPLE_VALUES`] when `mixed` is true.
    pub display_value: String,
    /// True when the selected entities disagree on this property's value.
    pub mixed: bool,
    pub kind: PropertyKind,
}

/// Abstract contract of the generic key/value editing widget. The engine
/// only pushes rows through it; the widget calls back into the engine with
/// `on_property_changed` / `on_property_selected` notifications.
pub trait PropertySurface {
    /// Replace the displayed rows with the given merged view, in order.
    fn render(&mut self, rows: &[PropertyRow]);

    /// Show nothing, used when the selection is empty.
    fn clear(&mut self);
}
