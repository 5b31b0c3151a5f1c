use openstage_core::SelectionSet;

use crate::surface::{PropertyRow, PropertySurface, MULTIPLE_VALUES};

/// Derives the merged property view of a selection and keeps it in sync
/// with the property surface.
///
/// The engine owns no entities. Between calls it holds only the candidate
/// list computed by the last refresh, used to validate incoming edits and
/// to answer row queries from the surface.
#[derive(Default)]
pub struct SyncEngine {
    candidates: Vec<PropertyRow>,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the merged view from the selection and push it to the
    /// surface. Invalidates the previous candidate list.
    ///
    /// The view is the order-preserving intersection of every member's
    /// property list: seeded from the first member, a candidate survives
    /// only if every later member reports a property with the same name
    /// and kind. Values are compared as display strings; any disagreement
    /// marks the row mixed.
    pub fn refresh(&mut self, selection: &SelectionSet, surface: &mut dyn PropertySurface) {
        self.candidates.clear();
        if selection.is_empty() {
            surface.clear();
            return;
        }

        let mut rows: Vec<PropertyRow> = Vec::new();
        for (i, member) in selection.iter().enumerate() {
            let props = member.list_properties();
            if i == 0 {
                rows = props
                    .into_iter()
                    .map(|p| PropertyRow {
                        name: p.name,
                        display_value: p.value,
                        mixed: false,
                        kind: p.kind,
                    })
                    .collect();
                continue;
            }
            rows.retain_mut(|row| {
                match props.iter().find(|p| p.name == row.name && p.kind == row.kind) {
                    Some(p) => {
                        if !row.mixed && p.value != row.display_value {
                            row.mixed = true;
                        }
                        true
                    }
                    None => false,
                }
            });
        }
        for row in &mut rows {
            if row.mixed {
                row.display_value = MULTIPLE_VALUES.to_string();
            }
        }

        log::debug!(
            "merged view: {} properties across {} selected",
            rows.len(),
            selection.len()
        );
        surface.render(&rows);
        self.candidates = rows;
    }

    /// Apply an edit coming back from the surface to every selected
    /// member, then refresh so the surface shows the post-edit state.
    ///
    /// Returns false without touching any entity when `name` is not in
    /// the current candidate list, which happens when the selection
    /// changed underneath the surface; the refresh it triggers brings the
    /// surface back in sync. Per-member rejections do not stop the pass:
    /// members that accept the value take it, the rest keep their old
    /// value and the follow-up refresh shows the property mixed again.
    pub fn on_property_changed(
        &mut self,
        selection: &mut SelectionSet,
        surface: &mut dyn PropertySurface,
        name: &str,
        value: &str,
    ) -> bool {
        if !self.candidates.iter().any(|c| c.name == name) {
            log::debug!("dropping stale edit of {:?}", name);
            self.refresh(selection, surface);
            return false;
        }

        let mut rejected = 0;
        for member in selection.iter_mut() {
            if !member.set_property(name, value) {
                rejected += 1;
            }
        }
        if rejected > 0 {
            log::debug!(
                "{} of {} selected rejected {:?} = {:?}",
                rejected,
                selection.len(),
                name,
                value
            );
        }
        self.refresh(selection, surface);
        true
    }

    /// Row metadata for a selected surface row, read-only. Returns None
    /// for names not in the current merged view.
    pub fn on_property_selected(&self, name: &str) -> Option<&PropertyRow> {
        self.candidates.iter().find(|c| c.name == name)
    }

    /// The merged view computed by the last refresh.
    pub fn merged_view(&self) -> &[PropertyRow] {
        &self.candidates
    }
}
