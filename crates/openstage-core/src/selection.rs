use crate::instance::PlacedInstance;
use crate::properties::Inspectable;

/// An ordered, identity-deduplicated set of references to the entities
/// currently selected for editing.
///
/// The set owns nothing: members stay owned by the layout, and the set is
/// rebuilt from the canvas selection before every synchronization pass.
/// Membership cannot change after construction.
pub struct SelectionSet<'a> {
    members: Vec<&'a mut dyn Inspectable>,
}

impl<'a> SelectionSet<'a> {
    /// Build from the external selection, preserving selection order and
    /// dropping duplicate references to the same entity.
    pub fn new(refs: Vec<&'a mut dyn Inspectable>) -> Self {
        let mut members: Vec<&'a mut dyn Inspectable> = Vec::with_capacity(refs.len());
        let mut seen: Vec<*const ()> = Vec::with_capacity(refs.len());
        for r in refs {
            // Identity is the referent's address, vtable ignored.
            let identity = &*r as *const dyn Inspectable as *const ();
            if !seen.contains(&identity) {
                seen.push(identity);
                members.push(r);
            }
        }
        Self { members }
    }

    /// Build from a layout's instance list and the canvas's picked indices
    /// (for example the result of a marquee query). Duplicate and
    /// out-of-range indices are dropped; pick order is preserved.
    pub fn from_instances(instances: &'a mut [PlacedInstance], indices: &[usize]) -> Self {
        let mut unique: Vec<usize> = Vec::with_capacity(indices.len());
        for &i in indices {
            if i < instances.len() && !unique.contains(&i) {
                unique.push(i);
            }
        }
        let mut slots: Vec<Option<&'a mut PlacedInstance>> =
            instances.iter_mut().map(Some).collect();
        let members = unique
            .iter()
            .filter_map(|&i| slots[i].take())
            .map(|m| m as &'a mut dyn Inspectable)
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Inspectable> + '_ + use<'_, 'a> {
        self.members.iter().map(|m| &**m as &dyn Inspectable)
    }

    /// Iterate members mutably in selection order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn Inspectable> + '_ + use<'_, 'a> {
        self.members
            .iter_mut()
            .map(|m| &mut **m as &mut dyn Inspectable)
    }

    /// True when every member satisfies the given capability predicate.
    pub fn all_support<F>(&self, predicate: F) -> bool
    where
        F: Fn(&dyn Inspectable) -> bool,
    {
        self.iter().all(predicate)
    }
}
