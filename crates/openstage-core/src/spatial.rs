use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::instance::PlacedInstance;

/// An entry in the R-tree picking index, referencing an instance by its
/// index in the layout's instance list.
#[derive(Debug, Clone)]
pub struct InstanceEntry {
    /// Index into the layout's instance vector.
    pub instance_index: usize,
    /// Lower corner of the instance bounding box.
    pub min: [f64; 2],
    /// Upper corner of the instance bounding box.
    pub max: [f64; 2],
}

impl InstanceEntry {
    /// Derive the entry for an instance. Instances with a custom size get
    /// a box anchored at their position; others are treated as points.
    pub fn from_instance(index: usize, instance: &PlacedInstance) -> Self {
        let (w, h) = if instance.custom_size {
            (instance.width, instance.height)
        } else {
            (0.0, 0.0)
        };
        Self {
            instance_index: index,
            min: [instance.x, instance.y],
            max: [instance.x + w, instance.y + h],
        }
    }
}

impl RTreeObject for InstanceEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PointDistance for InstanceEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// Spatial index for canvas picking: point queries for clicks and region
/// queries for marquee selection.
pub struct PickIndex {
    tree: RTree<InstanceEntry>,
}

impl PickIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
        }
    }

    /// Build the index from a list of entries.
    pub fn build(entries: Vec<InstanceEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Build the index from a layout's instance list. Locked instances are
    /// skipped; they are not selectable on the canvas.
    pub fn from_instances(instances: &[PlacedInstance]) -> Self {
        let entries = instances
            .iter()
            .enumerate()
            .filter(|(_, i)| !i.locked)
            .map(|(n, i)| InstanceEntry::from_instance(n, i))
            .collect();
        Self::build(entries)
    }

    /// Insert a single entry.
    pub fn insert(&mut self, entry: InstanceEntry) {
        self.tree.insert(entry);
    }

    /// Find all entries whose bounding box contains the given point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<&InstanceEntry> {
        self.tree.locate_all_at_point(&[x, y]).collect()
    }

    /// Find all entries that intersect the given marquee rectangle.
    pub fn query_region(&self, min: [f64; 2], max: [f64; 2]) -> Vec<&InstanceEntry> {
        let envelope = AABB::from_corners(min, max);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for PickIndex {
    fn default() -> Self {
        Self::new()
    }
}
