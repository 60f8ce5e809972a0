//! Drop-region index.
//!
//! Keeps the ordered drop-region sequence together with an R-tree over the
//! region bounds, so overlap queries during a move tick stay O(log n) while
//! the tie-break between simultaneously overlapping regions remains
//! deterministic: the first region in sequence order wins.
//!
//! Replacement swaps the sequence and rebuilds the tree in one call, so a
//! single move tick never observes a partially-updated set.

use crate::geometry::Rect;
use crate::types::DropRegion;
use rstar::{AABB, RTree, RTreeObject};

/// One R-tree entry: a region plus its position in the ordered sequence.
#[derive(Debug, Clone, Copy)]
struct RegionEntry {
    seq: usize,
    region: DropRegion,
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let bounds = self.region.bounds;
        AABB::from_corners(
            [bounds.min_x(), bounds.min_y()],
            [bounds.max_x(), bounds.max_y()],
        )
    }
}

/// Ordered drop-region set with spatially-indexed overlap queries.
pub struct RegionIndex {
    tree: RTree<RegionEntry>,
    regions: Vec<DropRegion>,
}

impl Default for RegionIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            regions: Vec::new(),
        }
    }

    /// Build an index from an ordered region sequence.
    pub fn from_regions(regions: Vec<DropRegion>) -> Self {
        let entries: Vec<RegionEntry> = regions
            .iter()
            .enumerate()
            .map(|(seq, &region)| RegionEntry { seq, region })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            regions,
        }
    }

    /// Replace the whole sequence, rebuilding the tree.
    pub fn replace(&mut self, regions: Vec<DropRegion>) {
        *self = Self::from_regions(regions);
    }

    /// Find the hovered region for an element frame: of all regions whose
    /// bounds intersect the frame, the one earliest in sequence order.
    pub fn hit_test(&self, frame: &Rect) -> Option<DropRegion> {
        let envelope = AABB::from_corners(
            [frame.min_x(), frame.min_y()],
            [frame.max_x(), frame.max_y()],
        );

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.region.bounds.intersects(frame))
            .min_by_key(|entry| entry.seq)
            .map(|entry| entry.region)
    }

    /// Look up a region by id.
    pub fn get(&self, id: u64) -> Option<DropRegion> {
        self.regions.iter().copied().find(|region| region.id == id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.regions.iter().any(|region| region.id == id)
    }

    /// The regions in sequence order.
    pub fn regions(&self) -> &[DropRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.regions.clear();
    }
}
