use crate::core::bounds::PixelBounds;
use crate::core::geo::PixelBox;

use rstar::{RTree, RTreeObject, AABB};

/// An indexed box entry: the pixel extent plus the position of the box in the
/// input slice it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexedBox {
    idx: usize,
    bounds: PixelBounds,
}

// --- rstar integration -------------------------------------------------------------------------

impl RTreeObject for IndexedBox {
    type Envelope = AABB<[i64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

/// R-tree over a slice of pixel boxes, used by the annotator to find the
/// candidate boxes for each tile without scanning the whole input.
///
/// Envelope intersection in the tree counts touching edges, which is wider
/// than the strict-overlap policy of the tiler, so callers must re-check
/// candidates with [`PixelBounds::intersects_strict`]. Candidates come back
/// sorted by input position, keeping results independent of tree shape.
pub struct BoxIndex {
    rtree: RTree<IndexedBox>,
}

impl BoxIndex {
    /// Bulk-loads an index over the given boxes. Entries keep their slice
    /// positions, so the index stays valid only as long as the slice is not
    /// reordered.
    pub fn build(boxes: &[PixelBox]) -> Self {
        let items = boxes
            .iter()
            .enumerate()
            .map(|(idx, b)| IndexedBox {
                idx,
                bounds: b.bounds(),
            })
            .collect();
        Self {
            rtree: RTree::bulk_load(items),
        }
    }

    /// Slice positions of all boxes whose envelope intersects `area`, in
    /// ascending input order. May include edge-touching boxes; re-filter with
    /// the strict test.
    pub fn candidates_in(&self, area: &PixelBounds) -> Vec<usize> {
        let envelope = AABB::from_corners([area.min_x, area.min_y], [area.max_x, area.max_y]);
        let mut hits: Vec<usize> = self
            .rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|item| item.idx)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }
}
