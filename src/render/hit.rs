use geo::Rect;
use rstar::{RTree, RTreeObject, AABB};

use super::map::RenderedRegion;

/// Screen-space envelope of one drawn region. The hit index is an R-tree of
/// these; a pointer lookup narrows to candidates by envelope, then the caller
/// tests the real outline.
#[derive(Debug, Clone)]
pub(super) struct RegionEnvelope {
    region: usize,
    rect: Rect<f64>,
}

impl RegionEnvelope {
    #[inline] pub(super) fn region(&self) -> usize { self.region }
}

impl RTreeObject for RegionEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.rect.min().into(), self.rect.max().into())
    }
}

/// Index every region that projected to something visible.
pub(super) fn hit_index(regions: &[RenderedRegion]) -> RTree<RegionEnvelope> {
    RTree::bulk_load(
        regions.iter().enumerate()
            .filter_map(|(region, r)| r.bounds.map(|rect| RegionEnvelope { region, rect }))
            .collect()
    )
}

/// Regions whose envelope contains the (untransformed) viewport point.
pub(super) fn candidates(index: &RTree<RegionEnvelope>, x: f64, y: f64) -> impl Iterator<Item = usize> + '_ {
    index.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
        .map(RegionEnvelope::region)
}
