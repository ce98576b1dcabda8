use areaset::AreaSet;
use geo::Rect;
use rstar::{RTreeObject, AABB};

use crate::error::{RegionError, Result};
use crate::location::LocationList;

use super::Region;

/// Bounding box of one interior in the region's hole index, associated with
/// its area by index.
#[derive(Debug, Clone)]
pub(super) struct InteriorEnvelope {
    idx: usize,
    bbox: Rect<f64>,
}

impl InteriorEnvelope {
    pub(super) fn new(idx: usize, bbox: Rect<f64>) -> Self {
        Self { idx, bbox }
    }

    /// Index of the interior in `Region::holes`.
    pub(super) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for InteriorEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

impl Region {
    /// Record an interior border and its area.  Does not touch `self.area`.
    pub(super) fn register_interior(&mut self, border: LocationList, area: AreaSet) {
        let idx = self.holes.len();
        if let Some(bbox) = area.bounding_rect() {
            self.hole_index.insert(InteriorEnvelope::new(idx, bbox));
        }
        self.holes.push(area);
        self.interiors.get_or_insert_with(Vec::new).push(border);
    }

    /// Index of the first existing interior whose area overlaps `area`.
    fn first_overlapping_interior(&self, area: &AreaSet) -> Option<usize> {
        let rect = area.bounding_rect()?;
        let search = AABB::from_corners(rect.min().into(), rect.max().into());
        self.hole_index.locate_in_envelope_intersecting(&search)
            .map(InteriorEnvelope::idx)
            .filter(|&idx| self.holes[idx].overlaps(area))
            .min()
    }

    /// Cut `interior` out of this region as a hole.
    ///
    /// The interior must be a single area without holes of its own, must
    /// not overlap any interior added before, and must lie entirely within
    /// this region.  Interiors may touch each other and the border, as long
    /// as the region stays a single connected area.  On error the region is
    /// left unchanged.  The exterior border is never modified.
    pub fn add_interior(&mut self, interior: &Region) -> Result<()> {
        let hole = &interior.area;
        if !hole.is_singular() || hole.has_holes() {
            return Err(RegionError::InvalidArgument(
                format!("interior '{}' must be a single area without holes", interior.name)));
        }

        if let Some(index) = self.first_overlapping_interior(hole) {
            tracing::debug!(region = %self.name, interior = %interior.name, index, "interior overlaps existing interior");
            return Err(RegionError::InteriorOverlap { index });
        }

        if !self.contains_region(interior) {
            tracing::debug!(region = %self.name, interior = %interior.name, "interior is not contained");
            return Err(RegionError::NotContained);
        }

        let area = self.area.difference(hole);
        if !area.is_singular() {
            return Err(RegionError::NotSingular { parts: area.len() });
        }

        self.area = area;
        self.register_interior(interior.border.clone(), hole.clone());
        self.bounds = Default::default();

        tracing::debug!(region = %self.name, interior = %interior.name, count = self.holes.len(), "added interior");
        Ok(())
    }
}
