mod build;
mod interior;
mod metrics;

use std::fmt;
use std::sync::OnceLock;

use areaset::AreaSet;
use rstar::RTree;

use crate::bounds::Bounds;
use crate::location::{Location, LocationList};

pub use build::{DEFAULT_NAME, MAX_BUFFER_KM, MAX_RADIUS_KM, RECT_EDGE_OFFSET};
pub use metrics::DISTANCE_ACCURACY_KM;

use interior::InteriorEnvelope;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A named polygonal area on the surface of the earth: one exterior border
/// plus zero or more interior holes.
///
/// The authoritative geometry is an `AreaSet` in the (lon, lat) plane, so
/// borders are straight lines in a Mercator projection; great circles are
/// approximated by short chords (see `BorderMode`).  `border` and
/// `interiors` are cached views of that area.
///
/// Regions are built with the associated constructors (`bordered`,
/// `rectangular`, `circular`, `buffered`, `union_of`, `intersection_of`,
/// `global`) and are immutable afterwards except for `add_interior`, which
/// either fully succeeds or leaves the region untouched.
///
/// Regions spanning ±180° or enclosing a pole are not supported; results for
/// self-intersecting borders are undefined.
#[derive(Clone, Debug)]
pub struct Region {
    name: String,

    /// Exterior boundary without a repeated closing vertex.
    border: LocationList,

    /// Interior (hole) borders in insertion order; `None` until one exists.
    interiors: Option<Vec<LocationList>>,

    area: AreaSet,

    // ----- Interior bookkeeping -----

    /// Area of each interior, indexed like `interiors`.
    holes: Vec<AreaSet>,

    /// Bounding boxes of `holes` for overlap candidate lookup.
    hole_index: RTree<InteriorEnvelope>,

    // ----- Lazy -----

    /// Bounds of `area`; built on first access, reset when `area` changes.
    bounds: OnceLock<Bounds>,
}

impl Region {
    /// Assemble a region from already-validated parts.
    fn from_parts(name: String, border: LocationList, area: AreaSet) -> Self {
        Self {
            name,
            border,
            interiors: None,
            area,
            holes: Vec::new(),
            hole_index: RTree::new(),
            bounds: OnceLock::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub(crate) fn rename(&mut self, name: String) { self.name = name }

    /// The exterior border, without a repeated closing vertex.
    #[inline] pub fn border(&self) -> &LocationList { &self.border }

    /// Interior borders in insertion order, or `None` if there are none.
    #[inline] pub fn interiors(&self) -> Option<&[LocationList]> { self.interiors.as_deref() }

    /// A copy of the area backing this region.
    #[inline] pub fn area(&self) -> AreaSet { self.area.clone() }

    /// Lat/lon bounds of the region.
    pub fn bounds(&self) -> Bounds {
        *self.bounds.get_or_init(|| {
            self.area.bounding_rect()
                .map(Bounds::from)
                .unwrap_or_else(Bounds::nan)
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Returns `true` if `loc` is inside this region.
    ///
    /// Locations in an interior are outside.  Locations exactly on a border
    /// may go either way: rounding in the area representation can move an
    /// edge by a tiny fraction of a degree.  Rectangular regions are padded
    /// by `RECT_EDGE_OFFSET` so their nominal corners are inside.
    #[inline]
    pub fn contains(&self, loc: &Location) -> bool {
        self.area.contains(loc.lon(), loc.lat())
    }

    /// Returns `true` if `other` lies entirely within this region, i.e. the
    /// union of the two is this region.
    #[inline]
    pub fn contains_region(&self, other: &Region) -> bool {
        self.area.covers(&other.area)
    }

    /// Returns `true` if this region is a rectangle in a Mercator projection.
    #[inline]
    pub fn is_rectangular(&self) -> bool {
        self.area.is_rectangular()
    }

    /// Compares geometry only, ignoring names.
    #[inline]
    pub fn equals_region(&self, other: &Region) -> bool {
        self.area == other.area
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.equals_region(other)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        write!(f, "Region\n\tMinLat: {}\n\tMinLon: {}\n\tMaxLat: {}\n\tMaxLon: {}",
            b.min_lat(), b.min_lon(), b.max_lat(), b.max_lon())
    }
}
