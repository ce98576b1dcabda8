use std::collections::HashSet;

use areaset::AreaSet;
use geo::{Coord, LineString, MultiPolygon, Polygon, Rect};

use crate::border::{great_circle_border, location_box, location_circle, strip_closing, BorderMode};
use crate::error::{RegionError, Result};
use crate::location::{Location, LocationList};
use crate::locations::TOLERANCE;

use super::Region;

/// Name given to regions built without one.
pub const DEFAULT_NAME: &str = "Unnamed Region";

/// Largest radius accepted by `Region::circular`, in km.
pub const MAX_RADIUS_KM: f64 = 1000.0;

/// Largest buffer distance accepted by `Region::buffered`, in km.
pub const MAX_BUFFER_KM: f64 = 500.0;

/// Amount (in degrees) by which rectangular regions are padded on every
/// side, so that locations on the nominal edges test as inside.  Region
/// algebra (`union_of`, `intersection_of`, `buffered`) snaps its output
/// vertices, so the padding does not survive it.
pub const RECT_EDGE_OFFSET: f64 = TOLERANCE;

fn region_name(name: &str) -> String {
    if name.is_empty() { DEFAULT_NAME.to_string() } else { name.to_string() }
}

fn area_from_border(border: &[Location]) -> Result<AreaSet> {
    Ok(AreaSet::from_path(border.iter().map(Location::coord))?)
}

/// Operands of region algebra must be a single connected area.
fn validate(region: &Region) -> Result<()> {
    if region.area.is_singular() { Ok(()) } else { Err(RegionError::NotSingular { parts: region.area.len() }) }
}

impl Region {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Build a region from a border of at least 3 vertices.  A last vertex
    /// repeating the first is dropped.  With `BorderMode::GreatCircle` every
    /// edge, including the closing one, is densified into chords of at most
    /// `GC_SEGMENT_KM`.
    pub fn bordered(name: &str, border: &LocationList, mode: BorderMode) -> Result<Self> {
        let vertices = strip_closing(border.as_slice());
        let unique = vertices.iter()
            // `+ 0.0` folds -0.0 into 0.0
            .map(|loc| ((loc.lat() + 0.0).to_bits(), (loc.lon() + 0.0).to_bits()))
            .collect::<HashSet<_>>()
            .len();
        if unique < 3 { return Err(RegionError::TooFewVertices { found: unique }) }

        let vertices = match mode {
            BorderMode::MercatorLinear => vertices.to_vec(),
            BorderMode::GreatCircle => great_circle_border(vertices),
        };
        let area = area_from_border(&vertices)?;

        tracing::debug!(name, ?mode, vertices = vertices.len(), "built bordered region");
        Ok(Self::from_parts(region_name(name), LocationList::from(vertices), area))
    }

    /// Build a rectangular region from two opposite corners.  The rectangle
    /// is padded by `RECT_EDGE_OFFSET` on each side (without passing ±90° or
    /// ±180°) so that the corners themselves are inside.
    pub fn rectangular(name: &str, loc1: Location, loc2: Location) -> Result<Self> {
        if loc1.lat() == loc2.lat() {
            return Err(RegionError::InvalidArgument("input lats cannot be the same".into()));
        }
        if loc1.lon() == loc2.lon() {
            return Err(RegionError::InvalidArgument("input lons cannot be the same".into()));
        }

        let offset = RECT_EDGE_OFFSET;
        let mut min_lat = loc1.lat().min(loc2.lat());
        let mut min_lon = loc1.lon().min(loc2.lon());
        let mut max_lat = loc1.lat().max(loc2.lat());
        let mut max_lon = loc1.lon().max(loc2.lon());
        if max_lat <= 90.0 - offset { max_lat += offset }
        if max_lon <= 180.0 - offset { max_lon += offset }
        if min_lat >= -90.0 + offset { min_lat -= offset }
        if min_lon >= -180.0 + offset { min_lon -= offset }

        let border = LocationList::from(vec![
            Location::new(min_lat, min_lon),
            Location::new(min_lat, max_lon),
            Location::new(max_lat, max_lon),
            Location::new(max_lat, min_lon),
        ]);
        Self::bordered(name, &border, BorderMode::MercatorLinear)
    }

    /// Build a region approximating a circle of `radius` km (in `(0, 1000]`)
    /// around `center`, with a vertex every `WEDGE_WIDTH_DEG` of bearing.
    pub fn circular(name: &str, center: Location, radius: f64) -> Result<Self> {
        if !(radius > 0.0 && radius <= MAX_RADIUS_KM) {
            return Err(RegionError::InvalidArgument(
                format!("radius [{radius}] is out of (0, {MAX_RADIUS_KM}] km range")));
        }
        tracing::debug!(name, radius, "building circular region");
        let border = LocationList::from(location_circle(&center, radius));
        Self::bordered(name, &border, BorderMode::MercatorLinear)
    }

    /// Build a region extending `buffer` km (in `(0, 500]`) on all sides of
    /// `line`: the union of a circle around every vertex and a box around
    /// every segment.  Repeated consecutive vertices contribute no box.
    pub fn buffered(name: &str, line: &LocationList, buffer: f64) -> Result<Self> {
        if !(buffer > 0.0 && buffer <= MAX_BUFFER_KM) {
            return Err(RegionError::InvalidArgument(
                format!("buffer [{buffer}] is out of (0, {MAX_BUFFER_KM}] km range")));
        }
        let Some(first) = line.first() else {
            return Err(RegionError::InvalidArgument("buffered line is empty".into()));
        };

        let mut area = area_from_border(&location_circle(first, buffer))?;
        for pair in line.as_slice().windows(2) {
            let (prev, loc) = (&pair[0], &pair[1]);
            if prev != loc {
                area = area.union(&area_from_border(&location_box(prev, loc, buffer))?);
            }
            area = area.union(&area_from_border(&location_circle(loc, buffer))?);
        }

        tracing::debug!(name, buffer, vertices = line.len(), "built buffered region");
        Self::from_area(region_name(name), area)
    }

    /// The union of two regions.  Fails with `NotSingular` if either input is
    /// not a single area or the regions do not touch or overlap.  An empty
    /// `name` becomes "Union of X and Y".
    pub fn union_of(name: &str, r1: &Region, r2: &Region) -> Result<Self> {
        validate(r1)?;
        validate(r2)?;
        let area = r1.area.union(&r2.area);
        if !area.is_singular() {
            tracing::debug!(r1 = %r1.name, r2 = %r2.name, parts = area.len(), "union is not a single region");
            return Err(RegionError::NotSingular { parts: area.len() });
        }
        let name = if name.is_empty() { format!("Union of {} and {}", r1.name, r2.name) } else { name.to_string() };
        Self::from_area(name, area)
    }

    /// The intersection of two regions.  Fails with `GeometryEmpty` if they
    /// do not overlap and with `NotSingular` if the overlap is in several
    /// disjoint pieces.  An empty `name` becomes "Intersection of X and Y".
    pub fn intersection_of(name: &str, r1: &Region, r2: &Region) -> Result<Self> {
        validate(r1)?;
        validate(r2)?;
        let area = r1.area.intersection(&r2.area);
        if area.is_empty() {
            tracing::debug!(r1 = %r1.name, r2 = %r2.name, "regions do not intersect");
            return Err(RegionError::GeometryEmpty);
        }
        let name = if name.is_empty() { format!("Intersection of {} and {}", r1.name, r2.name) } else { name.to_string() };
        Self::from_area(name, area)
    }

    /// A rectangular region spanning the whole globe.
    pub fn global() -> Self {
        let area = AreaSet::from(Rect::new(Coord { x: -180.0, y: -90.0 }, Coord { x: 180.0, y: 90.0 }));
        let border = LocationList::from(vec![
            Location::new(-90.0, -180.0),
            Location::new(-90.0, 180.0),
            Location::new(90.0, 180.0),
            Location::new(90.0, -180.0),
        ]);
        Self::from_parts("Global Region".to_string(), border, area)
    }

    /// Wrap a combined area, re-extracting its border (and any holes) with
    /// repeated vertices removed.
    fn from_area(name: String, area: AreaSet) -> Result<Self> {
        match area.len() {
            0 => return Err(RegionError::GeometryEmpty),
            1 => {}
            parts => return Err(RegionError::NotSingular { parts }),
        }

        let mut rings = area.rings(true).into_iter();
        let Some(border) = rings.next() else { return Err(RegionError::GeometryEmpty) };
        let holes = rings.collect::<Vec<_>>();

        let mut region = Self::from_parts(name, border.into_iter().map(Location::from_coord).collect(), area);
        for ring in holes {
            let hole_area = AreaSet::from_shape(MultiPolygon::new(vec![
                Polygon::new(LineString::from(ring.clone()), Vec::new()),
            ]));
            region.register_interior(ring.into_iter().map(Location::from_coord).collect(), hole_area);
        }
        Ok(region)
    }
}
