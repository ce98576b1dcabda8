//! Regions discretized into evenly spaced grid nodes.

use std::ops::Deref;

use areaset::AreaSet;
use geo::{Coord, Rect};

use crate::border::BorderMode;
use crate::bounds::Bounds;
use crate::error::{RegionError, Result};
use crate::location::{Location, LocationList};
use crate::region::Region;

/// Largest node spacing accepted, in degrees.
pub const MAX_GRID_SPACING: f64 = 5.0;

/// Name given to gridded regions built without one.
const DEFAULT_GRIDDED_NAME: &str = "Unnamed Gridded Region";

/// Compass directions for moving between neighboring grid nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::NorthEast, Direction::East, Direction::SouthEast,
        Direction::South, Direction::SouthWest, Direction::West, Direction::NorthWest,
    ];

    /// Sign of the latitude step: 1 north, -1 south, 0 otherwise.
    pub fn sign_lat_move(self) -> i32 {
        match self {
            Direction::North | Direction::NorthEast | Direction::NorthWest => 1,
            Direction::South | Direction::SouthEast | Direction::SouthWest => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Sign of the longitude step: 1 east, -1 west, 0 otherwise.
    pub fn sign_lon_move(self) -> i32 {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => 1,
            Direction::West | Direction::NorthWest | Direction::SouthWest => -1,
            Direction::North | Direction::South => 0,
        }
    }
}

/// Round to 8 decimal places, hiding accumulated error (1.0 vs 0.999999999997).
fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

/// Shift `anchor` by whole spacings to the first grid value at or above `min`.
fn compute_anchor(min: f64, anchor: f64, spacing: f64) -> f64 {
    let delta = anchor - min;
    let offset = delta - (delta / spacing).floor() * spacing;
    let mut value = min + offset;
    if value < min { value += spacing }
    round8(value)
}

/// `count` values from `start` in steps of `step`, each rounded.
fn build_array(start: f64, count: usize, step: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(count);
    let mut value = start;
    for _ in 0..count {
        values.push(round8(value));
        value += step;
    }
    values
}

/// Number of spacing intervals between `min` and `max`; none if `max < min`.
fn interval_count(min: f64, max: f64, width: f64) -> Option<usize> {
    let n = ((max - min) / width).floor();
    if n.is_finite() && n >= 0.0 { Some(n as usize) } else { None }
}

/// Node centers from `min` up to `max`; the first node is centered on `min`.
fn node_centers(min: f64, max: f64, width: f64) -> Vec<f64> {
    match interval_count(min, max, width) {
        Some(n) => build_array(min, n + 1, width),
        None => Vec::new(),
    }
}

/// Node edges, half a spacing below each center plus one above the last.
fn node_edges(min: f64, max: f64, width: f64) -> Vec<f64> {
    match interval_count(min, max, width) {
        Some(n) => build_array(min - width / 2.0, n + 2, width),
        None => Vec::new(),
    }
}

/// Index of the node whose cell holds `value`, given sorted node edges.  A
/// value exactly on an edge belongs to the node above it.
fn node_index(edges: &[f64], value: f64) -> Option<usize> {
    let below = edges.partition_point(|&edge| edge <= value);
    // below == 0: under the first edge; below == len: at or over the last
    (below > 0 && below < edges.len()).then(|| below - 1)
}

fn validate_spacing(axis: &str, spacing: f64) -> Result<()> {
    if spacing > 0.0 && spacing <= MAX_GRID_SPACING { return Ok(()) }
    Err(RegionError::InvalidArgument(
        format!("{axis} spacing [{spacing}] is out of (0, {MAX_GRID_SPACING}] range")))
}

// ---------------------------------------------------------------------------
// GriddedRegion
// ---------------------------------------------------------------------------

/// A `Region` together with the grid nodes (cell centers) that fall inside it.
///
/// The grid is aligned to an anchor location, adjusted to the first grid
/// point at or above the region's minimum lat/lon.  Nodes are numbered row by
/// row from the south-west.  Each node owns the cell extending half a spacing
/// on every side; a location in a node's cell maps to that node even if it is
/// outside the region border.
///
/// Gridded regions deref to their `Region` for geometry queries but do not
/// accept interiors: cut holes into the region before gridding it.
#[derive(Clone, Debug)]
pub struct GriddedRegion {
    region: Region,

    lat_spacing: f64,
    lon_spacing: f64,
    anchor: Location,

    /// Node centers inside the region, row-major from the south-west.
    nodes: LocationList,

    /// Cell edges along each axis.
    lat_edges: Vec<f64>,
    lon_edges: Vec<f64>,

    /// Node index for each cell of the full grid, `None` outside the region.
    grid_indices: Vec<Option<usize>>,
    lon_size: usize,

    min_grid_lat: f64,
    max_grid_lat: f64,
    min_grid_lon: f64,
    max_grid_lon: f64,
}

impl GriddedRegion {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Grid an existing region with the given spacings (each in `(0, 5]`
    /// degrees).  Without an `anchor` the grid is aligned to the region's
    /// minimum lat/lon.
    pub fn from_region(region: &Region, lat_spacing: f64, lon_spacing: f64, anchor: Option<Location>) -> Result<Self> {
        Self::grid(region.clone(), region.name(), lat_spacing, lon_spacing, anchor)
    }

    /// Grid a region built with `Region::bordered`.
    pub fn bordered(
        name: &str,
        border: &LocationList,
        mode: BorderMode,
        lat_spacing: f64,
        lon_spacing: f64,
        anchor: Option<Location>,
    ) -> Result<Self> {
        Self::grid(Region::bordered(name, border, mode)?, name, lat_spacing, lon_spacing, anchor)
    }

    /// Grid a region built with `Region::rectangular`.
    pub fn rectangular(
        name: &str,
        loc1: Location,
        loc2: Location,
        lat_spacing: f64,
        lon_spacing: f64,
        anchor: Option<Location>,
    ) -> Result<Self> {
        Self::grid(Region::rectangular(name, loc1, loc2)?, name, lat_spacing, lon_spacing, anchor)
    }

    fn grid(mut region: Region, name: &str, lat_spacing: f64, lon_spacing: f64, anchor: Option<Location>) -> Result<Self> {
        validate_spacing("latitude", lat_spacing)?;
        validate_spacing("longitude", lon_spacing)?;
        region.rename(if name.is_empty() { DEFAULT_GRIDDED_NAME.to_string() } else { format!("{name} Gridded") });

        let bounds = region.bounds();
        let anchor = anchor.unwrap_or(bounds.min());
        let anchor_lat = compute_anchor(bounds.min_lat(), anchor.lat(), lat_spacing);
        let anchor_lon = compute_anchor(bounds.min_lon(), anchor.lon(), lon_spacing);

        let lat_nodes = node_centers(anchor_lat, bounds.max_lat(), lat_spacing);
        let lon_nodes = node_centers(anchor_lon, bounds.max_lon(), lon_spacing);

        let mut nodes = Vec::new();
        let mut grid_indices = Vec::with_capacity(lat_nodes.len() * lon_nodes.len());
        for &lat in &lat_nodes {
            for &lon in &lon_nodes {
                let loc = Location::new(lat, lon);
                if region.contains(&loc) {
                    grid_indices.push(Some(nodes.len()));
                    nodes.push(loc);
                } else {
                    grid_indices.push(None);
                }
            }
        }

        tracing::debug!(name = region.name(), lat_spacing, lon_spacing, nodes = nodes.len(), "gridded region");

        Ok(Self {
            lat_edges: node_edges(anchor_lat, bounds.max_lat(), lat_spacing),
            lon_edges: node_edges(anchor_lon, bounds.max_lon(), lon_spacing),
            min_grid_lat: lat_nodes.first().copied().unwrap_or(f64::NAN),
            max_grid_lat: lat_nodes.last().copied().unwrap_or(f64::NAN),
            min_grid_lon: lon_nodes.first().copied().unwrap_or(f64::NAN),
            max_grid_lon: lon_nodes.last().copied().unwrap_or(f64::NAN),
            lon_size: lon_nodes.len(),
            region,
            lat_spacing,
            lon_spacing,
            anchor: Location::new(anchor_lat, anchor_lon),
            nodes: LocationList::from(nodes),
            grid_indices,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline] pub fn region(&self) -> &Region { &self.region }

    #[inline] pub fn lat_spacing(&self) -> f64 { self.lat_spacing }
    #[inline] pub fn lon_spacing(&self) -> f64 { self.lon_spacing }

    /// Adjusted grid anchor: the south-west corner of the bounding grid.
    #[inline] pub fn anchor(&self) -> Location { self.anchor }

    /// Number of nodes in the region.
    #[inline] pub fn size(&self) -> usize { self.nodes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    #[inline] pub fn nodes(&self) -> &LocationList { &self.nodes }

    /// Extent of the bounding grid.  There is not necessarily a node at
    /// each of these values, and all are NaN if the grid has no rows or
    /// columns.
    #[inline] pub fn min_grid_lat(&self) -> f64 { self.min_grid_lat }
    #[inline] pub fn max_grid_lat(&self) -> f64 { self.max_grid_lat }
    #[inline] pub fn min_grid_lon(&self) -> f64 { self.min_grid_lon }
    #[inline] pub fn max_grid_lon(&self) -> f64 { self.max_grid_lon }

    // -----------------------------------------------------------------------
    // Node lookup
    // -----------------------------------------------------------------------

    #[inline]
    pub fn location_for_index(&self, index: usize) -> Option<Location> {
        self.nodes.get(index).copied()
    }

    /// Index of the node whose cell holds `loc`, or `None` if that cell is
    /// off the grid or its center is outside the region.
    ///
    /// This is not the same test as `Region::contains`: locations just
    /// outside the border can map to a node and locations just inside it
    /// may not.
    pub fn index_for_location(&self, loc: &Location) -> Option<usize> {
        self.index_for(loc.lat(), loc.lon())
    }

    fn index_for(&self, lat: f64, lon: f64) -> Option<usize> {
        let lon_index = node_index(&self.lon_edges, lon)?;
        let lat_index = node_index(&self.lat_edges, lat)?;
        self.grid_indices.get(lat_index * self.lon_size + lon_index).copied().flatten()
    }

    /// Index of the neighbor of node `index` in direction `dir`, if that
    /// neighbor is part of the region.
    pub fn move_index(&self, index: usize, dir: Direction) -> Option<usize> {
        let start = self.location_for_index(index)?;
        self.index_for(
            start.lat() + self.lat_spacing * f64::from(dir.sign_lat_move()),
            start.lon() + self.lon_spacing * f64::from(dir.sign_lon_move()),
        )
    }

    /// The cell rectangle centered on node `index`.
    pub fn node_area(&self, index: usize) -> Option<AreaSet> {
        self.node_rect(index).map(AreaSet::from)
    }

    fn node_rect(&self, index: usize) -> Option<Rect<f64>> {
        let p = self.location_for_index(index)?;
        let (half_lat, half_lon) = (self.lat_spacing / 2.0, self.lon_spacing / 2.0);
        Some(Rect::new(
            Coord { x: p.lon() - half_lon, y: p.lat() - half_lat },
            Coord { x: p.lon() + half_lon, y: p.lat() + half_lat },
        ))
    }

    /// Indices of all nodes whose cell overlaps `bounds` by some area.
    pub fn indices_for_bounds(&self, bounds: &Bounds) -> Vec<usize> {
        let target = bounds.to_rect();
        (0..self.size())
            .filter(|&i| self.node_rect(i).is_some_and(|cell| {
                cell.min().x < target.max().x && cell.max().x > target.min().x &&
                cell.min().y < target.max().y && cell.max().y > target.min().y
            }))
            .collect()
    }

    /// Compares geometry, anchor and spacings, ignoring names.
    pub fn equals_region(&self, other: &GriddedRegion) -> bool {
        self.region.equals_region(&other.region)
            && self.anchor == other.anchor
            && self.lat_spacing == other.lat_spacing
            && self.lon_spacing == other.lon_spacing
    }
}

impl Deref for GriddedRegion {
    type Target = Region;

    fn deref(&self) -> &Region { &self.region }
}

impl PartialEq for GriddedRegion {
    fn eq(&self, other: &Self) -> bool {
        self.region.name() == other.region.name() && self.equals_region(other)
    }
}

impl<'a> IntoIterator for &'a GriddedRegion {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;
    fn into_iter(self) -> Self::IntoIter { self.nodes.iter() }
}
