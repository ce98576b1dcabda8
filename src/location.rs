use std::fmt;
use std::ops::Index;

use geo::Coord;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A geographic point: latitude and longitude in decimal degrees, depth in km
/// (positive down).
///
/// Range checks belong to the caller; they are only asserted in debug builds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    lat:   f64,
    lon:   f64,
    #[serde(default)]
    depth: f64,
}

impl Location {
    /// A surface location (depth 0).
    pub fn new(lat: f64, lon: f64) -> Self {
        Self::with_depth(lat, lon, 0.0)
    }

    pub fn with_depth(lat: f64, lon: f64, depth: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&lat), "latitude {lat} out of range");
        debug_assert!((-180.0..=360.0).contains(&lon), "longitude {lon} out of range");
        Self { lat, lon, depth }
    }

    #[inline] pub fn lat(&self)   -> f64 { self.lat }
    #[inline] pub fn lon(&self)   -> f64 { self.lon }
    #[inline] pub fn depth(&self) -> f64 { self.depth }

    #[inline] pub fn lat_rad(&self) -> f64 { self.lat.to_radians() }
    #[inline] pub fn lon_rad(&self) -> f64 { self.lon.to_radians() }

    /// Planar `(x, y) = (lon, lat)` coordinate.
    #[inline] pub(crate) fn coord(&self) -> Coord<f64> { Coord { x: self.lon, y: self.lat } }

    /// Surface location from a planar `(lon, lat)` coordinate.  Not range
    /// checked: clipped coordinates may sit a rounding error past a limit.
    #[inline] pub(crate) fn from_coord(c: Coord<f64>) -> Self { Self { lat: c.y, lon: c.x, depth: 0.0 } }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.lon, self.lat, self.depth)
    }
}

// ---------------------------------------------------------------------------
// LocationList
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of `Location`s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationList(Vec<Location>);

impl LocationList {
    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline] pub fn first(&self) -> Option<&Location> { self.0.first() }
    #[inline] pub fn last(&self)  -> Option<&Location> { self.0.last() }
    #[inline] pub fn get(&self, index: usize) -> Option<&Location> { self.0.get(index) }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Location> { self.0.iter() }
    #[inline] pub fn as_slice(&self) -> &[Location] { &self.0 }

    /// `true` if the first and last locations are equal (and there are at
    /// least two of them).
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }
}

impl From<Vec<Location>> for LocationList {
    fn from(locs: Vec<Location>) -> Self { Self(locs) }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LocationList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl IntoIterator for LocationList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl Index<usize> for LocationList {
    type Output = Location;
    fn index(&self, index: usize) -> &Location { &self.0[index] }
}
