use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Latitude/longitude bounding box of a region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Location,
    max: Location,
}

impl Bounds {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self { min: Location::new(min_lat, min_lon), max: Location::new(max_lat, max_lon) }
    }

    /// Bounds of an empty area: every coordinate is NaN.
    pub(crate) fn nan() -> Self {
        let corner = Location::from_coord(Coord { x: f64::NAN, y: f64::NAN });
        Self { min: corner, max: corner }
    }

    /// South-west corner.
    #[inline] pub fn min(&self) -> Location { self.min }
    /// North-east corner.
    #[inline] pub fn max(&self) -> Location { self.max }

    #[inline] pub fn min_lat(&self) -> f64 { self.min.lat() }
    #[inline] pub fn min_lon(&self) -> f64 { self.min.lon() }
    #[inline] pub fn max_lat(&self) -> f64 { self.max.lat() }
    #[inline] pub fn max_lon(&self) -> f64 { self.max.lon() }

    /// Center of the box in the (lon, lat) plane.
    pub fn center(&self) -> Location {
        Location::new(
            (self.min_lat() + self.max_lat()) / 2.0,
            (self.min_lon() + self.max_lon()) / 2.0,
        )
    }

    /// The box as a planar `(lon, lat)` rectangle.
    pub(crate) fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.min_lon(), y: self.min_lat() },
            Coord { x: self.max_lon(), y: self.max_lat() },
        )
    }
}

/// Clipped rectangles may sit a rounding error past ±90°/±180°, so the
/// corners are not range checked.
impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Self {
        Self { min: Location::from_coord(rect.min()), max: Location::from_coord(rect.max()) }
    }
}
