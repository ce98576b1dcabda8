//! Spherical-earth formulas over `Location`s.
//!
//! Distances are in km, angles in radians unless the name says otherwise.
//! Formulas follow the Aviation Formulary (haversine distance, initial
//! course, destination along a great circle).  The `_fast` variants use a
//! flat-earth approximation and are only meant for short separations
//! (a few hundred km).

use std::f64::consts::{PI, TAU};

use crate::location::{Location, LocationList};

/// Mean radius of the earth in km.
pub const EARTH_RADIUS_MEAN: f64 = 6371.0072;

/// Tolerance for location comparisons.  In decimal degrees, radians and km
/// this is well below millimeter scale.
pub const TOLERANCE: f64 = 1e-12;

/// `true` if `p` coincides with one of the poles.
#[inline]
pub fn is_pole(p: &Location) -> bool {
    p.lat_rad().cos() < TOLERANCE
}

/// Central angle between two locations (haversine).
pub fn angle(p1: &Location, p2: &Location) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let sin_dlat_by2 = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon_by2 = ((p2.lon_rad() - p1.lon_rad()) / 2.0).sin();
    // half length of chord connecting points
    let c = sin_dlat_by2 * sin_dlat_by2 + lat1.cos() * lat2.cos() * sin_dlon_by2 * sin_dlon_by2;
    2.0 * c.sqrt().atan2((1.0 - c).sqrt())
}

/// Great-circle surface distance in km.
#[inline]
pub fn horz_distance(p1: &Location, p2: &Location) -> f64 {
    EARTH_RADIUS_MEAN * angle(p1, p2)
}

/// Approximate surface distance in km, treating the latitude and
/// cos(mean latitude)-scaled longitude differences as the legs of a right
/// triangle.  Not valid across ±180°.
pub fn horz_distance_fast(p1: &Location, p2: &Location) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let d_lat = lat1 - lat2;
    let d_lon = (p1.lon_rad() - p2.lon_rad()) * ((lat1 + lat2) * 0.5).cos();
    EARTH_RADIUS_MEAN * (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Initial azimuth (bearing) from `p1` to `p2`, in `[0, 2π)`.
pub fn azimuth_rad(p1: &Location, p2: &Location) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();

    if is_pole(p1) {
        return if lat1 > 0.0 { PI } else { 0.0 };
    }

    let d_lon = p2.lon_rad() - p1.lon_rad();
    let cos_lat2 = lat2.cos();
    let az = (d_lon.sin() * cos_lat2)
        .atan2(lat1.cos() * lat2.sin() - lat1.sin() * cos_lat2 * d_lon.cos());
    (az + TAU) % TAU
}

/// Initial azimuth from `p1` to `p2` in decimal degrees, in `[0, 360)`.
#[inline]
pub fn azimuth(p1: &Location, p2: &Location) -> f64 {
    azimuth_rad(p1, p2).to_degrees()
}

/// The location `distance` km from `p` along a great circle leaving at
/// `azimuth` radians.  Depth is carried over from `p`.
pub fn location(p: &Location, azimuth: f64, distance: f64) -> Location {
    let lat1 = p.lat_rad();
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let ad = distance / EARTH_RADIUS_MEAN;
    let (sin_d, cos_d) = ad.sin_cos();

    let lat2 = (sin_lat1 * cos_d + cos_lat1 * sin_d * azimuth.cos()).asin();
    let lon2 = p.lon_rad() + (azimuth.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2.sin());
    Location::with_depth(lat2.to_degrees(), lon2.to_degrees(), p.depth())
}

/// Flat-earth distance in km from `p3` to the segment `p1`–`p2`.
///
/// Longitudes are scaled by the cosine of a latitude weighted toward `p3`.
/// Only appropriate over short distances (< ~200 km).
pub fn distance_to_segment_fast(p1: &Location, p2: &Location, p3: &Location) -> f64 {
    let lat1 = p1.lat_rad();
    let lat2 = p2.lat_rad();
    let lat3 = p3.lat_rad();
    let lon1 = p1.lon_rad();

    let lon_scale = (0.5 * lat3 + 0.25 * lat1 + 0.25 * lat2).cos();

    // p1 moved to the origin
    let x2 = (p2.lon_rad() - lon1) * lon_scale;
    let y2 = lat2 - lat1;
    let x3 = (p3.lon_rad() - lon1) * lon_scale;
    let y3 = lat3 - lat1;

    point_segment_distance(x2, y2, x3, y3) * EARTH_RADIUS_MEAN
}

/// Shortest distance in km from `loc` to the polyline through `locs`, using
/// `distance_to_segment_fast` for each consecutive pair.  A single-point line
/// falls back to `horz_distance_fast`; an empty one is infinitely far away.
pub fn min_distance_to_line(loc: &Location, locs: &LocationList) -> f64 {
    match locs.as_slice() {
        [] => f64::INFINITY,
        [only] => horz_distance_fast(loc, only),
        pts => pts.windows(2)
            .map(|w| distance_to_segment_fast(&w[0], &w[1], loc))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Planar distance from `(px, py)` to the segment from the origin to `(x, y)`.
fn point_segment_distance(x: f64, y: f64, px: f64, py: f64) -> f64 {
    let len2 = x * x + y * y;
    if len2 == 0.0 { return px.hypot(py) }
    let t = ((px * x + py * y) / len2).clamp(0.0, 1.0);
    (px - t * x).hypot(py - t * y)
}
