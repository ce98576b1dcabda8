//! Border vertex generation.
//!
//! Pure functions turning primitive shape parameters into border vertex
//! lists: great-circle densification, circle and segment-box approximations.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::locations::{azimuth_rad, horz_distance, location};

/// Maximum chord length used to approximate a great circle, in km.
pub const GC_SEGMENT_KM: f64 = 100.0;

/// Bearing increment between circle vertices, in degrees.
pub const WEDGE_WIDTH_DEG: f64 = 10.0;

/// How consecutive border vertices are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorderMode {
    /// Straight lines in the (lon, lat) plane, i.e. a Mercator projection.
    #[default]
    MercatorLinear,
    /// Great circles, approximated by chords of at most `GC_SEGMENT_KM`.
    GreatCircle,
}

/// Drop a trailing vertex that repeats the first.
pub(crate) fn strip_closing(border: &[Location]) -> &[Location] {
    match border {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &border[..border.len() - 1],
        _ => border,
    }
}

/// Densify a closed border so that no two consecutive vertices are more than
/// `GC_SEGMENT_KM` apart, inserting points along the great circle between
/// each pair.  The walk starts from the last vertex so the closing edge is
/// densified too; the output begins with that vertex.
pub(crate) fn great_circle_border(border: &[Location]) -> Vec<Location> {
    let Some(&last) = border.last() else { return Vec::new() };

    let mut densified = Vec::with_capacity(border.len());
    let mut start = last;
    for &end in border {
        densified.push(start);
        let mut distance = horz_distance(&start, &end);
        while distance > GC_SEGMENT_KM {
            let step = location(&start, azimuth_rad(&start, &end), GC_SEGMENT_KM);
            densified.push(step);
            start = step;
            distance = horz_distance(&start, &end);
        }
        start = end;
    }

    tracing::trace!(input = border.len(), output = densified.len(), "densified great-circle border");
    densified
}

/// Vertices approximating a circle of `radius` km around `center`, one every
/// `WEDGE_WIDTH_DEG` of bearing starting due north.
pub(crate) fn location_circle(center: &Location, radius: f64) -> Vec<Location> {
    let wedges = (360.0 / WEDGE_WIDTH_DEG).round() as usize;
    (0..wedges)
        .map(|i| location(center, (i as f64 * WEDGE_WIDTH_DEG).to_radians(), radius))
        .collect()
}

/// The four corners of a box as long as the segment `p1`–`p2` extending
/// `distance` km to either side of it.
pub(crate) fn location_box(p1: &Location, p2: &Location, distance: f64) -> Vec<Location> {
    let az12 = azimuth_rad(p1, p2);
    let az21 = azimuth_rad(p2, p1); // back azimuth
    vec![
        location(p1, az12 - FRAC_PI_2, distance),
        location(p1, az12 + FRAC_PI_2, distance),
        location(p2, az21 - FRAC_PI_2, distance),
        location(p2, az21 + FRAC_PI_2, distance),
    ]
}
