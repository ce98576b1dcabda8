use crate::location::Location;
use crate::locations::{azimuth_rad, distance_to_segment_fast, horz_distance, min_distance_to_line};

use super::Region;

/// Distance (in km) beyond which `Region::distance_to_location` is no longer
/// accurate.
pub const DISTANCE_ACCURACY_KM: f64 = 250.0;

/// Shoelace sum over a closed ring (first point repeated at the end).
fn shoelace(xs: &[f64], ys: &[f64]) -> f64 {
    let mut area = 0.0;
    for i in 0..xs.len().saturating_sub(1) {
        area += xs[i] * ys[i + 1] - xs[i + 1] * ys[i];
    }
    area
}

impl Region {
    /// Approximate surface area of the region's border polygon in km².
    ///
    /// Border vertices are projected to kilometer offsets from the center of
    /// the bounds (by azimuth and great-circle distance) and measured with
    /// the shoelace formula.  Interiors are not subtracted.  The estimate
    /// degrades as regions get large enough for curvature to matter.
    pub fn extent(&self) -> f64 {
        let origin = self.bounds().center();
        let (mut xs, mut ys): (Vec<f64>, Vec<f64>) = self.border.iter()
            .map(|loc| {
                let az = azimuth_rad(&origin, loc);
                let d = horz_distance(&origin, loc);
                (az.sin() * d, az.cos() * d)
            })
            .unzip();

        let (Some(&x0), Some(&y0)) = (xs.first(), ys.first()) else { return 0.0 };
        xs.push(x0);
        ys.push(y0);
        shoelace(&xs, &ys).abs() / 2.0
    }

    /// Distance in km from `loc` to the nearest point on the border, or 0 if
    /// the region contains `loc`.
    ///
    /// Uses flat-earth segment distances, so results are only reliable up to
    /// about `DISTANCE_ACCURACY_KM`.  Interiors are ignored.
    pub fn distance_to_location(&self, loc: &Location) -> f64 {
        if self.contains(loc) { return 0.0 }

        let min = min_distance_to_line(loc, &self.border);
        // closing segment from the last vertex back to the first
        let closing = match (self.border.last(), self.border.first()) {
            (Some(last), Some(first)) => distance_to_segment_fast(last, first, loc).abs(),
            _ => f64::INFINITY,
        };
        min.min(closing)
    }
}
