// Integration tests for Region construction:
//   bordered (both border modes), rectangular, circular, buffered, global,
//   and the errors each reports.

use approx::assert_relative_eq;
use georegion::locations::{horz_distance, location};
use georegion::{
    BorderMode, Location, LocationList, Region, RegionError, DEFAULT_NAME, GC_SEGMENT_KM,
};

fn locs(pts: &[(f64, f64)]) -> LocationList {
    pts.iter().map(|&(lat, lon)| Location::new(lat, lon)).collect()
}

// ---------------------------------------------------------------------------
// Bordered
// ---------------------------------------------------------------------------

#[test]
fn mercator_border_is_kept_verbatim() {
    let border = locs(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0)]);
    let r = Region::bordered("tri", &border, BorderMode::MercatorLinear).unwrap();
    assert_eq!(r.border(), &border);
    assert!(r.contains(&Location::new(1.0, 4.0)));
    assert!(!r.contains(&Location::new(4.0, 1.0)));
}

#[test]
fn great_circle_border_is_densified() {
    let border = locs(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0)]);
    let r = Region::bordered("tri", &border, BorderMode::GreatCircle).unwrap();
    let gc = r.border().as_slice();

    // every edge of the input is several hundred km long
    assert!(gc.len() >= border.len() + 4);
    for i in 0..gc.len() {
        let d = horz_distance(&gc[i], &gc[(i + 1) % gc.len()]);
        assert!(d <= GC_SEGMENT_KM + 1e-6, "chord {i} is {d} km");
    }
    // input vertices survive densification
    for loc in &border {
        assert!(gc.contains(loc));
    }
}

#[test]
fn great_circle_area_follows_densified_border() {
    // the great circle between two points at 60°N bows poleward of the parallel
    let border = locs(&[(60.0, 0.0), (60.0, 20.0), (50.0, 20.0), (50.0, 0.0)]);
    let linear = Region::bordered("", &border, BorderMode::MercatorLinear).unwrap();
    let gc = Region::bordered("", &border, BorderMode::GreatCircle).unwrap();
    let poleward = Location::new(60.2, 10.0);
    assert!(!linear.contains(&poleward));
    assert!(gc.contains(&poleward));
}

#[test]
fn closing_vertex_is_optional() {
    let open = locs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    let closed = locs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
    let a = Region::bordered("r", &open, BorderMode::MercatorLinear).unwrap();
    let b = Region::bordered("r", &closed, BorderMode::MercatorLinear).unwrap();
    assert_eq!(a, b);
    assert_eq!(b.border().len(), 3);
}

#[test]
fn border_errors() {
    let two = locs(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        Region::bordered("", &two, BorderMode::MercatorLinear).unwrap_err(),
        RegionError::TooFewVertices { found: 2 },
    );
    let empty = LocationList::default();
    assert_eq!(
        Region::bordered("", &empty, BorderMode::GreatCircle).unwrap_err(),
        RegionError::TooFewVertices { found: 0 },
    );
    let bow_tie = locs(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    // the two lobes cancel out
    assert_eq!(
        Region::bordered("", &bow_tie, BorderMode::MercatorLinear).unwrap_err(),
        RegionError::GeometryEmpty,
    );
}

// ---------------------------------------------------------------------------
// Rectangular, circular, global
// ---------------------------------------------------------------------------

#[test]
fn rectangle_from_any_opposite_corners() {
    let a = Region::rectangular("r", Location::new(10.0, 20.0), Location::new(12.0, 25.0)).unwrap();
    let b = Region::rectangular("r", Location::new(12.0, 20.0), Location::new(10.0, 25.0)).unwrap();
    assert_eq!(a, b);
    assert!(a.is_rectangular());
    assert_eq!(a.border().len(), 4);
}

#[test]
fn circle_vertices_lie_on_radius() {
    let center = Location::new(-33.0, 151.0);
    let r = Region::circular("", center, 250.0).unwrap();
    assert_eq!(r.name(), DEFAULT_NAME);
    assert_eq!(r.border().len(), 36);
    for loc in r.border() {
        assert_relative_eq!(horz_distance(&center, loc), 250.0, max_relative = 1e-9);
    }
}

#[test]
fn global_region_is_rectangular() {
    let g = Region::global();
    assert!(g.is_rectangular());
    let b = g.bounds();
    assert_eq!((b.min_lat(), b.max_lat()), (-90.0, 90.0));
    assert_eq!((b.min_lon(), b.max_lon()), (-180.0, 180.0));
    assert!(g.contains_region(&Region::circular("", Location::new(45.0, 45.0), 500.0).unwrap()));
}

// ---------------------------------------------------------------------------
// Buffered
// ---------------------------------------------------------------------------

#[test]
fn buffer_around_segment() {
    let line = locs(&[(0.0, 0.0), (0.0, 1.0)]);
    let r = Region::buffered("buf", &line, 10.0).unwrap();
    assert!(r.contains(&Location::new(0.0, 0.5)));
    assert!(r.contains(&Location::new(0.05, 0.5)));
    assert!(r.contains(&Location::new(0.0, -0.05)));
    assert!(r.contains(&Location::new(0.0, 1.05)));
    assert!(!r.contains(&Location::new(0.2, 0.5)));
    assert!(!r.contains(&Location::new(0.0, 1.2)));
    assert!(r.interiors().is_none());
}

#[test]
fn buffer_around_single_point_is_a_circle() {
    let center = Location::new(40.0, -105.0);
    let r = Region::buffered("", &locs(&[(40.0, -105.0)]), 20.0).unwrap();
    assert!(r.contains(&center));
    assert!(r.contains(&location(&center, 0.3, 15.0)));
    assert!(!r.contains(&location(&center, 0.3, 25.0)));
}

#[test]
fn buffer_skips_repeated_vertices() {
    let line = locs(&[(0.0, 0.0), (0.0, 0.0), (0.5, 0.5)]);
    let r = Region::buffered("", &line, 5.0).unwrap();
    assert!(r.contains(&Location::new(0.25, 0.25)));
}
