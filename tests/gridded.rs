// Integration tests for GriddedRegion:
//   node layout, anchors, index lookups, neighbor moves and node cells.

use approx::assert_relative_eq;
use georegion::{
    BorderMode, Bounds, Direction, GriddedRegion, Location, LocationList, Region,
};

fn unit_square(spacing: f64, anchor: Option<Location>) -> GriddedRegion {
    GriddedRegion::rectangular("square", Location::new(0.0, 0.0), Location::new(1.0, 1.0), spacing, spacing, anchor)
        .unwrap()
}

#[test]
fn rectangle_nodes_include_edges() {
    let g = unit_square(0.1, None);
    assert_eq!(g.size(), 121);
    assert!(!g.is_empty());
    assert_eq!(g.name(), "square Gridded");
    assert_eq!(g.anchor(), Location::new(0.0, 0.0));
    assert_eq!(g.location_for_index(0), Some(Location::new(0.0, 0.0)));
    assert_eq!(g.location_for_index(12), Some(Location::new(0.1, 0.1)));
    assert_eq!(g.location_for_index(120), Some(Location::new(1.0, 1.0)));
    assert_eq!(g.location_for_index(121), None);
    assert_eq!((g.min_grid_lat(), g.max_grid_lat()), (0.0, 1.0));
    assert_eq!((g.min_grid_lon(), g.max_grid_lon()), (0.0, 1.0));
    assert_eq!((&g).into_iter().count(), 121);
}

#[test]
fn anchor_offsets_grid() {
    let g = unit_square(0.1, Some(Location::new(0.05, 0.05)));
    assert_eq!(g.anchor(), Location::new(0.05, 0.05));
    assert_eq!(g.size(), 100);
    assert_eq!(g.location_for_index(0), Some(Location::new(0.05, 0.05)));
    // anchors far from the region are shifted by whole spacings
    let far = unit_square(0.1, Some(Location::new(-10.05, 30.05)));
    assert!(far.equals_region(&g));
}

#[test]
fn index_for_location_uses_cells() {
    let g = unit_square(0.1, None);
    assert_eq!(g.index_for_location(&Location::new(0.0, 0.0)), Some(0));
    assert_eq!(g.index_for_location(&Location::new(0.02, 0.04)), Some(0));
    // a location exactly on a cell edge belongs to the node above
    assert_eq!(g.index_for_location(&Location::new(0.05, 0.0)), Some(11));
    // just outside the region border, still inside the last cell
    assert_eq!(g.index_for_location(&Location::new(1.01, 1.01)), Some(120));
    assert_eq!(g.index_for_location(&Location::new(1.2, 0.5)), None);
    assert_eq!(g.index_for_location(&Location::new(0.5, -0.2)), None);
}

#[test]
fn moves_between_neighbors() {
    let g = unit_square(0.1, None);
    assert_eq!(g.move_index(0, Direction::North), Some(11));
    assert_eq!(g.move_index(0, Direction::East), Some(1));
    assert_eq!(g.move_index(0, Direction::NorthEast), Some(12));
    assert_eq!(g.move_index(0, Direction::South), None);
    assert_eq!(g.move_index(0, Direction::West), None);
    assert_eq!(g.move_index(12, Direction::SouthWest), Some(0));
    assert_eq!(g.move_index(120, Direction::NorthEast), None);
    assert_eq!(g.move_index(500, Direction::North), None);
}

#[test]
fn only_nodes_inside_region_are_kept() {
    let border: LocationList = [(0.0, 0.0), (0.0, 2.0), (2.0, 0.0)].into_iter()
        .map(|(lat, lon)| Location::new(lat, lon))
        .collect();
    let g = GriddedRegion::bordered("", &border, BorderMode::MercatorLinear, 0.5, 0.5, None).unwrap();
    assert_eq!(g.name(), "Unnamed Gridded Region");
    let expected = [(0.5, 0.5), (0.5, 1.0), (1.0, 0.5)].map(|(lat, lon)| Location::new(lat, lon));
    assert_eq!(g.nodes().as_slice(), &expected);
    // node cell exists but its center is on the border
    assert_eq!(g.index_for_location(&Location::new(0.0, 0.0)), None);
    assert_eq!(g.index_for_location(&Location::new(1.1, 0.6)), Some(2));
}

#[test]
fn node_area_is_cell_around_center() {
    let g = unit_square(0.1, None);
    let cell = g.node_area(12).unwrap();
    assert_relative_eq!(cell.unsigned_area(), 0.01, max_relative = 1e-9);
    assert!(cell.contains(0.12, 0.08));
    assert!(!cell.contains(0.2, 0.1));
    assert!(g.node_area(121).is_none());
}

#[test]
fn indices_for_bounds_include_partial_cells() {
    let g = unit_square(0.1, None);
    let indices = g.indices_for_bounds(&Bounds::new(0.0, 0.0, 0.1, 0.1));
    assert_eq!(indices, vec![0, 1, 11, 12]);
    assert_eq!(g.indices_for_bounds(&Bounds::new(0.0, 0.0, 1.0, 1.0)).len(), 121);
    assert!(g.indices_for_bounds(&Bounds::new(5.0, 5.0, 6.0, 6.0)).is_empty());
}

#[test]
fn from_region_keeps_geometry() -> anyhow::Result<()> {
    let region = Region::circular("Reno", Location::new(39.5, -119.8), 30.0)?;
    let g = GriddedRegion::from_region(&region, 0.05, 0.05, None)?;
    assert_eq!(g.name(), "Reno Gridded");
    assert!(g.region().equals_region(&region));
    assert!(g.nodes().iter().all(|loc| region.contains(loc)));
    assert!(g.size() > 0);
    Ok(())
}

#[test]
fn equality_covers_grid_parameters() {
    let a = unit_square(0.1, None);
    assert_eq!(a, unit_square(0.1, None));
    assert!(!a.equals_region(&unit_square(0.2, None)));
    assert!(!a.equals_region(&unit_square(0.1, Some(Location::new(0.05, 0.05)))));
}
