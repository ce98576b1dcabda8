//! Boundary traversal.
//!
//! An `AreaSet` is walked ring by ring: every component's exterior first,
//! then its holes.  Each ring yields one `MoveTo`, a `LineTo` per remaining
//! vertex, and a final `Close`.  The closing vertex stored by `geo` (a repeat
//! of the first) is not emitted.

use geo::{Coord, LineString};

use crate::AreaSet;

/// One step of a boundary walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// Start of a new ring at the given vertex.
    MoveTo(Coord<f64>),
    /// Straight edge to the given vertex.
    LineTo(Coord<f64>),
    /// Implicit edge back to the ring's first vertex.
    Close,
}

/// Iterator over the `PathSegment`s of an `AreaSet`.
pub struct PathIter<'a> {
    rings:  Vec<&'a LineString<f64>>,
    ring:   usize,
    vertex: usize,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ring: &'a LineString<f64> = self.rings.get(self.ring).copied()?;
            let n = open_len(ring);
            if n == 0 {
                self.ring += 1;
                continue;
            }

            let vertex = self.vertex;
            self.vertex += 1;
            return Some(match vertex {
                0 => PathSegment::MoveTo(ring.0[0]),
                v if v < n => PathSegment::LineTo(ring.0[v]),
                _ => {
                    self.ring += 1;
                    self.vertex = 0;
                    PathSegment::Close
                }
            });
        }
    }
}

/// Number of vertices in `ring` not counting a repeated closing vertex.
fn open_len(ring: &LineString<f64>) -> usize {
    let n = ring.0.len();
    if n > 1 && ring.0[0] == ring.0[n - 1] { n - 1 } else { n }
}

/// Drop consecutive duplicate vertices, treating the sequence as a ring
/// (the last vertex precedes the first).
pub(crate) fn dedup_ring(coords: Vec<Coord<f64>>) -> Vec<Coord<f64>> {
    let Some(&last) = coords.last() else { return coords };
    let mut prev = last;
    let mut cleaned = Vec::with_capacity(coords.len());
    for coord in coords {
        if coord == prev { continue }
        cleaned.push(coord);
        prev = coord;
    }
    cleaned
}

/// The open vertex list of `ring`, optionally cleaned of repeats.
pub(crate) fn ring_vertices(ring: &LineString<f64>, clean: bool) -> Vec<Coord<f64>> {
    let coords = ring.0[..open_len(ring)].to_vec();
    if clean { dedup_ring(coords) } else { coords }
}

impl AreaSet {
    /// Walk the boundary of every component (exterior, then holes).
    pub fn path_iter(&self) -> PathIter<'_> {
        let rings = self.shape().0.iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .collect();
        PathIter { rings, ring: 0, vertex: 0 }
    }

    /// Every boundary vertex in traversal order, skipping `Close` steps.
    ///
    /// With `clean`, consecutive duplicate vertices (common after union and
    /// intersection) are collapsed.
    pub fn boundary_path(&self, clean: bool) -> Vec<Coord<f64>> {
        let coords = self.path_iter()
            .filter_map(|segment| match segment {
                PathSegment::MoveTo(c) | PathSegment::LineTo(c) => Some(c),
                PathSegment::Close => None,
            })
            .collect::<Vec<_>>();
        if clean { dedup_ring(coords) } else { coords }
    }

    /// The boundary split into rings: for each component its exterior,
    /// followed by its holes.  Rings are open (no repeated closing vertex).
    pub fn rings(&self, clean: bool) -> Vec<Vec<Coord<f64>>> {
        self.shape().0.iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .map(|ring| ring_vertices(ring, clean))
            .filter(|ring| !ring.is_empty())
            .collect()
    }
}
