use geo::{Area, BooleanOps, BoundingRect, Contains, Coord, LineString, MultiPolygon, Point, Polygon, Rect, Relate};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when building an `AreaSet` from a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaError {
    /// The path encloses no area (too few points, collinear, or self-cancelling).
    #[error("path encloses no area")]
    Empty,
    /// The path resolves to more than one disjoint area.
    #[error("path resolves to {parts} disjoint areas, expected a single closed area")]
    NotSingular { parts: usize },
}

pub type Result<T> = std::result::Result<T, AreaError>;

/// Relative area below which the symmetric difference of two sets is
/// treated as empty.  Absorbs the snapping of boolean-operation output.
pub const EQUALITY_TOLERANCE: f64 = 1e-8;

// ---------------------------------------------------------------------------
// AreaSet
// ---------------------------------------------------------------------------

/// A set of closed planar areas supporting boolean combination.
///
/// Each connected component is one `geo::Polygon` (exterior ring plus holes).
/// A set built by [`AreaSet::from_path`] keeps the caller's vertices exactly;
/// sets produced by boolean operations carry vertices snapped by the
/// clipping backend.
#[derive(Clone, Debug)]
pub struct AreaSet {
    shape: MultiPolygon<f64>,
}

impl Default for AreaSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl AreaSet {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// The empty set.
    pub fn empty() -> Self {
        Self { shape: MultiPolygon::new(Vec::new()) }
    }

    /// Build a set from a single path of points, implicitly closed back to the
    /// first point.  A repeated closing point is ignored.
    ///
    /// Fails with `Empty` if the path encloses no area and with `NotSingular`
    /// if it resolves into more than one connected area (e.g. a bow-tie).
    pub fn from_path(points: impl IntoIterator<Item = Coord<f64>>) -> Result<Self> {
        let mut coords = points.into_iter().collect::<Vec<_>>();
        if coords.len() > 1 && coords.first() == coords.last() { coords.pop(); }
        if coords.len() < 3 { return Err(AreaError::Empty) }

        let polygon = Polygon::new(LineString::from(coords), Vec::new());
        if polygon.unsigned_area() == 0.0 { return Err(AreaError::Empty) }

        // Resolve the path under the clipper's fill rule; only the part count
        // is used, the stored ring keeps the input vertices.
        let resolved = MultiPolygon::new(vec![polygon.clone()])
            .union(&MultiPolygon::<f64>::new(Vec::new()));
        match resolved.0.len() {
            0 => Err(AreaError::Empty),
            1 => Ok(Self { shape: MultiPolygon::new(vec![polygon]) }),
            parts => {
                tracing::trace!(parts, "path did not resolve to a single area");
                Err(AreaError::NotSingular { parts })
            }
        }
    }

    /// Wrap an existing `MultiPolygon` without validation.
    pub fn from_shape(shape: MultiPolygon<f64>) -> Self {
        Self { shape }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Borrow the underlying polygons.
    #[inline] pub fn shape(&self) -> &MultiPolygon<f64> { &self.shape }

    /// Number of connected components.
    #[inline] pub fn len(&self) -> usize { self.shape.0.len() }

    /// `true` if the set covers no area.
    #[inline] pub fn is_empty(&self) -> bool { self.shape.0.is_empty() }

    /// `true` if the set is exactly one connected component.  Holes are allowed.
    #[inline] pub fn is_singular(&self) -> bool { self.shape.0.len() == 1 }

    /// `true` if any component has a hole.
    pub fn has_holes(&self) -> bool {
        self.shape.0.iter().any(|polygon| !polygon.interiors().is_empty())
    }

    /// Planar area in squared coordinate units.
    #[inline] pub fn unsigned_area(&self) -> f64 { self.shape.unsigned_area() }

    /// Axis-aligned bounding box, or `None` for the empty set.
    #[inline] pub fn bounding_rect(&self) -> Option<Rect<f64>> { self.shape.bounding_rect() }

    /// `true` if the set is a single hole-free, axis-aligned rectangle.
    pub fn is_rectangular(&self) -> bool {
        let [polygon] = self.shape.0.as_slice() else { return false };
        if !polygon.interiors().is_empty() { return false }

        let ring = crate::path::ring_vertices(polygon.exterior(), true);
        if ring.len() != 4 { return false }
        (0..4).all(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % 4]);
            a.x == b.x || a.y == b.y
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// `true` if `(x, y)` lies in the interior of the set.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.shape.contains(&Point::new(x, y))
    }

    /// `true` if adding `other` to this set leaves it unchanged, i.e.
    /// `self ∪ other == self`.
    pub fn covers(&self, other: &Self) -> bool {
        if other.is_empty() { return true }
        if self.is_empty() { return false }
        let residual = self.union(other).xor(self).unsigned_area();
        residual <= other.unsigned_area() * EQUALITY_TOLERANCE
    }

    /// `true` if the interiors of the two sets intersect.  Sets that only
    /// touch along an edge or at a point do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() { return false }
        let im = self.shape.relate(&other.shape);
        im.is_intersects() && !im.is_touches()
    }

    // -----------------------------------------------------------------------
    // Boolean operations
    // -----------------------------------------------------------------------

    pub fn union(&self, other: &Self) -> Self {
        Self { shape: self.shape.union(&other.shape) }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self { shape: self.shape.intersection(&other.shape) }
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self { shape: self.shape.difference(&other.shape) }
    }

    pub fn xor(&self, other: &Self) -> Self {
        Self { shape: self.shape.xor(&other.shape) }
    }

    /// Remove `other` from this set in place.
    pub fn subtract(&mut self, other: &Self) {
        self.shape = self.shape.difference(&other.shape);
    }
}

impl From<Rect<f64>> for AreaSet {
    fn from(rect: Rect<f64>) -> Self {
        Self { shape: MultiPolygon::new(vec![rect.to_polygon()]) }
    }
}

/// Geometric equality: the symmetric difference has negligible area relative
/// to the smaller operand.
impl PartialEq for AreaSet {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let scale = self.unsigned_area().min(other.unsigned_area());
        self.xor(other).unsigned_area() <= scale * EQUALITY_TOLERANCE
    }
}
