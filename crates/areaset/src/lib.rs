//! Boolean algebra over closed polygonal paths in the plane.
//!
//! An [`AreaSet`] is a set of non-overlapping polygons, each an exterior ring
//! plus zero or more holes.  Sets are combined with union, intersection and
//! difference, queried for point containment, and walked back into vertex
//! paths with [`PathSegment`]s.
//!
//! Coordinates are plain `(x, y)` pairs.  The crate attaches no geographic
//! meaning to them; callers that store geographic data use `x = lon` and
//! `y = lat`.
//!
//! # Insidedness
//!
//! Containment follows the clipping backend: a point is inside if it lies in
//! the interior of some polygon.  Points exactly on an edge may be classified
//! either way after floating-point rounding, and vertices produced by boolean
//! operations are snapped to the backend's working grid.  Only strictly
//! interior or strictly exterior points have a stable answer.

pub mod area;
pub mod path;

pub use area::{AreaError, AreaSet, Result, EQUALITY_TOLERANCE};
pub use path::{PathIter, PathSegment};
