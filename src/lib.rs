#![doc = "Geographic regions: construction, set algebra, containment and metrics"]
//!
//! A [`Region`] is a named polygon on the earth's surface defined by a border
//! of [`Location`]s, optionally with interior holes.  Regions can be built
//! from a border, a rectangle, a circle or a buffered line, and combined by
//! union and intersection.  Borders are straight in a Mercator (lon, lat)
//! projection; [`BorderMode::GreatCircle`] densifies edges to follow great
//! circles.  A [`GriddedRegion`] discretizes a region into evenly spaced nodes.
//!
//! Log events are emitted through `tracing`; install a subscriber to see them.

mod border;
mod bounds;
mod error;
mod gridded;
mod location;
pub mod locations;
mod region;

#[doc(inline)]
pub use areaset::{AreaSet, PathSegment};

#[doc(inline)]
pub use border::{BorderMode, GC_SEGMENT_KM, WEDGE_WIDTH_DEG};

#[doc(inline)]
pub use bounds::Bounds;

#[doc(inline)]
pub use error::{RegionError, Result};

#[doc(inline)]
pub use gridded::{Direction, GriddedRegion, MAX_GRID_SPACING};

#[doc(inline)]
pub use location::{Location, LocationList};

#[doc(inline)]
pub use region::{Region, DEFAULT_NAME, DISTANCE_ACCURACY_KM, MAX_BUFFER_KM, MAX_RADIUS_KM, RECT_EDGE_OFFSET};
