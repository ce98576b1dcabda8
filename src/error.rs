use areaset::AreaError;
use thiserror::Error;

/// Errors that can occur when building, combining or modifying a `Region`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// A required input is missing or a scalar is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fewer than 3 unique vertices are available to form a border.
    #[error("border must have at least 3 unique vertices, found {found}")]
    TooFewVertices { found: usize },

    /// A constructed or combined area is empty.
    #[error("computed area is empty")]
    GeometryEmpty,

    /// A constructed or combined area is not a single connected region.
    #[error("computed area is not a single closed region ({parts} parts)")]
    NotSingular { parts: usize },

    /// An interior is not fully enclosed by the region.
    #[error("region does not completely contain the supplied interior")]
    NotContained,

    /// An interior overlaps an interior that was added earlier.
    #[error("supplied interior overlaps existing interior {index}")]
    InteriorOverlap { index: usize },
}

impl From<AreaError> for RegionError {
    fn from(e: AreaError) -> Self {
        match e {
            AreaError::Empty => RegionError::GeometryEmpty,
            AreaError::NotSingular { parts } => RegionError::NotSingular { parts },
        }
    }
}

pub type Result<T> = std::result::Result<T, RegionError>;
