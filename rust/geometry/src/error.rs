use thiserror::Error;

/// Result type for geometry planning
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while planning building geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid dimension {name}: {value} (must be finite and positive)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Degenerate segment: start and end coincide at ({x}, {y}, {z})")]
    DegenerateSegment { x: f64, y: f64, z: f64 },

    #[error("Roof profile points are collinear")]
    CollinearProfile,

    #[error("Envelope is not closed: {0} does not meet the next wall")]
    OpenEnvelope(&'static str),
}
