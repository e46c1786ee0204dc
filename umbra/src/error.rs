use super::*;

/// Invalid input to one of the geometry constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("segment endpoints must be distinct")]
    DegenerateSegment,
    #[error("ray direction must not be zero")]
    ZeroDirection,
    #[error("coordinates must be finite")]
    NonFinite,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("scene dimensions must be finite and positive, got {width} x {height}")]
    InvalidDimensions { width: Float, height: Float },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Rejected arguments of a fan cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("a fan must contain at least one ray")]
    ZeroRayCount,
    #[error("fan origin must be finite")]
    NonFiniteOrigin,
}
