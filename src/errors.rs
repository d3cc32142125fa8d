//! Validation errors
//!
//! Malformed profiles and face lists are rejected here, before they reach the
//! Boolean kernel, where they would otherwise surface as silently broken
//! meshes.

use crate::float_types::Real;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A corner-point list has fewer than the minimal number of points
    #[error("(TooFewPoints) profile needs at least {min} corner points, got {got}")]
    TooFewPoints { min: usize, got: usize },

    /// A coordinate has a NaN or infinite component
    #[error("(InvalidCoordinate) coordinate ({0}, {1}) is NaN or infinite")]
    InvalidCoordinate(Real, Real),

    /// A corner carries a negative fillet radius
    #[error("(NegativeRadius) corner ({0}, {1}) has a negative fillet radius")]
    NegativeRadius(Real, Real),

    /// Corner points were supplied in clockwise order
    #[error("(NotCounterClockwise) profile corners must wind counter-clockwise")]
    NotCounterClockwise,

    /// Two non-adjacent profile edges cross
    #[error("(SelfIntersection) profile outline self-intersects near ({0}, {1})")]
    SelfIntersection(Real, Real),

    /// A polyhedron face references a vertex that was not given
    #[error(
        "(FaceIndexOutOfRange) face {face} references point {index}, but only {points} points were given"
    )]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        points: usize,
    },

    /// A polyhedron face has fewer than 3 vertices
    #[error("(DegenerateFace) face {0} has fewer than 3 vertices")]
    DegenerateFace(usize),

    /// Extrusions and swept channels need a positive length
    #[error("(NonPositiveHeight) extrusion height must be positive, got {0}")]
    NonPositiveHeight(Real),

    /// A swept path needs at least two waypoints
    #[error("(DegeneratePath) swept path needs at least 2 waypoints, got {0}")]
    DegeneratePath(usize),
}
