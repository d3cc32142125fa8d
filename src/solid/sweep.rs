//! Swept volumes along polyline paths

use crate::errors::ValidationError;
use crate::float_types::{EPSILON, PI, Real};
use crate::solid::Solid;
use nalgebra::{Point3, Rotation3, Translation3, Vector3};

impl Solid {
    /// Sweep a circular cross-section along a polyline, producing a tube.
    ///
    /// Each waypoint carries its own radius, so the tube may taper between
    /// waypoints. Straight runs become frustums; interior waypoints get a
    /// ball of the local radius so consecutive frustums meet without creases
    /// at direction changes.
    ///
    /// Returns [`ValidationError::DegeneratePath`] for fewer than two
    /// waypoints. Zero-length segments are skipped.
    pub fn tube(
        waypoints: &[(Point3<Real>, Real)],
        segments: usize,
    ) -> Result<Solid, ValidationError> {
        if waypoints.len() < 2 {
            return Err(ValidationError::DegeneratePath(waypoints.len()));
        }

        let mut result = Solid::new();

        for pair in waypoints.windows(2) {
            let (start, r_start) = pair[0];
            let (end, r_end) = pair[1];

            let run = end - start;
            let length = run.norm();
            if length < EPSILON {
                continue;
            }
            let dir = run / length;

            // Orient the +Z frustum along the segment. rotation_between
            // returns None for antiparallel vectors, where any half-turn
            // through a perpendicular axis works.
            let rot = Rotation3::rotation_between(&Vector3::z(), &dir).unwrap_or_else(|| {
                Rotation3::from_axis_angle(&Vector3::x_axis(), PI)
            });

            let piece = Solid::frustum(r_start, r_end, length, segments)
                .transform(&rot.to_homogeneous())
                .transform(&Translation3::from(start.coords).to_homogeneous());

            result = if result.polygons.is_empty() {
                piece
            } else {
                result.union(&piece)
            };
        }

        if result.polygons.is_empty() {
            return Err(ValidationError::DegeneratePath(waypoints.len()));
        }

        // Fill the elbows at interior waypoints
        let stacks = (segments / 2).max(2);
        for &(point, radius) in &waypoints[1..waypoints.len() - 1] {
            let ball = Solid::sphere(radius, segments, stacks)
                .translate(point.x, point.y, point.z);
            result = result.union(&ball);
        }

        Ok(result)
    }
}
